//! Campaign mode: five levels of obstacles, each ending in a portal.
//!
//! Every level starts from a fixed wall blueprint. Eating enough food opens a
//! portal somewhere clear of the walls; touching it moves on to the next
//! level, and touching it on the final level wins the campaign.

pub mod logic;
pub mod types;

pub use types::*;
