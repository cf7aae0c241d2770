//! Compile-time build information.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// One-line version string for `--version`. Non-release builds name their profile.
pub fn version_line() -> String {
    let mut line = format!(
        "serpent {} ({}, built {}",
        env!("CARGO_PKG_VERSION"),
        BUILD_COMMIT,
        BUILD_DATE
    );
    if BUILD_PROFILE != "release" {
        line.push_str(", ");
        line.push_str(BUILD_PROFILE);
    }
    line.push(')');
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_info_not_empty() {
        assert!(!BUILD_COMMIT.is_empty());
        assert!(!BUILD_DATE.is_empty());
        assert!(!BUILD_PROFILE.is_empty());
    }

    #[test]
    fn test_version_line_mentions_commit() {
        let line = version_line();
        assert!(line.starts_with("serpent "));
        assert!(line.contains(BUILD_COMMIT));
        assert!(line.ends_with(')'));
    }
}
