//! Keyboard handling: maps crossterm keys onto session and menu inputs.

use crate::app::App;
use crate::game::session::SessionInput;
use crate::menu::{self, MenuInput};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use rand::Rng;

/// Result of handling a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// Continue the main loop normally.
    Continue,
    /// Leave the app.
    Quit,
}

pub fn session_input(code: KeyCode) -> SessionInput {
    match code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => SessionInput::Up,
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => SessionInput::Down,
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => SessionInput::Left,
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => SessionInput::Right,
        KeyCode::Esc | KeyCode::Char('p') | KeyCode::Char('P') => SessionInput::Pause,
        _ => SessionInput::Other,
    }
}

pub fn menu_input(code: KeyCode) -> MenuInput {
    match code {
        KeyCode::Up | KeyCode::Char('k') => MenuInput::Up,
        KeyCode::Down | KeyCode::Char('j') => MenuInput::Down,
        KeyCode::Enter | KeyCode::Char(' ') => MenuInput::Select,
        KeyCode::Esc | KeyCode::Backspace => MenuInput::Back,
        _ => MenuInput::Other,
    }
}

/// Dispatch a key to the running snake or the open menu.
pub fn handle_key<R: Rng>(key: KeyEvent, app: &mut App, rng: &mut R) -> InputResult {
    // Windows reports releases too
    if key.kind == KeyEventKind::Release {
        return InputResult::Continue;
    }

    if app.playing {
        app.handle_session_input(session_input(key.code));
        return InputResult::Continue;
    }

    let action = menu::process_input(&mut app.menu, menu_input(key.code));
    if app.apply_menu_action(action, rng) {
        InputResult::Continue
    } else {
        InputResult::Quit
    }
}
