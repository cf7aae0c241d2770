pub mod game_common;
pub mod menu_scene;
pub mod play_scene;

use ratatui::Frame;
use serpent::app::App;

/// Draw the whole screen for the current app state.
pub fn draw_ui(frame: &mut Frame, app: &App) {
    let area = frame.size();

    match &app.session {
        Some(game) if app.playing || game.paused || game.is_over() => {
            play_scene::render_play_scene(frame, area, app, game);
        }
        _ => menu_scene::render_menu_scene(frame, area, app),
    }
}
