//! Play field rendering.
//!
//! Uses half-block pixel rendering. Each game cell maps to a colored pixel;
//! pairs of vertical pixels are packed into one terminal row using the `▀`
//! (upper half block) character with fg=top, bg=bottom colors.

use super::game_common::{
    hint_line, info_line, menu_lines, play_layout, render_game_over_overlay, render_modal,
    render_panel, GameResultType,
};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame,
};
use serpent::app::App;
use serpent::core::geometry::{Playfield, Position, Rect as GridRect};
use serpent::game::{GameSession, SessionResult};
use serpent::menu::MenuScreen;

const BORDER_H: char = '\u{2500}'; // ─
const BORDER_V: char = '\u{2502}'; // │
const BORDER_DASH_H: char = '\u{254C}'; // ╌
const BORDER_DASH_V: char = '\u{254E}'; // ╎
const BORDER_TL: char = '\u{250C}'; // ┌
const BORDER_TR: char = '\u{2510}'; // ┐
const BORDER_BL: char = '\u{2514}'; // └
const BORDER_BR: char = '\u{2518}'; // ┘
const HALF_TOP: char = '\u{2580}'; // ▀
const FULL_BLOCK: char = '\u{2588}'; // █

const HEAD_COLOR: Color = Color::Rgb(100, 255, 100);
const BODY_BRIGHT: (f64, f64, f64) = (50.0, 220.0, 50.0);
const BODY_DIM: (f64, f64, f64) = (20.0, 80.0, 20.0);
const FOOD_COLOR: Color = Color::Rgb(255, 80, 40);
const OBSTACLE_COLOR: Color = Color::Rgb(140, 140, 150);
const PORTAL_COLOR: Color = Color::Rgb(170, 90, 255);
const EMPTY_BG: Color = Color::Rgb(12, 12, 18);

/// Render a run, with the pause or game-over box on top when open.
pub fn render_play_scene(frame: &mut Frame, area: Rect, app: &App, game: &GameSession) {
    frame.render_widget(Clear, area);
    let field = &game.playfield;
    let layout = play_layout(area, field.columns() as u16, field.rows() as u16);

    render_play_field(frame, layout.board, game);
    render_hints(frame, layout.hints, app, game);
    render_info_panel(frame, layout.panel, app, game);

    if let Some((level, _)) = app.level_banner {
        render_level_banner(frame, layout.board, level);
    }

    match app.menu.screen {
        MenuScreen::Paused if !app.playing => render_pause_menu(frame, layout.overlay(), app),
        MenuScreen::GameOver if game.is_over() => {
            render_game_over(frame, layout.overlay(), app, game)
        }
        _ => {}
    }
}

/// Body shade fading from bright behind the head to dim at the tail.
fn body_color(index: usize, snake_len: usize) -> Color {
    let t = index as f64 / snake_len.saturating_sub(1).max(1) as f64;
    let mix = |bright: f64, dim: f64| (bright + (dim - bright) * t).round() as u8;
    Color::Rgb(
        mix(BODY_BRIGHT.0, BODY_DIM.0),
        mix(BODY_BRIGHT.1, BODY_DIM.1),
        mix(BODY_BRIGHT.2, BODY_DIM.2),
    )
}

/// Paint every grid cell covered by `rect`.
fn fill_rect(pixels: &mut [Vec<Option<Color>>], field: &Playfield, rect: &GridRect, color: Color) {
    let cell = field.cell_size;
    for y in (rect.y..rect.y + rect.height).step_by(cell as usize) {
        for x in (rect.x..rect.x + rect.width).step_by(cell as usize) {
            paint(pixels, field, Position::new(x, y), color);
        }
    }
}

fn paint(pixels: &mut [Vec<Option<Color>>], field: &Playfield, pos: Position, color: Color) {
    if !field.contains_cell(pos) {
        return;
    }
    let col = (pos.x / field.cell_size) as usize;
    let row = (pos.y / field.cell_size) as usize;
    if let Some(px) = pixels.get_mut(row).and_then(|r| r.get_mut(col)) {
        *px = Some(color);
    }
}

/// Color grid in cell coordinates, one entry per playfield cell.
fn build_pixels(game: &GameSession) -> Vec<Vec<Option<Color>>> {
    let field = &game.playfield;
    let mut pixels = vec![vec![None; field.columns() as usize]; field.rows() as usize];

    if let Some(level) = &game.level {
        for obstacle in &level.obstacles {
            fill_rect(&mut pixels, field, &obstacle.rect, OBSTACLE_COLOR);
        }
        if let Some(portal) = level.portal.filter(|p| p.active) {
            // Pulse the portal so it stands out from the walls
            let pulse = ((game.tick_count % 10) as f64 / 10.0 * std::f64::consts::TAU).sin();
            let shade = (200.0 + pulse * 55.0) as u8;
            let color = match PORTAL_COLOR {
                Color::Rgb(r, g, _) => Color::Rgb(r, g, shade),
                other => other,
            };
            fill_rect(&mut pixels, field, &portal.rect, color);
        }
    }

    if game.food.is_pending_spawn {
        fill_rect(&mut pixels, field, &game.food.rect(), FOOD_COLOR);
    }

    let snake_len = game.snake.len();
    // Tail first so the head wins on overlap
    for (i, &seg) in game.snake.body.iter().enumerate().rev() {
        let color = if i == 0 {
            HEAD_COLOR
        } else {
            body_color(i, snake_len)
        };
        paint(&mut pixels, field, seg, color);
    }

    pixels
}

fn border_line(left: char, fill: char, right: char, inner_w: usize) -> String {
    std::iter::once(left)
        .chain(std::iter::repeat(fill).take(inner_w))
        .chain(std::iter::once(right))
        .collect()
}

/// One terminal row of the field: `top` cells in the upper half, `bottom` in the lower.
///
/// Neighbouring cells with the same pair of colors share a span.
fn half_block_spans(top: &[Option<Color>], bottom: &[Option<Color>]) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    let mut run: Option<(Style, String)> = None;

    for (upper, lower) in top.iter().zip(bottom) {
        let style = Style::default()
            .fg(upper.unwrap_or(EMPTY_BG))
            .bg(lower.unwrap_or(EMPTY_BG));
        match run.as_mut() {
            Some((current, text)) if *current == style => text.push(HALF_TOP),
            _ => {
                if let Some((current, text)) = run.replace((style, HALF_TOP.to_string())) {
                    spans.push(Span::styled(text, current));
                }
            }
        }
    }
    spans.extend(run.map(|(style, text)| Span::styled(text, style)));
    spans
}

/// Draw the grid, two cells per terminal row, inside a one-character border.
///
/// Wrapping modes get a dashed border; Modern's deadly walls are solid.
fn render_play_field(frame: &mut Frame, area: Rect, game: &GameSession) {
    if area.height < 3 || area.width < 5 {
        return;
    }

    let pixels = build_pixels(game);
    let inner_w = (game.playfield.columns() as usize).min(area.width as usize - 2);
    let border = Style::default().fg(Color::Rgb(80, 80, 80));
    let (edge_h, edge_v) = if game.mode.wraps() {
        (BORDER_DASH_H, BORDER_DASH_V)
    } else {
        (BORDER_H, BORDER_V)
    };

    let mut lines = vec![Line::from(Span::styled(
        border_line(BORDER_TL, edge_h, BORDER_TR, inner_w),
        border,
    ))];
    for pair in pixels.chunks(2) {
        let top = &pair[0][..inner_w];
        let blank = vec![None; inner_w];
        let bottom = pair.get(1).map_or(&blank[..], |row| &row[..inner_w]);

        let mut spans = vec![Span::styled(edge_v.to_string(), border)];
        spans.extend(half_block_spans(top, bottom));
        spans.push(Span::styled(edge_v.to_string(), border));
        lines.push(Line::from(spans));
    }
    lines.push(Line::from(Span::styled(
        border_line(BORDER_BL, edge_h, BORDER_BR, inner_w),
        border,
    )));

    // Rows past the bottom of `area` are clipped by the paragraph
    let width = inner_w as u16 + 2;
    let x = area.x + (area.width - width) / 2;
    frame.render_widget(Paragraph::new(lines), Rect::new(x, area.y, width, area.height));
}

fn render_hints(frame: &mut Frame, area: Rect, app: &App, game: &GameSession) {
    let line = if game.is_over() {
        hint_line(
            "Game over",
            Color::Red,
            &[("[Arrows]", "Choose"), ("[Enter]", "Select")],
        )
    } else if !app.playing {
        hint_line(
            "Paused",
            Color::Yellow,
            &[("[Enter]", "Select"), ("[Esc]", "Resume")],
        )
    } else {
        hint_line(
            "Slither!",
            Color::Green,
            &[("[Arrows/WASD]", "Move"), ("[Esc/P]", "Pause")],
        )
    };
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn legend_line(color: Color, label: &str) -> Line<'_> {
    Line::from(vec![
        Span::styled(format!(" {FULL_BLOCK} "), Style::default().fg(color)),
        Span::styled(label, Style::default().fg(Color::DarkGray)),
    ])
}

fn render_info_panel(frame: &mut Frame, area: Rect, app: &App, game: &GameSession) {
    let title = format!(" Snake - {} ", game.mode.name());
    let inner = render_panel(frame, area, &title, Color::LightGreen);

    let mut lines: Vec<Line> = vec![
        info_line("Mode: ", game.mode.name().to_string(), Color::Cyan),
        info_line("Difficulty: ", game.difficulty.name().to_string(), Color::Cyan),
        Line::from(""),
        Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                game.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        info_line(
            "High score: ",
            app.high_score.max(game.high_score).to_string(),
            Color::Yellow,
        ),
        info_line(
            "Speed: ",
            format!("{}ms", game.move_interval_ms),
            Color::White,
        ),
    ];

    if let Some(level) = &game.level {
        lines.push(Line::from(""));
        lines.push(info_line(
            "Level: ",
            format!("{}/{}", level.current_level, level.max_levels),
            Color::White,
        ));
        let food = if level.portal_open() {
            "portal open!".to_string()
        } else {
            format!(
                "{}/{}",
                level.food_eaten_this_level, level.food_required_for_portal
            )
        };
        lines.push(info_line("Food: ", food, Color::Magenta));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Legend:",
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(legend_line(HEAD_COLOR, "Head"));
    lines.push(legend_line(FOOD_COLOR, "Food"));
    if game.level.is_some() {
        lines.push(legend_line(OBSTACLE_COLOR, "Wall"));
        lines.push(legend_line(PORTAL_COLOR, "Portal"));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_level_banner(frame: &mut Frame, area: Rect, level: u32) {
    let text = format!("[ Level {} ]", level);
    let width = text.len() as u16;
    if area.height < 3 || area.width < width {
        return;
    }
    let x = area.x + (area.width - width) / 2;
    let y = area.y + area.height / 2;
    let banner = Paragraph::new(Line::from(Span::styled(
        text,
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(banner, Rect::new(x, y, width, 1));
}

fn render_pause_menu(frame: &mut Frame, area: Rect, app: &App) {
    let items = app.menu.items();
    let inner = render_modal(
        frame,
        area,
        20,
        items.len() as u16 + 4,
        " Paused ",
        Color::Yellow,
    );
    let mut lines = vec![Line::from("")];
    lines.extend(menu_lines(&items, app.menu.selected, |_| false, Color::Yellow));
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}

fn render_game_over(frame: &mut Frame, area: Rect, app: &App, game: &GameSession) {
    let (result_type, title, cause) = match game.result {
        Some(SessionResult::CampaignWon) => (
            GameResultType::Win,
            ":: CAMPAIGN COMPLETE ::",
            "All five levels cleared.".to_string(),
        ),
        Some(SessionResult::Died(collision)) => (
            GameResultType::Loss,
            "GAME OVER",
            format!("The snake {}.", collision.describe()),
        ),
        None => return,
    };

    let mut message = vec![cause, format!("Score: {}", game.score)];
    if game.beat_high_score() {
        message.push("New high score!".to_string());
    }
    if let Some(rank) = app.last_rank {
        message.push(format!("Leaderboard rank #{}", rank));
    }

    let items = app.menu.items();
    let menu = menu_lines(&items, app.menu.selected, |_| false, result_type.color());
    render_game_over_overlay(frame, area, result_type, title, &message, menu);
}
