//! Main, play, difficulty, game mode and records menus.

use super::game_common::{hint_line, menu_lines, render_modal};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table},
    Frame,
};
use serpent::app::App;
use serpent::core::constants::LEADERBOARD_CAPACITY;
use serpent::game::GameMode;
use serpent::menu::{Menu, MenuScreen};
use serpent::scores::Leaderboard;

const TITLE_ART: &[&str] = &[
    " ___ _  _   _   _  _____ ",
    "/ __| \\| | /_\\ | |/ / __|",
    "\\__ \\ .` |/ _ \\| ' <| _| ",
    "|___/_|\\_/_/ \\_\\_|\\_\\___|",
];

pub fn render_menu_scene(frame: &mut Frame, area: Rect, app: &App) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::LightGreen));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(TITLE_ART.len() as u16 + 2),
            Constraint::Min(8),
            Constraint::Length(1),
        ])
        .split(inner);

    render_title(frame, chunks[0]);

    match app.menu.screen {
        MenuScreen::Records => render_records(frame, chunks[1], &app.leaderboard, &app.menu),
        _ => render_menu_box(frame, chunks[1], &app.menu, app.high_score),
    }

    let controls: &[(&str, &str)] = match app.menu.screen {
        MenuScreen::Main => &[("[Enter]", "Select"), ("[Esc]", "Quit")],
        _ => &[("[Enter]", "Select"), ("[Esc]", "Back")],
    };
    let selection = format!(
        "{} - {}",
        app.menu.mode.name(),
        app.menu.difficulty.name()
    );
    let hints = Paragraph::new(hint_line(&selection, Color::Cyan, controls))
        .alignment(Alignment::Center);
    frame.render_widget(hints, chunks[2]);
}

fn render_title(frame: &mut Frame, area: Rect) {
    let mut lines = vec![Line::from("")];
    lines.extend(TITLE_ART.iter().map(|row| {
        Line::from(Span::styled(
            *row,
            Style::default()
                .fg(Color::LightGreen)
                .add_modifier(Modifier::BOLD),
        ))
    }));
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn screen_title(screen: MenuScreen) -> (&'static str, Color) {
    match screen {
        MenuScreen::Play => (" Play ", Color::Green),
        MenuScreen::Difficulty => (" Select Difficulty ", Color::Yellow),
        MenuScreen::GameMode => (" Select Game Mode ", Color::Cyan),
        _ => ("", Color::White),
    }
}

fn render_menu_box(frame: &mut Frame, area: Rect, menu: &Menu, high_score: u32) {
    let items = menu.items();
    let (title, color) = screen_title(menu.screen);
    let inner = render_modal(frame, area, 36, items.len() as u16 + 6, title, color);

    let mut lines = vec![Line::from("")];
    lines.extend(menu_lines(
        &items,
        menu.selected,
        |i| menu.is_current_choice(i),
        color,
    ));
    lines.push(Line::from(""));

    // Describe the highlighted mode, or show the best score elsewhere
    let footer = match menu.screen {
        MenuScreen::GameMode => GameMode::ALL
            .get(menu.selected)
            .map(|mode| mode.description().to_string())
            .unwrap_or_default(),
        _ => format!("High score: {}", high_score),
    };
    lines.push(Line::from(Span::styled(
        footer,
        Style::default().fg(Color::DarkGray),
    )));

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}

fn render_records(frame: &mut Frame, area: Rect, leaderboard: &Leaderboard, menu: &Menu) {
    let title = format!(" Top {} Records ", LEADERBOARD_CAPACITY);
    let inner = render_modal(frame, area, 64, 16, &title, Color::Yellow);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(inner);

    if leaderboard.is_empty() {
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "No records yet!",
                Style::default().fg(Color::LightRed),
            )),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(empty, chunks[0]);
    } else {
        let header = Row::new(vec!["#", "Score", "Difficulty", "Mode", "Date"]).style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );
        let rows = leaderboard
            .top_scores(LEADERBOARD_CAPACITY)
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                Row::new(vec![
                    Cell::from(format!("{}.", i + 1)),
                    Cell::from(entry.score.to_string()),
                    Cell::from(entry.difficulty.clone()),
                    Cell::from(entry.gamemode.clone()),
                    Cell::from(entry.timestamp.clone()),
                ])
            });
        let table = Table::new(
            rows,
            [
                Constraint::Length(4),
                Constraint::Length(6),
                Constraint::Length(11),
                Constraint::Length(9),
                Constraint::Min(19),
            ],
        )
        .header(header);
        frame.render_widget(table, chunks[0]);
    }

    let back = menu_lines(&menu.items(), menu.selected, |_| false, Color::Yellow);
    frame.render_widget(Paragraph::new(back).alignment(Alignment::Center), chunks[1]);
}
