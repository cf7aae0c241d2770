//! Shared UI pieces: the play layout, hint line, side panel, menu rows and modal boxes.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Width of the score panel right of the board.
const PANEL_WIDTH: u16 = 24;

/// Screen areas of the play scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayLayout {
    /// Bordered play field, sized to the grid
    pub board: Rect,
    /// Score panel beside the board
    pub panel: Rect,
    /// One line under both for status and key hints
    pub hints: Rect,
}

impl PlayLayout {
    /// Board and panel together, for boxes drawn over the run.
    pub fn overlay(&self) -> Rect {
        self.board.union(self.panel)
    }
}

/// Center a board for a `columns` x `rows` grid and its panel in `area`.
///
/// Two grid rows share one terminal row, plus a border on each side. The
/// board shrinks to whatever `area` leaves once the panel and hint line fit.
pub fn play_layout(area: Rect, columns: u16, rows: u16) -> PlayLayout {
    let board_w = (columns + 2).min(area.width.saturating_sub(PANEL_WIDTH + 1));
    let board_h = (rows.div_ceil(2) + 2).min(area.height.saturating_sub(1));
    let total_w = board_w + 1 + PANEL_WIDTH;

    let x = area.x + area.width.saturating_sub(total_w) / 2;
    let y = area.y + area.height.saturating_sub(board_h + 1) / 2;

    PlayLayout {
        board: Rect::new(x, y, board_w, board_h).intersection(area),
        panel: Rect::new(x + board_w + 1, y, PANEL_WIDTH, board_h).intersection(area),
        hints: Rect::new(x, y + board_h, total_w, 1).intersection(area),
    }
}

/// A bold status word followed by `[key] action` hints.
pub fn hint_line<'a>(
    status: &'a str,
    status_color: Color,
    hints: &[(&'a str, &'a str)],
) -> Line<'a> {
    let mut spans = vec![Span::styled(
        status,
        Style::default()
            .fg(status_color)
            .add_modifier(Modifier::BOLD),
    )];
    for &(key, action) in hints {
        spans.push(Span::raw("   "));
        spans.push(Span::styled(key, Style::default().fg(Color::White)));
        spans.push(Span::styled(
            format!(" {}", action),
            Style::default().fg(Color::DarkGray),
        ));
    }
    Line::from(spans)
}

/// Outcome class for the game-over box.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum GameResultType {
    Win,
    Loss,
}

impl GameResultType {
    pub fn color(self) -> Color {
        match self {
            GameResultType::Win => Color::Green,
            GameResultType::Loss => Color::Red,
        }
    }
}

/// Bordered side panel; returns the area inside the border.
pub fn render_panel(frame: &mut Frame, area: Rect, title: &str, color: Color) -> Rect {
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// `label: value` line in the info panel style.
pub fn info_line<'a>(label: &'a str, value: String, value_color: Color) -> Line<'a> {
    Line::from(vec![
        Span::styled(label, Style::default().fg(Color::DarkGray)),
        Span::styled(value, Style::default().fg(value_color)),
    ])
}

/// Menu rows with a `>` cursor on `selected` and a `*` on the active choice.
pub fn menu_lines<'a>(
    items: &[&'a str],
    selected: usize,
    is_current: impl Fn(usize) -> bool,
    accent: Color,
) -> Vec<Line<'a>> {
    items
        .iter()
        .enumerate()
        .map(|(i, &item)| {
            let cursor = if i == selected { "> " } else { "  " };
            let marker = if is_current(i) { " *" } else { "" };
            let style = if i == selected {
                Style::default().fg(accent).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            Line::from(vec![
                Span::styled(cursor, Style::default().fg(accent)),
                Span::styled(item, style),
                Span::styled(marker, Style::default().fg(Color::Yellow)),
            ])
        })
        .collect()
}

/// Draw a bordered box of `width` x `height` centered in `area` and return its inner Rect.
pub fn render_modal(
    frame: &mut Frame,
    area: Rect,
    width: u16,
    height: u16,
    title: &str,
    color: Color,
) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    let modal_area = Rect::new(x, y, width, height);

    frame.render_widget(Clear, modal_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .title(title);

    let inner = block.inner(modal_area);
    frame.render_widget(block, modal_area);
    inner
}

/// Render the game-over box over the play field, with its menu rows below the message.
pub fn render_game_over_overlay(
    frame: &mut Frame,
    area: Rect,
    result_type: GameResultType,
    title: &str,
    message: &[String],
    menu: Vec<Line>,
) {
    let title_color = result_type.color();
    let height = (message.len() + menu.len()) as u16 + 5;
    let inner = render_modal(frame, area, 34, height, "", title_color);

    let mut lines = vec![
        Line::from(Span::styled(
            title,
            Style::default()
                .fg(title_color)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    lines.extend(
        message
            .iter()
            .map(|m| Line::from(Span::styled(m.as_str(), Style::default().fg(Color::White)))),
    );
    lines.push(Line::from(""));
    lines.extend(menu);

    let text = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(text, inner);
}
