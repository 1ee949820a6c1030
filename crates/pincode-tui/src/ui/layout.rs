//! Layout helpers for consistent screen structure

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use super::Theme;

/// Create a fixed-size centered box
pub fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// Render a standard header bar
pub fn render_header(frame: &mut Frame, area: Rect, title: &str, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(theme.border())
        .style(Style::default().bg(theme.background));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(8)])
        .split(inner);

    let logo = Paragraph::new(format!(" {} {}", '\u{25C6}', title)).style(theme.title());
    frame.render_widget(logo, chunks[0]);

    let time = chrono::Local::now().format("%H:%M").to_string();
    let time_widget = Paragraph::new(time)
        .style(theme.text_muted())
        .alignment(Alignment::Right);
    frame.render_widget(time_widget, chunks[1]);
}

/// Render a standard footer with help hints
pub fn render_footer(frame: &mut Frame, area: Rect, hints: &[(&str, &str)], theme: &Theme) {
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(theme.border());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let hint_text: String = hints
        .iter()
        .map(|(key, action)| format!("[{}] {}", key, action))
        .collect::<Vec<_>>()
        .join("  ");

    let footer = Paragraph::new(hint_text)
        .style(theme.text_muted())
        .alignment(Alignment::Center);
    frame.render_widget(footer, inner);
}

/// Split a row into a fixed-width label column and the rest
pub fn label_row(area: Rect, label_width: u16) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(label_width), Constraint::Min(1)])
        .split(area);
    (chunks[0], chunks[1])
}
