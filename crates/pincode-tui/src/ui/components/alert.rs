//! Blocking notification dialog

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use unicode_width::UnicodeWidthStr;

use crate::ui::{layout::centered_rect_fixed, Theme};

/// Narrowest dialog, wide enough for the help line
const MIN_WIDTH: u16 = 24;

/// Modal message that must be dismissed before the form accepts input
pub struct AlertDialog<'a> {
    /// Dialog title
    pub title: &'a str,
    /// Message body
    pub message: &'a str,
}

impl<'a> AlertDialog<'a> {
    pub fn new(title: &'a str, message: &'a str) -> Self {
        Self { title, message }
    }

    /// Width needed to show the message on one line, borders and padding included
    pub fn preferred_width(&self) -> u16 {
        let text = self.message.width().max(self.title.width() + 2);
        u16::try_from(text + 6).unwrap_or(u16::MAX).max(MIN_WIDTH)
    }

    /// Render the dialog
    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let width = self.preferred_width().min(area.width.saturating_sub(4).max(MIN_WIDTH));
        let dialog_area = centered_rect_fixed(width, 7, area);

        // Clear the background
        frame.render_widget(Clear, dialog_area);

        let block = Block::default()
            .title(format!(" {} ", self.title))
            .title_style(theme.title())
            .borders(Borders::ALL)
            .border_style(theme.border_focused());

        let inner = block.inner(dialog_area);
        frame.render_widget(block, dialog_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Min(1),    // Message
                Constraint::Length(1), // Help text
            ])
            .split(inner);

        let message_widget = Paragraph::new(self.message)
            .style(theme.info())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(message_widget, chunks[0]);

        let help_widget = Paragraph::new("[Enter] OK")
            .style(theme.text_muted())
            .alignment(Alignment::Center);
        frame.render_widget(help_widget, chunks[1]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preferred_width_fits_message() {
        let dialog = AlertDialog::new("Notification", r#"Code Input Params: "12345""#);
        assert_eq!(dialog.preferred_width(), 26 + 6);

        let short = AlertDialog::new("Hi", "ok");
        assert_eq!(short.preferred_width(), MIN_WIDTH);
    }
}
