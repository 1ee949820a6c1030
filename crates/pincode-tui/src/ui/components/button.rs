//! Push button component

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::ui::Theme;

/// Bordered button with a centered label
pub struct Button<'a> {
    pub label: &'a str,
    pub focused: bool,
    pub disabled: bool,
}

impl<'a> Button<'a> {
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            focused: false,
            disabled: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Columns needed for the label plus padding and borders
    pub fn width(&self) -> u16 {
        u16::try_from(self.label.width() + 4).unwrap_or(u16::MAX)
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border_for(self.focused, self.disabled));

        let widget = Paragraph::new(self.label)
            .style(theme.button(self.focused, self.disabled))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(widget, area);
    }
}
