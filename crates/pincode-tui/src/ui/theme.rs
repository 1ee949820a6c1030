//! Visual theme and color palette

use ratatui::style::{Color, Modifier, Style};

/// Form color palette
pub struct Theme {
    // Primary branding colors
    pub accent: Color,
    pub accent_dim: Color,
    pub background: Color,

    // Status colors
    pub danger: Color,
    pub info: Color,

    // UI element colors
    pub border: Color,
    pub border_focused: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub selection: Color,
    pub disabled: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent: Color::Rgb(97, 218, 251),     // #61DAFB
            accent_dim: Color::Rgb(40, 120, 150), // #287896
            background: Color::Rgb(33, 33, 33),   // #212121

            // Status colors
            danger: Color::Rgb(244, 67, 54),  // #F44336 - Red
            info: Color::Rgb(33, 150, 243),   // #2196F3 - Blue

            // UI elements
            border: Color::Rgb(97, 97, 97),            // #616161
            border_focused: Color::Rgb(97, 218, 251),  // #61DAFB
            text_primary: Color::Rgb(250, 250, 250),   // #FAFAFA
            text_secondary: Color::Rgb(189, 189, 189), // #BDBDBD
            text_muted: Color::Rgb(117, 117, 117),     // #757575
            selection: Color::Rgb(55, 55, 55),         // #373737
            disabled: Color::Rgb(80, 80, 80),          // #505050
        }
    }
}

impl Theme {
    /// Get secondary text style
    pub fn text_secondary(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    /// Get muted text style
    pub fn text_muted(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    /// Get title style
    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Get border style
    pub fn border(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Get focused border style
    pub fn border_focused(&self) -> Style {
        Style::default().fg(self.border_focused)
    }

    /// Border for a focusable element
    pub fn border_for(&self, focused: bool, disabled: bool) -> Style {
        if disabled {
            Style::default().fg(self.disabled)
        } else if focused {
            self.border_focused().add_modifier(Modifier::BOLD)
        } else {
            self.border()
        }
    }

    /// Get info style
    pub fn info(&self) -> Style {
        Style::default().fg(self.info)
    }

    /// Get danger style
    pub fn danger(&self) -> Style {
        Style::default()
            .fg(self.danger)
            .add_modifier(Modifier::BOLD)
    }

    /// Get input field style
    pub fn input(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.text_primary).bg(self.selection)
        } else {
            Style::default().fg(self.text_secondary)
        }
    }

    /// Segment value style
    pub fn segment(&self, focused: bool, disabled: bool) -> Style {
        if disabled {
            Style::default().fg(self.disabled)
        } else if focused {
            Style::default()
                .fg(self.accent)
                .bg(self.selection)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(self.text_primary)
                .add_modifier(Modifier::BOLD)
        }
    }

    /// Button label style
    pub fn button(&self, focused: bool, disabled: bool) -> Style {
        if disabled {
            Style::default().fg(self.disabled)
        } else if focused {
            Style::default()
                .bg(self.accent_dim)
                .fg(self.text_primary)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.text_primary)
        }
    }

    /// Create a high-contrast theme variant
    pub fn high_contrast() -> Self {
        Self {
            text_primary: Color::White,
            text_secondary: Color::White,
            text_muted: Color::Gray,
            border: Color::White,
            border_focused: Color::Yellow,
            accent: Color::Yellow,
            ..Self::default()
        }
    }
}
