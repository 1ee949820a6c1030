//! UI rendering

pub mod components;
pub mod layout;
pub mod screens;
pub mod theme;

pub use theme::Theme;

use ratatui::prelude::*;

use crate::app::App;
use components::alert::AlertDialog;

/// Main render function - draws the form, then any open notification on top
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    screens::pin_form::draw(frame, area, app);

    if let Some(message) = &app.state.alert {
        AlertDialog::new("Notification", message).render(frame, area, &app.theme);
    }
}
