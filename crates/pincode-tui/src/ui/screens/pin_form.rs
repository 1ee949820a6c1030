//! PIN code entry form screen

use ratatui::layout::Flex;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::{App, FocusTarget};
use crate::ui::components::button::Button;
use crate::ui::components::segment_row::{self, SegmentRow};
use crate::ui::layout::{label_row, render_footer, render_header};

/// Window title
pub const TITLE: &str = "PIN CODE TEST";

/// Width of the "Number of Input:" / "Rules of Input:" labels
const LABEL_WIDTH: u16 = 18;

/// Width of the count field box
const COUNT_FIELD_WIDTH: u16 = 10;

/// Width of the rule selector box
const RULE_SELECT_WIDTH: u16 = 19;

/// Rows taken by everything except the segment boxes
const FIXED_ROWS: u16 = 16;

/// Key hints shown in the footer
const HINTS: [(&str, &str); 5] = [
    ("Tab", "Next"),
    ("←/→", "Move"),
    ("Enter", "Submit/Press"),
    ("Bksp", "Delete"),
    ("Esc", "Quit"),
];

/// Label of the mask toggle
pub fn hide_label(hidden: bool) -> &'static str {
    if hidden {
        "Show PIN CODE"
    } else {
        "Hide PIN CODE"
    }
}

/// Label of the submit button
pub fn submit_label(loading: bool) -> &'static str {
    if loading {
        "Submiting..."
    } else {
        "Submit"
    }
}

/// Draw the PIN entry form
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let state = &app.state;
    let form = &state.form;

    let body_width = area.width.saturating_sub(4);
    let row_height = segment_row::height_needed(form.segments().len(), body_width)
        .min(area.height.saturating_sub(FIXED_ROWS));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),          // Header
            Constraint::Length(1),          // Spacer
            Constraint::Length(row_height), // Segment boxes
            Constraint::Length(1),          // Fill error
            Constraint::Length(3),          // Count field
            Constraint::Length(1),          // Count error
            Constraint::Length(3),          // Rule selector
            Constraint::Min(0),             // Spacer
            Constraint::Length(3),          // Buttons
            Constraint::Length(2),          // Footer
        ])
        .split(area);

    render_header(frame, chunks[0], TITLE, theme);

    let row_area = chunks[2].inner(Margin::new(2, 0));
    SegmentRow {
        segments: form.segments(),
        focused: state.focus.segment(),
        hidden: form.is_hidden(),
        disabled: form.is_loading(),
    }
    .render(frame, row_area, theme);

    if let Some(error) = form.error_message() {
        let error_widget = Paragraph::new(error)
            .style(theme.danger())
            .alignment(Alignment::Center);
        frame.render_widget(error_widget, chunks[3]);
    }

    draw_count_row(frame, chunks[4], app);

    if let Some(error) = form.desired_count_error() {
        let error_widget = Paragraph::new(error.to_string())
            .style(theme.danger())
            .alignment(Alignment::Center);
        frame.render_widget(error_widget, chunks[5]);
    }

    draw_rule_row(frame, chunks[6], app);
    draw_buttons(frame, chunks[8], app);
    render_footer(frame, chunks[9], &HINTS, theme);
}

/// The single middle line of a bordered row
fn middle_line(area: Rect) -> Rect {
    Rect {
        y: area.y + area.height / 2,
        height: area.height.min(1),
        ..area
    }
}

fn draw_count_row(frame: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let state = &app.state;
    let (label_area, rest) = label_row(area.inner(Margin::new(2, 0)), LABEL_WIDTH);

    let label = Paragraph::new("Number of Input:").style(theme.text_secondary());
    frame.render_widget(label, middle_line(label_area));

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(COUNT_FIELD_WIDTH),
            Constraint::Length(1),
            Constraint::Length(8),
            Constraint::Min(0),
        ])
        .split(rest);

    let focused = state.focus.is_focused(FocusTarget::CountField);
    let text = if focused {
        format!("{}▏", state.count_input)
    } else {
        state.count_input.clone()
    };
    let field = Paragraph::new(text).style(theme.input(focused)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border_for(focused, false)),
    );
    frame.render_widget(field, chunks[0]);

    Button::new("Save")
        .focused(state.focus.is_focused(FocusTarget::SaveButton))
        .disabled(!state.form.can_apply())
        .render(frame, chunks[2], theme);
}

fn draw_rule_row(frame: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let state = &app.state;
    let (label_area, rest) = label_row(area.inner(Margin::new(2, 0)), LABEL_WIDTH);

    let label = Paragraph::new("Rules of Input:").style(theme.text_secondary());
    frame.render_widget(label, middle_line(label_area));

    let focused = state.focus.is_focused(FocusTarget::RuleSelect);
    let select_area = Rect {
        width: RULE_SELECT_WIDTH.min(rest.width),
        ..rest
    };
    let selector = Paragraph::new(format!("◀ {} ▶", state.form.rule()))
        .style(theme.input(focused))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border_for(focused, false)),
        );
    frame.render_widget(selector, select_area);
}

fn draw_buttons(frame: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let state = &app.state;
    let loading = state.form.is_loading();

    let buttons = [
        (FocusTarget::HideButton, hide_label(state.form.is_hidden())),
        (FocusTarget::ResetButton, "Reset"),
        (FocusTarget::SubmitButton, submit_label(loading)),
    ]
    .map(|(target, label)| {
        Button::new(label)
            .focused(state.focus.is_focused(target))
            .disabled(loading)
    });

    let constraints: Vec<Constraint> = buttons
        .iter()
        .map(|b| Constraint::Length(b.width() + 2))
        .collect();

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .flex(Flex::Center)
        .constraints(constraints)
        .split(area);

    for (button, chunk) in buttons.iter().zip(chunks.iter()) {
        let inner = chunk.inner(Margin::new(1, 0));
        button.render(frame, inner, theme);
    }
}
