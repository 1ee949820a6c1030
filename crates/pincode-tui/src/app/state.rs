//! Application state

use std::time::Duration;

use pincode_core::{FocusController, PinForm};

use super::config::TuiConfig;

/// Longest text the count field will hold
const COUNT_INPUT_MAX_LEN: usize = 6;

/// Something on the form that can hold keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    /// Segment box at this index
    Segment(usize),

    /// "Number of Input" field
    CountField,

    /// Button applying the count field
    SaveButton,

    /// Input rule selector
    RuleSelect,

    /// Mask toggle
    HideButton,

    /// Clear all segments
    ResetButton,

    /// Manual submit
    SubmitButton,
}

/// Tracks which form element has focus.
///
/// The form core only moves focus between segment boxes; everything else is
/// driven by Tab navigation in the app.
#[derive(Debug, Default, Clone)]
pub struct FocusRing {
    current: Option<FocusTarget>,
}

impl FocusRing {
    pub fn current(&self) -> Option<FocusTarget> {
        self.current
    }

    pub fn set(&mut self, target: Option<FocusTarget>) {
        self.current = target;
    }

    /// Index of the focused segment box, if a box has focus
    pub fn segment(&self) -> Option<usize> {
        match self.current {
            Some(FocusTarget::Segment(index)) => Some(index),
            _ => None,
        }
    }

    pub fn is_focused(&self, target: FocusTarget) -> bool {
        self.current == Some(target)
    }
}

impl FocusController for FocusRing {
    fn focus(&mut self, index: usize) {
        tracing::debug!(index, "focus segment");
        self.current = Some(FocusTarget::Segment(index));
    }

    fn blur(&mut self, index: usize) {
        if self.current == Some(FocusTarget::Segment(index)) {
            self.current = None;
        }
    }
}

/// Application state
pub struct AppState {
    /// The PIN entry form
    pub form: PinForm,

    /// Keyboard focus
    pub focus: FocusRing,

    /// Text typed into the count field
    pub count_input: String,

    /// Blocking notification, if one is open
    pub alert: Option<String>,

    /// Simulated submit delay
    pub submit_delay: Duration,
}

impl AppState {
    /// Create state from configuration
    pub fn new(config: &TuiConfig) -> Self {
        let form = PinForm::with_count(config.default_count)
            .unwrap_or_default()
            .with_rule(config.default_rule)
            .with_hidden(config.hidden);

        Self {
            count_input: form.desired_count().to_string(),
            form,
            focus: FocusRing::default(),
            alert: None,
            submit_delay: Duration::from_millis(config.submit_delay_ms),
        }
    }

    /// Whether `target` currently accepts focus
    pub fn is_enabled(&self, target: FocusTarget) -> bool {
        let loading = self.form.is_loading();
        match target {
            FocusTarget::Segment(index) => !loading && index < self.form.segments().len(),
            FocusTarget::SaveButton => self.form.can_apply(),
            FocusTarget::CountField | FocusTarget::RuleSelect => true,
            FocusTarget::HideButton | FocusTarget::ResetButton | FocusTarget::SubmitButton => {
                !loading
            }
        }
    }

    /// Focusable targets in Tab order
    pub fn focus_order(&self) -> Vec<FocusTarget> {
        (0..self.form.segments().len())
            .map(FocusTarget::Segment)
            .chain([
                FocusTarget::CountField,
                FocusTarget::SaveButton,
                FocusTarget::RuleSelect,
                FocusTarget::HideButton,
                FocusTarget::ResetButton,
                FocusTarget::SubmitButton,
            ])
            .filter(|&target| self.is_enabled(target))
            .collect()
    }

    /// Move focus to the next enabled target, wrapping around
    pub fn focus_next(&mut self) {
        self.step_focus(true);
    }

    /// Move focus to the previous enabled target, wrapping around
    pub fn focus_prev(&mut self) {
        self.step_focus(false);
    }

    fn step_focus(&mut self, forward: bool) {
        let order = self.focus_order();
        if order.is_empty() {
            self.focus.set(None);
            return;
        }

        let position = self
            .focus
            .current()
            .and_then(|current| order.iter().position(|&t| t == current));

        let next = match (position, forward) {
            (None, true) => 0,
            (None, false) => order.len() - 1,
            (Some(i), true) => (i + 1) % order.len(),
            (Some(i), false) => (i + order.len() - 1) % order.len(),
        };
        self.focus.set(Some(order[next]));
    }

    /// Append a digit to the count field
    pub fn push_count_digit(&mut self, c: char) {
        if !c.is_ascii_digit() || self.count_input.len() >= COUNT_INPUT_MAX_LEN {
            return;
        }
        self.count_input.push(c);
        self.sync_desired_count();
    }

    /// Remove the last digit of the count field
    pub fn pop_count_digit(&mut self) {
        self.count_input.pop();
        self.sync_desired_count();
    }

    /// Value of the count field (empty reads as zero)
    pub fn count_value(&self) -> u32 {
        self.count_input.parse().unwrap_or(0)
    }

    fn sync_desired_count(&mut self) {
        self.form.set_desired_count(self.count_value());
    }

    /// Drop focus that points at a box removed by a resize
    pub fn clamp_focus(&mut self) {
        if let Some(index) = self.focus.segment() {
            if index >= self.form.segments().len() {
                self.focus.set(None);
            }
        }
    }
}
