//! Focus side effects requested by the form

/// Capability the view exposes for moving focus between segment boxes.
///
/// The form never inspects focus; it only asks for it to move.
pub trait FocusController {
    /// Give focus to the box at `index`
    fn focus(&mut self, index: usize);

    /// Take focus away from the box at `index`
    fn blur(&mut self, index: usize);
}

/// A single recorded focus request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusEvent {
    Focus(usize),
    Blur(usize),
}

/// Focus controller that records requests and tracks the focused box.
///
/// Used by headless front ends and tests.
#[derive(Debug, Default, Clone)]
pub struct FocusRecorder {
    /// Every request, in order
    pub events: Vec<FocusEvent>,
    /// Box currently holding focus
    pub focused: Option<usize>,
}

impl FocusRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget recorded requests, keeping the focused box
    pub fn clear_events(&mut self) {
        self.events.clear();
    }
}

impl FocusController for FocusRecorder {
    fn focus(&mut self, index: usize) {
        self.events.push(FocusEvent::Focus(index));
        self.focused = Some(index);
    }

    fn blur(&mut self, index: usize) {
        self.events.push(FocusEvent::Blur(index));
        if self.focused == Some(index) {
            self.focused = None;
        }
    }
}
