//! PIN entry form state
//!
//! [`PinForm`] owns the segment row and the form flags. Every user action is
//! a method; focus moves are requested through a [`FocusController`]. After
//! any operation that rewrites the row, the form checks whether every
//! segment is filled and, if so, starts a submission on its own. Front ends
//! collect that submission with [`PinForm::take_auto_submit`].

use zeroize::Zeroizing;

use crate::error::{FormError, Result};
use crate::focus::FocusController;
use crate::rule::InputRule;
use crate::segment::SegmentList;
use crate::{DEFAULT_SEGMENTS, MAX_SEGMENTS, MIN_SEGMENTS};

/// Identifies one in-flight submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubmitTicket(u64);

impl SubmitTicket {
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Result of a keystroke on a segment box
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    /// Inputs are disabled (submission in flight) or the box does not exist
    Disabled,
    /// Input was empty after cleaning; the box was emptied
    Cleared,
    /// Input failed the active rule; nothing changed
    Rejected,
    /// Characters were written to `written` boxes; focus moved to `next`
    Accepted { written: usize, next: Option<usize> },
}

/// Submission waiting for its deferred completion
struct PendingSubmit {
    ticket: SubmitTicket,
    code: Zeroizing<String>,
}

/// The PIN entry form
pub struct PinForm {
    segments: SegmentList,
    desired_count: u32,
    rule: InputRule,
    hidden: bool,
    error_latched: bool,
    pending: Option<PendingSubmit>,
    next_ticket: u64,
    auto_submit: Option<SubmitTicket>,
}

impl Default for PinForm {
    fn default() -> Self {
        Self::new()
    }
}

impl PinForm {
    /// Create a form with the default five empty segments
    pub fn new() -> Self {
        Self {
            segments: SegmentList::new(DEFAULT_SEGMENTS),
            desired_count: DEFAULT_SEGMENTS as u32,
            rule: InputRule::default(),
            hidden: false,
            error_latched: false,
            pending: None,
            next_ticket: 1,
            auto_submit: None,
        }
    }

    /// Create a form with `count` empty segments
    pub fn with_count(count: u32) -> Result<Self> {
        check_count(count)?;
        let mut form = Self::new();
        form.segments = SegmentList::new(count as usize);
        form.desired_count = count;
        Ok(form)
    }

    /// Start with `rule` selected
    pub fn with_rule(mut self, rule: InputRule) -> Self {
        self.rule = rule;
        self
    }

    /// Start masked or unmasked
    pub fn with_hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    pub fn segments(&self) -> &SegmentList {
        &self.segments
    }

    pub fn rule(&self) -> InputRule {
        self.rule
    }

    /// Whether values are masked
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Whether a submission is in flight (inputs disabled)
    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// Whether the "fill all boxes" message should be shown.
    ///
    /// Set by a failed submit, and only reported while a segment is still empty.
    pub fn is_error(&self) -> bool {
        self.error_latched && self.segments.any_empty()
    }

    /// Message for the segment row, if any
    pub fn error_message(&self) -> Option<String> {
        self.is_error()
            .then(|| FormError::IncompleteCode.to_string())
    }

    /// Pending (not yet applied) segment count
    pub fn desired_count(&self) -> u32 {
        self.desired_count
    }

    /// Focus the first box on mount
    pub fn mount(&mut self, focus: &mut impl FocusController) {
        if !self.segments.is_empty() {
            focus.focus(0);
        }
    }

    /// Handle raw text typed or pasted into the box at `index`
    pub fn input(
        &mut self,
        index: usize,
        raw: &str,
        focus: &mut impl FocusController,
    ) -> InputOutcome {
        if self.is_loading() || index >= self.segments.len() {
            return InputOutcome::Disabled;
        }

        let cleaned: String = raw.chars().filter(|&c| c != ' ').collect();

        if cleaned.is_empty() {
            self.segments.clear(index);
            tracing::debug!(index, "segment cleared");
            self.segments_changed();
            return InputOutcome::Cleared;
        }

        if !self.rule.accepts(&cleaned) {
            tracing::debug!(index, rule = %self.rule, "input rejected");
            return InputOutcome::Rejected;
        }

        let written = self.segments.write_from(index, cleaned.chars());

        focus.blur(index);
        let next_index = index + written;
        let next = (next_index < self.segments.len()).then_some(next_index);
        if let Some(next) = next {
            focus.focus(next);
        }

        tracing::debug!(index, written, ?next, "input accepted");
        self.segments_changed();

        InputOutcome::Accepted { written, next }
    }

    /// Handle Backspace on the box at `index`.
    ///
    /// Moves focus back one box when this one is already empty. Returns
    /// whether focus moved.
    pub fn backspace(&mut self, index: usize, focus: &mut impl FocusController) -> bool {
        if self.is_loading() || index == 0 || index >= self.segments.len() {
            return false;
        }

        if self.segments.is_filled(index) {
            return false;
        }

        focus.focus(index - 1);
        true
    }

    /// Select a rule.
    ///
    /// Switching from `ALL` to `ONLY_NUMBER` empties every non-numeric
    /// segment. Returns how many segments were emptied.
    pub fn set_rule(&mut self, rule: InputRule) -> usize {
        let previous = self.rule;
        self.rule = rule;

        if previous != InputRule::All || rule != InputRule::OnlyNumber {
            return 0;
        }

        let cleared = self.segments.retain_numeric();
        tracing::info!(%previous, %rule, cleared, "input rule changed");
        if cleared > 0 {
            self.segments_changed();
        }
        cleared
    }

    /// Store a new pending segment count
    pub fn set_desired_count(&mut self, count: u32) {
        self.desired_count = count;
    }

    /// Validation message for the pending count, if out of bounds
    pub fn desired_count_error(&self) -> Option<FormError> {
        check_count(self.desired_count).err()
    }

    /// Whether the pending count can be applied
    pub fn can_apply(&self) -> bool {
        self.desired_count_error().is_none()
    }

    /// Resize the row to the pending count
    pub fn apply_desired_count(&mut self) -> Result<()> {
        check_count(self.desired_count)?;

        let from = self.segments.len();
        self.segments.resize(self.desired_count as usize);
        tracing::info!(from, to = self.desired_count, "segment count applied");
        self.segments_changed();
        Ok(())
    }

    /// Flip masking. Returns the new state.
    pub fn toggle_hidden(&mut self) -> bool {
        if !self.is_loading() {
            self.hidden = !self.hidden;
        }
        self.hidden
    }

    /// Empty every segment and focus the first box.
    ///
    /// Returns false when disabled by an in-flight submission.
    pub fn reset(&mut self, focus: &mut impl FocusController) -> bool {
        if self.is_loading() {
            return false;
        }

        self.segments.clear_all();
        self.segments_changed();
        self.mount(focus);
        true
    }

    /// Start a submission.
    ///
    /// Fails with [`FormError::Busy`] while one is in flight and with
    /// [`FormError::IncompleteCode`] while any segment is empty. On success
    /// the joined code is captured and the form stays loading until
    /// [`PinForm::finish_submit`] is called with the returned ticket.
    pub fn submit(&mut self) -> Result<SubmitTicket> {
        if self.is_loading() {
            return Err(FormError::Busy);
        }

        if self.segments.any_empty() {
            self.error_latched = true;
            tracing::debug!(
                filled = self.segments.filled_count(),
                total = self.segments.len(),
                "submit with empty segments"
            );
            return Err(FormError::IncompleteCode);
        }

        let ticket = SubmitTicket(self.next_ticket);
        self.next_ticket += 1;
        self.pending = Some(PendingSubmit {
            ticket,
            code: Zeroizing::new(self.segments.joined()),
        });

        tracing::info!(ticket = ticket.id(), length = self.segments.len(), "submission started");
        Ok(ticket)
    }

    /// Complete the submission identified by `ticket`.
    ///
    /// Returns the notification text. A ticket that does not match the
    /// in-flight submission is ignored.
    pub fn finish_submit(&mut self, ticket: SubmitTicket) -> Option<String> {
        match &self.pending {
            Some(pending) if pending.ticket == ticket => {}
            _ => {
                tracing::debug!(ticket = ticket.id(), "stale submission ignored");
                return None;
            }
        }

        let pending = self.pending.take()?;
        tracing::info!(ticket = ticket.id(), "submission finished");
        Some(notification_text(&pending.code))
    }

    /// Submission started automatically since the last call, if any
    pub fn take_auto_submit(&mut self) -> Option<SubmitTicket> {
        self.auto_submit.take()
    }

    fn segments_changed(&mut self) {
        if !self.segments.all_filled() {
            return;
        }

        self.error_latched = false;
        if self.is_loading() {
            return;
        }

        if let Ok(ticket) = self.submit() {
            self.auto_submit = Some(ticket);
        }
    }
}

/// Text shown once a submission completes
pub fn notification_text(code: &str) -> String {
    format!("Code Input Params: {}", serde_json::Value::from(code))
}

fn check_count(count: u32) -> Result<()> {
    if (MIN_SEGMENTS..=MAX_SEGMENTS).contains(&count) {
        Ok(())
    } else {
        Err(FormError::CountOutOfRange {
            requested: count,
            min: MIN_SEGMENTS,
            max: MAX_SEGMENTS,
        })
    }
}
