//! PIN Code Core - Segment model and form state for PIN code entry
//!
//! This crate holds everything about the PIN entry form that does not depend
//! on a particular display: the row of single-character segments, the input
//! rules applied to keystrokes, the desired-count resize, and the simulated
//! submit with its deferred completion. Front ends drive it through
//! [`PinForm`] and supply a [`FocusController`] for focus side effects.

pub mod error;
pub mod focus;
pub mod form;
pub mod numeric;
pub mod rule;
pub mod segment;

pub use error::{FormError, Result};
pub use focus::{FocusController, FocusEvent, FocusRecorder};
pub use form::{InputOutcome, PinForm, SubmitTicket};
pub use rule::InputRule;
pub use segment::{Segment, SegmentList};

/// Number of segments a fresh form starts with
pub const DEFAULT_SEGMENTS: usize = 5;

/// Smallest segment count that can be applied
pub const MIN_SEGMENTS: u32 = 3;

/// Largest segment count that can be applied
pub const MAX_SEGMENTS: u32 = 200;

/// Default simulated submit delay in milliseconds
pub const DEFAULT_SUBMIT_DELAY_MS: u64 = 1000;
