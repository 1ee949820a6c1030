//! Error types for the PIN code form

use thiserror::Error;

pub type Result<T> = std::result::Result<T, FormError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// Submit attempted while at least one segment is empty
    #[error("Please fill all input boxs")]
    IncompleteCode,

    /// Desired segment count outside the accepted bounds
    #[error(
        "Please enter a number greater than or equal to {min} and less than or equal {max}."
    )]
    CountOutOfRange { requested: u32, min: u32, max: u32 },

    /// A submission is already in flight
    #[error("Submission already in progress")]
    Busy,

    #[error("Invalid input rule: {0}")]
    InvalidRule(String),
}
