//! Reusable UI components

pub mod alert;
pub mod button;
pub mod segment_row;
