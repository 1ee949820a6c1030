//! Screen modules for different views

pub mod pin_form;
