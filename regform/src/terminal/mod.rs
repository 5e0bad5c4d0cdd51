//! Line-oriented terminal rendering of the registration form.
pub mod command;
pub mod labels;
pub mod view;
