pub mod core;
pub mod registration;
