//! Shared building blocks for the registration form crates.
pub mod id;
pub mod validation;
