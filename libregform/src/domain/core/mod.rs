//! Field definitions and the predicates the registration schema is built from.
pub mod fields;
pub mod patterns;
