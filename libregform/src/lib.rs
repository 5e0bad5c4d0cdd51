//! Registration form domain: the field schema and the form controller.
pub mod domain;
