use std::{collections::BTreeMap, error::Error, fmt};

use strum_macros::Display;

use super::messages::{Locale, Message};
use crate::domain::core::fields::Field;

/// Category of a validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ErrorKind {
    FormatError,
    LengthError,
    RequiredError,
    MismatchError,
}

/// The single error reported for a field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldError {
    message: Message,
    kind: ErrorKind,
    text: String,
}

impl FieldError {
    pub fn new(message: Message, locale: Locale) -> Self {
        Self {
            message,
            kind: message.kind(),
            text: message.text(locale).to_string(),
        }
    }

    pub fn message(&self) -> Message {
        self.message
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Per-field errors of a failed validation pass, at most one per field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors(BTreeMap<Field, FieldError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: Field, error: FieldError) {
        self.0.insert(field, error);
    }

    pub fn remove(&mut self, field: Field) -> Option<FieldError> {
        self.0.remove(&field)
    }

    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.0.get(&field)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn clear(&mut self) {
        self.0.clear()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &FieldError)> {
        self.0.iter().map(|(field, error)| (*field, error))
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = self
            .iter()
            .map(|(field, error)| format!("{}: {}", field, error))
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "{}", msg)
    }
}

impl Error for FieldErrors {}
