//! Provides functionality for the registration form.
use chrono::{DateTime, Utc};
use foundation::id::Id;
use serde::{Deserialize, Serialize};

use crate::domain::core::fields::Field;

pub mod controller;
pub mod errors;
pub mod handler;
pub mod messages;
pub mod schema;

/// Raw values of the registration form. Nothing is enforced until validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationInput {
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
}

impl RegistrationInput {
    pub fn new(email: &str, password: &str, password_confirmation: &str) -> Self {
        Self {
            email: email.to_string(),
            password: password.to_string(),
            password_confirmation: password_confirmation.to_string(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::PasswordConfirmation => &self.password_confirmation,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Email => self.email = value,
            Field::Password => self.password = value,
            Field::PasswordConfirmation => self.password_confirmation = value,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// The record handed to the submit handler.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RegistrationData {
    pub email: String,
    pub password1: String,
    pub password2: String,
}

impl From<RegistrationInput> for RegistrationData {
    fn from(value: RegistrationInput) -> Self {
        Self {
            email: value.email,
            password1: value.password,
            password2: value.password_confirmation,
        }
    }
}

/// A successfully validated form, as seen by the submit handler.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub id: Id,
    pub submitted_at: DateTime<Utc>,
    pub data: RegistrationData,
}

impl Submission {
    pub fn new(input: RegistrationInput, now: DateTime<Utc>) -> Self {
        Self {
            id: Id::new(),
            submitted_at: now,
            data: input.into(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn input_starts_empty() {
        let input = RegistrationInput::default();
        assert_eq!(input.get(Field::Email), "");
        assert_eq!(input.get(Field::Password), "");
        assert_eq!(input.get(Field::PasswordConfirmation), "");
    }

    #[test]
    fn input_can_be_set_and_cleared_per_field() {
        let mut input = RegistrationInput::default();
        input.set(Field::Email, "a@b.c".to_string());
        input.set(Field::PasswordConfirmation, "Abc123!@".to_string());
        assert_eq!(input, RegistrationInput::new("a@b.c", "", "Abc123!@"));

        input.clear();
        assert_eq!(input, RegistrationInput::default());
    }

    #[test]
    fn submitted_record_uses_form_field_names() {
        let data: RegistrationData = RegistrationInput::new("a@b.c", "Abc123!@", "Abc123!@").into();
        let json = serde_json::to_value(&data).expect("Should be able to serialize the record");
        assert_eq!(
            json,
            serde_json::json!({"email": "a@b.c", "password1": "Abc123!@", "password2": "Abc123!@"})
        );
    }
}
