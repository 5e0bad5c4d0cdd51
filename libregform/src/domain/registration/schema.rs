use foundation::validation::Rules;

use super::{
    errors::{FieldError, FieldErrors},
    messages::{Locale, Message},
    RegistrationInput,
};
use crate::domain::core::{
    fields::Field,
    patterns::{
        char_len, has_email_shape, has_password_classes, is_email, PASSWORD_MAX_LEN,
        PASSWORD_MIN_LEN,
    },
};

/// The registration schema: one ordered rule chain per field.
pub struct Schema {
    locale: Locale,
    fields: Vec<(Field, Rules<RegistrationInput, Message>)>,
}

impl Schema {
    /// Passwords are checked for length before character classes.
    pub fn new(locale: Locale) -> Self {
        let email = Rules::<RegistrationInput, Message>::new()
            .must(|i| is_email(&i.email), Message::EmailInvalid)
            .must(|i| has_email_shape(&i.email), Message::EmailMalformed)
            .must(|i| !i.email.is_empty(), Message::FieldEmpty)
            .must(|i| !i.email.is_empty(), Message::FieldRequired);

        let password = Rules::<RegistrationInput, Message>::new()
            .must(|i| !i.password.is_empty(), Message::FieldRequired)
            .must(|i| char_len(&i.password) >= PASSWORD_MIN_LEN, Message::PasswordTooShort)
            .must(|i| char_len(&i.password) <= PASSWORD_MAX_LEN, Message::PasswordTooLong)
            .must(|i| has_password_classes(&i.password), Message::PasswordFormat);

        let password_confirmation = Rules::<RegistrationInput, Message>::new()
            .must(
                |i| i.password_confirmation == i.password,
                Message::PasswordMismatch,
            )
            .must(|i| !i.password_confirmation.is_empty(), Message::FieldRequired)
            .must(
                |i| char_len(&i.password_confirmation) >= PASSWORD_MIN_LEN,
                Message::PasswordTooShort,
            )
            .must(
                |i| char_len(&i.password_confirmation) <= PASSWORD_MAX_LEN,
                Message::PasswordTooLong,
            )
            .must(
                |i| has_password_classes(&i.password_confirmation),
                Message::PasswordFormat,
            );

        Self {
            locale,
            fields: vec![
                (Field::Email, email),
                (Field::Password, password),
                (Field::PasswordConfirmation, password_confirmation),
            ],
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Checks a single field against the whole record.
    pub fn validate_field(&self, input: &RegistrationInput, field: Field) -> Option<FieldError> {
        self.fields
            .iter()
            .find(|(f, _)| *f == field)
            .and_then(|(_, rules)| rules.first_violation(input))
            .map(|message| FieldError::new(*message, self.locale))
    }

    /// Runs every field's rules and returns the record if all of them pass.
    pub fn validate(&self, input: &RegistrationInput) -> Result<RegistrationInput, FieldErrors> {
        let mut errors = FieldErrors::new();
        for (field, rules) in &self.fields {
            if let Some(message) = rules.first_violation(input) {
                errors.insert(*field, FieldError::new(*message, self.locale));
            }
        }

        if errors.is_empty() {
            Ok(input.clone())
        } else {
            Err(errors)
        }
    }
}

impl Default for Schema {
    fn default() -> Self {
        Self::new(Locale::default())
    }
}

/// Validates the record with the default locale.
pub fn validate(input: &RegistrationInput) -> Result<RegistrationInput, FieldErrors> {
    Schema::default().validate(input)
}
