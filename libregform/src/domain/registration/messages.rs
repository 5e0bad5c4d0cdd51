//! User-facing validation messages.
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use super::errors::ErrorKind;

/// Language of the texts shown to the user.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Locale {
    #[default]
    Ru,
    En,
}

/// Every message a validation rule can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum Message {
    EmailInvalid,
    EmailMalformed,
    FieldEmpty,
    FieldRequired,
    PasswordFormat,
    PasswordTooLong,
    PasswordTooShort,
    PasswordMismatch,
}

impl Message {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Message::EmailInvalid | Message::EmailMalformed | Message::PasswordFormat => {
                ErrorKind::FormatError
            }
            Message::PasswordTooLong | Message::PasswordTooShort => ErrorKind::LengthError,
            Message::FieldEmpty | Message::FieldRequired => ErrorKind::RequiredError,
            Message::PasswordMismatch => ErrorKind::MismatchError,
        }
    }

    pub fn text(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::Ru => match self {
                Message::EmailInvalid => "Некорректный формат email.",
                Message::EmailMalformed => "Неверный email.",
                Message::FieldEmpty => "Поле не должно быть пустым.",
                Message::FieldRequired => "Обязательное поле.",
                Message::PasswordFormat => "Неверный пароль. Пароль может содержать строчную, прописаную, цифру и спецсимвол - от шести и более символов.",
                Message::PasswordTooLong => "Должно быть меньше 20 символов.",
                Message::PasswordTooShort => "Должно быть больше шести символов.",
                Message::PasswordMismatch => "Пароли должны совпадать.",
            },
            Locale::En => match self {
                Message::EmailInvalid => "Must be a valid email.",
                Message::EmailMalformed => "Invalid email.",
                Message::FieldEmpty => "The field must not be empty.",
                Message::FieldRequired => "This field is required.",
                Message::PasswordFormat => "Invalid password. It needs a lowercase letter, an uppercase letter, a digit and a symbol, six characters or more.",
                Message::PasswordTooLong => "Must be at most 20 characters.",
                Message::PasswordTooShort => "Must be at least six characters.",
                Message::PasswordMismatch => "Passwords must match.",
            },
        }
    }
}
