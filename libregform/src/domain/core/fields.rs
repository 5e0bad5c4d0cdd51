use strum_macros::{Display, EnumIter, EnumString};

/// The inputs of the registration form, in declaration order.
///
/// The string form of a field is the name used in the submitted record and by
/// the rendering surface (`email`, `password1`, `password2`).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumString,
    EnumIter,
)]
pub enum Field {
    #[strum(to_string = "email")]
    Email,
    #[strum(to_string = "password1")]
    Password,
    #[strum(to_string = "password2")]
    PasswordConfirmation,
}

/// The kind of input element a field is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum InputType {
    #[strum(to_string = "email")]
    Email,
    #[strum(to_string = "password")]
    Password,
}

impl Field {
    pub fn input_type(&self) -> InputType {
        match self {
            Field::Email => InputType::Email,
            Field::Password | Field::PasswordConfirmation => InputType::Password,
        }
    }

    /// Whether the raw value should be masked when shown back to the user.
    pub fn is_secret(&self) -> bool {
        self.input_type() == InputType::Password
    }
}

#[cfg(test)]
mod test {
    use std::str::FromStr;

    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn fields_iterate_in_declaration_order() {
        let fields: Vec<Field> = Field::iter().collect();
        assert_eq!(
            fields,
            vec![Field::Email, Field::Password, Field::PasswordConfirmation]
        );
    }

    #[test]
    fn field_names_round_through_strings() {
        assert_eq!(Field::Password.to_string(), "password1");
        assert_eq!(Field::from_str("password2"), Ok(Field::PasswordConfirmation));
        assert_eq!(Field::from_str("email"), Ok(Field::Email));
        assert!(Field::from_str("username").is_err());
    }

    #[test]
    fn password_fields_are_masked() {
        assert!(!Field::Email.is_secret());
        assert!(Field::Password.is_secret());
        assert_eq!(Field::PasswordConfirmation.input_type().to_string(), "password");
    }
}
