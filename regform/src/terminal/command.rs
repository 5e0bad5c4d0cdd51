use std::{error::Error, fmt::Display, str::FromStr};

use libregform::domain::core::fields::Field;

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// The value of an input changed.
    Change(Field, String),
    Submit,
    Reset,
    Help,
    Quit,
}

#[derive(Debug, PartialEq, Eq)]
pub enum CommandError {
    Empty,
    Unknown(String),
    UnexpectedArgument(String),
}

impl Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::Empty => write!(f, "empty command"),
            CommandError::Unknown(name) => write!(f, "unknown command `{}`", name),
            CommandError::UnexpectedArgument(name) => {
                write!(f, "`{}` doesn't take a value", name)
            }
        }
    }
}

impl Error for CommandError {}

impl FromStr for Command {
    type Err = CommandError;

    /// `<field> <value>` replaces the field's value with everything after the
    /// first space, kept verbatim. A bare field name empties the field.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim_end_matches(&['\r', '\n'][..]);
        let (name, value) = match line.split_once(' ') {
            Some((name, value)) => (name, Some(value)),
            None => (line, None),
        };

        if name.is_empty() {
            return match value {
                Some(rest) if !rest.trim().is_empty() => rest.trim_start().parse::<Command>(),
                _ => Err(CommandError::Empty),
            };
        }

        if let Ok(field) = Field::from_str(name) {
            return Ok(Command::Change(field, value.unwrap_or_default().to_string()));
        }

        let command = match name {
            "submit" => Command::Submit,
            "reset" => Command::Reset,
            "help" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };

        match value {
            Some(value) if !value.trim().is_empty() => {
                Err(CommandError::UnexpectedArgument(name.to_string()))
            }
            _ => Ok(command),
        }
    }
}
