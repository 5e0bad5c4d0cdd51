use std::io::{self, Write};

use libregform::domain::{
    core::fields::Field,
    registration::{controller::FormController, handler::SubmitHandler},
};
use strum::IntoEnumIterator;

use super::labels::Labels;

const MASK: char = '•';

/// Draws the whole form: every field with its label, value and error, then the buttons.
pub fn render<W, H>(out: &mut W, controller: &FormController<H>, labels: &Labels) -> io::Result<()>
where
    W: Write,
    H: SubmitHandler,
{
    for field in Field::iter() {
        writeln!(out, "{}", labels.label(field))?;

        let value = controller.value(field);
        if value.is_empty() {
            writeln!(out, "  ({})", labels.placeholder(field))?;
        } else if field.is_secret() {
            let masked: String = value.chars().map(|_| MASK).collect();
            writeln!(out, "  {}", masked)?;
        } else {
            writeln!(out, "  {}", value)?;
        }

        if let Some(error) = controller.error(field) {
            writeln!(out, "  ! {}", error)?;
        }
    }

    if controller.can_submit() {
        writeln!(out, "[{}] [{}]", labels.reset, labels.submit)?;
    } else {
        writeln!(out, "[{}] [{} ({})]", labels.reset, labels.submit, labels.disabled)?;
    }
    out.flush()
}

#[cfg(test)]
mod test {
    use libregform::domain::registration::{handler::LogSubmission, messages::Locale};

    use super::*;

    fn rendered(controller: &FormController<LogSubmission>) -> String {
        let mut out = Vec::new();
        render(&mut out, controller, Labels::for_locale(controller.locale()))
            .expect("Should be able to render into memory");
        String::from_utf8(out).expect("Rendered form should be UTF-8")
    }

    #[test]
    fn empty_form_shows_placeholders_and_enabled_buttons() {
        let controller = FormController::new(LogSubmission);
        let out = rendered(&controller);
        assert!(out.contains("Введите email:\n  (Почта)\n"));
        assert!(out.contains("Введите пароль повторно:\n  (Пароль)\n"));
        assert!(out.ends_with("[Сброс] [Зарегистрироваться]\n"));
    }

    #[test]
    fn passwords_are_masked_and_errors_shown_inline() {
        let mut controller = FormController::build(LogSubmission)
            .with_locale(Locale::En)
            .finish();
        let email = controller.register(Field::Email);
        let password = controller.register(Field::Password);
        controller.on_change(&email, "a@b.c");
        controller.on_change(&password, "Abc123!@");
        assert!(controller.handle_submit().is_err());

        let out = rendered(&controller);
        assert!(out.contains("Enter email:\n  a@b.c\n"));
        assert!(out.contains("Enter password:\n  ••••••••\n"));
        assert!(!out.contains("Abc123!@"));
        assert!(out.contains("Repeat password:\n  (Password)\n  ! Passwords must match.\n"));
        assert!(out.ends_with("[Reset] [Register (disabled)]\n"));
    }
}
