use std::{
    error::Error,
    fmt::Display,
    io::{self, BufRead, Write},
};

use libregform::domain::{
    core::fields::Field,
    registration::{
        controller::{Binding, FormController},
        handler::{LogSubmission, SubmitHandler},
    },
};
use strum::IntoEnumIterator;

use crate::{
    configuration::Configuration,
    telemetry::TelemetryError,
    terminal::{command::Command, labels::Labels, view},
};

#[derive(Debug)]
pub enum ApplicationError {
    IoError(io::Error),
    ConfigurationError(config::ConfigError),
    TelemetryError(TelemetryError),
}

impl From<io::Error> for ApplicationError {
    fn from(value: io::Error) -> Self {
        ApplicationError::IoError(value)
    }
}

impl From<config::ConfigError> for ApplicationError {
    fn from(value: config::ConfigError) -> Self {
        ApplicationError::ConfigurationError(value)
    }
}

impl From<TelemetryError> for ApplicationError {
    fn from(value: TelemetryError) -> Self {
        ApplicationError::TelemetryError(value)
    }
}

impl Display for ApplicationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApplicationError::IoError(err) => write!(f, "{}", err),
            ApplicationError::ConfigurationError(err) => write!(f, "{}", err),
            ApplicationError::TelemetryError(err) => write!(f, "{}", err),
        }
    }
}

impl Error for ApplicationError {}

/// Whether the event loop keeps reading input.
#[derive(Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

/// The registration form driven by line input.
pub struct Application<H: SubmitHandler> {
    controller: FormController<H>,
    bindings: Vec<Binding>,
    labels: &'static Labels,
}

impl Application<LogSubmission> {
    /// A form that logs its submissions, set up from configuration.
    pub fn build(configuration: &Configuration) -> Self {
        let controller = FormController::build(LogSubmission)
            .with_locale(configuration.form.locale)
            .with_revalidate(configuration.form.revalidate)
            .finish();
        Self::new(controller)
    }
}

impl<H: SubmitHandler> Application<H> {
    pub fn new(mut controller: FormController<H>) -> Self {
        let bindings = Field::iter().map(|field| controller.register(field)).collect();
        let labels = Labels::for_locale(controller.locale());
        Self {
            controller,
            bindings,
            labels,
        }
    }

    pub fn controller(&self) -> &FormController<H> {
        &self.controller
    }

    /// Renders the form, then handles one command per input line until
    /// `quit` or the end of input.
    pub fn run<R, W>(&mut self, input: R, output: &mut W) -> Result<(), ApplicationError>
    where
        R: BufRead,
        W: Write,
    {
        tracing::debug!(locale = %self.controller.locale(), "Starting registration form");
        view::render(output, &self.controller, self.labels)?;
        prompt(output)?;

        for line in input.lines() {
            let line = line?;
            let flow = match line.parse::<Command>() {
                Ok(command) => self.dispatch(command, output)?,
                Err(err) => {
                    writeln!(output, "{}", err)?;
                    Flow::Continue
                }
            };
            if flow == Flow::Stop {
                break;
            }
            prompt(output)?;
        }
        Ok(())
    }

    /// Applies a single command and redraws the form when it changed.
    pub fn dispatch<W: Write>(&mut self, command: Command, output: &mut W) -> Result<Flow, ApplicationError> {
        match command {
            Command::Change(field, value) => {
                if let Some(binding) = self.bindings.iter().find(|b| b.field() == field) {
                    self.controller.on_change(binding, value);
                }
            }
            Command::Submit => {
                if !self.controller.can_submit() {
                    writeln!(output, "{}", self.labels.submit_disabled)?;
                    return Ok(Flow::Continue);
                }
                if self.controller.handle_submit().is_ok() {
                    writeln!(output, "{}", self.labels.submitted)?;
                }
            }
            Command::Reset => self.controller.reset(),
            Command::Help => {
                writeln!(output, "{}", self.labels.help)?;
                return Ok(Flow::Continue);
            }
            Command::Quit => return Ok(Flow::Stop),
        }

        view::render(output, &self.controller, self.labels)?;
        Ok(Flow::Continue)
    }
}

fn prompt<W: Write>(output: &mut W) -> io::Result<()> {
    write!(output, "> ")?;
    output.flush()
}

#[cfg(test)]
mod test {
    use std::io::Cursor;

    use libregform::domain::registration::{
        controller::{FormState, RevalidateMode},
        messages::Locale,
        RegistrationData, Submission,
    };

    use super::*;
    use crate::configuration::{Form, Telemetry};

    fn run_with<H: SubmitHandler>(app: &mut Application<H>, script: &str) -> String {
        let mut output = Vec::new();
        app.run(Cursor::new(script), &mut output)
            .expect("Should be able to run against in-memory streams");
        String::from_utf8(output).expect("Output should be UTF-8")
    }

    #[test]
    fn valid_form_is_submitted_once_and_cleared() {
        let mut submitted: Vec<RegistrationData> = Vec::new();
        let handler = |submission: &Submission| submitted.push(submission.data.clone());
        let mut app = Application::new(FormController::new(handler));

        let out = run_with(
            &mut app,
            "email a@b.c\npassword1 Abc123!@\npassword2 Abc123!@\nsubmit\nquit\n",
        );

        assert!(out.contains("Данные отправлены."));
        assert_eq!(app.controller().value(Field::Email), "");
        assert_eq!(app.controller().state(), FormState::Pristine);
        drop(app);
        assert_eq!(
            submitted,
            vec![RegistrationData {
                email: "a@b.c".to_string(),
                password1: "Abc123!@".to_string(),
                password2: "Abc123!@".to_string(),
            }]
        );
    }

    #[test]
    fn invalid_form_disables_submit_until_reset() {
        let mut count = 0;
        let handler = |_: &Submission| count += 1;
        let mut app = Application::new(FormController::new(handler));

        let out = run_with(
            &mut app,
            "email notanemail\npassword1 Abc123!@\npassword2 Abc123!@\nsubmit\nemail a@b.c\nsubmit\n",
        );
        assert!(out.contains("  ! Некорректный формат email.\n"));
        assert!(out.contains("[Зарегистрироваться (недоступно)]"));
        assert!(out.contains("Исправьте ошибки перед отправкой."));
        assert_eq!(app.controller().submit_count(), 1);

        let out = run_with(&mut app, "reset\nemail a@b.c\npassword1 Abc123!@\npassword2 Abc123!@\nsubmit\n");
        assert!(out.contains("Данные отправлены."));
        drop(app);
        assert_eq!(count, 1);
    }

    #[test]
    fn on_change_configuration_lets_the_user_fix_errors() {
        let configuration = Configuration {
            form: Form {
                locale: Locale::En,
                revalidate: RevalidateMode::OnChange,
            },
            telemetry: Telemetry {
                name: "test".to_string(),
                filter: "info".to_string(),
            },
        };
        let mut app = Application::build(&configuration);

        let out = run_with(
            &mut app,
            "email a@b.c\npassword1 Abc123!@\npassword2 Xyz123!@\nsubmit\npassword2 Abc123!@\nsubmit\n",
        );
        assert!(out.contains("  ! Passwords must match.\n"));
        assert!(out.contains("Form submitted."));
        assert_eq!(app.controller().submit_count(), 2);
    }

    #[test]
    fn bad_commands_and_help_do_not_touch_the_form() {
        let mut app = Application::new(FormController::new(LogSubmission));
        let out = run_with(&mut app, "email a@b.c\nlogin\nhelp\nsubmit now\n");

        assert!(out.contains("unknown command `login`"));
        assert!(out.contains("Команды:"));
        assert!(out.contains("`submit` doesn't take a value"));
        assert_eq!(app.controller().value(Field::Email), "a@b.c");
        assert_eq!(app.controller().submit_count(), 0);
    }
}
