//! The form controller: field bindings, submit and reset.
use chrono::Utc;
use serde::Deserialize;
use strum_macros::Display;

use super::{
    errors::{FieldError, FieldErrors},
    handler::SubmitHandler,
    messages::Locale,
    schema::Schema,
    RegistrationInput, Submission,
};
use crate::domain::core::fields::Field;

/// Where the form is in its submit cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum FormState {
    /// No errors on display, either untouched or reset.
    Pristine,
    /// A validation pass is running.
    Validating,
    /// The last validation pass found errors.
    Invalid,
    /// The last validation pass succeeded and the handler has the record.
    Valid,
}

/// When a change event re-runs validation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RevalidateMode {
    /// Only submit attempts validate.
    #[default]
    OnSubmit,
    /// Between a submit attempt and the next reset, every change re-validates
    /// the changed field.
    OnChange,
}

/// Ties an input element to one field of the form. Only [`FormController::register`]
/// hands these out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    field: Field,
}

impl Binding {
    pub fn field(&self) -> Field {
        self.field
    }

    /// Name of the bound input.
    pub fn name(&self) -> String {
        self.field.to_string()
    }
}

pub struct FormController<H: SubmitHandler> {
    schema: Schema,
    handler: H,
    revalidate: RevalidateMode,
    values: RegistrationInput,
    errors: FieldErrors,
    state: FormState,
    submitted: bool,
    submit_count: usize,
}

impl<H: SubmitHandler> FormController<H> {
    pub fn new(handler: H) -> Self {
        Self::build(handler).finish()
    }

    pub fn build(handler: H) -> FormControllerBuilder<H> {
        FormControllerBuilder {
            handler,
            locale: Locale::default(),
            revalidate: RevalidateMode::default(),
        }
    }

    pub fn register(&mut self, field: Field) -> Binding {
        tracing::trace!(field = %field, "Registering input");
        Binding { field }
    }

    /// Stores the raw value typed into a bound input.
    pub fn on_change(&mut self, binding: &Binding, value: impl Into<String>) {
        self.values.set(binding.field, value.into());

        if self.revalidate == RevalidateMode::OnChange && self.submitted {
            self.revalidate_field(binding.field);
        }
    }

    /// Validates the current values. On success the handler gets the record
    /// and the form is reset; on failure the errors are kept for display.
    pub fn handle_submit(&mut self) -> Result<Submission, FieldErrors> {
        self.submit_count += 1;
        self.submitted = true;
        self.state = FormState::Validating;

        match self.schema.validate(&self.values) {
            Err(errors) => {
                self.errors = errors.clone();
                self.state = FormState::Invalid;
                Err(errors)
            }
            Ok(values) => {
                self.errors.clear();
                self.state = FormState::Valid;
                let submission = Submission::new(values, Utc::now());
                self.handler.on_submit(&submission);
                self.reset();
                Ok(submission)
            }
        }
    }

    /// Empties every field and drops all errors.
    pub fn reset(&mut self) {
        tracing::debug!(previous_state = %self.state, "Resetting form");
        self.values.clear();
        self.errors.clear();
        self.submitted = false;
        self.state = FormState::Pristine;
    }

    /// Whether the submit control should be enabled.
    pub fn can_submit(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn value(&self, field: Field) -> &str {
        self.values.get(field)
    }

    pub fn values(&self) -> &RegistrationInput {
        &self.values
    }

    pub fn error(&self, field: Field) -> Option<&FieldError> {
        self.errors.get(field)
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    /// Submit attempts since the controller was built. `reset` leaves it alone.
    pub fn submit_count(&self) -> usize {
        self.submit_count
    }

    pub fn locale(&self) -> Locale {
        self.schema.locale()
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }

    fn revalidate_field(&mut self, field: Field) {
        match self.schema.validate_field(&self.values, field) {
            Some(error) => {
                self.errors.insert(field, error);
                self.state = FormState::Invalid;
            }
            None => {
                self.errors.remove(field);
                if self.errors.is_empty() {
                    self.state = FormState::Pristine;
                }
            }
        }
    }
}

pub struct FormControllerBuilder<H: SubmitHandler> {
    handler: H,
    locale: Locale,
    revalidate: RevalidateMode,
}

impl<H: SubmitHandler> FormControllerBuilder<H> {
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn with_revalidate(mut self, revalidate: RevalidateMode) -> Self {
        self.revalidate = revalidate;
        self
    }

    pub fn finish(self) -> FormController<H> {
        FormController {
            schema: Schema::new(self.locale),
            handler: self.handler,
            revalidate: self.revalidate,
            values: RegistrationInput::default(),
            errors: FieldErrors::new(),
            state: FormState::Pristine,
            submitted: false,
            submit_count: 0,
        }
    }
}
