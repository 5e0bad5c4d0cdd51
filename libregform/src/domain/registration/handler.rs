use super::Submission;

/// Receives every form that passed validation.
pub trait SubmitHandler {
    /// Called once per successful submit, before the form is reset.
    fn on_submit(&mut self, submission: &Submission);
}

impl<F> SubmitHandler for F
where
    F: FnMut(&Submission),
{
    fn on_submit(&mut self, submission: &Submission) {
        self(submission)
    }
}

/// Logs the submitted record. Nothing is sent anywhere.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSubmission;

impl SubmitHandler for LogSubmission {
    #[tracing::instrument(
        name = "Submitting registration form",
        skip(self, submission),
        fields(submission_id = %submission.id)
    )]
    fn on_submit(&mut self, submission: &Submission) {
        match serde_json::to_string(&submission.data) {
            Ok(form_data) => tracing::info!(
                submitted_at = %submission.submitted_at,
                "formData: {}",
                form_data
            ),
            Err(err) => tracing::warn!("Couldn't serialize form data: {}", err),
        }
    }
}
