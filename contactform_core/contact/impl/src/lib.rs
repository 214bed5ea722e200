use std::sync::Arc;

use contactform_core_contact_contracts::{ContactFeatureService, ContactSubmitError};
use contactform_di::Build;
use contactform_email_contracts::{Email, EmailService};
use contactform_models::{
    contact::{ContactSubmission, RawContactSubmission},
    email_address::EmailAddressWithName,
};
use contactform_utils::trace_instrument;

pub const SUBJECT: &str = "New Contact Form Submission";

#[derive(Debug, Clone, Build)]
pub struct ContactFeatureServiceImpl<Email> {
    email: Email,
    config: ContactFeatureConfig,
}

#[derive(Debug, Clone)]
pub struct ContactFeatureConfig {
    pub recipient: Arc<EmailAddressWithName>,
}

impl<EmailS> ContactFeatureService for ContactFeatureServiceImpl<EmailS>
where
    EmailS: EmailService,
{
    #[trace_instrument(
        skip(self, submission),
        fields(
            name.len = submission.name.len(),
            email.len = submission.email.len(),
            message.len = submission.message.len()
        )
    )]
    async fn submit(&self, submission: RawContactSubmission) -> Result<(), ContactSubmitError> {
        let submission = ContactSubmission::try_from(submission)
            .map_err(|err| ContactSubmitError::MissingField(err.0))?;

        let email = Email {
            recipient: (*self.config.recipient).clone(),
            subject: SUBJECT.into(),
            body: format!(
                "Name: {}\nEmail: {}\nMessage: {}",
                *submission.name, *submission.email, *submission.message
            ),
            reply_to: submission.email.parse_address().map(Into::into),
        };

        if !self.email.send(email).await? {
            return Err(ContactSubmitError::Send);
        }

        Ok(())
    }
}
