use nutype::nutype;
use thiserror::Error;

use crate::email_address::EmailAddress;

/// A contact form submission as received, before sanitization.
///
/// Missing form fields are represented as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// A sanitized contact form submission with all fields present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: ContactSubmissionName,
    pub email: ContactSubmissionEmail,
    pub message: ContactSubmissionMessage,
}

#[nutype(
    sanitize(with = |s: String| crate::sanitize::single_line(&s)),
    validate(not_empty),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Display)
)]
pub struct ContactSubmissionName(String);

#[nutype(
    sanitize(with = |s: String| crate::sanitize::email(&s)),
    validate(not_empty),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Display)
)]
pub struct ContactSubmissionEmail(String);

#[nutype(
    sanitize(with = |s: String| crate::sanitize::text(&s)),
    validate(not_empty),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Display)
)]
pub struct ContactSubmissionMessage(String);

impl ContactSubmissionEmail {
    /// Parses the sanitized value as an email address, if possible.
    pub fn parse_address(&self) -> Option<EmailAddress> {
        self.parse().ok()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactSubmissionField {
    Name,
    Email,
    Message,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("The field {0:?} is empty.")]
pub struct ContactSubmissionEmptyFieldError(pub ContactSubmissionField);

impl TryFrom<RawContactSubmission> for ContactSubmission {
    type Error = ContactSubmissionEmptyFieldError;

    fn try_from(value: RawContactSubmission) -> Result<Self, Self::Error> {
        use ContactSubmissionField::*;

        Ok(Self {
            name: ContactSubmissionName::try_new(value.name)
                .map_err(|_| ContactSubmissionEmptyFieldError(Name))?,
            email: ContactSubmissionEmail::try_new(value.email)
                .map_err(|_| ContactSubmissionEmptyFieldError(Email))?,
            message: ContactSubmissionMessage::try_new(value.message)
                .map_err(|_| ContactSubmissionEmptyFieldError(Message))?,
        })
    }
}

#[cfg(test)]
mod tests {
    use contactform_utils::assert_matches;

    use super::*;

    fn raw(name: &str, email: &str, message: &str) -> RawContactSubmission {
        RawContactSubmission {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    #[test]
    fn valid() {
        let submission = ContactSubmission::try_from(raw(
            " <b>Jo</b>\n",
            "jo@example.com ",
            "Hi\r\nthere!",
        ))
        .unwrap();

        assert_eq!(*submission.name, "Jo");
        assert_eq!(*submission.email, "jo@example.com");
        assert_eq!(*submission.message, "Hi\nthere!");
        assert_eq!(
            submission.email.parse_address(),
            Some("jo@example.com".parse().unwrap())
        );
    }

    #[test]
    fn implausible_email_is_accepted() {
        let submission = ContactSubmission::try_from(raw("Jo", "not-an-address", "Hi")).unwrap();

        assert_eq!(*submission.email, "not-an-address");
        assert_eq!(submission.email.parse_address(), None);
    }

    #[test]
    fn zero_is_not_empty() {
        let submission = ContactSubmission::try_from(raw("0", "jo@example.com", "0")).unwrap();

        assert_eq!(*submission.name, "0");
        assert_eq!(*submission.message, "0");
    }

    #[test]
    fn empty_fields() {
        for (input, expected) in [
            (raw("", "jo@example.com", "Hi"), ContactSubmissionField::Name),
            (raw("Jo", "", "Hi"), ContactSubmissionField::Email),
            (raw("Jo", "jo@example.com", ""), ContactSubmissionField::Message),
            (raw("", "", ""), ContactSubmissionField::Name),
            (raw("<br>", "jo@example.com", "Hi"), ContactSubmissionField::Name),
            (raw("Jo", "()<>", "Hi"), ContactSubmissionField::Email),
            (raw("Jo", "jo@example.com", " \r\n "), ContactSubmissionField::Message),
        ] {
            assert_matches!(
                ContactSubmission::try_from(input),
                Err(ContactSubmissionEmptyFieldError(field)) if *field == expected
            );
        }
    }
}
