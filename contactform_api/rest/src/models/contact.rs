use contactform_models::contact::RawContactSubmission;
use serde::Deserialize;

/// The fields posted by the contact form. Missing fields are empty.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ApiContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl From<ApiContactSubmission> for RawContactSubmission {
    fn from(value: ApiContactSubmission) -> Self {
        Self {
            name: value.name,
            email: value.email,
            message: value.message,
        }
    }
}
