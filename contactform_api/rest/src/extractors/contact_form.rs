use std::convert::Infallible;

use axum::{
    async_trait,
    extract::{FromRequest, Multipart, Request},
    http::header::CONTENT_TYPE,
    Form,
};
use tracing::debug;

use crate::models::contact::ApiContactSubmission;

/// Extract the contact form fields from an urlencoded or multipart body.
///
/// A body that cannot be parsed yields empty fields.
pub struct ContactForm(pub ApiContactSubmission);

#[async_trait]
impl<S: Send + Sync> FromRequest<S> for ContactForm {
    type Rejection = Infallible;

    async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_multipart = request
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|x| x.to_str().ok())
            .is_some_and(|x| x.starts_with("multipart/form-data"));

        let form = if is_multipart {
            from_multipart(request, state).await
        } else {
            <Form<ApiContactSubmission> as FromRequest<S>>::from_request(request, state)
                .await
                .map(|Form(form)| form)
                .map_err(Into::into)
        };

        Ok(Self(form.unwrap_or_else(|err| {
            debug!("Failed to parse contact form, treating all fields as empty: {err:#}");
            ApiContactSubmission::default()
        })))
    }
}

async fn from_multipart<S: Send + Sync>(
    request: Request,
    state: &S,
) -> anyhow::Result<ApiContactSubmission> {
    let mut multipart = <Multipart as FromRequest<S>>::from_request(request, state).await?;
    let mut form = ApiContactSubmission::default();
    while let Some(field) = multipart.next_field().await? {
        let value = match field.name() {
            Some("name") => &mut form.name,
            Some("email") => &mut form.email,
            Some("message") => &mut form.message,
            _ => continue,
        };
        *value = field.text().await?;
    }
    Ok(form)
}
