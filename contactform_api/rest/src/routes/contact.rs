use std::sync::Arc;

use axum::{
    extract::State,
    response::{IntoResponse, Redirect, Response},
    routing, Router,
};
use contactform_core_contact_contracts::{ContactFeatureService, ContactSubmitError};
use tracing::{debug, error};

use crate::{errors::message, extractors::contact_form::ContactForm, RestServerConfig};

pub const MISSING_FIELDS_MESSAGE: &str = "All fields are required.";
pub const SEND_FAILED_MESSAGE: &str = "Failed to send message. Please try again later.";

struct ContactState<Service> {
    service: Service,
    redirect_url: String,
}

pub fn router(service: impl ContactFeatureService, config: &RestServerConfig) -> Router<()> {
    let state = Arc::new(ContactState {
        service,
        redirect_url: config.redirect_url.clone(),
    });

    Router::new()
        .route(&config.form_path, routing::post(submit).fallback(ignore))
        .with_state(state)
}

async fn submit(
    state: State<Arc<ContactState<impl ContactFeatureService>>>,
    ContactForm(submission): ContactForm,
) -> Response {
    match state.service.submit(submission.into()).await {
        Ok(()) => Redirect::to(&state.redirect_url).into_response(),
        Err(ContactSubmitError::MissingField(field)) => {
            debug!(?field, "Rejected incomplete contact form submission");
            message(MISSING_FIELDS_MESSAGE)
        }
        Err(ContactSubmitError::Send) => {
            error!("Mail transport rejected the contact form message");
            message(SEND_FAILED_MESSAGE)
        }
        Err(ContactSubmitError::Other(err)) => {
            error!("Failed to send contact form message: {err:#}");
            message(SEND_FAILED_MESSAGE)
        }
    }
}

/// Requests other than `POST` are answered with an empty response.
async fn ignore() {}

#[cfg(test)]
mod tests {
    use anyhow::anyhow;
    use contactform_core_contact_contracts::MockContactFeatureService;
    use contactform_core_health_contracts::MockHealthFeatureService;
    use contactform_models::contact::{ContactSubmissionField, RawContactSubmission};
    use reqwest::{header, StatusCode};

    use super::*;
    use crate::tests::{TestServer, FORM_PATH, REDIRECT_URL};

    fn submission(name: &str, email: &str, message: &str) -> RawContactSubmission {
        RawContactSubmission {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    async fn start(contact: MockContactFeatureService) -> TestServer {
        TestServer::start(MockHealthFeatureService::new(), contact).await
    }

    #[tokio::test]
    async fn ok() {
        // Arrange
        let contact = MockContactFeatureService::new()
            .with_submit(submission("Jo", "jo@example.com", "Hi"), Ok(()));
        let server = start(contact).await;

        // Act
        let response = server
            .post_form(&[("name", "Jo"), ("email", "jo@example.com"), ("message", "Hi")])
            .await;

        // Assert
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], REDIRECT_URL);
        assert_eq!(response.text().await.unwrap(), "");
    }

    #[tokio::test]
    async fn missing_field() {
        // Arrange
        let contact = MockContactFeatureService::new().with_submit(
            submission("", "jo@example.com", "Hi"),
            Err(ContactSubmitError::MissingField(ContactSubmissionField::Name)),
        );
        let server = start(contact).await;

        // Act
        let response = server
            .post_form(&[("name", ""), ("email", "jo@example.com"), ("message", "Hi")])
            .await;

        // Assert
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().get(header::LOCATION).is_none());
        assert_eq!(response.text().await.unwrap(), "All fields are required.");
    }

    #[tokio::test]
    async fn absent_fields_are_empty() {
        // Arrange
        let contact = MockContactFeatureService::new().with_submit(
            submission("Jo", "", ""),
            Err(ContactSubmitError::MissingField(ContactSubmissionField::Email)),
        );
        let server = start(contact).await;

        // Act
        let response = server.post_form(&[("name", "Jo"), ("other", "x")]).await;

        // Assert
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.text().await.unwrap(), "All fields are required.");
    }

    #[tokio::test]
    async fn unparsable_body_is_empty() {
        // Arrange
        let contact = MockContactFeatureService::new().with_submit(
            submission("", "", ""),
            Err(ContactSubmitError::MissingField(ContactSubmissionField::Name)),
        );
        let server = start(contact).await;

        // Act
        let response = server
            .client
            .post(server.url(FORM_PATH))
            .header(header::CONTENT_TYPE, "application/json")
            .body(r#"{"name":"Jo"}"#)
            .send()
            .await
            .unwrap();

        // Assert
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.text().await.unwrap(), "All fields are required.");
    }

    #[tokio::test]
    async fn ok_multipart() {
        // Arrange
        let contact = MockContactFeatureService::new()
            .with_submit(submission("Jo", "jo@example.com", "Hi"), Ok(()));
        let server = start(contact).await;

        // Act
        let response = server
            .post_multipart(&[
                ("name", "Jo"),
                ("email", "jo@example.com"),
                ("message", "Hi"),
                ("submit", "Send"),
            ])
            .await;

        // Assert
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], REDIRECT_URL);
    }

    #[tokio::test]
    async fn multipart_absent_fields_are_empty() {
        // Arrange
        let contact = MockContactFeatureService::new().with_submit(
            submission("Jo", "", "Hi"),
            Err(ContactSubmitError::MissingField(ContactSubmissionField::Email)),
        );
        let server = start(contact).await;

        // Act
        let response = server
            .post_multipart(&[("name", "Jo"), ("message", "Hi")])
            .await;

        // Assert
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.text().await.unwrap(), "All fields are required.");
    }

    #[tokio::test]
    async fn send_failed() {
        // Arrange
        let contact = MockContactFeatureService::new().with_submit(
            submission("Jo", "jo@example.com", "Hi"),
            Err(ContactSubmitError::Send),
        );
        let server = start(contact).await;

        // Act
        let response = server
            .post_form(&[("name", "Jo"), ("email", "jo@example.com"), ("message", "Hi")])
            .await;

        // Assert
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().get(header::LOCATION).is_none());
        assert_eq!(
            response.text().await.unwrap(),
            "Failed to send message. Please try again later."
        );
    }

    #[tokio::test]
    async fn transport_error() {
        // Arrange
        let contact = MockContactFeatureService::new().with_submit(
            submission("Jo", "jo@example.com", "Hi"),
            Err(ContactSubmitError::Other(anyhow!("connection refused"))),
        );
        let server = start(contact).await;

        // Act
        let response = server
            .post_form(&[("name", "Jo"), ("email", "jo@example.com"), ("message", "Hi")])
            .await;

        // Assert
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.text().await.unwrap(),
            "Failed to send message. Please try again later."
        );
    }

    #[tokio::test]
    async fn non_post_is_ignored() {
        // Arrange
        let server = start(MockContactFeatureService::new()).await;

        for method in [reqwest::Method::GET, reqwest::Method::PUT, reqwest::Method::DELETE] {
            // Act
            let response = server
                .client
                .request(method, server.url(FORM_PATH))
                .send()
                .await
                .unwrap();

            // Assert
            assert_eq!(response.status(), StatusCode::OK);
            assert!(response.headers().get(header::LOCATION).is_none());
            assert_eq!(response.text().await.unwrap(), "");
        }
    }

    #[tokio::test]
    async fn request_id() {
        // Arrange
        let server = start(MockContactFeatureService::new()).await;

        // Act
        let response = server.client.get(server.url(FORM_PATH)).send().await.unwrap();

        // Assert
        assert!(response.headers().contains_key("X-Request-Id"));
    }
}
