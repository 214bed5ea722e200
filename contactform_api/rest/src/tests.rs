use std::net::SocketAddr;

use contactform_core_contact_contracts::ContactFeatureService;
use contactform_core_health_contracts::HealthFeatureService;
use reqwest::{multipart, redirect::Policy, Client, Response};
use tokio::net::TcpListener;

use crate::{RestServer, RestServerConfig};

pub const FORM_PATH: &str = "/process-form";
pub const REDIRECT_URL: &str = "./thank-you.html";

/// A [`RestServer`] listening on a random local port.
pub struct TestServer {
    pub client: Client,
    addr: SocketAddr,
}

impl TestServer {
    pub async fn start(
        health: impl HealthFeatureService,
        contact: impl ContactFeatureService,
    ) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let server = RestServer {
            health,
            contact,
            config: RestServerConfig {
                addr,
                form_path: FORM_PATH.into(),
                redirect_url: REDIRECT_URL.into(),
            },
        };
        tokio::spawn(async move { axum::serve(listener, server.router()).await });

        let client = Client::builder().redirect(Policy::none()).build().unwrap();

        Self { client, addr }
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }

    pub async fn get(&self, path: &str) -> Response {
        self.client.get(self.url(path)).send().await.unwrap()
    }

    pub async fn post_form(&self, form: &[(&str, &str)]) -> Response {
        self.client
            .post(self.url(FORM_PATH))
            .form(form)
            .send()
            .await
            .unwrap()
    }

    pub async fn post_multipart(&self, form: &[(&'static str, &'static str)]) -> Response {
        let form = form
            .iter()
            .fold(multipart::Form::new(), |acc, &(name, value)| acc.text(name, value));
        self.client
            .post(self.url(FORM_PATH))
            .multipart(form)
            .send()
            .await
            .unwrap()
    }
}
