use contactform_config::Config;
use contactform_di::Provides;
use contactform_email_contracts::EmailService;
use tracing::{info, warn};

use crate::{
    email,
    environment::{types::RestServer, ConfigProvider, Provider},
};

pub async fn serve(config: Config) -> anyhow::Result<()> {
    info!("Setting up mail transport");
    let email = email::connect(&config.email)?;
    if let Err(err) = email.ping().await {
        warn!("Mail transport is not reachable, messages cannot be delivered: {err:#}");
    }

    let config_provider = ConfigProvider::new(&config)?;
    let mut provider = Provider::new(config_provider, email);
    let server: RestServer = provider.provide();

    info!("Starting http server on {}", config.http.address);
    server.serve().await
}
