use anyhow::Context;
use contactform_config::EmailConfig;
use contactform_email_impl::EmailServiceImpl;

/// Set up the mail transport
pub fn connect(config: &EmailConfig) -> anyhow::Result<EmailServiceImpl> {
    EmailServiceImpl::new(&config.transport, config.from.clone())
        .context("Failed to set up mail transport")
}
