use anyhow::ensure;
use contactform_api_rest::{RestServerConfig, HEALTH_PATH};
use contactform_config::Config;
use contactform_core_contact_impl::ContactFeatureConfig;
use contactform_core_health_impl::HealthFeatureConfig;
use contactform_di::provider;
use types::Email;

pub mod types;

provider! {
    /// The default provider, capable of providing all the dependencies
    pub Provider {
        email: Email,
        ..config: ConfigProvider {
            // API
            RestServerConfig,

            // Core
            ContactFeatureConfig,
            HealthFeatureConfig,
        }
    }
}

impl Provider {
    pub fn new(config: ConfigProvider, email: Email) -> Self {
        Self {
            _cache: Default::default(),
            email,
            config,
        }
    }
}

provider! {
    /// Reduced provider, capable of providing services that only depend on the configuration
    pub ConfigProvider {
        // API
        rest_server_config: RestServerConfig,

        // Core
        contact_feature_config: ContactFeatureConfig,
        health_feature_config: HealthFeatureConfig,
    }
}

impl ConfigProvider {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        // API
        ensure!(
            config.http.form_path.starts_with('/'),
            "The form path {:?} must start with a slash",
            config.http.form_path
        );
        ensure!(
            config.http.form_path != HEALTH_PATH,
            "The form path {:?} is already used by the health endpoint",
            config.http.form_path
        );

        let rest_server_config = RestServerConfig {
            addr: config.http.address,
            form_path: config.http.form_path.clone(),
            redirect_url: config.contact.redirect_url.clone(),
        };

        // Core
        let contact_feature_config = ContactFeatureConfig {
            recipient: config.contact.recipient.clone().into(),
        };

        let health_feature_config = HealthFeatureConfig {
            cache_ttl: config.health.cache_ttl.into(),
        };

        Ok(Self {
            _cache: Default::default(),

            // API
            rest_server_config,

            // Core
            contact_feature_config,
            health_feature_config,
        })
    }
}
