// SPDX-License-Identifier: Apache-2.0

use std::path::Path;

use config::{Config, ConfigError, Environment, Source};
use serde::Deserialize;

const DEFAULT_LANDING_URL: &str = "https://flash.android.com/";
const DEFAULT_BUILDS_URL: &str = "https://content-flashstation-pa.googleapis.com/v1/builds";
// Without a modern browser user agent the landing page links the ES5 bundle, whose
// strings are concatenated instead of interpolated.
const DEFAULT_USER_AGENT: &str = concat!(
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) ",
    "Chrome/138.0.0.0 Safari/537.36",
);
const ENV_PREFIX: &str = "FLASHSTATION";

#[derive(Debug, Deserialize, Clone)]
pub(crate) struct AppConfig {
    service: Service,
}

impl AppConfig {
    /// Layers built-in defaults, an optional config file and `FLASHSTATION__*`
    /// environment variables, in that order.
    pub fn load(file: Option<&Path>) -> Result<Self, ConfigError> {
        let file_source = match file {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name("flashstation").required(false),
        };

        Self::from_sources(file_source, Environment::with_prefix(ENV_PREFIX).separator("__"))
    }

    fn from_sources<F, E>(file: F, environment: E) -> Result<Self, ConfigError>
    where
        F: Source + Send + Sync + 'static,
        E: Source + Send + Sync + 'static,
    {
        Config::builder()
            .set_default("service.landing_url", DEFAULT_LANDING_URL)?
            .set_default("service.builds_url", DEFAULT_BUILDS_URL)?
            .set_default("service.referer", DEFAULT_LANDING_URL)?
            .set_default("service.user_agent", DEFAULT_USER_AGENT)?
            .add_source(file)
            .add_source(environment)
            .build()?
            .try_deserialize()
    }

    pub fn service(&self) -> &Service {
        &self.service
    }
}

#[derive(Debug, Deserialize, Clone)]
pub(crate) struct Service {
    landing_url: String,
    builds_url: String,
    referer: String,
    user_agent: String,
}

impl Service {
    pub fn landing_url(&self) -> &str {
        &self.landing_url
    }

    pub fn builds_url(&self) -> &str {
        &self.builds_url
    }

    pub fn referer(&self) -> &str {
        &self.referer
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

#[cfg(test)]
pub(crate) struct AppConfigBuilder {
    config: AppConfig,
}

#[cfg(test)]
impl AppConfigBuilder {
    pub fn new() -> Self {
        AppConfigBuilder {
            config: AppConfig {
                service: Service {
                    landing_url: DEFAULT_LANDING_URL.to_string(),
                    builds_url: DEFAULT_BUILDS_URL.to_string(),
                    referer: DEFAULT_LANDING_URL.to_string(),
                    user_agent: "test-agent".to_string(),
                },
            },
        }
    }

    /// Points every endpoint at a mock server.
    pub fn server_url(mut self, url: &str) -> Self {
        self.config.service.landing_url = format!("{url}/");
        self.config.service.builds_url = format!("{url}/v1/builds");
        self.config.service.referer = format!("{url}/");
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}
