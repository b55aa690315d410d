use std::env;
use std::fmt::{self, Debug};
use std::time::Duration;

use banter_core::ModelClient;
use banter_openai_model::{OpenAIConfigBuilder, OpenAIProvider};

const API_KEY: &str = "OPENAI_API_KEY";
const BASE_URL: &str = "OPENAI_BASE_URL";
const MODEL: &str = "OPENAI_MODEL";
const TIMEOUT_SECS: &str = "BANTER_TIMEOUT_SECS";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

/// An error found while reading the configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A required variable is not set.
    #[error("{0} environment variable is not set")]
    Missing(&'static str),
    /// The timeout is not a whole number of seconds.
    #[error("BANTER_TIMEOUT_SECS must be a whole number of seconds, got {0:?}")]
    InvalidTimeout(String),
}

/// Settings of the remote completion service.
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    /// Bearer credential.
    pub api_key: String,
    /// Endpoint base URL, the provider's default if unset.
    pub base_url: Option<String>,
    /// Model identifier, the provider's default if unset.
    pub model: Option<String>,
    /// Per-call timeout; `None` waits forever.
    pub timeout: Option<Duration>,
}

impl Config {
    /// Reads the configuration from the process environment.
    #[inline]
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Reads the configuration through `lookup`, which maps a variable
    /// name to its value. Empty values count as unset.
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|value| !value.is_empty());

        let api_key = get(API_KEY).ok_or(ConfigError::Missing(API_KEY))?;
        let timeout = match get(TIMEOUT_SECS) {
            None => Some(DEFAULT_TIMEOUT),
            Some(value) => match value.trim().parse::<u64>() {
                Ok(0) => None,
                Ok(secs) => Some(Duration::from_secs(secs)),
                Err(_) => return Err(ConfigError::InvalidTimeout(value)),
            },
        };

        Ok(Self {
            api_key,
            base_url: get(BASE_URL),
            model: get(MODEL),
            timeout,
        })
    }

    /// Builds the client both personas talk through.
    pub fn model_client(&self) -> ModelClient {
        let mut builder = OpenAIConfigBuilder::with_api_key(&self.api_key);
        if let Some(base_url) = &self.base_url {
            builder = builder.with_base_url(base_url);
        }
        if let Some(model) = &self.model {
            builder = builder.with_model(model);
        }
        let model_client = ModelClient::new(OpenAIProvider::new(builder.build()));
        match self.timeout {
            Some(timeout) => model_client.with_timeout(timeout),
            None => model_client,
        }
    }
}

impl Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("timeout", &self.timeout)
            .finish()
    }
}
