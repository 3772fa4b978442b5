use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_range, validate_url, Validate,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://s3-eu-west-1.amazonaws.com/test-golang-recipes/";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

/// Fully resolved runtime settings, handed to the engine at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub listen_addr: String,
    pub base_url: String,
    pub user_agent: String,
    pub client_timeout_secs: u64,
    pub deadline_ms: u64,
    pub max_top: u32,
    pub default_top: u32,
    pub default_skip: u32,
    pub result_cap: usize,
    pub log_format: LogFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8080".to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: "hellofresh".to_string(),
            client_timeout_secs: 10,
            deadline_ms: 2000,
            max_top: 10,
            default_top: 5,
            default_skip: 0,
            result_cap: 50,
            log_format: LogFormat::Compact,
        }
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("server.listen", &self.listen_addr)?;
        validate_url("upstream.base_url", &self.base_url)?;
        validate_non_empty_string("upstream.user_agent", &self.user_agent)?;
        validate_positive_number("upstream.client_timeout_secs", self.client_timeout_secs, 1)?;
        validate_positive_number("batch.deadline_ms", self.deadline_ms, 1)?;
        validate_positive_number("batch.result_cap", self.result_cap as u64, 1)?;
        validate_positive_number("pagination.max_top", u64::from(self.max_top), 1)?;
        validate_range("pagination.default_top", self.default_top, 1, self.max_top)?;
        Ok(())
    }
}

impl ConfigProvider for Settings {
    fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn user_agent(&self) -> &str {
        &self.user_agent
    }

    fn client_timeout(&self) -> Duration {
        Duration::from_secs(self.client_timeout_secs)
    }

    fn batch_deadline(&self) -> Duration {
        Duration::from_millis(self.deadline_ms)
    }

    fn max_top(&self) -> u32 {
        self.max_top
    }

    fn default_top(&self) -> u32 {
        self.default_top
    }

    fn default_skip(&self) -> u32 {
        self.default_skip
    }

    fn result_cap(&self) -> usize {
        self.result_cap
    }
}
