use crate::config::settings::{LogFormat, Settings};
use crate::utils::error::{AggregatorError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional TOML configuration file. Every key is optional; missing keys
/// keep whatever the caller already had.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub server: Option<ServerConfig>,
    pub upstream: Option<UpstreamConfig>,
    pub batch: Option<BatchConfig>,
    pub pagination: Option<PaginationConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerConfig {
    pub listen: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpstreamConfig {
    pub base_url: Option<String>,
    pub user_agent: Option<String>,
    pub client_timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BatchConfig {
    pub deadline_ms: Option<u64>,
    pub result_cap: Option<usize>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaginationConfig {
    pub max_top: Option<u32>,
    pub default_top: Option<u32>,
    pub default_skip: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub format: Option<LogFormat>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(AggregatorError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${RECIPES_BASE_URL})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| AggregatorError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 將檔案中有設定的值覆蓋到 settings
    pub fn apply_to(&self, settings: &mut Settings) {
        if let Some(server) = &self.server {
            if let Some(listen) = &server.listen {
                settings.listen_addr = listen.clone();
            }
        }

        if let Some(upstream) = &self.upstream {
            if let Some(base_url) = &upstream.base_url {
                settings.base_url = base_url.clone();
            }
            if let Some(user_agent) = &upstream.user_agent {
                settings.user_agent = user_agent.clone();
            }
            if let Some(timeout) = upstream.client_timeout_secs {
                settings.client_timeout_secs = timeout;
            }
        }

        if let Some(batch) = &self.batch {
            if let Some(deadline_ms) = batch.deadline_ms {
                settings.deadline_ms = deadline_ms;
            }
            if let Some(result_cap) = batch.result_cap {
                settings.result_cap = result_cap;
            }
        }

        if let Some(pagination) = &self.pagination {
            if let Some(max_top) = pagination.max_top {
                settings.max_top = max_top;
            }
            if let Some(default_top) = pagination.default_top {
                settings.default_top = default_top;
            }
            if let Some(default_skip) = pagination.default_skip {
                settings.default_skip = default_skip;
            }
        }

        if let Some(format) = self.logging.as_ref().and_then(|l| l.format) {
            settings.log_format = format;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_overrides_only_given_keys() {
        let config = TomlConfig::from_toml_str(
            r#"
[upstream]
base_url = "http://localhost:9000/recipes"

[batch]
deadline_ms = 500

[logging]
format = "json"
"#,
        )
        .unwrap();

        let mut settings = Settings::default();
        config.apply_to(&mut settings);

        assert_eq!(settings.base_url, "http://localhost:9000/recipes");
        assert_eq!(settings.deadline_ms, 500);
        assert_eq!(settings.log_format, LogFormat::Json);
        assert_eq!(settings.max_top, 10);
        assert_eq!(settings.user_agent, "hellofresh");
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("RECIPE_AGGREGATOR_TEST_LISTEN", "127.0.0.1:9999");

        let config = TomlConfig::from_toml_str(
            r#"
[server]
listen = "${RECIPE_AGGREGATOR_TEST_LISTEN}"
"#,
        )
        .unwrap();

        let listen = config.server.and_then(|s| s.listen);
        assert_eq!(listen.as_deref(), Some("127.0.0.1:9999"));
    }

    #[test]
    fn test_unset_env_var_is_left_verbatim() {
        let config = TomlConfig::from_toml_str(
            r#"
[upstream]
user_agent = "${RECIPE_AGGREGATOR_SURELY_UNSET_VAR}"
"#,
        )
        .unwrap();

        let agent = config.upstream.and_then(|u| u.user_agent);
        assert_eq!(
            agent.as_deref(),
            Some("${RECIPE_AGGREGATOR_SURELY_UNSET_VAR}")
        );
    }

    #[test]
    fn test_invalid_toml_is_reported() {
        let err = TomlConfig::from_toml_str("[batch\ndeadline_ms = ").unwrap_err();
        assert!(matches!(err, AggregatorError::TomlError(_)));
        assert_eq!(err.exit_code(), 2);
    }
}
