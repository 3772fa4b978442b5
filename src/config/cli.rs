use crate::config::settings::{LogFormat, Settings};
use crate::config::toml_config::TomlConfig;
use crate::utils::error::Result;
use clap::Parser;

/// Command-line flags. Anything left unset falls back to the config file,
/// then to the built-in defaults.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "recipe-aggregator")]
#[command(about = "Reverse aggregator that fans recipe lookups out to the upstream bucket")]
pub struct CliConfig {
    /// Path to an optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Address the HTTP server binds to
    #[arg(long)]
    pub listen: Option<String>,

    /// Upstream base URL; the recipe id is appended to it
    #[arg(long)]
    pub base_url: Option<String>,

    #[arg(long)]
    pub user_agent: Option<String>,

    /// Per-request timeout of the upstream HTTP client
    #[arg(long)]
    pub client_timeout_secs: Option<u64>,

    /// Deadline shared by every fetch of one batch
    #[arg(long)]
    pub deadline_ms: Option<u64>,

    #[arg(long)]
    pub max_top: Option<u32>,

    #[arg(long)]
    pub default_top: Option<u32>,

    #[arg(long)]
    pub default_skip: Option<u32>,

    /// Maximum number of recipes in one response
    #[arg(long)]
    pub result_cap: Option<usize>,

    #[arg(long, value_enum)]
    pub log_format: Option<LogFormat>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl CliConfig {
    /// 合併順序：預設值 < 設定檔 < 命令列
    pub fn into_settings(self) -> Result<Settings> {
        let mut settings = Settings::default();

        if let Some(path) = &self.config {
            tracing::info!("📁 Loading configuration from: {}", path);
            TomlConfig::from_file(path)?.apply_to(&mut settings);
        }

        if let Some(listen) = self.listen {
            settings.listen_addr = listen;
        }
        if let Some(base_url) = self.base_url {
            settings.base_url = base_url;
        }
        if let Some(user_agent) = self.user_agent {
            settings.user_agent = user_agent;
        }
        if let Some(timeout) = self.client_timeout_secs {
            settings.client_timeout_secs = timeout;
        }
        if let Some(deadline_ms) = self.deadline_ms {
            settings.deadline_ms = deadline_ms;
        }
        if let Some(max_top) = self.max_top {
            settings.max_top = max_top;
        }
        if let Some(default_top) = self.default_top {
            settings.default_top = default_top;
        }
        if let Some(default_skip) = self.default_skip {
            settings.default_skip = default_skip;
        }
        if let Some(result_cap) = self.result_cap {
            settings.result_cap = result_cap;
        }
        if let Some(log_format) = self.log_format {
            settings.log_format = log_format;
        }

        Ok(settings)
    }
}
