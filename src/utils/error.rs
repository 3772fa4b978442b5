use thiserror::Error;

#[derive(Error, Debug)]
pub enum AggregatorError {
    #[error("HTTP client error: {0}")]
    HttpClientError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl AggregatorError {
    /// 給終端使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            AggregatorError::HttpClientError(_) => {
                "Could not build the upstream HTTP client".to_string()
            }
            AggregatorError::IoError(e) => format!("I/O failure: {}", e),
            AggregatorError::SerializationError(_) => {
                "Could not serialize the response".to_string()
            }
            AggregatorError::ConfigError { message } => message.clone(),
            AggregatorError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            AggregatorError::TomlError(e) => format!("Config file is not valid TOML: {}", e),
        }
    }

    /// 依錯誤類別決定程序結束碼
    pub fn exit_code(&self) -> i32 {
        match self {
            AggregatorError::ConfigError { .. }
            | AggregatorError::InvalidConfigValueError { .. }
            | AggregatorError::TomlError(_) => 2,
            AggregatorError::IoError(_) => 3,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, AggregatorError>;

/// Why a single recipe could not be retrieved. Never escapes a batch.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("upstream returned status {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("transport error for {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("could not decode body from {url}: {message}")]
    Decode { url: String, message: String },

    #[error("upstream document at {url} has no id")]
    MissingId { url: String },
}
