use crate::domain::model::{FetchOutcome, Recipe};
use crate::domain::ports::{ConfigProvider, RecipeFetcher};
use crate::utils::error::{FetchError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// Fetches recipe documents from `<base_url><id>`.
#[derive(Debug, Clone)]
pub struct HttpRecipeFetcher {
    client: Client,
    base_url: String,
}

impl HttpRecipeFetcher {
    pub fn new(base_url: &str, user_agent: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()?;
        Ok(Self::with_client(client, base_url))
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        Self::new(
            config.base_url(),
            config.user_agent(),
            config.client_timeout(),
        )
    }

    pub fn with_client(client: Client, base_url: &str) -> Self {
        // 統一以單一 '/' 結尾
        let base_url = format!("{}/", base_url.trim_end_matches('/'));
        Self { client, base_url }
    }

    pub fn recipe_url(&self, id: &str) -> String {
        format!("{}{}", self.base_url, id)
    }
}

#[async_trait]
impl RecipeFetcher for HttpRecipeFetcher {
    async fn fetch(&self, id: &str) -> FetchOutcome {
        let url = self.recipe_url(id);
        tracing::debug!("📡 GET {}", url);

        let response = match self.client.get(&url).send().await {
            Ok(response) => response,
            Err(source) => return Err(FetchError::Transport { url, source }),
        };

        let status = response.status();
        tracing::debug!("📡 {} -> {}", url, status);
        if !status.is_success() {
            return Err(FetchError::Status {
                url,
                status: status.as_u16(),
            });
        }

        let body = match response.bytes().await {
            Ok(body) => body,
            Err(e) => {
                return Err(FetchError::Decode {
                    url,
                    message: e.to_string(),
                })
            }
        };

        let recipe: Recipe = serde_json::from_slice(&body).map_err(|e| FetchError::Decode {
            url: url.clone(),
            message: e.to_string(),
        })?;

        if !recipe.is_retrieved() {
            return Err(FetchError::MissingId { url });
        }

        Ok(recipe)
    }
}
