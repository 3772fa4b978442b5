use crate::domain::model::FetchOutcome;
use async_trait::async_trait;
use std::time::Duration;

/// Retrieves one recipe by identifier. Exactly one attempt per call.
#[async_trait]
pub trait RecipeFetcher: Send + Sync {
    async fn fetch(&self, id: &str) -> FetchOutcome;
}

pub trait ConfigProvider: Send + Sync {
    fn listen_addr(&self) -> &str;
    fn base_url(&self) -> &str;
    fn user_agent(&self) -> &str;
    fn client_timeout(&self) -> Duration;
    fn batch_deadline(&self) -> Duration;
    fn max_top(&self) -> u32;
    fn default_top(&self) -> u32;
    fn default_skip(&self) -> u32;
    fn result_cap(&self) -> usize;
}
