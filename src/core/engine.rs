use crate::core::aggregate::{aggregate, truncate_to};
use crate::core::fanout::FanOut;
use crate::core::request::{resolve, BatchRequest, Pagination, RecipeQuery};
use crate::domain::model::Recipe;
use crate::domain::ports::{ConfigProvider, RecipeFetcher};
use std::sync::Arc;
use std::time::Duration;

/// Resolves a query into a batch, fans it out, then orders and caps the result.
#[derive(Clone)]
pub struct AggregatorEngine {
    fan_out: FanOut,
    deadline: Duration,
    pagination: Pagination,
    result_cap: usize,
}

impl AggregatorEngine {
    pub fn new(
        fetcher: Arc<dyn RecipeFetcher>,
        deadline: Duration,
        pagination: Pagination,
        result_cap: usize,
    ) -> Self {
        Self {
            fan_out: FanOut::new(fetcher),
            deadline,
            pagination,
            result_cap,
        }
    }

    pub fn from_config<C: ConfigProvider>(fetcher: Arc<dyn RecipeFetcher>, config: &C) -> Self {
        Self::new(
            fetcher,
            config.batch_deadline(),
            Pagination::from_config(config),
            config.result_cap(),
        )
    }

    pub async fn handle(&self, query: &RecipeQuery) -> Vec<Recipe> {
        let request = resolve(query, &self.pagination);
        tracing::debug!("Resolved {:?} into {:?}", query, request);
        self.run(request).await
    }

    pub async fn run(&self, request: BatchRequest) -> Vec<Recipe> {
        let ids = request.identifiers();
        tracing::info!("🚀 Fetching {} recipes (deadline {:?})", ids.len(), self.deadline);

        let recipes = self.fan_out.collect(&ids, self.deadline).await;
        let recipes = aggregate(recipes, request.sort_order());

        truncate_to(recipes, self.result_cap)
    }
}
