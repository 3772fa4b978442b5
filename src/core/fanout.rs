use crate::domain::model::Recipe;
use crate::domain::ports::RecipeFetcher;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinSet;
use tokio::time::sleep;

/// Per-batch counters, logged once the batch settles.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchStats {
    pub requested: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub timed_out: usize,
}

#[derive(Debug, Default)]
pub struct Batch {
    /// Successful recipes in completion order.
    pub recipes: Vec<Recipe>,
    pub stats: BatchStats,
}

/// Dispatches one fetch per identifier and gathers whatever succeeds
/// before the batch deadline.
#[derive(Clone)]
pub struct FanOut {
    fetcher: Arc<dyn RecipeFetcher>,
}

impl FanOut {
    pub fn new(fetcher: Arc<dyn RecipeFetcher>) -> Self {
        Self { fetcher }
    }

    pub async fn collect(&self, ids: &[String], deadline: Duration) -> Vec<Recipe> {
        self.collect_batch(ids, deadline).await.recipes
    }

    /// Fetches every identifier concurrently under one shared deadline.
    ///
    /// Duplicated identifiers are fetched independently. Failed fetches are
    /// dropped. Fetches still running when this returns are aborted together
    /// with the `JoinSet`, so nothing from this batch outlives the call.
    pub async fn collect_batch(&self, ids: &[String], deadline: Duration) -> Batch {
        // 整批共用同一個截止時間，自派發開始計時，不因單筆完成而重設
        let timeout = sleep(deadline);
        tokio::pin!(timeout);

        let mut join_set = JoinSet::new();

        for id in ids {
            let fetcher = Arc::clone(&self.fetcher);
            let id = id.clone();
            join_set.spawn(async move { fetcher.fetch(&id).await });
        }

        let mut stats = BatchStats {
            requested: ids.len(),
            ..Default::default()
        };
        let mut recipes = Vec::with_capacity(ids.len());

        let mut expired = false;

        for _ in 0..ids.len() {
            if expired {
                break;
            }

            tokio::select! {
                _ = &mut timeout => {
                    expired = true;
                }
                join_result = join_set.join_next() => {
                    match join_result {
                        Some(Ok(Ok(recipe))) if recipe.is_retrieved() => {
                            stats.succeeded += 1;
                            recipes.push(recipe);
                        }
                        Some(Ok(Ok(_))) => {
                            stats.failed += 1;
                            tracing::warn!("⚠️ Discarding recipe without id");
                        }
                        Some(Ok(Err(e))) => {
                            stats.failed += 1;
                            tracing::warn!("⚠️ Fetch failed: {}", e);
                        }
                        Some(Err(e)) => {
                            stats.failed += 1;
                            tracing::error!("Fetch task panicked: {}", e);
                        }
                        // No more tasks
                        None => break,
                    }
                }
            }
        }

        stats.timed_out = stats.requested - stats.succeeded - stats.failed;
        if expired {
            tracing::warn!(
                "⏱️ Batch deadline of {:?} elapsed, abandoning {} outstanding fetches",
                deadline,
                stats.timed_out
            );
        }

        tracing::info!(
            "📦 Batch settled: requested={}, succeeded={}, failed={}, timed_out={}",
            stats.requested,
            stats.succeeded,
            stats.failed,
            stats.timed_out
        );

        Batch { recipes, stats }
    }
}
