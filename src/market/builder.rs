use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tokio::time::timeout;
use tracing::{debug, info};

use super::aggregate::aggregate;
use super::cache::SkillCache;
use super::mapper::map_bounded;
use crate::api::JobsApi;
use crate::config::MarketConfig;
use crate::domain::{JobId, MarketView, SkillPayload};
use crate::error::{JobscopeError, Result};

/// Orchestrates one market aggregation over a job-id list.
///
/// Consults the cache per id, runs uncached lookups through the bounded
/// mapper, and reduces the ordered payloads into a [`MarketView`]. A build
/// started while an older one is still in flight supersedes it: the older
/// build's result is discarded, though its network operations are not
/// cancelled (no abort channel on the transport).
pub struct MarketBuilder {
    api: Arc<dyn JobsApi>,
    cache: Arc<SkillCache>,
    config: MarketConfig,
    generation: AtomicU64,
}

impl MarketBuilder {
    pub fn new(api: Arc<dyn JobsApi>, cache: Arc<SkillCache>, config: MarketConfig) -> Self {
        Self {
            api,
            cache,
            config,
            generation: AtomicU64::new(0),
        }
    }

    pub fn cache(&self) -> &Arc<SkillCache> {
        &self.cache
    }

    /// Build the market view for `job_ids`.
    ///
    /// Resolves to `Ok(None)` when a newer build started in the meantime;
    /// only the newest build ever delivers a view. Individual fetch failures
    /// degrade silently: their slots aggregate as absent and the build still
    /// succeeds with a partial view.
    pub async fn build(&self, job_ids: &[JobId]) -> Result<Option<MarketView>> {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(generation, jobs = job_ids.len(), "starting market build");

        let payloads =
            map_bounded(job_ids, self.config.concurrency, move |id| self.fetch_one(*id)).await;

        if self.generation.load(Ordering::SeqCst) != generation {
            info!(generation, "market build superseded, discarding result");
            return Ok(None);
        }

        let view = aggregate(&payloads);
        debug!(
            generation,
            mentions = view.flattened.len(),
            distinct_top = view.top.len(),
            "market build complete"
        );
        Ok(Some(view))
    }

    async fn fetch_one(&self, id: JobId) -> Result<Arc<SkillPayload>> {
        let top_n = self.config.skills_top_n;
        self.cache
            .get_or_fetch(id, move || async move {
                match self.config.fetch_timeout_secs {
                    0 => self.api.fetch_job_skills(id, top_n).await,
                    secs => timeout(
                        Duration::from_secs(secs),
                        self.api.fetch_job_skills(id, top_n),
                    )
                    .await
                    .map_err(|_| JobscopeError::FetchTimeout(secs))?,
                }
            })
            .await
    }
}
