//! Remote Job Market Intelligence service, consumed as an opaque collaborator.
//!
//! The aggregation core only cares that [`JobsApi::fetch_job_skills`] either
//! yields a payload or fails; every failure mode looks the same to it.

mod client;

use async_trait::async_trait;

pub use client::HttpJobsClient;

use crate::domain::{HealthStatus, JobFilters, JobId, JobRecord, SkillPayload};
use crate::error::Result;

/// The remote jobs service. `fetch_jobs` supplies the job-id list that feeds
/// the aggregation pipeline; `fetch_job_skills` is the per-id operation run
/// under the concurrency cap.
#[async_trait]
pub trait JobsApi: Send + Sync {
    async fn fetch_jobs(&self, filters: &JobFilters) -> Result<Vec<JobRecord>>;

    async fn fetch_job_skills(&self, id: JobId, top_n: usize) -> Result<SkillPayload>;

    async fn health(&self) -> Result<HealthStatus>;
}
