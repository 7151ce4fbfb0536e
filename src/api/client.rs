use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use super::JobsApi;
use crate::config::ApiConfig;
use crate::domain::{HealthStatus, JobFilters, JobId, JobRecord, SkillPayload};
use crate::error::{JobscopeError, Result};

/// HTTP client for the backend REST API.
pub struct HttpJobsClient {
    base_url: String,
    http: reqwest::Client,
}

/// Envelope of `GET /jobs`.
#[derive(Debug, Deserialize)]
struct JobsResponse {
    #[serde(default)]
    jobs: Vec<JobRecord>,
}

impl HttpJobsClient {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;
        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "GET");

        // Blank params are omitted, matching the backend's expectations.
        let query: Vec<_> = query
            .iter()
            .filter(|(_, v)| !v.trim().is_empty())
            .collect();

        let response = self.http.get(&url).query(&query).send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(JobscopeError::Api {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response.json().await?)
    }
}

#[async_trait]
impl JobsApi for HttpJobsClient {
    async fn fetch_jobs(&self, filters: &JobFilters) -> Result<Vec<JobRecord>> {
        let query = [
            ("q", filters.q.clone().unwrap_or_default()),
            ("job_family", filters.job_family.clone().unwrap_or_default()),
            ("seniority", filters.seniority.clone().unwrap_or_default()),
            ("location", filters.location.clone().unwrap_or_default()),
            ("limit", filters.limit.to_string()),
        ];
        let response: JobsResponse = self.get_json("/jobs", &query).await?;
        Ok(response.jobs)
    }

    async fn fetch_job_skills(&self, id: JobId, top_n: usize) -> Result<SkillPayload> {
        let path = format!("/jobs/{id}/skills");
        let query = [("top_n", top_n.to_string())];
        // The server echoes job_id and top_n alongside the payload fields;
        // the extra keys are simply ignored.
        self.get_json(&path, &query).await
    }

    async fn health(&self) -> Result<HealthStatus> {
        self.get_json("/health", &[]).await
    }
}
