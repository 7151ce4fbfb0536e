use std::path::Path;

use serde::{Deserialize, Serialize};
use tokio::fs;

use crate::error::{JobscopeError, Result};
use crate::market::CachePolicy;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct JobscopeConfig {
    pub api: ApiConfig,
    pub market: MarketConfig,
    pub cache: CacheConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Backend base URL, no trailing slash required.
    pub base_url: String,
    /// Whole-request timeout applied by the HTTP client.
    pub request_timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
            request_timeout_secs: 20,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketConfig {
    /// Maximum skill fetches in flight during a market build.
    pub concurrency: usize,
    /// `top_n` passed to the per-job skills endpoint (server accepts 5..=60).
    pub skills_top_n: usize,
    /// Per-fetch timeout during a market build; 0 disables it and a stalled
    /// fetch holds its worker slot, the baseline behavior.
    pub fetch_timeout_secs: u64,
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            concurrency: 10,
            skills_top_n: 20,
            fetch_timeout_secs: 0,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Cap on cached skill payloads; 0 keeps every entry for the process
    /// lifetime.
    pub max_entries: usize,
}

impl CacheConfig {
    pub fn policy(&self) -> CachePolicy {
        if self.max_entries == 0 {
            CachePolicy::Unbounded
        } else {
            CachePolicy::MaxEntries(self.max_entries)
        }
    }
}

impl JobscopeConfig {
    pub async fn load(path: &Path) -> Result<Self> {
        let config = if path.exists() {
            let content = fs::read_to_string(path).await?;
            toml::from_str(&content)?
        } else {
            Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    pub async fn save(&self, path: &Path) -> Result<()> {
        self.validate()?;
        let content =
            toml::to_string_pretty(self).map_err(|e| JobscopeError::Config(e.to_string()))?;
        fs::write(path, content).await?;
        Ok(())
    }

    /// Validate configuration values for consistency.
    pub fn validate(&self) -> Result<()> {
        let mut errors = Vec::new();

        if self.api.base_url.trim().is_empty() {
            errors.push("api.base_url must not be empty");
        }
        if self.api.request_timeout_secs == 0 {
            errors.push("api.request_timeout_secs must be greater than 0");
        }
        if self.market.concurrency == 0 {
            errors.push("market.concurrency must be greater than 0");
        }
        if !(5..=60).contains(&self.market.skills_top_n) {
            errors.push("market.skills_top_n must be between 5 and 60");
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(JobscopeError::Config(errors.join("; ")))
        }
    }
}
