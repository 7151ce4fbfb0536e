pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod market;

pub use api::{HttpJobsClient, JobsApi};
pub use config::JobscopeConfig;
pub use domain::{AggregatedSkill, JobFilters, JobId, JobRecord, MarketView, SkillPayload};
pub use error::{JobscopeError, Result};
pub use market::{CachePolicy, MarketBuilder, SkillCache};
