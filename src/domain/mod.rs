//! Core data model: job identifiers, skill payloads, and aggregation output.

mod types;

pub use types::{
    AggregatedSkill, HealthStatus, JobFilters, JobId, JobRecord, MarketView, SkillPayload,
};
