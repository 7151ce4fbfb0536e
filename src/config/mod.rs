//! Configuration types and loading.

mod settings;

pub use settings::{ApiConfig, CacheConfig, JobscopeConfig, MarketConfig};
