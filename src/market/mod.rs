//! The bounded-concurrency aggregation pipeline.
//!
//! Data flow: job-id list → [`MarketBuilder`] → (per id)
//! [`SkillCache::get_or_fetch`] driven through [`map_bounded`] → ordered
//! payload list → [`aggregate`] → [`MarketView`](crate::domain::MarketView).

mod aggregate;
mod builder;
mod cache;
mod mapper;

pub use aggregate::{TOP_SKILLS_LIMIT, aggregate, normalize_skill};
pub use builder::MarketBuilder;
pub use cache::{CachePolicy, SkillCache};
pub use mapper::map_bounded;
