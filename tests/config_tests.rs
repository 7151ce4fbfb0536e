use jobscope::config::{CacheConfig, JobscopeConfig};
use jobscope::market::CachePolicy;

// ========== Default Tests ==========

#[test]
fn defaults_match_the_baseline_pipeline() {
    let config = JobscopeConfig::default();
    assert_eq!(config.api.base_url, "http://127.0.0.1:8000");
    assert_eq!(config.api.request_timeout_secs, 20);
    assert_eq!(config.market.concurrency, 10);
    assert_eq!(config.market.skills_top_n, 20);
    assert_eq!(config.market.fetch_timeout_secs, 0);
    assert_eq!(config.cache.max_entries, 0);
    assert!(config.validate().is_ok());
}

#[test]
fn cache_policy_maps_zero_to_unbounded() {
    assert_eq!(CacheConfig { max_entries: 0 }.policy(), CachePolicy::Unbounded);
    assert_eq!(
        CacheConfig { max_entries: 64 }.policy(),
        CachePolicy::MaxEntries(64)
    );
}

// ========== Validation Tests ==========

#[test]
fn zero_concurrency_is_rejected() {
    let mut config = JobscopeConfig::default();
    config.market.concurrency = 0;
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("market.concurrency"));
}

#[test]
fn skills_top_n_outside_server_range_is_rejected() {
    let mut config = JobscopeConfig::default();
    config.market.skills_top_n = 4;
    assert!(config.validate().is_err());
    config.market.skills_top_n = 61;
    assert!(config.validate().is_err());
    config.market.skills_top_n = 5;
    assert!(config.validate().is_ok());
}

#[test]
fn empty_base_url_is_rejected_with_all_violations_reported() {
    let mut config = JobscopeConfig::default();
    config.api.base_url = "  ".to_string();
    config.market.concurrency = 0;
    let message = config.validate().unwrap_err().to_string();
    assert!(message.contains("api.base_url"));
    assert!(message.contains("market.concurrency"));
}

// ========== Load/Save Tests ==========

#[tokio::test]
async fn toml_round_trip_preserves_settings() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("jobscope.toml");

    let mut config = JobscopeConfig::default();
    config.market.concurrency = 4;
    config.cache.max_entries = 128;
    config.save(&path).await.unwrap();

    let loaded = JobscopeConfig::load(&path).await.unwrap();
    assert_eq!(loaded.market.concurrency, 4);
    assert_eq!(loaded.cache.max_entries, 128);
    assert_eq!(loaded.api.base_url, config.api.base_url);
}

#[tokio::test]
async fn missing_file_loads_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = JobscopeConfig::load(&dir.path().join("absent.toml"))
        .await
        .unwrap();
    assert_eq!(config.market.concurrency, 10);
}

#[tokio::test]
async fn partial_file_fills_in_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("jobscope.toml");
    tokio::fs::write(&path, "[market]\nconcurrency = 2\n")
        .await
        .unwrap();

    let config = JobscopeConfig::load(&path).await.unwrap();
    assert_eq!(config.market.concurrency, 2);
    assert_eq!(config.market.skills_top_n, 20);
    assert_eq!(config.api.request_timeout_secs, 20);
}
