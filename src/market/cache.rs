use std::future::Future;
use std::sync::Arc;

use indexmap::IndexMap;
use parking_lot::RwLock;
use tracing::{debug, trace};

use crate::domain::{JobId, SkillPayload};

/// Bounding policy for [`SkillCache`].
///
/// `Unbounded` matches the baseline behavior (entries live for the process
/// lifetime), acceptable for short-lived sessions. `MaxEntries` evicts the
/// oldest entry by insertion order once the cap is reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CachePolicy {
    Unbounded,
    MaxEntries(usize),
}

/// Memoizing store mapping a job id to its previously fetched skill payload.
///
/// Lookups and population are synchronous relative to other tasks between
/// await points; the lock is never held across an await. Concurrent misses on
/// the same id may each run their own fetch — results are idempotent payload
/// replacements, so the last write wins and nothing is lost.
pub struct SkillCache {
    policy: CachePolicy,
    entries: RwLock<IndexMap<JobId, Arc<SkillPayload>>>,
}

impl SkillCache {
    pub fn new(policy: CachePolicy) -> Self {
        Self {
            policy,
            entries: RwLock::new(IndexMap::new()),
        }
    }

    pub fn unbounded() -> Self {
        Self::new(CachePolicy::Unbounded)
    }

    /// Stored payload for `id`, if any.
    pub fn get(&self, id: JobId) -> Option<Arc<SkillPayload>> {
        self.entries.read().get(&id).cloned()
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Return the cached payload for `id`, or run `fetch` and memoize its
    /// result. Only successful fetches are stored; a failure leaves the cache
    /// untouched so a later call retries.
    pub async fn get_or_fetch<F, Fut, E>(
        &self,
        id: JobId,
        fetch: F,
    ) -> Result<Arc<SkillPayload>, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<SkillPayload, E>>,
    {
        if let Some(hit) = self.get(id) {
            trace!(%id, "skill cache hit");
            return Ok(hit);
        }

        let payload = Arc::new(fetch().await?);
        self.insert(id, Arc::clone(&payload));
        Ok(payload)
    }

    fn insert(&self, id: JobId, payload: Arc<SkillPayload>) {
        let mut entries = self.entries.write();
        if let CachePolicy::MaxEntries(cap) = self.policy {
            if cap == 0 {
                return;
            }
            while entries.len() >= cap && !entries.contains_key(&id) {
                // Oldest-first eviction over insertion order.
                let evicted = entries.shift_remove_index(0);
                if let Some((old, _)) = evicted {
                    debug!(evicted = %old, "skill cache full, evicting oldest entry");
                }
            }
        }
        entries.insert(id, payload);
    }
}
