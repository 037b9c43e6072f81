use dashmap::DashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info};

#[derive(Debug, Clone)]
struct CachedBody {
    body: String,
    stored_at: Instant,
}

/// Response bodies keyed by request URL, reused until `ttl` has passed.
/// A zero `ttl` disables caching.
#[derive(Clone)]
pub struct RevalidationCache {
    entries: Arc<DashMap<String, CachedBody>>,
    ttl: Duration,
}

impl RevalidationCache {
    pub fn new(ttl: Duration) -> Self {
        info!("Initializing revalidation cache (ttl: {:?})", ttl);
        Self {
            entries: Arc::new(DashMap::new()),
            ttl,
        }
    }

    pub fn is_enabled(&self) -> bool {
        !self.ttl.is_zero()
    }

    /// Fresh body for `key`, if any. Stale entries are dropped on read.
    pub fn get(&self, key: &str) -> Option<String> {
        if !self.is_enabled() {
            return None;
        }

        let entry = self.entries.get(key)?;
        if entry.stored_at.elapsed() >= self.ttl {
            drop(entry); // Release read lock
            self.entries.remove(key);
            debug!("Cached response for {} is stale", key);
            return None;
        }

        Some(entry.body.clone())
    }

    pub fn insert(&self, key: String, body: String) {
        if !self.is_enabled() {
            return;
        }
        self.entries.insert(key, CachedBody { body, stored_at: Instant::now() });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns number of entries removed
    pub fn cleanup_expired(&self) -> usize {
        let ttl = self.ttl;
        let before = self.entries.len();
        self.entries.retain(|_, cached| cached.stored_at.elapsed() < ttl);
        before.saturating_sub(self.entries.len())
    }
}
