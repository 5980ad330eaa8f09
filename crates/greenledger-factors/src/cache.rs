// SPDX-License-Identifier: Apache-2.0

use greenledger_model::EmissionFactor;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Resolved factors stay cached for five minutes.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(300);

/// Injectable cache seam for the resolver. Implementations must be safe to
/// share across concurrent resolutions; last-write-wins is acceptable because
/// concurrent writers for one key carry the same value.
pub trait FactorCache: Send + Sync {
    fn get(&self, key: &str) -> Option<EmissionFactor>;
    fn set(&self, key: &str, record: EmissionFactor, ttl: Duration);
    fn clear(&self);
}

struct CacheEntry {
    record: EmissionFactor,
    expires_at: Instant,
}

/// TTL map with lazy expiry: expired entries are treated as absent and
/// dropped on the next lookup. No background timers.
pub struct TtlFactorCache {
    entries: Mutex<HashMap<String, CacheEntry>>,
}

impl Default for TtlFactorCache {
    fn default() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }
}

impl TtlFactorCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or(0)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl FactorCache for TtlFactorCache {
    fn get(&self, key: &str) -> Option<EmissionFactor> {
        let mut entries = self.entries.lock().ok()?;
        let now = Instant::now();
        entries.retain(|_, entry| entry.expires_at > now);
        entries.get(key).map(|entry| entry.record.clone())
    }

    fn set(&self, key: &str, record: EmissionFactor, ttl: Duration) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(
                key.to_string(),
                CacheEntry {
                    record,
                    expires_at: Instant::now() + ttl,
                },
            );
        }
    }

    fn clear(&self) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.clear();
        }
    }
}

/// Disables caching entirely; used for deterministic resolver tests.
#[derive(Default)]
pub struct NoopFactorCache;

impl FactorCache for NoopFactorCache {
    fn get(&self, _key: &str) -> Option<EmissionFactor> {
        None
    }

    fn set(&self, _key: &str, _record: EmissionFactor, _ttl: Duration) {}

    fn clear(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use greenledger_model::{DataQuality, Scope};

    fn record() -> EmissionFactor {
        EmissionFactor::new(
            "fuels",
            "diesel",
            2.546,
            "kgCO2e/litre",
            Scope::Scope1,
            "DEFRA 2025",
            Some(2025),
            DataQuality::Medium,
        )
    }

    #[test]
    fn entries_survive_within_ttl() {
        let cache = TtlFactorCache::new();
        cache.set("fuels:diesel:default", record(), Duration::from_secs(60));
        assert_eq!(cache.get("fuels:diesel:default"), Some(record()));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn zero_ttl_entries_are_treated_as_absent_and_dropped() {
        let cache = TtlFactorCache::new();
        cache.set("fuels:diesel:default", record(), Duration::ZERO);
        assert!(cache.get("fuels:diesel:default").is_none());
        assert!(cache.is_empty());
    }

    #[test]
    fn clear_wipes_all_entries() {
        let cache = TtlFactorCache::new();
        cache.set("a", record(), Duration::from_secs(60));
        cache.set("b", record(), Duration::from_secs(60));
        cache.clear();
        assert!(cache.get("a").is_none());
        assert!(cache.get("b").is_none());
    }

    #[test]
    fn noop_cache_never_stores() {
        let cache = NoopFactorCache;
        cache.set("a", record(), Duration::from_secs(60));
        assert!(cache.get("a").is_none());
    }
}
