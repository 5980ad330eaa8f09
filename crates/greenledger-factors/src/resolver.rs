// SPDX-License-Identifier: Apache-2.0

use crate::cache::{FactorCache, TtlFactorCache, DEFAULT_CACHE_TTL};
use crate::defaults::{builtin_defaults, DefaultFactorTable};
use crate::store::FactorStore;
use async_trait::async_trait;
use greenledger_model::{DataQuality, EmissionFactor};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Lookup key for one factor resolution.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FactorKey {
    pub category: String,
    pub subtype: String,
    pub region: Option<String>,
}

impl FactorKey {
    #[must_use]
    pub fn new(
        category: impl Into<String>,
        subtype: impl Into<String>,
        region: Option<String>,
    ) -> Self {
        Self {
            category: category.into(),
            subtype: subtype.into(),
            region,
        }
    }

    #[must_use]
    pub fn cache_key(&self) -> String {
        format!(
            "{}:{}:{}",
            self.category,
            self.subtype,
            self.region.as_deref().unwrap_or("default")
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverConfig {
    pub default_region: String,
    pub cache_ttl: Duration,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            default_region: "uk".to_string(),
            cache_ttl: DEFAULT_CACHE_TTL,
        }
    }
}

/// One tier of the resolution chain. Tiers are executed in order; the first
/// hit wins and later tiers are not consulted.
#[async_trait]
pub trait ResolveStrategy: Send + Sync {
    fn tier(&self) -> &'static str;
    async fn try_resolve(&self, key: &FactorKey) -> Option<EmissionFactor>;
}

struct CacheTier {
    cache: Arc<dyn FactorCache>,
}

#[async_trait]
impl ResolveStrategy for CacheTier {
    fn tier(&self) -> &'static str {
        "cache"
    }

    async fn try_resolve(&self, key: &FactorKey) -> Option<EmissionFactor> {
        self.cache.get(&key.cache_key())
    }
}

struct StoreTier {
    store: Arc<dyn FactorStore>,
    default_region: String,
}

#[async_trait]
impl ResolveStrategy for StoreTier {
    fn tier(&self) -> &'static str {
        "store"
    }

    async fn try_resolve(&self, key: &FactorKey) -> Option<EmissionFactor> {
        let region = key.region.as_deref().unwrap_or(&self.default_region);
        let stored = match self
            .store
            .current_factor(&key.category, &key.subtype, region)
            .await
        {
            Ok(stored) => stored?,
            Err(err) => {
                // Graceful degradation: an unreachable factor store must not
                // hard-fail a calculation while a default can still answer.
                warn!(
                    category = %key.category,
                    subtype = %key.subtype,
                    region = %region,
                    error = %err,
                    "factor store lookup failed; falling through to defaults"
                );
                return None;
            }
        };
        let factor = stored.factor?;
        let record = EmissionFactor::new(
            key.category.clone(),
            key.subtype.clone(),
            factor,
            stored.unit,
            stored.scope,
            stored.source,
            stored.version.parse::<i32>().ok(),
            DataQuality::High,
        )
        .with_gwp_version(stored.gwp_version)
        .with_region(Some(region.to_string()));
        record.validate().ok()?;
        Some(record)
    }
}

struct DefaultsTier {
    table: &'static DefaultFactorTable,
}

#[async_trait]
impl ResolveStrategy for DefaultsTier {
    fn tier(&self) -> &'static str {
        "defaults"
    }

    async fn try_resolve(&self, key: &FactorKey) -> Option<EmissionFactor> {
        self.table
            .to_record(&key.category, &key.subtype, key.region.as_deref())
    }
}

/// Electricity defaults are keyed by region name; lookups arriving with a
/// store-taxonomy subtype ("grid", "grid-average", ...) plus a region retry
/// against the region key itself.
struct ElectricityRegionAliasTier {
    table: &'static DefaultFactorTable,
}

#[async_trait]
impl ResolveStrategy for ElectricityRegionAliasTier {
    fn tier(&self) -> &'static str {
        "electricity-region-alias"
    }

    async fn try_resolve(&self, key: &FactorKey) -> Option<EmissionFactor> {
        if key.category != "electricity" {
            return None;
        }
        let region = key.region.as_deref()?;
        self.table
            .to_record("electricity", region, Some(region))
    }
}

/// Walks the tier chain (cache → store → defaults → electricity region
/// alias) and caches hits from every tier below the cache. Returns `None`
/// when no tier matches; callers must treat that as an unknown factor and
/// fail the calculation rather than use zero.
pub struct FactorResolver {
    config: ResolverConfig,
    cache: Arc<dyn FactorCache>,
    store: Option<Arc<dyn FactorStore>>,
    strategies: Vec<Arc<dyn ResolveStrategy>>,
}

impl FactorResolver {
    #[must_use]
    pub fn new(config: ResolverConfig) -> Self {
        let mut resolver = Self {
            config,
            cache: Arc::new(TtlFactorCache::new()),
            store: None,
            strategies: Vec::new(),
        };
        resolver.rebuild_chain();
        resolver
    }

    #[must_use]
    pub fn with_store(mut self, store: Arc<dyn FactorStore>) -> Self {
        self.store = Some(store);
        self.rebuild_chain();
        self
    }

    #[must_use]
    pub fn with_cache(mut self, cache: Arc<dyn FactorCache>) -> Self {
        self.cache = cache;
        self.rebuild_chain();
        self
    }

    fn rebuild_chain(&mut self) {
        let table = builtin_defaults();
        let mut strategies: Vec<Arc<dyn ResolveStrategy>> = vec![Arc::new(CacheTier {
            cache: Arc::clone(&self.cache),
        })];
        if let Some(store) = &self.store {
            strategies.push(Arc::new(StoreTier {
                store: Arc::clone(store),
                default_region: self.config.default_region.clone(),
            }));
        }
        strategies.push(Arc::new(DefaultsTier { table }));
        strategies.push(Arc::new(ElectricityRegionAliasTier { table }));
        self.strategies = strategies;
    }

    /// Tier names in execution order; the precedence contract is part of the
    /// public behavior and is asserted by tests.
    #[must_use]
    pub fn tier_order(&self) -> Vec<&'static str> {
        self.strategies.iter().map(|s| s.tier()).collect()
    }

    pub async fn resolve(&self, key: &FactorKey) -> Option<EmissionFactor> {
        let cache_key = key.cache_key();
        for strategy in &self.strategies {
            if let Some(record) = strategy.try_resolve(key).await {
                if strategy.tier() != "cache" {
                    self.cache
                        .set(&cache_key, record.clone(), self.config.cache_ttl);
                }
                debug!(tier = strategy.tier(), key = %cache_key, "factor resolved");
                return Some(record);
            }
        }
        debug!(key = %cache_key, "no factor found in any tier");
        None
    }

    /// Wipes the whole cache; used after factor-table updates. There is no
    /// selective invalidation.
    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    #[must_use]
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cache_key_defaults_region_segment() {
        let unkeyed = FactorKey::new("fuels", "diesel", None);
        assert_eq!(unkeyed.cache_key(), "fuels:diesel:default");
        let keyed = FactorKey::new("electricity", "grid", Some("eu".to_string()));
        assert_eq!(keyed.cache_key(), "electricity:grid:eu");
    }

    #[test]
    fn tier_order_is_cache_store_defaults_alias() {
        let plain = FactorResolver::new(ResolverConfig::default());
        assert_eq!(
            plain.tier_order(),
            vec!["cache", "defaults", "electricity-region-alias"]
        );
        let with_store = FactorResolver::new(ResolverConfig::default())
            .with_store(Arc::new(crate::store::InMemoryFactorStore::new()));
        assert_eq!(
            with_store.tier_order(),
            vec!["cache", "store", "defaults", "electricity-region-alias"]
        );
    }
}
