// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;
use greenledger_model::{GwpVersion, Scope};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::{Display, Formatter};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum StoreErrorCode {
    NotFound,
    Validation,
    Network,
    Io,
    Internal,
}

impl StoreErrorCode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotFound => "not_found",
            Self::Validation => "validation_error",
            Self::Network => "network_error",
            Self::Io => "io_error",
            Self::Internal => "internal_error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreError {
    pub code: StoreErrorCode,
    pub message: String,
}

impl StoreError {
    #[must_use]
    pub fn new(code: StoreErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code.as_str(), self.message)
    }
}

impl std::error::Error for StoreError {}

/// Row shape returned by a persistent factor store. `version` is the factor
/// table vintage as a string convertible to an integer year. A `None` factor
/// value means the row is unusable and resolution falls through.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StoredFactor {
    pub factor: Option<f64>,
    pub unit: String,
    pub source: String,
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gwp_version: Option<GwpVersion>,
    pub scope: Scope,
}

/// Persistent factor store collaborator. The store applies its own
/// currently-valid selection (highest version inside the validity window);
/// the resolver trusts that and only checks the factor value is present.
#[async_trait]
pub trait FactorStore: Send + Sync {
    async fn current_factor(
        &self,
        category: &str,
        subtype: &str,
        region: &str,
    ) -> Result<Option<StoredFactor>, StoreError>;
}

/// Map-backed store used for seeding small deployments and as the test
/// double: lookups are counted and failures can be injected.
pub struct InMemoryFactorStore {
    entries: Mutex<HashMap<(String, String, String), StoredFactor>>,
    lookup_calls: AtomicU64,
    fail_with: Mutex<Option<StoreError>>,
}

impl Default for InMemoryFactorStore {
    fn default() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            lookup_calls: AtomicU64::new(0),
            fail_with: Mutex::new(None),
        }
    }
}

impl InMemoryFactorStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, category: &str, subtype: &str, region: &str, factor: StoredFactor) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(
                (
                    category.to_string(),
                    subtype.to_string(),
                    region.to_string(),
                ),
                factor,
            );
        }
    }

    /// Makes every subsequent lookup fail with `error` until cleared with
    /// `None`.
    pub fn fail_with(&self, error: Option<StoreError>) {
        if let Ok(mut slot) = self.fail_with.lock() {
            *slot = error;
        }
    }

    #[must_use]
    pub fn lookup_count(&self) -> u64 {
        self.lookup_calls.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl FactorStore for InMemoryFactorStore {
    async fn current_factor(
        &self,
        category: &str,
        subtype: &str,
        region: &str,
    ) -> Result<Option<StoredFactor>, StoreError> {
        self.lookup_calls.fetch_add(1, Ordering::Relaxed);
        if let Ok(slot) = self.fail_with.lock() {
            if let Some(err) = slot.clone() {
                return Err(err);
            }
        }
        let entries = self
            .entries
            .lock()
            .map_err(|_| StoreError::new(StoreErrorCode::Internal, "store mutex poisoned"))?;
        Ok(entries
            .get(&(
                category.to_string(),
                subtype.to_string(),
                region.to_string(),
            ))
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored_diesel() -> StoredFactor {
        StoredFactor {
            factor: Some(2.51),
            unit: "kgCO2e/litre".to_string(),
            source: "DEFRA 2024".to_string(),
            version: "2024".to_string(),
            gwp_version: None,
            scope: Scope::Scope1,
        }
    }

    #[tokio::test]
    async fn in_memory_store_counts_lookups() {
        let store = InMemoryFactorStore::new();
        store.insert("fuels", "diesel", "uk", stored_diesel());
        let hit = store.current_factor("fuels", "diesel", "uk").await.unwrap();
        assert_eq!(hit.unwrap().factor, Some(2.51));
        let miss = store.current_factor("fuels", "biogas", "uk").await.unwrap();
        assert!(miss.is_none());
        assert_eq!(store.lookup_count(), 2);
    }

    #[tokio::test]
    async fn injected_failures_surface_as_store_errors() {
        let store = InMemoryFactorStore::new();
        store.fail_with(Some(StoreError::new(
            StoreErrorCode::Network,
            "connection refused",
        )));
        let err = store
            .current_factor("fuels", "diesel", "uk")
            .await
            .unwrap_err();
        assert_eq!(err.code, StoreErrorCode::Network);
        store.fail_with(None);
        assert!(store
            .current_factor("fuels", "diesel", "uk")
            .await
            .is_ok());
    }
}
