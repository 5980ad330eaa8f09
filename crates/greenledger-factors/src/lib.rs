#![forbid(unsafe_code)]
//! Emission factor resolution.
//!
//! Given `(category, subtype, region)` the [`FactorResolver`] returns the
//! best available [`greenledger_model::EmissionFactor`] by walking an
//! explicit ordered chain of tiers: in-memory TTL cache, persistent
//! [`FactorStore`], compiled-in defaults, and an electricity region alias.
//! Store failures degrade to the defaults tier instead of failing the
//! calculation.

mod cache;
mod defaults;
mod resolver;
mod store;

pub use cache::{FactorCache, NoopFactorCache, TtlFactorCache, DEFAULT_CACHE_TTL};
pub use defaults::{builtin_defaults, DefaultEntry, DefaultFactorTable};
pub use resolver::{FactorKey, FactorResolver, ResolveStrategy, ResolverConfig};
pub use store::{FactorStore, InMemoryFactorStore, StoreError, StoreErrorCode, StoredFactor};

pub const CRATE_NAME: &str = "greenledger-factors";
