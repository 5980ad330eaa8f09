// SPDX-License-Identifier: Apache-2.0

use crate::error::CalcError;
use greenledger_factors::{FactorKey, FactorResolver};
use greenledger_model::EmissionFactor;
use std::sync::Arc;

/// Calculator over a shared resolver. Stateless apart from the resolver's
/// cache; safe to share across concurrent requests.
pub struct EmissionsCalculator {
    resolver: Arc<FactorResolver>,
}

impl EmissionsCalculator {
    #[must_use]
    pub fn new(resolver: Arc<FactorResolver>) -> Self {
        Self { resolver }
    }

    #[must_use]
    pub fn resolver(&self) -> &FactorResolver {
        &self.resolver
    }

    pub(crate) async fn resolve_required(
        &self,
        key: &FactorKey,
    ) -> Result<EmissionFactor, CalcError> {
        self.resolver
            .resolve(key)
            .await
            .ok_or_else(|| CalcError::unknown_factor(&key.category, &key.subtype))
    }
}

/// Numbers in audit strings: fixed six decimals, trailing zeros trimmed, so
/// float noise like `2.2914000000000003` prints as `2.2914`.
pub(crate) fn fmt_num(value: f64) -> String {
    let fixed = format!("{value:.6}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    if trimmed.is_empty() {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// `"100 × 2.546 = 254.600 kgCO2e"`
pub(crate) fn simple_calculation(value: f64, factor: f64, co2e: f64) -> String {
    format!("{} × {} = {co2e:.3} kgCO2e", fmt_num(value), fmt_num(factor))
}

/// Activity unit derived from the factor unit, e.g. `kgCO2e/litre → litre`.
pub(crate) fn activity_unit_of(factor_unit: &str) -> String {
    factor_unit
        .split('/')
        .nth(1)
        .unwrap_or("unit")
        .to_string()
}

pub(crate) fn provenance(record: &EmissionFactor) -> String {
    match record.year {
        Some(year) => format!("Emission factor from {} ({year})", record.source),
        None => format!("Emission factor from {}", record.source),
    }
}
