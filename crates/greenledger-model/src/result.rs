// SPDX-License-Identifier: Apache-2.0

use crate::taxonomy::{DataQuality, Scope, Scope2Method};
use serde::{Deserialize, Serialize};

pub const CO2E_UNIT: &str = "kgCO2e";

/// CO2e values are reported to three decimal places.
#[must_use]
pub fn round_co2e(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Provenance and audit metadata attached to every calculation. The
/// `calculation` string reconstructs the arithmetic performed, e.g.
/// `"100 × 2.546 = 254.600 kgCO2e"`, so results can be audited by string
/// inspection as well as numeric comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct CalculationMetadata {
    pub calculation: String,
    pub data_quality: DataQuality,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub biofuel_blend: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gwp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<Scope2Method>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fuel_used: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub includes_wastewater: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certificate_applied: Option<bool>,
}

impl CalculationMetadata {
    #[must_use]
    pub fn new(
        calculation: impl Into<String>,
        data_quality: DataQuality,
        description: impl Into<String>,
    ) -> Self {
        Self {
            calculation: calculation.into(),
            data_quality,
            description: description.into(),
            biofuel_blend: None,
            gwp: None,
            method: None,
            fuel_used: None,
            includes_wastewater: None,
            certificate_applied: None,
        }
    }
}

/// Output of every calculator operation. Constructed fresh per call; the
/// caller decides whether and how to persist it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub co2e: f64,
    pub unit: String,
    pub scope: Scope,
    pub source_type: String,
    pub activity_type: String,
    pub activity_value: f64,
    pub activity_unit: String,
    pub emission_factor: f64,
    pub emission_factor_unit: String,
    pub emission_factor_source: String,
    #[serde(default)]
    pub emission_factor_year: Option<i32>,
    pub metadata: CalculationMetadata,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounding_is_to_three_decimal_places() {
        assert_eq!(round_co2e(254.5999999), 254.6);
        assert_eq!(round_co2e(0.0005), 0.001);
        assert_eq!(round_co2e(0.0004), 0.0);
        assert_eq!(round_co2e(0.0), 0.0);
    }

    #[test]
    fn rounding_is_idempotent() {
        for v in [0.1234, 17.0999999, 446.242, 1e9 + 0.00049] {
            let once = round_co2e(v);
            assert_eq!(round_co2e(once), once);
        }
    }
}
