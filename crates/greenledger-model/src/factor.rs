// SPDX-License-Identifier: Apache-2.0

use crate::taxonomy::{DataQuality, GwpVersion, Scope};
use crate::validate::ValidationError;
use serde::{Deserialize, Serialize};

/// One emission factor at a point in time. Created by an external seeding or
/// admin process; read-only inside the calculation core. Cached copies expire
/// on the cache's TTL independent of the record's own validity window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
#[non_exhaustive]
pub struct EmissionFactor {
    pub category: String,
    pub subtype: String,
    pub factor: f64,
    pub unit: String,
    pub scope: Scope,
    pub source: String,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gwp_version: Option<GwpVersion>,
    pub data_quality: DataQuality,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

impl EmissionFactor {
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub fn new(
        category: impl Into<String>,
        subtype: impl Into<String>,
        factor: f64,
        unit: impl Into<String>,
        scope: Scope,
        source: impl Into<String>,
        year: Option<i32>,
        data_quality: DataQuality,
    ) -> Self {
        Self {
            category: category.into(),
            subtype: subtype.into(),
            factor,
            unit: unit.into(),
            scope,
            source: source.into(),
            year,
            gwp_version: None,
            data_quality,
            region: None,
        }
    }

    #[must_use]
    pub fn with_gwp_version(mut self, gwp_version: Option<GwpVersion>) -> Self {
        self.gwp_version = gwp_version;
        self
    }

    #[must_use]
    pub fn with_region(mut self, region: Option<String>) -> Self {
        self.region = region;
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.category.is_empty() || self.subtype.is_empty() {
            return Err(ValidationError(
                "emission factor category and subtype must not be empty".to_string(),
            ));
        }
        if !self.factor.is_finite() {
            return Err(ValidationError(
                "emission factor value must be finite".to_string(),
            ));
        }
        if self.factor < 0.0 {
            return Err(ValidationError(
                "emission factor value must not be negative".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diesel() -> EmissionFactor {
        EmissionFactor::new(
            "fuels",
            "diesel",
            2.546,
            "kgCO2e/litre",
            Scope::Scope1,
            "DEFRA 2025",
            Some(2025),
            DataQuality::High,
        )
    }

    #[test]
    fn validate_accepts_well_formed_records() {
        assert!(diesel().validate().is_ok());
    }

    #[test]
    fn validate_rejects_negative_and_non_finite_factors() {
        let mut bad = diesel();
        bad.factor = -0.1;
        assert!(bad.validate().is_err());
        bad.factor = f64::NAN;
        assert!(bad.validate().is_err());
    }
}
