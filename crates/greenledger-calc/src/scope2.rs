// SPDX-License-Identifier: Apache-2.0

//! Scope 2: purchased electricity, with the GHG Protocol's location-based
//! and market-based accounting methods.

use crate::calculator::{provenance, simple_calculation, EmissionsCalculator};
use crate::error::CalcError;
use crate::inputs::{PurchasedElectricityInput, SupplierCertificate};
use greenledger_factors::FactorKey;
use greenledger_model::{
    normalize_region, require_non_negative, round_co2e, CalculationMetadata, CalculationResult,
    DataQuality, Scope, Scope2Method, CO2E_UNIT,
};
use tracing::warn;

const DEFAULT_REGION: &str = "uk";

fn usable_certificate(certificate: Option<&SupplierCertificate>) -> Option<f64> {
    let cert = certificate?;
    if !cert.valid || !cert.retired {
        return None;
    }
    cert.factor.filter(|f| f.is_finite() && *f >= 0.0)
}

impl EmissionsCalculator {
    /// Grid electricity consumption. Market method uses a supplier
    /// certificate factor when one is valid and retired; otherwise it falls
    /// back to the region's residual grid mix with a logged warning.
    pub async fn purchased_electricity(
        &self,
        input: &PurchasedElectricityInput,
    ) -> Result<CalculationResult, CalcError> {
        let consumption = require_non_negative("consumption", input.consumption)?;
        let region = {
            let normalized = normalize_region(input.region.as_deref().unwrap_or(DEFAULT_REGION));
            if normalized.is_empty() {
                DEFAULT_REGION.to_string()
            } else {
                normalized
            }
        };

        if input.method == Scope2Method::Market {
            if let Some(factor) = usable_certificate(input.supplier_certificate.as_ref()) {
                let co2e = round_co2e(consumption * factor);
                let mut metadata = CalculationMetadata::new(
                    simple_calculation(consumption, factor, co2e),
                    DataQuality::High,
                    "Supplier-specific factor from a retired certificate",
                );
                metadata.method = Some(Scope2Method::Market);
                metadata.certificate_applied = Some(true);
                return Ok(CalculationResult {
                    co2e,
                    unit: CO2E_UNIT.to_string(),
                    scope: Scope::Scope2,
                    source_type: "purchased-electricity".to_string(),
                    activity_type: region,
                    activity_value: consumption,
                    activity_unit: "kWh".to_string(),
                    emission_factor: factor,
                    emission_factor_unit: "kgCO2e/kWh".to_string(),
                    emission_factor_source: "supplier certificate".to_string(),
                    emission_factor_year: None,
                    metadata,
                });
            }
            warn!(
                region = %region,
                "market-based electricity calculation using residual grid mix; no valid supplier certificate"
            );
        }

        let key = FactorKey::new("electricity", region.clone(), Some(region.clone()));
        let record = self.resolve_required(&key).await?;
        let co2e = round_co2e(consumption * record.factor);

        let mut metadata = CalculationMetadata::new(
            simple_calculation(consumption, record.factor, co2e),
            record.data_quality,
            provenance(&record),
        );
        metadata.method = Some(input.method);
        if input.method == Scope2Method::Market {
            metadata.certificate_applied = Some(false);
        }

        Ok(CalculationResult {
            co2e,
            unit: CO2E_UNIT.to_string(),
            scope: record.scope,
            source_type: "purchased-electricity".to_string(),
            activity_type: region,
            activity_value: consumption,
            activity_unit: "kWh".to_string(),
            emission_factor: record.factor,
            emission_factor_unit: record.unit,
            emission_factor_source: record.source,
            emission_factor_year: record.year,
            metadata,
        })
    }
}
