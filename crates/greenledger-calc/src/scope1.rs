// SPDX-License-Identifier: Apache-2.0

//! Scope 1 (direct) emission sources: stationary combustion, mobile
//! combustion, and fugitive refrigerant releases.

use crate::calculator::{
    activity_unit_of, provenance, simple_calculation, EmissionsCalculator,
};
use crate::error::CalcError;
use crate::inputs::{
    FugitiveRefrigerantInput, MobileCombustionInput, StationaryCombustionInput,
};
use greenledger_factors::FactorKey;
use greenledger_model::{
    normalize_refrigerant, optional_percentage, require_non_negative, round_co2e,
    CalculationMetadata, CalculationResult, CO2E_UNIT,
};

impl EmissionsCalculator {
    /// Fuel burned in fixed equipment. An optional biofuel blend percentage
    /// scales the fossil share: `effective = base × (1 − blend/100)`.
    pub async fn stationary_combustion(
        &self,
        input: &StationaryCombustionInput,
    ) -> Result<CalculationResult, CalcError> {
        let quantity = require_non_negative("quantity", input.quantity)?;
        let blend = optional_percentage("biofuel_blend", input.biofuel_blend)?;

        let key = FactorKey::new("fuels", input.fuel_type.as_key(), None);
        let record = self.resolve_required(&key).await?;
        let effective = record.factor * (1.0 - blend / 100.0);
        let co2e = round_co2e(quantity * effective);

        let mut metadata = CalculationMetadata::new(
            simple_calculation(quantity, effective, co2e),
            record.data_quality,
            provenance(&record),
        );
        metadata.biofuel_blend = Some(blend);

        Ok(CalculationResult {
            co2e,
            unit: CO2E_UNIT.to_string(),
            scope: record.scope,
            source_type: "stationary-combustion".to_string(),
            activity_type: input.fuel_type.as_key().to_string(),
            activity_value: quantity,
            activity_unit: activity_unit_of(&record.unit),
            emission_factor: effective,
            emission_factor_unit: record.unit,
            emission_factor_source: record.source,
            emission_factor_year: record.year,
            metadata,
        })
    }

    /// Fuel burned in vehicles the reporting company operates. Accepts
    /// either litres consumed directly, or a distance plus a consumption
    /// rate from which litres are derived.
    pub async fn mobile_combustion(
        &self,
        input: &MobileCombustionInput,
    ) -> Result<CalculationResult, CalcError> {
        let fuel_used = match input.fuel_used {
            Some(_) => require_non_negative("fuel_used", input.fuel_used)?,
            None => {
                let distance = require_non_negative("distance", input.distance)?;
                let rate = require_non_negative("fuel_consumption", input.fuel_consumption)?;
                distance * rate
            }
        };

        let key = FactorKey::new("fuels", input.fuel_type.as_key(), None);
        let record = self.resolve_required(&key).await?;
        let co2e = round_co2e(fuel_used * record.factor);

        let mut metadata = CalculationMetadata::new(
            simple_calculation(fuel_used, record.factor, co2e),
            record.data_quality,
            provenance(&record),
        );
        metadata.fuel_used = Some(fuel_used);

        Ok(CalculationResult {
            co2e,
            unit: CO2E_UNIT.to_string(),
            scope: record.scope,
            source_type: "mobile-combustion".to_string(),
            activity_type: input.fuel_type.as_key().to_string(),
            activity_value: fuel_used,
            activity_unit: activity_unit_of(&record.unit),
            emission_factor: record.factor,
            emission_factor_unit: record.unit,
            emission_factor_source: record.source,
            emission_factor_year: record.year,
            metadata,
        })
    }

    /// Refrigerant leakage converted by GWP. The GWP vintage is label
    /// metadata only: it never changes the numeric factor, and the record's
    /// own vintage wins over the caller's when both are present.
    pub async fn fugitive_refrigerant(
        &self,
        input: &FugitiveRefrigerantInput,
    ) -> Result<CalculationResult, CalcError> {
        let quantity = require_non_negative("quantity", input.quantity)?;
        let designation = normalize_refrigerant(&input.refrigerant_type);
        if designation.is_empty() {
            return Err(CalcError::validation("refrigerant_type is required"));
        }

        let key = FactorKey::new("refrigerants", designation.clone(), None);
        let record = self.resolve_required(&key).await?;
        let co2e = round_co2e(quantity * record.factor);

        let gwp_label = record
            .gwp_version
            .or(input.gwp_version)
            .unwrap_or_default();
        let mut metadata = CalculationMetadata::new(
            simple_calculation(quantity, record.factor, co2e),
            record.data_quality,
            provenance(&record),
        );
        metadata.gwp = Some(gwp_label.as_str().to_string());

        Ok(CalculationResult {
            co2e,
            unit: CO2E_UNIT.to_string(),
            scope: record.scope,
            source_type: "fugitive-emissions".to_string(),
            activity_type: designation,
            activity_value: quantity,
            activity_unit: activity_unit_of(&record.unit),
            emission_factor: record.factor,
            emission_factor_unit: record.unit,
            emission_factor_source: record.source,
            emission_factor_year: record.year,
            metadata,
        })
    }
}
