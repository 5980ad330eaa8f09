// SPDX-License-Identifier: Apache-2.0

//! Scope 3 (value chain) sources: road transport, air travel, hotel stays,
//! waste disposal, and water supply/treatment.

use crate::calculator::{
    activity_unit_of, fmt_num, provenance, simple_calculation, EmissionsCalculator,
};
use crate::error::CalcError;
use crate::inputs::{
    AccommodationInput, AirTravelInput, RoadTransportInput, WasteInput, WaterInput,
};
use greenledger_factors::FactorKey;
use greenledger_model::{
    require_non_negative, round_co2e, CalculationMetadata, CalculationResult, DataQuality,
    CO2E_UNIT,
};

impl EmissionsCalculator {
    pub async fn road_transport(
        &self,
        input: &RoadTransportInput,
    ) -> Result<CalculationResult, CalcError> {
        let distance = require_non_negative("distance", input.distance)?;
        let key = FactorKey::new("vehicles", input.vehicle_type.as_key(), None);
        let record = self.resolve_required(&key).await?;
        let co2e = round_co2e(distance * record.factor);

        Ok(CalculationResult {
            co2e,
            unit: CO2E_UNIT.to_string(),
            scope: record.scope,
            source_type: "road-transport".to_string(),
            activity_type: input.vehicle_type.as_key().to_string(),
            activity_value: distance,
            activity_unit: activity_unit_of(&record.unit),
            emission_factor: record.factor,
            emission_factor_unit: record.unit.clone(),
            emission_factor_source: record.source.clone(),
            emission_factor_year: record.year,
            metadata: CalculationMetadata::new(
                simple_calculation(distance, record.factor, co2e),
                record.data_quality,
                provenance(&record),
            ),
        })
    }

    pub async fn air_travel(
        &self,
        input: &AirTravelInput,
    ) -> Result<CalculationResult, CalcError> {
        let distance = require_non_negative("distance", input.distance)?;
        let key = FactorKey::new("flights", input.flight_class.as_key(), None);
        let record = self.resolve_required(&key).await?;
        let co2e = round_co2e(distance * record.factor);

        Ok(CalculationResult {
            co2e,
            unit: CO2E_UNIT.to_string(),
            scope: record.scope,
            source_type: "air-travel".to_string(),
            activity_type: input.flight_class.as_key().to_string(),
            activity_value: distance,
            activity_unit: activity_unit_of(&record.unit),
            emission_factor: record.factor,
            emission_factor_unit: record.unit.clone(),
            emission_factor_source: record.source.clone(),
            emission_factor_year: record.year,
            metadata: CalculationMetadata::new(
                simple_calculation(distance, record.factor, co2e),
                record.data_quality,
                provenance(&record),
            ),
        })
    }

    /// Hotel stays, against a single fixed room-night factor.
    pub async fn accommodation(
        &self,
        input: &AccommodationInput,
    ) -> Result<CalculationResult, CalcError> {
        let nights = require_non_negative("nights", input.nights)?;
        let key = FactorKey::new("accommodation", "hotel-night", None);
        let record = self.resolve_required(&key).await?;
        let co2e = round_co2e(nights * record.factor);

        Ok(CalculationResult {
            co2e,
            unit: CO2E_UNIT.to_string(),
            scope: record.scope,
            source_type: "accommodation".to_string(),
            activity_type: "hotel-night".to_string(),
            activity_value: nights,
            activity_unit: activity_unit_of(&record.unit),
            emission_factor: record.factor,
            emission_factor_unit: record.unit.clone(),
            emission_factor_source: record.source.clone(),
            emission_factor_year: record.year,
            metadata: CalculationMetadata::new(
                simple_calculation(nights, record.factor, co2e),
                record.data_quality,
                provenance(&record),
            ),
        })
    }

    /// Waste disposal. Weight arrives in kilograms and the factors are per
    /// tonne, so the derived quantity is `weight / 1000`.
    pub async fn waste(&self, input: &WasteInput) -> Result<CalculationResult, CalcError> {
        let weight = require_non_negative("weight", input.weight)?;
        let tonnes = weight / 1000.0;
        let key = FactorKey::new("waste", input.waste_type.as_key(), None);
        let record = self.resolve_required(&key).await?;
        let co2e = round_co2e(tonnes * record.factor);

        Ok(CalculationResult {
            co2e,
            unit: CO2E_UNIT.to_string(),
            scope: record.scope,
            source_type: "waste".to_string(),
            activity_type: input.waste_type.as_key().to_string(),
            activity_value: weight,
            activity_unit: "kg".to_string(),
            emission_factor: record.factor,
            emission_factor_unit: record.unit.clone(),
            emission_factor_source: record.source.clone(),
            emission_factor_year: record.year,
            metadata: CalculationMetadata::new(
                simple_calculation(tonnes, record.factor, co2e),
                record.data_quality,
                provenance(&record),
            ),
        })
    }

    /// Water use combines the supply factor with, by default, the
    /// wastewater treatment factor:
    /// `co2e = volume × supply + volume × treatment` (treatment term
    /// dropped when `include_wastewater` is false). The combined result is
    /// always tagged medium quality regardless of each component's tier; a
    /// per-component policy is an open product decision.
    pub async fn water(&self, input: &WaterInput) -> Result<CalculationResult, CalcError> {
        let volume = require_non_negative("volume", input.volume)?;
        let include_wastewater = input.include_wastewater.unwrap_or(true);

        let supply = self
            .resolve_required(&FactorKey::new("water", "supply", None))
            .await?;
        let treatment = if include_wastewater {
            Some(
                self.resolve_required(&FactorKey::new("water", "treatment", None))
                    .await?,
            )
        } else {
            None
        };

        let treatment_factor = treatment.as_ref().map_or(0.0, |t| t.factor);
        let effective = supply.factor + treatment_factor;
        let co2e = round_co2e(volume * supply.factor + volume * treatment_factor);

        let calculation = match &treatment {
            Some(t) => format!(
                "{} × {} + {} × {} = {co2e:.3} kgCO2e",
                fmt_num(volume),
                fmt_num(supply.factor),
                fmt_num(volume),
                fmt_num(t.factor)
            ),
            None => simple_calculation(volume, supply.factor, co2e),
        };
        let mut metadata =
            CalculationMetadata::new(calculation, DataQuality::Medium, provenance(&supply));
        metadata.includes_wastewater = Some(include_wastewater);

        Ok(CalculationResult {
            co2e,
            unit: CO2E_UNIT.to_string(),
            scope: supply.scope,
            source_type: "water".to_string(),
            activity_type: if include_wastewater {
                "supply-and-treatment".to_string()
            } else {
                "supply".to_string()
            },
            activity_value: volume,
            activity_unit: activity_unit_of(&supply.unit),
            emission_factor: effective,
            emission_factor_unit: supply.unit,
            emission_factor_source: supply.source,
            emission_factor_year: supply.year,
            metadata,
        })
    }
}
