// SPDX-License-Identifier: Apache-2.0

use greenledger_calc::{EmissionsCalculator, WaterInput};
use greenledger_factors::{FactorResolver, ResolverConfig};
use greenledger_model::{round_co2e, DataQuality};
use std::sync::Arc;

const SUPPLY: f64 = 0.149;
const TREATMENT: f64 = 0.272;

fn calculator() -> EmissionsCalculator {
    EmissionsCalculator::new(Arc::new(FactorResolver::new(ResolverConfig::default())))
}

#[tokio::test]
async fn supply_only_excludes_the_treatment_factor() {
    let result = calculator()
        .water(&WaterInput {
            volume: Some(10.0),
            include_wastewater: Some(false),
        })
        .await
        .unwrap();

    assert_eq!(result.co2e, round_co2e(10.0 * SUPPLY));
    assert_eq!(result.activity_type, "supply");
    assert_eq!(result.metadata.includes_wastewater, Some(false));
    assert_eq!(result.metadata.calculation, "10 × 0.149 = 1.490 kgCO2e");
}

#[tokio::test]
async fn wastewater_default_adds_exactly_the_treatment_term() {
    let calc = calculator();
    let with = calc
        .water(&WaterInput {
            volume: Some(10.0),
            include_wastewater: None,
        })
        .await
        .unwrap();
    let without = calc
        .water(&WaterInput {
            volume: Some(10.0),
            include_wastewater: Some(false),
        })
        .await
        .unwrap();

    assert_eq!(with.co2e, round_co2e(10.0 * SUPPLY + 10.0 * TREATMENT));
    assert_eq!(
        round_co2e(with.co2e - without.co2e),
        round_co2e(10.0 * TREATMENT)
    );
    assert_eq!(with.metadata.includes_wastewater, Some(true));
    assert_eq!(
        with.metadata.calculation,
        "10 × 0.149 + 10 × 0.272 = 4.210 kgCO2e"
    );
}

#[tokio::test]
async fn combined_water_result_is_always_medium_quality() {
    let result = calculator()
        .water(&WaterInput {
            volume: Some(1.0),
            include_wastewater: Some(true),
        })
        .await
        .unwrap();
    assert_eq!(result.metadata.data_quality, DataQuality::Medium);
    assert_eq!(result.emission_factor, SUPPLY + TREATMENT);
}

#[tokio::test]
async fn missing_volume_is_a_validation_error() {
    let err = calculator()
        .water(&WaterInput {
            volume: None,
            include_wastewater: None,
        })
        .await
        .unwrap_err();
    assert_eq!(err.message, "volume is required");
}
