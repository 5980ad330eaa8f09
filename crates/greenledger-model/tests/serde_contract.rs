// SPDX-License-Identifier: Apache-2.0

use greenledger_model::{
    CalculationMetadata, CalculationResult, DataQuality, EmissionFactor, GwpVersion, Scope,
    CO2E_UNIT,
};

fn sample_result() -> CalculationResult {
    CalculationResult {
        co2e: 254.6,
        unit: CO2E_UNIT.to_string(),
        scope: Scope::Scope1,
        source_type: "stationary-combustion".to_string(),
        activity_type: "diesel".to_string(),
        activity_value: 100.0,
        activity_unit: "litre".to_string(),
        emission_factor: 2.546,
        emission_factor_unit: "kgCO2e/litre".to_string(),
        emission_factor_source: "DEFRA 2025".to_string(),
        emission_factor_year: Some(2025),
        metadata: CalculationMetadata::new(
            "100 × 2.546 = 254.600 kgCO2e",
            DataQuality::Medium,
            "compiled default factor",
        ),
    }
}

#[test]
fn scope_serializes_to_ghg_protocol_labels() {
    assert_eq!(serde_json::to_string(&Scope::Scope1).unwrap(), "\"scope1\"");
    assert_eq!(serde_json::to_string(&Scope::Scope3).unwrap(), "\"scope3\"");
}

#[test]
fn gwp_version_serializes_to_assessment_report_labels() {
    assert_eq!(serde_json::to_string(&GwpVersion::Ar5).unwrap(), "\"AR5\"");
    let back: GwpVersion = serde_json::from_str("\"AR6\"").unwrap();
    assert_eq!(back, GwpVersion::Ar6);
}

#[test]
fn calculation_result_is_directly_json_serializable() {
    let value = serde_json::to_value(sample_result()).unwrap();
    assert_eq!(value["co2e"], 254.6);
    assert_eq!(value["unit"], "kgCO2e");
    assert_eq!(value["scope"], "scope1");
    assert_eq!(value["metadata"]["data_quality"], "medium");
    assert_eq!(value["metadata"]["calculation"], "100 × 2.546 = 254.600 kgCO2e");
    // Unset metadata extras stay out of the serialized form.
    assert!(value["metadata"].get("biofuel_blend").is_none());
    assert!(value["metadata"].get("method").is_none());
}

#[test]
fn calculation_result_roundtrips() {
    let original = sample_result();
    let raw = serde_json::to_string(&original).unwrap();
    let back: CalculationResult = serde_json::from_str(&raw).unwrap();
    assert_eq!(back, original);
}

#[test]
fn emission_factor_rejects_unknown_fields() {
    let raw = r#"{
        "category": "fuels", "subtype": "diesel", "factor": 2.546,
        "unit": "kgCO2e/litre", "scope": "scope1", "source": "DEFRA 2025",
        "year": 2025, "data_quality": "high", "surprise": true
    }"#;
    assert!(serde_json::from_str::<EmissionFactor>(raw).is_err());
}
