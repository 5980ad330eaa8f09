// SPDX-License-Identifier: Apache-2.0

//! Plain-data input objects, one per calculator operation. Numeric fields
//! are optional at the schema level so that missing values surface as named
//! `ValidationError`s instead of deserialization failures.

use greenledger_model::{FlightClass, FuelType, GwpVersion, Scope2Method, VehicleType, WasteType};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StationaryCombustionInput {
    pub fuel_type: FuelType,
    pub quantity: Option<f64>,
    /// Percentage 0..=100; absent means no biogenic share.
    #[serde(default)]
    pub biofuel_blend: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MobileCombustionInput {
    pub fuel_type: FuelType,
    /// Litres consumed. Either this, or both `distance` and
    /// `fuel_consumption`, must be provided.
    #[serde(default)]
    pub fuel_used: Option<f64>,
    #[serde(default)]
    pub distance: Option<f64>,
    /// Consumption rate per distance unit (litres/km).
    #[serde(default)]
    pub fuel_consumption: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FugitiveRefrigerantInput {
    /// Free-form designation; normalized before lookup ("R410A" → "r-410a").
    pub refrigerant_type: String,
    /// Kilograms of refrigerant leaked or recharged.
    pub quantity: Option<f64>,
    #[serde(default)]
    pub gwp_version: Option<GwpVersion>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SupplierCertificate {
    #[serde(default)]
    pub valid: bool,
    #[serde(default)]
    pub retired: bool,
    #[serde(default)]
    pub factor: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PurchasedElectricityInput {
    /// kWh consumed.
    pub consumption: Option<f64>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub method: Scope2Method,
    #[serde(default)]
    pub supplier_certificate: Option<SupplierCertificate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RoadTransportInput {
    pub vehicle_type: VehicleType,
    /// Kilometres travelled.
    pub distance: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AirTravelInput {
    pub flight_class: FlightClass,
    /// Kilometres flown.
    pub distance: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AccommodationInput {
    pub nights: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WasteInput {
    pub waste_type: WasteType,
    /// Kilograms; converted to tonnes before the per-tonne factor applies.
    pub weight: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WaterInput {
    /// Cubic metres.
    pub volume: Option<f64>,
    /// Include the treatment factor in addition to supply. Default true.
    #[serde(default)]
    pub include_wastewater: Option<bool>,
}
