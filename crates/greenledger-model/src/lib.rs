#![forbid(unsafe_code)]
//! Emissions domain model SSOT.
//!
//! ```compile_fail
//! use greenledger_model::Scope;
//!
//! fn exhaustive_match(s: Scope) -> &'static str {
//!     match s {
//!         Scope::Scope1 => "1",
//!         Scope::Scope2 => "2",
//!         Scope::Scope3 => "3",
//!     }
//! }
//! ```

mod factor;
mod result;
mod taxonomy;
mod validate;

pub use factor::EmissionFactor;
pub use result::{round_co2e, CalculationMetadata, CalculationResult, CO2E_UNIT};
pub use taxonomy::{
    normalize_refrigerant, normalize_region, DataQuality, FlightClass, FuelType, GwpVersion,
    Scope, Scope2Method, VehicleType, WasteType,
};
pub use validate::{optional_percentage, require_non_negative, ValidationError};

pub const CRATE_NAME: &str = "greenledger-model";
