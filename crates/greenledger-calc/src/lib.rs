#![forbid(unsafe_code)]
//! GHG Protocol emissions calculators.
//!
//! One operation per emission source type, each following the same shape:
//! validate inputs, resolve a factor through the tiered
//! [`greenledger_factors::FactorResolver`], multiply, and return a
//! [`greenledger_model::CalculationResult`] carrying full calculation
//! provenance. Operations are single-shot and side-effect-free apart from
//! cache population and log lines.

mod calculator;
mod error;
mod inputs;
mod scope1;
mod scope2;
mod scope3;

pub use calculator::EmissionsCalculator;
pub use error::{CalcError, CalcErrorCode};
pub use inputs::{
    AccommodationInput, AirTravelInput, FugitiveRefrigerantInput, MobileCombustionInput,
    PurchasedElectricityInput, RoadTransportInput, StationaryCombustionInput, SupplierCertificate,
    WasteInput, WaterInput,
};

pub const CRATE_NAME: &str = "greenledger-calc";
