// SPDX-License-Identifier: Apache-2.0

use crate::validate::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// GHG Protocol emission scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum Scope {
    Scope1,
    Scope2,
    Scope3,
}

impl Scope {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "scope1" => Ok(Self::Scope1),
            "scope2" => Ok(Self::Scope2),
            "scope3" => Ok(Self::Scope3),
            other => Err(ValidationError(format!(
                "scope must be one of scope1, scope2, scope3 (got '{other}')"
            ))),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Scope1 => "scope1",
            Self::Scope2 => "scope2",
            Self::Scope3 => "scope3",
        }
    }
}

impl Display for Scope {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Quality tag attached to a resolved factor: store-backed factors are
/// `High`, compiled-in defaults are `Medium`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum DataQuality {
    High,
    Medium,
}

impl DataQuality {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
        }
    }
}

/// IPCC assessment-report vintage for GWP values. Label metadata only: the
/// numeric factor does not change with the selected vintage. Known accuracy
/// gap carried over from the factor source; flagged for product review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum GwpVersion {
    #[serde(rename = "AR4")]
    Ar4,
    #[serde(rename = "AR5")]
    Ar5,
    #[serde(rename = "AR6")]
    Ar6,
}

impl GwpVersion {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        match raw.trim().to_ascii_uppercase().as_str() {
            "AR4" => Ok(Self::Ar4),
            "AR5" => Ok(Self::Ar5),
            "AR6" => Ok(Self::Ar6),
            other => Err(ValidationError(format!(
                "gwp_version must be one of AR4, AR5, AR6 (got '{other}')"
            ))),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ar4 => "AR4",
            Self::Ar5 => "AR5",
            Self::Ar6 => "AR6",
        }
    }
}

impl Default for GwpVersion {
    fn default() -> Self {
        Self::Ar5
    }
}

impl Display for GwpVersion {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scope 2 accounting method per the GHG Protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum Scope2Method {
    Location,
    Market,
}

impl Scope2Method {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "location" => Ok(Self::Location),
            "market" => Ok(Self::Market),
            other => Err(ValidationError(format!(
                "method must be 'location' or 'market' (got '{other}')"
            ))),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Location => "location",
            Self::Market => "market",
        }
    }
}

impl Default for Scope2Method {
    fn default() -> Self {
        Self::Location
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[non_exhaustive]
pub enum FuelType {
    Diesel,
    Petrol,
    NaturalGas,
    Lpg,
    HeatingOil,
    Coal,
    WoodPellets,
}

impl FuelType {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "diesel" => Ok(Self::Diesel),
            "petrol" => Ok(Self::Petrol),
            "natural-gas" => Ok(Self::NaturalGas),
            "lpg" => Ok(Self::Lpg),
            "heating-oil" => Ok(Self::HeatingOil),
            "coal" => Ok(Self::Coal),
            "wood-pellets" => Ok(Self::WoodPellets),
            other => Err(ValidationError(format!("unknown fuel type '{other}'"))),
        }
    }

    /// Lookup key in the factor taxonomy (`fuels` category).
    #[must_use]
    pub const fn as_key(self) -> &'static str {
        match self {
            Self::Diesel => "diesel",
            Self::Petrol => "petrol",
            Self::NaturalGas => "natural-gas",
            Self::Lpg => "lpg",
            Self::HeatingOil => "heating-oil",
            Self::Coal => "coal",
            Self::WoodPellets => "wood-pellets",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[non_exhaustive]
pub enum VehicleType {
    CarSmall,
    CarMedium,
    CarLarge,
    Van,
    Hgv,
    Motorbike,
}

impl VehicleType {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "car-small" => Ok(Self::CarSmall),
            "car-medium" => Ok(Self::CarMedium),
            "car-large" => Ok(Self::CarLarge),
            "van" => Ok(Self::Van),
            "hgv" => Ok(Self::Hgv),
            "motorbike" => Ok(Self::Motorbike),
            other => Err(ValidationError(format!("unknown vehicle type '{other}'"))),
        }
    }

    #[must_use]
    pub const fn as_key(self) -> &'static str {
        match self {
            Self::CarSmall => "car-small",
            Self::CarMedium => "car-medium",
            Self::CarLarge => "car-large",
            Self::Van => "van",
            Self::Hgv => "hgv",
            Self::Motorbike => "motorbike",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[non_exhaustive]
pub enum FlightClass {
    Domestic,
    ShortHaul,
    Economy,
    PremiumEconomy,
    Business,
    First,
}

impl FlightClass {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "domestic" => Ok(Self::Domestic),
            "short-haul" => Ok(Self::ShortHaul),
            "economy" => Ok(Self::Economy),
            "premium-economy" => Ok(Self::PremiumEconomy),
            "business" => Ok(Self::Business),
            "first" => Ok(Self::First),
            other => Err(ValidationError(format!("unknown flight class '{other}'"))),
        }
    }

    #[must_use]
    pub const fn as_key(self) -> &'static str {
        match self {
            Self::Domestic => "domestic",
            Self::ShortHaul => "short-haul",
            Self::Economy => "economy",
            Self::PremiumEconomy => "premium-economy",
            Self::Business => "business",
            Self::First => "first",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[non_exhaustive]
pub enum WasteType {
    Landfill,
    Recycling,
    Composting,
    Incineration,
    AnaerobicDigestion,
}

impl WasteType {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "landfill" => Ok(Self::Landfill),
            "recycling" => Ok(Self::Recycling),
            "composting" => Ok(Self::Composting),
            "incineration" => Ok(Self::Incineration),
            "anaerobic-digestion" => Ok(Self::AnaerobicDigestion),
            other => Err(ValidationError(format!("unknown waste type '{other}'"))),
        }
    }

    #[must_use]
    pub const fn as_key(self) -> &'static str {
        match self {
            Self::Landfill => "landfill",
            Self::Recycling => "recycling",
            Self::Composting => "composting",
            Self::Incineration => "incineration",
            Self::AnaerobicDigestion => "anaerobic-digestion",
        }
    }
}

/// Normalizes refrigerant designations to the taxonomy form: lowercase,
/// whitespace collapsed to hyphens, and ASHRAE "R" numbers given an explicit
/// hyphen, so `"R410A"`, `"r 410a"` and `"r-410a"` all resolve the same key.
#[must_use]
pub fn normalize_refrigerant(raw: &str) -> String {
    let lowered = raw.trim().to_ascii_lowercase();
    let hyphenated = lowered.split_whitespace().collect::<Vec<_>>().join("-");
    let mut chars = hyphenated.chars();
    match (chars.next(), chars.next()) {
        (Some('r'), Some(second)) if second.is_ascii_digit() => {
            format!("r-{}", &hyphenated[1..])
        }
        _ => hyphenated,
    }
}

/// Regions are an externally extensible taxonomy; they stay as validated
/// lowercase strings rather than a closed enum.
#[must_use]
pub fn normalize_region(raw: &str) -> String {
    raw.trim().to_ascii_lowercase()
}
