// SPDX-License-Identifier: Apache-2.0

//! Compiled-in default emission factors, used when the persistent store has
//! no match or is unreachable. Values are UK DEFRA 2025 conversion factors
//! (refrigerant GWPs from IPCC AR5); defaults always resolve with
//! `DataQuality::Medium`.

use greenledger_model::{DataQuality, EmissionFactor, GwpVersion, Scope};
use std::collections::HashMap;
use std::sync::OnceLock;

const DEFRA: &str = "DEFRA 2025";
const IPCC_AR5: &str = "IPCC AR5";
const YEAR: i32 = 2025;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DefaultEntry {
    pub factor: f64,
    pub unit: &'static str,
    pub scope: Scope,
    pub source: &'static str,
    pub year: i32,
    pub gwp_version: Option<GwpVersion>,
}

impl DefaultEntry {
    const fn new(factor: f64, unit: &'static str, scope: Scope) -> Self {
        Self {
            factor,
            unit,
            scope,
            source: DEFRA,
            year: YEAR,
            gwp_version: None,
        }
    }

    const fn gwp(factor: f64) -> Self {
        Self {
            factor,
            unit: "kgCO2e/kg",
            scope: Scope::Scope1,
            source: IPCC_AR5,
            year: YEAR,
            gwp_version: Some(GwpVersion::Ar5),
        }
    }
}

/// `category → subtype → entry` lookup backing the defaults resolver tier.
pub struct DefaultFactorTable {
    categories: HashMap<&'static str, HashMap<&'static str, DefaultEntry>>,
}

impl DefaultFactorTable {
    #[must_use]
    pub fn get(&self, category: &str, subtype: &str) -> Option<&DefaultEntry> {
        self.categories.get(category)?.get(subtype)
    }

    #[must_use]
    pub fn contains_category(&self, category: &str) -> bool {
        self.categories.contains_key(category)
    }

    /// Wraps a table entry into a resolver-level record.
    #[must_use]
    pub fn to_record(
        &self,
        category: &str,
        subtype: &str,
        region: Option<&str>,
    ) -> Option<EmissionFactor> {
        let entry = self.get(category, subtype)?;
        Some(
            EmissionFactor::new(
                category,
                subtype,
                entry.factor,
                entry.unit,
                entry.scope,
                entry.source,
                Some(entry.year),
                DataQuality::Medium,
            )
            .with_gwp_version(entry.gwp_version)
            .with_region(region.map(ToString::to_string)),
        )
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str, &DefaultEntry)> {
        self.categories.iter().flat_map(|(category, subtypes)| {
            subtypes
                .iter()
                .map(move |(subtype, entry)| (*category, *subtype, entry))
        })
    }
}

/// The built-in table, constructed once.
#[must_use]
pub fn builtin_defaults() -> &'static DefaultFactorTable {
    static TABLE: OnceLock<DefaultFactorTable> = OnceLock::new();
    TABLE.get_or_init(build_table)
}

fn build_table() -> DefaultFactorTable {
    let mut categories: HashMap<&'static str, HashMap<&'static str, DefaultEntry>> =
        HashMap::new();

    categories.insert(
        "fuels",
        HashMap::from([
            ("diesel", DefaultEntry::new(2.546, "kgCO2e/litre", Scope::Scope1)),
            ("petrol", DefaultEntry::new(2.097, "kgCO2e/litre", Scope::Scope1)),
            ("natural-gas", DefaultEntry::new(2.044, "kgCO2e/m3", Scope::Scope1)),
            ("lpg", DefaultEntry::new(1.557, "kgCO2e/litre", Scope::Scope1)),
            ("heating-oil", DefaultEntry::new(2.54, "kgCO2e/litre", Scope::Scope1)),
            ("coal", DefaultEntry::new(2.252, "kgCO2e/kg", Scope::Scope1)),
            ("wood-pellets", DefaultEntry::new(0.046, "kgCO2e/kg", Scope::Scope1)),
        ]),
    );

    // Grid averages keyed by region; the region alias tier retries against
    // these keys when an electricity lookup misses on its subtype.
    categories.insert(
        "electricity",
        HashMap::from([
            ("uk", DefaultEntry::new(0.207, "kgCO2e/kWh", Scope::Scope2)),
            ("eu", DefaultEntry::new(0.253, "kgCO2e/kWh", Scope::Scope2)),
            ("us", DefaultEntry::new(0.367, "kgCO2e/kWh", Scope::Scope2)),
            ("china", DefaultEntry::new(0.555, "kgCO2e/kWh", Scope::Scope2)),
            ("india", DefaultEntry::new(0.713, "kgCO2e/kWh", Scope::Scope2)),
            ("global", DefaultEntry::new(0.436, "kgCO2e/kWh", Scope::Scope2)),
        ]),
    );

    categories.insert(
        "refrigerants",
        HashMap::from([
            ("r-134a", DefaultEntry::gwp(1300.0)),
            ("r-410a", DefaultEntry::gwp(1924.0)),
            ("r-404a", DefaultEntry::gwp(3943.0)),
            ("r-407c", DefaultEntry::gwp(1624.0)),
            ("r-32", DefaultEntry::gwp(677.0)),
            ("r-22", DefaultEntry::gwp(1760.0)),
            ("r-507a", DefaultEntry::gwp(3985.0)),
            ("co2", DefaultEntry::gwp(1.0)),
            ("ammonia", DefaultEntry::gwp(0.0)),
        ]),
    );

    categories.insert(
        "vehicles",
        HashMap::from([
            ("car-small", DefaultEntry::new(0.149, "kgCO2e/km", Scope::Scope3)),
            ("car-medium", DefaultEntry::new(0.171, "kgCO2e/km", Scope::Scope3)),
            ("car-large", DefaultEntry::new(0.209, "kgCO2e/km", Scope::Scope3)),
            ("van", DefaultEntry::new(0.241, "kgCO2e/km", Scope::Scope3)),
            ("hgv", DefaultEntry::new(0.894, "kgCO2e/km", Scope::Scope3)),
            ("motorbike", DefaultEntry::new(0.114, "kgCO2e/km", Scope::Scope3)),
        ]),
    );

    categories.insert(
        "flights",
        HashMap::from([
            ("domestic", DefaultEntry::new(0.246, "kgCO2e/km", Scope::Scope3)),
            ("short-haul", DefaultEntry::new(0.151, "kgCO2e/km", Scope::Scope3)),
            ("economy", DefaultEntry::new(0.148, "kgCO2e/km", Scope::Scope3)),
            ("premium-economy", DefaultEntry::new(0.237, "kgCO2e/km", Scope::Scope3)),
            ("business", DefaultEntry::new(0.429, "kgCO2e/km", Scope::Scope3)),
            ("first", DefaultEntry::new(0.592, "kgCO2e/km", Scope::Scope3)),
        ]),
    );

    categories.insert(
        "accommodation",
        HashMap::from([(
            "hotel-night",
            DefaultEntry::new(10.4, "kgCO2e/night", Scope::Scope3),
        )]),
    );

    categories.insert(
        "waste",
        HashMap::from([
            ("landfill", DefaultEntry::new(446.242, "kgCO2e/tonne", Scope::Scope3)),
            ("recycling", DefaultEntry::new(21.294, "kgCO2e/tonne", Scope::Scope3)),
            ("composting", DefaultEntry::new(8.911, "kgCO2e/tonne", Scope::Scope3)),
            ("incineration", DefaultEntry::new(21.281, "kgCO2e/tonne", Scope::Scope3)),
            (
                "anaerobic-digestion",
                DefaultEntry::new(8.911, "kgCO2e/tonne", Scope::Scope3),
            ),
        ]),
    );

    categories.insert(
        "water",
        HashMap::from([
            ("supply", DefaultEntry::new(0.149, "kgCO2e/m3", Scope::Scope3)),
            ("treatment", DefaultEntry::new(0.272, "kgCO2e/m3", Scope::Scope3)),
        ]),
    );

    DefaultFactorTable { categories }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_default_factor_is_finite_and_non_negative() {
        for (category, subtype, entry) in builtin_defaults().iter() {
            assert!(
                entry.factor.is_finite() && entry.factor >= 0.0,
                "{category}/{subtype} has invalid factor {}",
                entry.factor
            );
            assert!(entry.unit.starts_with("kgCO2e/"), "{category}/{subtype}");
        }
    }

    #[test]
    fn expected_categories_are_present() {
        for category in [
            "fuels",
            "electricity",
            "refrigerants",
            "vehicles",
            "flights",
            "accommodation",
            "waste",
            "water",
        ] {
            assert!(builtin_defaults().contains_category(category), "{category}");
        }
    }

    #[test]
    fn records_carry_medium_quality_and_provenance() {
        let record = builtin_defaults()
            .to_record("fuels", "diesel", None)
            .unwrap();
        assert_eq!(record.factor, 2.546);
        assert_eq!(record.data_quality, DataQuality::Medium);
        assert_eq!(record.source, "DEFRA 2025");
        assert_eq!(record.year, Some(2025));
    }

    #[test]
    fn refrigerant_defaults_are_labelled_ar5() {
        let record = builtin_defaults()
            .to_record("refrigerants", "r-410a", None)
            .unwrap();
        assert_eq!(record.factor, 1924.0);
        assert_eq!(record.gwp_version, Some(GwpVersion::Ar5));
        assert_eq!(record.source, "IPCC AR5");
    }

    #[test]
    fn unknown_subtype_misses() {
        assert!(builtin_defaults().get("fuels", "kerosene").is_none());
        assert!(builtin_defaults().get("plasma", "diesel").is_none());
    }
}
