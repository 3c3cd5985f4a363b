//! Unit Catalog
//!
//! Static registry mapping each entity type to its valid abbreviated units
//! and their canonical full-form names. The tables are process-lifetime
//! constants; the catalog itself is a cheap, explicitly constructed handle
//! so callers can inject it where needed.

use qex_common::types::EntityType;

/// One allowed unit for an entity: its abbreviation as it appears in text
/// and the canonical full-form name used in final output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unit {
    pub abbreviation: &'static str,
    pub canonical: &'static str,
}

impl Unit {
    const fn new(abbreviation: &'static str, canonical: &'static str) -> Self {
        Self {
            abbreviation,
            canonical,
        }
    }
}

const LENGTH_UNITS: &[Unit] = &[
    Unit::new("cm", "centimetre"),
    Unit::new("ft", "foot"),
    Unit::new("in", "inch"),
    Unit::new("m", "metre"),
    Unit::new("mm", "millimetre"),
    Unit::new("yd", "yard"),
];

const WEIGHT_UNITS: &[Unit] = &[
    Unit::new("g", "gram"),
    Unit::new("kg", "kilogram"),
    Unit::new("µg", "microgram"),
    Unit::new("mg", "milligram"),
    Unit::new("oz", "ounce"),
    Unit::new("lb", "pound"),
    Unit::new("t", "ton"),
];

const VOLTAGE_UNITS: &[Unit] = &[
    Unit::new("kv", "kilovolt"),
    Unit::new("mv", "millivolt"),
    Unit::new("v", "volt"),
];

const WATTAGE_UNITS: &[Unit] = &[Unit::new("kw", "kilowatt"), Unit::new("w", "watt")];

// "oz" also appears under item_weight; the collision is intentional and is
// resolved only by which entity is requested, never by the text itself.
const VOLUME_UNITS: &[Unit] = &[
    Unit::new("cl", "centilitre"),
    Unit::new("cu ft", "cubic foot"),
    Unit::new("cu in", "cubic inch"),
    Unit::new("cup", "cup"),
    Unit::new("dl", "decilitre"),
    Unit::new("fl oz", "fluid ounce"),
    Unit::new("gallon", "gallon"),
    Unit::new("l", "litre"),
    Unit::new("ml", "millilitre"),
    Unit::new("oz", "ounce"),
    Unit::new("pint", "pint"),
    Unit::new("qt", "quart"),
];

/// Registry of valid units per entity type.
///
/// Immutable, no interior state; construct once and share freely.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnitCatalog;

impl UnitCatalog {
    pub fn new() -> Self {
        Self
    }

    /// The ordered set of valid units for an entity.
    pub fn units_for(&self, entity: EntityType) -> &'static [Unit] {
        match entity {
            EntityType::Width | EntityType::Depth | EntityType::Height => LENGTH_UNITS,
            EntityType::ItemWeight | EntityType::MaximumWeightRecommendation => WEIGHT_UNITS,
            EntityType::Voltage => VOLTAGE_UNITS,
            EntityType::Wattage => WATTAGE_UNITS,
            EntityType::ItemVolume => VOLUME_UNITS,
        }
    }

    /// Whether `abbreviation` is a valid unit for `entity`.
    pub fn allows(&self, entity: EntityType, abbreviation: &str) -> bool {
        self.units_for(entity)
            .iter()
            .any(|u| u.abbreviation == abbreviation)
    }

    /// The canonical full-form name for an entity's unit abbreviation.
    pub fn canonical_name(&self, entity: EntityType, abbreviation: &str) -> Option<&'static str> {
        self.units_for(entity)
            .iter()
            .find(|u| u.abbreviation == abbreviation)
            .map(|u| u.canonical)
    }

    /// The deduplicated union of unit abbreviations across all entities.
    ///
    /// This is the alphabet the measurement parser is seeded from.
    pub fn global_abbreviations(&self) -> Vec<&'static str> {
        let mut all = Vec::new();
        for entity in EntityType::ALL {
            for unit in self.units_for(entity) {
                if !all.contains(&unit.abbreviation) {
                    all.push(unit.abbreviation);
                }
            }
        }
        all
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_every_entity_has_units() {
        let catalog = UnitCatalog::new();
        for entity in EntityType::ALL {
            assert!(
                !catalog.units_for(entity).is_empty(),
                "{entity} has no units"
            );
        }
    }

    #[test]
    fn test_abbreviations_unique_within_entity() {
        let catalog = UnitCatalog::new();
        for entity in EntityType::ALL {
            let units = catalog.units_for(entity);
            for (i, unit) in units.iter().enumerate() {
                assert!(
                    !units[i + 1..]
                        .iter()
                        .any(|u| u.abbreviation.eq_ignore_ascii_case(unit.abbreviation)),
                    "{entity} repeats {}",
                    unit.abbreviation
                );
            }
        }
    }

    #[test]
    fn test_oz_cross_entity_collision() {
        let catalog = UnitCatalog::new();
        assert_eq!(
            catalog.canonical_name(EntityType::ItemWeight, "oz"),
            Some("ounce")
        );
        assert_eq!(
            catalog.canonical_name(EntityType::ItemVolume, "oz"),
            Some("ounce")
        );
        assert!(!catalog.allows(EntityType::Width, "oz"));
    }

    #[test]
    fn test_canonical_name_lookup() {
        let catalog = UnitCatalog::new();
        assert_eq!(
            catalog.canonical_name(EntityType::Width, "cm"),
            Some("centimetre")
        );
        assert_eq!(
            catalog.canonical_name(EntityType::ItemVolume, "cu ft"),
            Some("cubic foot")
        );
        assert_eq!(catalog.canonical_name(EntityType::Voltage, "cm"), None);
    }

    #[test]
    fn test_global_set_deduplicates() {
        let catalog = UnitCatalog::new();
        let all = catalog.global_abbreviations();
        let oz_count = all.iter().filter(|a| **a == "oz").count();
        assert_eq!(oz_count, 1);
        assert!(all.contains(&"fl oz"));
        assert!(all.contains(&"µg"));
    }
}
