//! Common types used across QEX

use crate::error::QexError;
use serde::{Deserialize, Serialize};

/// The physical attribute being extracted for a dataset row.
///
/// The set is fixed: every variant maps to exactly one non-empty ordered
/// set of allowed abbreviated units in the unit catalog. Dataset files
/// carry these as snake_case strings in the `entity_name` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    Width,
    Depth,
    Height,
    ItemWeight,
    MaximumWeightRecommendation,
    Voltage,
    Wattage,
    ItemVolume,
}

impl EntityType {
    /// All entity types, in catalog order.
    pub const ALL: [EntityType; 8] = [
        EntityType::Width,
        EntityType::Depth,
        EntityType::Height,
        EntityType::ItemWeight,
        EntityType::MaximumWeightRecommendation,
        EntityType::Voltage,
        EntityType::Wattage,
        EntityType::ItemVolume,
    ];

    /// The snake_case name used in dataset files.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityType::Width => "width",
            EntityType::Depth => "depth",
            EntityType::Height => "height",
            EntityType::ItemWeight => "item_weight",
            EntityType::MaximumWeightRecommendation => "maximum_weight_recommendation",
            EntityType::Voltage => "voltage",
            EntityType::Wattage => "wattage",
            EntityType::ItemVolume => "item_volume",
        }
    }
}

impl std::str::FromStr for EntityType {
    type Err = QexError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        EntityType::ALL
            .into_iter()
            .find(|e| e.as_str() == s)
            .ok_or_else(|| QexError::UnknownEntity(s.to_string()))
    }
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One completed prediction, as appended to the output ledger.
///
/// `prediction` is either a canonical `"<value> <unit>"` string or the
/// empty string, which is the explicit "no confident value found"
/// sentinel. It is never absent or null.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub index: u64,
    pub prediction: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_type_round_trip() {
        for entity in EntityType::ALL {
            let parsed: EntityType = entity.as_str().parse().unwrap();
            assert_eq!(parsed, entity);
        }
    }

    #[test]
    fn test_entity_type_rejects_unknown() {
        let err = "item_width".parse::<EntityType>().unwrap_err();
        assert!(err.to_string().contains("item_width"));
        assert!(err.to_string().contains("item_weight"));
        assert!("".parse::<EntityType>().is_err());
        assert!("WIDTH".parse::<EntityType>().is_err());
    }

    #[test]
    fn test_entity_type_serde_snake_case() {
        let json = serde_json::to_string(&EntityType::ItemVolume).unwrap();
        assert_eq!(json, "\"item_volume\"");
        let back: EntityType = serde_json::from_str(&json).unwrap();
        assert_eq!(back, EntityType::ItemVolume);
    }
}
