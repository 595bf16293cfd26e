//! Parsed item record
//!
//! The subset of a parsed item that property derivation reads.

use serde::{Deserialize, Serialize};

use super::category::ItemCategory;
use crate::stats::StatCalculated;

/// A parsed item
///
/// Raw property fields are `None` when the item does not show that property.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ParsedItem {
    /// Base category
    pub category: Option<ItemCategory>,
    /// Quality percentage (0-20 normally, higher when corrupted)
    pub quality: Option<u32>,

    // ===== ARMOUR PROPERTIES =====

    /// Armour rating
    pub armour_ar: Option<f64>,
    /// Evasion rating
    pub armour_ev: Option<f64>,
    /// Energy shield
    pub armour_es: Option<f64>,
    /// Ward
    pub armour_ward: Option<f64>,
    /// Chance to block (percent)
    pub armour_block: Option<f64>,

    // ===== WEAPON PROPERTIES =====

    /// Attacks per second
    pub weapon_as: Option<f64>,
    /// Average physical damage per hit
    pub weapon_physical: Option<f64>,
    /// Average elemental damage per hit
    pub weapon_elemental: Option<f64>,
    /// Critical strike chance (percent)
    pub weapon_crit: Option<f64>,

    /// Stats as parsed from the item's modifiers
    pub stats_by_type: Vec<StatCalculated>,
}

impl ParsedItem {
    pub fn new(category: ItemCategory) -> Self {
        Self {
            category: Some(category),
            ..Default::default()
        }
    }

    /// Number of defences (armour, evasion, energy shield, ward) present
    pub fn defence_count(&self) -> usize {
        [self.armour_ar, self.armour_ev, self.armour_es, self.armour_ward]
            .iter()
            .filter(|value| value.is_some())
            .count()
    }

    /// Whether any armour property is shown on the item
    pub fn has_armour_props(&self) -> bool {
        self.defence_count() > 0 || self.armour_block.is_some()
    }

    /// Whether any weapon property is shown on the item
    pub fn has_weapon_props(&self) -> bool {
        self.weapon_as.is_some()
            || self.weapon_crit.is_some()
            || self.weapon_elemental.is_some()
            || self.weapon_physical.is_some()
    }

    /// Current quality, 0 when the item shows none
    pub fn quality(&self) -> u32 {
        self.quality.unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defence_count() {
        let mut item = ParsedItem::new(ItemCategory::BodyArmour);
        assert_eq!(item.defence_count(), 0);
        assert!(!item.has_armour_props());

        item.armour_ar = Some(300.0);
        assert_eq!(item.defence_count(), 1);

        item.armour_es = Some(80.0);
        item.armour_block = Some(25.0);
        assert_eq!(item.defence_count(), 2);
        assert!(item.has_armour_props());
    }

    #[test]
    fn test_deserialize_with_missing_fields() {
        let item: ParsedItem =
            serde_json::from_str(r#"{ "category": "Bow", "weapon_as": 1.5 }"#).unwrap();
        assert_eq!(item.category, Some(ItemCategory::Bow));
        assert_eq!(item.weapon_as, Some(1.5));
        assert!(item.weapon_physical.is_none());
        assert!(item.stats_by_type.is_empty());
        assert_eq!(item.quality(), 0);
    }
}
