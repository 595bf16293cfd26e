//! Property tables
//!
//! Static stat groupings and category sets that drive property derivation.
//! The serializable definition is what lives in `property_tables.ron`; the
//! runtime form adds the precomputed membership sets.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::items::ItemCategory;
use crate::stats::{QualityStatGroup, QualityStats, StatRefs};

/// Tables built from the hardcoded defaults
pub static DEFAULT_TABLES: Lazy<PropertyTables> =
    Lazy::new(|| PropertyTables::from_def(default_property_tables()));

/// Table definition as stored in RON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyTablesDef {
    /// Quality-affected stats per family
    pub quality: QualityStats,
    /// Block chance stat
    pub block: String,
    /// Increased attack speed stat
    pub attack_speed: String,
    /// Increased critical strike chance stat
    pub crit_chance: String,
    /// Flat elemental damage stats
    pub elemental_flat: Vec<String>,
    /// Categories with armour properties
    pub armour_categories: Vec<ItemCategory>,
    /// Categories with weapon properties
    pub weapon_categories: Vec<ItemCategory>,
    /// Weapon categories where physical DPS is searched by default
    pub physical_dps_categories: Vec<ItemCategory>,
}

/// Runtime property tables
#[derive(Debug, Clone)]
pub struct PropertyTables {
    pub quality: QualityStats,
    pub block: StatRefs,
    pub attack_speed: StatRefs,
    pub crit_chance: StatRefs,
    pub elemental_damage: StatRefs,
    armour_categories: HashSet<ItemCategory>,
    weapon_categories: HashSet<ItemCategory>,
    physical_dps_categories: HashSet<ItemCategory>,
    armour_stats: HashSet<String>,
    weapon_stats: HashSet<String>,
}

impl PropertyTables {
    pub fn from_def(def: PropertyTablesDef) -> Self {
        let block = StatRefs::flat([def.block]);
        let attack_speed = StatRefs::incr([def.attack_speed]);
        let crit_chance = StatRefs::incr([def.crit_chance]);
        let elemental_damage = StatRefs::flat(def.elemental_flat);

        let armour_stats = def.quality.defences()
            .into_iter()
            .flat_map(QualityStatGroup::iter)
            .chain(block.iter())
            .map(str::to_string)
            .collect();

        let weapon_stats = def.quality.physical_damage.iter()
            .chain(attack_speed.iter())
            .chain(crit_chance.iter())
            .chain(elemental_damage.iter())
            .map(str::to_string)
            .collect();

        Self {
            quality: def.quality,
            block,
            attack_speed,
            crit_chance,
            elemental_damage,
            armour_categories: def.armour_categories.into_iter().collect(),
            weapon_categories: def.weapon_categories.into_iter().collect(),
            physical_dps_categories: def.physical_dps_categories.into_iter().collect(),
            armour_stats,
            weapon_stats,
        }
    }

    pub fn is_armour(&self, category: ItemCategory) -> bool {
        self.armour_categories.contains(&category)
    }

    pub fn is_weapon(&self, category: ItemCategory) -> bool {
        self.weapon_categories.contains(&category)
    }

    pub fn is_physical_dps_relevant(&self, category: ItemCategory) -> bool {
        self.physical_dps_categories.contains(&category)
    }

    /// Every stat subsumed by the armour properties
    pub fn armour_stats(&self) -> &HashSet<String> {
        &self.armour_stats
    }

    /// Every stat subsumed by the weapon properties
    pub fn weapon_stats(&self) -> &HashSet<String> {
        &self.weapon_stats
    }
}

impl Default for PropertyTables {
    fn default() -> Self {
        DEFAULT_TABLES.clone()
    }
}

fn group(flat: &[&str], incr: &[&str]) -> QualityStatGroup {
    StatRefs {
        flat: flat.iter().map(|s| s.to_string()).collect(),
        incr: incr.iter().map(|s| s.to_string()).collect(),
    }
}

/// Create default property tables (hardcoded fallback)
pub fn default_property_tables() -> PropertyTablesDef {
    PropertyTablesDef {
        quality: QualityStats {
            armour: group(
                &["+# to Armour"],
                &[
                    "#% increased Armour",
                    "#% increased Armour and Evasion",
                    "#% increased Armour and Energy Shield",
                    "#% increased Armour, Evasion and Energy Shield",
                ],
            ),
            evasion: group(
                &["+# to Evasion Rating"],
                &[
                    "#% increased Evasion Rating",
                    "#% increased Armour and Evasion",
                    "#% increased Evasion and Energy Shield",
                    "#% increased Armour, Evasion and Energy Shield",
                ],
            ),
            energy_shield: group(
                &["+# to maximum Energy Shield"],
                &[
                    "#% increased Energy Shield",
                    "#% increased Armour and Energy Shield",
                    "#% increased Evasion and Energy Shield",
                    "#% increased Armour, Evasion and Energy Shield",
                ],
            ),
            ward: group(&["+# to Ward"], &["#% increased Ward"]),
            physical_damage: group(
                &["Adds # to # Physical Damage"],
                &["#% increased Physical Damage"],
            ),
        },
        block: "+#% Chance to Block".to_string(),
        attack_speed: "#% increased Attack Speed".to_string(),
        crit_chance: "#% increased Critical Strike Chance".to_string(),
        elemental_flat: vec![
            "Adds # to # Lightning Damage".to_string(),
            "Adds # to # Cold Damage".to_string(),
            "Adds # to # Fire Damage".to_string(),
        ],
        armour_categories: ItemCategory::armour().to_vec(),
        weapon_categories: ItemCategory::weapons().to_vec(),
        physical_dps_categories: ItemCategory::physical_dps_relevant().to_vec(),
    }
}
