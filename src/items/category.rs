//! Item categories
//!
//! The closed set of base categories the item parser can report.

use serde::{Deserialize, Serialize};

/// Base item category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemCategory {
    // Armour pieces
    BodyArmour,
    Helmet,
    Gloves,
    Boots,
    Shield,

    // Weapons
    OneHandedAxe,
    TwoHandedAxe,
    OneHandedMace,
    TwoHandedMace,
    OneHandedSword,
    TwoHandedSword,
    Bow,
    Claw,
    Dagger,
    RuneDagger,
    Sceptre,
    Staff,
    Warstaff,
    Wand,
    FishingRod,

    // Everything else
    Quiver,
    Amulet,
    Ring,
    Belt,
    Jewel,
    AbyssJewel,
    Flask,
    Map,
    Gem,
    Currency,
}

impl ItemCategory {
    /// Display name as shown in the item header
    pub fn name(&self) -> &'static str {
        match self {
            ItemCategory::BodyArmour => "Body Armour",
            ItemCategory::Helmet => "Helmet",
            ItemCategory::Gloves => "Gloves",
            ItemCategory::Boots => "Boots",
            ItemCategory::Shield => "Shield",
            ItemCategory::OneHandedAxe => "One Handed Axe",
            ItemCategory::TwoHandedAxe => "Two Handed Axe",
            ItemCategory::OneHandedMace => "One Handed Mace",
            ItemCategory::TwoHandedMace => "Two Handed Mace",
            ItemCategory::OneHandedSword => "One Handed Sword",
            ItemCategory::TwoHandedSword => "Two Handed Sword",
            ItemCategory::Bow => "Bow",
            ItemCategory::Claw => "Claw",
            ItemCategory::Dagger => "Dagger",
            ItemCategory::RuneDagger => "Rune Dagger",
            ItemCategory::Sceptre => "Sceptre",
            ItemCategory::Staff => "Staff",
            ItemCategory::Warstaff => "Warstaff",
            ItemCategory::Wand => "Wand",
            ItemCategory::FishingRod => "Fishing Rod",
            ItemCategory::Quiver => "Quiver",
            ItemCategory::Amulet => "Amulet",
            ItemCategory::Ring => "Ring",
            ItemCategory::Belt => "Belt",
            ItemCategory::Jewel => "Jewel",
            ItemCategory::AbyssJewel => "Abyss Jewel",
            ItemCategory::Flask => "Flask",
            ItemCategory::Map => "Map",
            ItemCategory::Gem => "Gem",
            ItemCategory::Currency => "Currency",
        }
    }

    /// Categories that carry armour, evasion, energy shield, ward or block
    pub fn armour() -> &'static [ItemCategory] {
        &[
            ItemCategory::BodyArmour,
            ItemCategory::Helmet,
            ItemCategory::Gloves,
            ItemCategory::Boots,
            ItemCategory::Shield,
        ]
    }

    /// Categories that carry attack speed, damage and crit
    pub fn weapons() -> &'static [ItemCategory] {
        &[
            ItemCategory::OneHandedAxe,
            ItemCategory::TwoHandedAxe,
            ItemCategory::OneHandedMace,
            ItemCategory::TwoHandedMace,
            ItemCategory::OneHandedSword,
            ItemCategory::TwoHandedSword,
            ItemCategory::Bow,
            ItemCategory::Claw,
            ItemCategory::Dagger,
            ItemCategory::RuneDagger,
            ItemCategory::Sceptre,
            ItemCategory::Staff,
            ItemCategory::Warstaff,
            ItemCategory::Wand,
            ItemCategory::FishingRod,
        ]
    }

    /// Weapon bases that are usually bought for their physical damage
    pub fn physical_dps_relevant() -> &'static [ItemCategory] {
        &[
            ItemCategory::OneHandedAxe,
            ItemCategory::TwoHandedAxe,
            ItemCategory::OneHandedSword,
            ItemCategory::TwoHandedSword,
            ItemCategory::Bow,
            ItemCategory::Warstaff,
        ]
    }
}

impl std::fmt::Display for ItemCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_armour_and_weapons_are_disjoint() {
        for category in ItemCategory::armour() {
            assert!(!ItemCategory::weapons().contains(category));
        }
    }

    #[test]
    fn test_physical_relevant_are_weapons() {
        for category in ItemCategory::physical_dps_relevant() {
            assert!(ItemCategory::weapons().contains(category));
        }
        assert!(!ItemCategory::physical_dps_relevant().contains(&ItemCategory::Wand));
    }
}
