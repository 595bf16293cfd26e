//! Weapon properties
//!
//! DPS split by damage type, attack speed and crit chance. Physical damage
//! is normalized to 20% quality before it is scaled by attack speed.

use super::assemble::DerivedProperty;
use super::heuristics::{self, Visibility};
use super::prune::remove_used_stats;
use super::PropertyDeriver;
use crate::filters::FiltersCreationContext;
use crate::items::ParsedItem;
use crate::stats::StatRoll;

/// Composite weapon rolls
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeaponRolls {
    pub attack_speed: StatRoll,
    /// Physical DPS at 20% quality
    pub pdps: StatRoll,
    pub edps: StatRoll,
    pub dps: StatRoll,
    pub crit_chance: StatRoll,
}

impl WeaponRolls {
    /// Combine per-hit damage with attack speed.
    ///
    /// Value, min and max are multiplied and added independently, so the
    /// DPS range is wider than what a single item could actually reach.
    pub fn compose(attack_speed: StatRoll, phys_q20: StatRoll, ele_dmg: StatRoll, crit_chance: StatRoll) -> Self {
        let pdps = phys_q20 * attack_speed;
        let edps = ele_dmg * attack_speed;
        Self {
            attack_speed,
            pdps,
            edps,
            dps: pdps + edps,
            crit_chance,
        }
    }
}

/// A weapon property, evaluated in declaration order
struct WeaponRule {
    reference: &'static str,
    trade_id: &'static str,
    dp: bool,
    applies: fn(&ParsedItem) -> bool,
    roll: fn(&WeaponRolls) -> StatRoll,
    visibility: fn(&WeaponRolls, bool) -> Visibility,
}

const WEAPON_RULES: [WeaponRule; 5] = [
    WeaponRule {
        reference: "DPS: #",
        trade_id: "weapon.total_dps",
        dp: false,
        applies: |item| item.weapon_elemental.is_some(),
        roll: |rolls| rolls.dps,
        visibility: |_, _| Visibility::enabled(),
    },
    WeaponRule {
        reference: "Elemental DPS: #",
        trade_id: "weapon.elemental_dps",
        dp: false,
        applies: |item| item.weapon_elemental.is_some(),
        roll: |rolls| rolls.edps,
        visibility: |rolls, _| heuristics::elemental_dps_visibility(&rolls.edps, &rolls.dps),
    },
    WeaponRule {
        reference: "Physical DPS: #",
        trade_id: "weapon.physical_dps",
        dp: false,
        applies: |_| true,
        roll: |rolls| rolls.pdps,
        visibility: |rolls, physical_relevant| {
            heuristics::physical_dps_visibility(physical_relevant, &rolls.pdps, &rolls.dps)
        },
    },
    WeaponRule {
        reference: "Attacks per Second: #",
        trade_id: "weapon.aps",
        dp: true,
        applies: |_| true,
        roll: |rolls| rolls.attack_speed,
        visibility: |_, _| Visibility::disabled(),
    },
    WeaponRule {
        reference: "Critical Strike Chance: #%",
        trade_id: "weapon.crit",
        dp: true,
        applies: |_| true,
        roll: |rolls| rolls.crit_chance,
        visibility: |_, _| Visibility::disabled(),
    },
];

/// Raw weapon value the caller guarantees on weapons
fn required(value: Option<f64>, name: &str) -> f64 {
    value.unwrap_or_else(|| {
        log::warn!("Weapon has no {}, deriving properties from 0", name);
        0.0
    })
}

impl PropertyDeriver<'_> {
    /// Rolls of every weapon property of `item`
    pub fn weapon_rolls(&self, item: &ParsedItem) -> WeaponRolls {
        let tables = self.tables;

        let attack_speed = self.bounds.prop_bounds(
            required(item.weapon_as, "attack speed"),
            &tables.attack_speed,
            item,
        );
        // Pure elemental or pure physical weapons show no line for the other type
        let phys_q20 = self.quality.prop_at_20_quality(
            item.weapon_physical.unwrap_or(0.0),
            &tables.quality.physical_damage,
            item,
        );
        let ele_dmg = self.bounds.prop_bounds(
            item.weapon_elemental.unwrap_or(0.0),
            &tables.elemental_damage,
            item,
        );
        let crit_chance = self.bounds.prop_bounds(
            required(item.weapon_crit, "critical strike chance"),
            &tables.crit_chance,
            item,
        );

        WeaponRolls::compose(attack_speed, phys_q20, ele_dmg, crit_chance)
    }

    pub(super) fn weapon_props(&self, ctx: &mut FiltersCreationContext) {
        let item = ctx.item;
        let rolls = self.weapon_rolls(item);
        let physical_relevant = item.category
            .is_some_and(|category| self.tables.is_physical_dps_relevant(category));

        for rule in WEAPON_RULES.iter().filter(|rule| (rule.applies)(item)) {
            self.push_prop(ctx, &DerivedProperty {
                reference: rule.reference,
                trade_id: rule.trade_id,
                roll: (rule.roll)(&rolls),
                dp: rule.dp,
                visibility: (rule.visibility)(&rolls, physical_relevant),
            });
        }

        if item.has_weapon_props() {
            remove_used_stats(&mut ctx.stats_by_type, self.tables.weapon_stats());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::ItemCategory;
    use crate::props::filter_item_prop;
    use crate::props::heuristics::{ELEMENTAL_NOT_MAIN, PHYSICAL_NOT_MAIN};
    use crate::stats::{Stat, StatCalculated};

    fn weapon(category: ItemCategory, physical: Option<f64>, elemental: Option<f64>) -> ParsedItem {
        let mut item = ParsedItem::new(category);
        item.quality = Some(20);
        item.weapon_as = Some(1.0);
        item.weapon_crit = Some(5.0);
        item.weapon_physical = physical;
        item.weapon_elemental = elemental;
        item
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn derive(item: &ParsedItem) -> FiltersCreationContext<'_> {
        let mut ctx = FiltersCreationContext::new(item, 10.0);
        filter_item_prop(&mut ctx);
        ctx
    }

    fn trade_ids(ctx: &FiltersCreationContext) -> Vec<String> {
        ctx.filters.iter().map(|f| f.trade_id[0].clone()).collect()
    }

    #[test]
    fn test_compose_multiplies_then_adds() {
        let rolls = WeaponRolls::compose(
            StatRoll::new(1.5, 1.25, 1.75),
            StatRoll::new(100.0, 80.0, 120.0),
            StatRoll::new(20.0, 10.0, 30.0),
            StatRoll::fixed(5.0),
        );
        assert_eq!(rolls.pdps, StatRoll::new(150.0, 100.0, 210.0));
        assert_eq!(rolls.edps, StatRoll::new(30.0, 12.5, 52.5));
        assert_eq!(rolls.dps, StatRoll::new(180.0, 112.5, 262.5));
    }

    #[test]
    fn test_physical_weapon_without_elemental() {
        let item = weapon(ItemCategory::TwoHandedAxe, Some(200.0), None);
        let ctx = derive(&item);

        assert_eq!(trade_ids(&ctx), vec!["weapon.physical_dps", "weapon.aps", "weapon.crit"]);
        let pdps = &ctx.filters[0];
        assert!(close(pdps.value().unwrap(), 200.0));
        assert!(!pdps.disabled);
        assert!(pdps.hidden.is_none());
    }

    #[test]
    fn test_elemental_weapon_emits_all_dps_filters() {
        let item = weapon(ItemCategory::OneHandedSword, Some(20.0), Some(80.0));
        let ctx = derive(&item);

        assert_eq!(
            trade_ids(&ctx),
            vec!["weapon.total_dps", "weapon.elemental_dps", "weapon.physical_dps", "weapon.aps", "weapon.crit"]
        );

        let dps = &ctx.filters[0];
        assert!(close(dps.value().unwrap(), 100.0));
        assert!(!dps.disabled);

        let edps = &ctx.filters[1];
        assert!(!edps.disabled);
        assert!(edps.hidden.is_none());

        let pdps = &ctx.filters[2];
        assert!(pdps.disabled);
        assert_eq!(pdps.hidden.as_deref(), Some(PHYSICAL_NOT_MAIN));
    }

    #[test]
    fn test_minor_elemental_is_hidden() {
        let item = weapon(ItemCategory::Bow, Some(60.0), Some(40.0));
        let ctx = derive(&item);

        let edps = &ctx.filters[1];
        assert!(edps.disabled);
        assert_eq!(edps.hidden.as_deref(), Some(ELEMENTAL_NOT_MAIN));

        // 60% physical is below the dominance ratio as well
        let pdps = &ctx.filters[2];
        assert!(pdps.disabled);
        assert!(pdps.hidden.is_some());
    }

    #[test]
    fn test_aps_and_crit_use_two_decimals_and_start_disabled() {
        let item = weapon(ItemCategory::Claw, Some(50.0), None);
        let ctx = derive(&item);

        for filter in &ctx.filters[1..] {
            assert!(filter.disabled);
            assert!(filter.roll.as_ref().unwrap().dp);
        }
        assert_eq!(ctx.filters[1].stat_ref, "Attacks per Second: #");
        assert_eq!(ctx.filters[2].stat_ref, "Critical Strike Chance: #%");
    }

    #[test]
    fn test_zero_damage_weapon_keeps_dps_filters_visible() {
        let item = weapon(ItemCategory::Bow, Some(0.0), Some(0.0));
        let ctx = derive(&item);

        assert!(ctx.filters.iter().all(|f| f.hidden.is_none()));
        assert!(!ctx.filters[1].disabled);
        assert!(!ctx.filters[2].disabled);
    }

    #[test]
    fn test_prunes_weapon_stats() {
        let mut item = weapon(ItemCategory::Dagger, Some(50.0), None);
        item.stats_by_type = ["Adds # to # Physical Damage", "+# to Dexterity", "Adds # to # Fire Damage", "#% increased Attack Speed"]
            .into_iter()
            .map(|reference| StatCalculated {
                stat: Stat::new(reference),
                ..Default::default()
            })
            .collect();

        let ctx = derive(&item);
        assert_eq!(ctx.stats_by_type.len(), 1);
        assert_eq!(ctx.stats_by_type[0].stat.reference, "+# to Dexterity");
    }
}
