//! Armour properties
//!
//! Armour, evasion, energy shield and ward at 20% quality, plus block.

use super::assemble::DerivedProperty;
use super::heuristics::{self, Visibility};
use super::prune::remove_used_stats;
use super::PropertyDeriver;
use crate::filters::FiltersCreationContext;
use crate::items::ParsedItem;
use crate::stats::{QualityStatGroup, QualityStats};

/// A quality-normalized defence property
struct DefenceRule {
    reference: &'static str,
    trade_id: &'static str,
    raw: fn(&ParsedItem) -> Option<f64>,
    group: fn(&QualityStats) -> &QualityStatGroup,
}

/// Defences in emission order
const DEFENCES: [DefenceRule; 4] = [
    DefenceRule {
        reference: "Armour: #",
        trade_id: "armour.armour",
        raw: |item| item.armour_ar,
        group: |quality| &quality.armour,
    },
    DefenceRule {
        reference: "Evasion Rating: #",
        trade_id: "armour.evasion_rating",
        raw: |item| item.armour_ev,
        group: |quality| &quality.evasion,
    },
    DefenceRule {
        reference: "Energy Shield: #",
        trade_id: "armour.energy_shield",
        raw: |item| item.armour_es,
        group: |quality| &quality.energy_shield,
    },
    DefenceRule {
        reference: "Ward: #",
        trade_id: "armour.ward",
        raw: |item| item.armour_ward,
        group: |quality| &quality.ward,
    },
];

impl PropertyDeriver<'_> {
    pub(super) fn armour_props(&self, ctx: &mut FiltersCreationContext) {
        let item = ctx.item;
        let defence_visibility = heuristics::defence_visibility(item);

        for rule in &DEFENCES {
            let Some(total) = (rule.raw)(item) else {
                continue;
            };
            let roll = self.quality.prop_at_20_quality(total, (rule.group)(&self.tables.quality), item);
            self.push_prop(ctx, &DerivedProperty {
                reference: rule.reference,
                trade_id: rule.trade_id,
                roll,
                dp: false,
                visibility: defence_visibility,
            });
        }

        if let Some(block) = item.armour_block {
            let roll = self.bounds.prop_bounds(block, &self.tables.block, item);
            self.push_prop(ctx, &DerivedProperty {
                reference: "Block: #%",
                trade_id: "armour.block",
                roll,
                dp: false,
                visibility: Visibility::disabled(),
            });
        }

        if item.has_armour_props() {
            remove_used_stats(&mut ctx.stats_by_type, self.tables.armour_stats());
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::filters::{FilterTag, FiltersCreationContext};
    use crate::items::{ItemCategory, ParsedItem};
    use crate::props::filter_item_prop;
    use crate::stats::{Stat, StatCalculated};

    fn line(reference: &str) -> StatCalculated {
        StatCalculated {
            stat: Stat::new(reference),
            ..Default::default()
        }
    }

    fn derive(item: &ParsedItem) -> FiltersCreationContext<'_> {
        let mut ctx = FiltersCreationContext::new(item, 10.0);
        filter_item_prop(&mut ctx);
        ctx
    }

    #[test]
    fn test_single_defence_is_enabled() {
        let mut item = ParsedItem::new(ItemCategory::BodyArmour);
        item.quality = Some(20);
        item.armour_es = Some(200.0);

        let ctx = derive(&item);
        assert_eq!(ctx.filters.len(), 1);
        let filter = &ctx.filters[0];
        assert_eq!(filter.trade_id, vec!["armour.energy_shield".to_string()]);
        assert_eq!(filter.tag, FilterTag::Property);
        assert!((filter.value().unwrap() - 200.0).abs() < 1e-9);
        assert!(!filter.disabled);
    }

    #[test]
    fn test_hybrid_defences_are_disabled_in_order() {
        let mut item = ParsedItem::new(ItemCategory::Gloves);
        item.armour_ward = Some(50.0);
        item.armour_ar = Some(120.0);
        item.armour_ev = Some(110.0);

        let ctx = derive(&item);
        let ids: Vec<&str> = ctx.filters.iter().map(|f| f.trade_id[0].as_str()).collect();
        assert_eq!(ids, vec!["armour.armour", "armour.evasion_rating", "armour.ward"]);
        assert!(ctx.filters.iter().all(|f| f.disabled));
    }

    #[test]
    fn test_block_is_always_disabled() {
        let mut item = ParsedItem::new(ItemCategory::Shield);
        item.armour_ar = Some(300.0);
        item.armour_block = Some(26.0);

        let ctx = derive(&item);
        assert_eq!(ctx.filters.len(), 2);
        assert!(!ctx.filters[0].disabled);

        let block = &ctx.filters[1];
        assert_eq!(block.stat_ref, "Block: #%");
        assert_eq!(block.value(), Some(26.0));
        assert!(block.disabled);
    }

    #[test]
    fn test_prunes_every_defence_family() {
        let mut item = ParsedItem::new(ItemCategory::Helmet);
        item.armour_block = Some(5.0);
        item.stats_by_type = vec![
            line("+# to maximum Life"),
            line("#% increased Evasion and Energy Shield"),
            line("+# to Ward"),
            line("+#% Chance to Block"),
            line("+#% to all Elemental Resistances"),
        ];

        let ctx = derive(&item);
        let left: Vec<&str> = ctx.stats_by_type.iter().map(|s| s.stat.reference.as_str()).collect();
        assert_eq!(left, vec!["+# to maximum Life", "+#% to all Elemental Resistances"]);
    }
}
