//! Item property filters
//!
//! Derives searchable properties (defences normalized to 20% quality,
//! weapon DPS, attack speed, crit) from an item's property block and turns
//! them into filters. Stats folded into a property are removed from the
//! pass so they are not offered twice.

pub mod armour;
pub mod weapon;
pub mod heuristics;
pub mod prune;
pub mod assemble;

pub use assemble::{DerivedProperty, prop_to_filter};
pub use heuristics::{Visibility, DOMINANCE_RATIO};
pub use prune::remove_used_stats;
pub use weapon::WeaponRolls;

use crate::data::{PropertyTables, DEFAULT_TABLES};
use crate::filters::{DefaultConverter, FilterConverter, FiltersCreationContext};
use crate::providers::{ExplicitRolls, QualityNormalizer, RollBounds};

/// Property derivation wired to its tables and collaborators
#[derive(Clone, Copy)]
pub struct PropertyDeriver<'a> {
    pub tables: &'a PropertyTables,
    pub quality: &'a dyn QualityNormalizer,
    pub bounds: &'a dyn RollBounds,
    pub converter: &'a dyn FilterConverter,
}

impl<'a> PropertyDeriver<'a> {
    pub fn new(
        tables: &'a PropertyTables,
        quality: &'a dyn QualityNormalizer,
        bounds: &'a dyn RollBounds,
        converter: &'a dyn FilterConverter,
    ) -> Self {
        Self { tables, quality, bounds, converter }
    }

    /// Default collaborators over the given tables
    pub fn with_tables(tables: &'a PropertyTables) -> Self {
        Self::new(tables, &ExplicitRolls, &ExplicitRolls, &DefaultConverter)
    }

    /// Append property filters for `ctx.item` and prune the stats they cover.
    ///
    /// Items of no armour or weapon category are left alone.
    pub fn filter_item_prop(&self, ctx: &mut FiltersCreationContext) {
        let Some(category) = ctx.item.category else {
            return;
        };

        if self.tables.is_armour(category) {
            self.armour_props(ctx);
        }
        if self.tables.is_weapon(category) {
            self.weapon_props(ctx);
        }
    }

    fn push_prop(&self, ctx: &mut FiltersCreationContext, prop: &DerivedProperty) {
        let filter = prop_to_filter(prop, self.converter, ctx.search_in_range, ctx.item);
        ctx.filters.push(filter);
    }
}

impl Default for PropertyDeriver<'static> {
    fn default() -> Self {
        Self::with_tables(&DEFAULT_TABLES)
    }
}

impl std::fmt::Debug for PropertyDeriver<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PropertyDeriver")
            .field("tables", self.tables)
            .finish_non_exhaustive()
    }
}

/// Derive property filters with the default tables and collaborators
pub fn filter_item_prop(ctx: &mut FiltersCreationContext) {
    PropertyDeriver::default().filter_item_prop(ctx);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::{ItemCategory, ParsedItem};
    use crate::stats::{Stat, StatCalculated};

    fn line(reference: &str) -> StatCalculated {
        StatCalculated {
            stat: Stat::new(reference),
            ..Default::default()
        }
    }

    #[test]
    fn test_non_matching_category_does_nothing() {
        let mut item = ParsedItem::new(ItemCategory::Ring);
        item.stats_by_type = vec![line("+# to Armour"), line("#% increased Attack Speed")];

        let mut ctx = FiltersCreationContext::new(&item, 10.0);
        filter_item_prop(&mut ctx);

        assert!(ctx.filters.is_empty());
        assert_eq!(ctx.stats_by_type, item.stats_by_type);
    }

    #[test]
    fn test_missing_category_does_nothing() {
        let item = ParsedItem {
            armour_ar: Some(100.0),
            ..Default::default()
        };
        let mut ctx = FiltersCreationContext::new(&item, 10.0);
        filter_item_prop(&mut ctx);
        assert!(ctx.filters.is_empty());
    }

    #[test]
    fn test_armour_category_without_props_keeps_stats() {
        let mut item = ParsedItem::new(ItemCategory::Boots);
        item.stats_by_type = vec![line("+# to Armour")];

        let mut ctx = FiltersCreationContext::new(&item, 10.0);
        filter_item_prop(&mut ctx);

        assert!(ctx.filters.is_empty());
        assert_eq!(ctx.stats_by_type.len(), 1);
    }
}
