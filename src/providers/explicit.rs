//! Rolls computed from the item's own stats
//!
//! Properties follow `(base + flat) * (1 + increased / 100)`, with quality
//! counted as extra increase for quality-affected properties. The base is
//! recovered from the shown total, then every contributor is swapped for its
//! tier minimum or maximum.

use super::{QualityNormalizer, RollBounds};
use crate::items::ParsedItem;
use crate::stats::{QualityStatGroup, StatCalculated, StatRefs, StatRoll};

/// Quality properties are normalized to
pub const QUALITY_TARGET: u32 = 20;

/// Providers reading contributor rolls from `ParsedItem::stats_by_type`
#[derive(Debug, Clone, Copy, Default)]
pub struct ExplicitRolls;

/// Summed contribution of every item stat whose reference is in `refs`
fn sum_contributions(refs: &[String], item: &ParsedItem) -> StatRoll {
    item.stats_by_type
        .iter()
        .filter(|calc| refs.iter().any(|r| *r == calc.stat.reference))
        .map(StatCalculated::total)
        .sum()
}

impl RollBounds for ExplicitRolls {
    fn prop_bounds(&self, total: f64, refs: &StatRefs, item: &ParsedItem) -> StatRoll {
        let flat = sum_contributions(&refs.flat, item);
        let incr = sum_contributions(&refs.incr, item);

        let base = total / (1.0 + incr.value / 100.0) - flat.value;
        let at = |flat: f64, incr: f64| (base + flat) * (1.0 + incr / 100.0);

        StatRoll {
            value: total,
            min: at(flat.min, incr.min),
            max: at(flat.max, incr.max),
        }
    }
}

impl QualityNormalizer for ExplicitRolls {
    fn prop_at_20_quality(&self, total: f64, group: &QualityStatGroup, item: &ParsedItem) -> StatRoll {
        let quality = f64::from(item.quality());
        // Items above 20% keep their quality
        let target = f64::from(item.quality().max(QUALITY_TARGET));

        let flat = sum_contributions(&group.flat, item);
        let incr = sum_contributions(&group.incr, item);

        let base = total / (1.0 + (incr.value + quality) / 100.0) - flat.value;
        let at = |flat: f64, incr: f64| (base + flat) * (1.0 + (incr + target) / 100.0);

        StatRoll {
            value: at(flat.value, incr.value),
            min: at(flat.min, incr.min),
            max: at(flat.max, incr.max),
        }
    }
}
