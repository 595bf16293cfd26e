//! Roll providers
//!
//! Quality normalization and roll bounds consumed by property derivation.
//! Both are pure: the same inputs always give the same roll.

pub mod explicit;

pub use explicit::{ExplicitRolls, QUALITY_TARGET};

use crate::items::ParsedItem;
use crate::stats::{QualityStatGroup, StatRefs, StatRoll};

/// Recomputes a quality-dependent property at canonical quality
pub trait QualityNormalizer {
    /// Roll of a property shown as `total` on `item`, as if the item had
    /// 20% quality, with the range its contributing stats allow
    fn prop_at_20_quality(&self, total: f64, group: &QualityStatGroup, item: &ParsedItem) -> StatRoll;
}

/// Computes the possible range of a property not affected by quality
pub trait RollBounds {
    /// Roll of a property shown as `total` on `item`, ranging over what its
    /// contributing stats could have rolled
    fn prop_bounds(&self, total: f64, refs: &StatRefs, item: &ParsedItem) -> StatRoll;
}
