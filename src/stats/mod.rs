//! Stat system
//!
//! Rolls, stat descriptions and the static groupings derived properties
//! are computed from.

pub mod roll;
pub mod stat;
pub mod groups;

pub use roll::StatRoll;
pub use stat::{Stat, StatBetter, StatMatcher, TradeIds, ModifierType, ModifierInfo, ParsedRoll, StatSource, StatCalculated};
pub use groups::{StatRefs, QualityStatGroup, QualityStats};
