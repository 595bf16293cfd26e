//! Filter records
//!
//! The renderable, searchable form of a stat.

use serde::{Deserialize, Serialize};

use crate::stats::{ModifierType, StatSource};

/// What kind of line a filter was built from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilterTag {
    Pseudo,
    Explicit,
    Implicit,
    Crafted,
    Enchant,
    Fractured,
    /// Derived from the item's property block, not from a modifier
    Property,
}

impl From<ModifierType> for FilterTag {
    fn from(modifier_type: ModifierType) -> Self {
        match modifier_type {
            ModifierType::Pseudo => FilterTag::Pseudo,
            ModifierType::Explicit => FilterTag::Explicit,
            ModifierType::Implicit => FilterTag::Implicit,
            ModifierType::Crafted => FilterTag::Crafted,
            ModifierType::Enchant => FilterTag::Enchant,
            ModifierType::Fractured => FilterTag::Fractured,
        }
    }
}

/// Possible range of a roll, shown next to the search inputs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FilterBounds {
    pub min: f64,
    pub max: f64,
}

/// Search inputs as first presented
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RollDefault {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

/// Numeric part of a filter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterRoll {
    pub value: f64,
    /// Lower bound of the search, `None` for no bound
    pub min: Option<f64>,
    /// Upper bound of the search, `None` for no bound
    pub max: Option<f64>,
    pub default: RollDefault,
    pub bounds: Option<FilterBounds>,
    /// Display with two decimal places
    pub dp: bool,
}

/// A single searchable filter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatFilter {
    pub trade_id: Vec<String>,
    pub stat_ref: String,
    pub text: String,
    pub tag: FilterTag,
    pub sources: Vec<StatSource>,
    pub roll: Option<FilterRoll>,
    pub disabled: bool,
    /// Reason the filter is hidden from the default view
    pub hidden: Option<String>,
}

impl StatFilter {
    /// Value of the roll, if the filter has one
    pub fn value(&self) -> Option<f64> {
        self.roll.as_ref().map(|roll| roll.value)
    }
}
