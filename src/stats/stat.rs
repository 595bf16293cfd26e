//! Stat definitions
//!
//! Stats as the filter layer sees them: a translation reference, its trade
//! mapping, and the modifiers that contributed to it.

use serde::{Deserialize, Serialize};

use super::roll::StatRoll;

/// Which direction of a roll is desirable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StatBetter {
    #[default]
    PositiveRoll,
    NegativeRoll,
    NotComparable,
}

/// Where a modifier comes from on the item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ModifierType {
    Pseudo,
    #[default]
    Explicit,
    Implicit,
    Crafted,
    Enchant,
    Fractured,
}

/// One translation string a stat can be matched by
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StatMatcher {
    pub string: String,
}

/// Trade-site ids of a stat, per modifier type
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TradeIds {
    pub pseudo: Vec<String>,
    pub explicit: Vec<String>,
    pub implicit: Vec<String>,
    pub crafted: Vec<String>,
    pub enchant: Vec<String>,
    pub fractured: Vec<String>,
}

impl TradeIds {
    /// Ids registered for the given modifier type
    pub fn for_type(&self, modifier_type: ModifierType) -> &[String] {
        match modifier_type {
            ModifierType::Pseudo => &self.pseudo,
            ModifierType::Explicit => &self.explicit,
            ModifierType::Implicit => &self.implicit,
            ModifierType::Crafted => &self.crafted,
            ModifierType::Enchant => &self.enchant,
            ModifierType::Fractured => &self.fractured,
        }
    }
}

/// A stat description, identified by its translation reference
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Stat {
    /// Translation reference, e.g. `#% increased Armour`
    #[serde(rename = "ref")]
    pub reference: String,
    pub matchers: Vec<StatMatcher>,
    pub trade: TradeIds,
    pub better: StatBetter,
}

impl Stat {
    pub fn new(reference: impl Into<String>) -> Self {
        let reference = reference.into();
        Self {
            matchers: vec![StatMatcher { string: reference.clone() }],
            reference,
            trade: TradeIds::default(),
            better: StatBetter::PositiveRoll,
        }
    }
}

/// Modifier a stat line was read from
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ModifierInfo {
    #[serde(rename = "type")]
    pub modifier_type: ModifierType,
    pub tags: Vec<String>,
}

/// A parsed roll plus display flags
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ParsedRoll {
    #[serde(flatten)]
    pub roll: StatRoll,
    /// Display with two decimal places
    pub dp: bool,
    /// Not affected by "increased effect" modifiers
    pub unscalable: bool,
}

/// One modifier's contribution to a calculated stat
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StatSource {
    pub modifier: ModifierInfo,
    pub translation: StatMatcher,
    pub roll: Option<ParsedRoll>,
    pub contributes: Option<StatRoll>,
}

impl StatSource {
    /// What this source adds to the stat total
    pub fn contribution(&self) -> Option<StatRoll> {
        self.contributes.or_else(|| self.roll.map(|r| r.roll))
    }
}

/// A stat aggregated over every modifier that grants it
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StatCalculated {
    pub stat: Stat,
    #[serde(rename = "type")]
    pub modifier_type: ModifierType,
    pub sources: Vec<StatSource>,
}

impl StatCalculated {
    /// Total contribution of all sources
    pub fn total(&self) -> StatRoll {
        self.sources.iter().filter_map(StatSource::contribution).sum()
    }
}
