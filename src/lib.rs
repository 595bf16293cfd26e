//! Item Props - derived item properties for price checking
//!
//! Turns the property block of a parsed item (defences, weapon damage,
//! attack speed, crit) into searchable filters on a canonical basis:
//! defences at 20% quality, DPS split by damage type.

pub mod items;
pub mod stats;
pub mod filters;
pub mod providers;
pub mod props;
pub mod data;

// Re-export commonly used types
pub use items::{ParsedItem, ItemCategory};
pub use stats::{StatRoll, StatCalculated};
pub use filters::{StatFilter, FilterTag, FiltersCreationContext};
pub use props::{filter_item_prop, PropertyDeriver};
pub use data::{PropertyTables, TableLoader};
