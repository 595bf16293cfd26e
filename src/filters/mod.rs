//! Stat filters
//!
//! Filter records, the pass context they are collected in, and the
//! generic conversion from calculated stats.

pub mod filter;
pub mod convert;
pub mod context;

pub use filter::{StatFilter, FilterTag, FilterRoll, FilterBounds, RollDefault};
pub use convert::{FilterConverter, DefaultConverter, percent_roll};
pub use context::{FiltersCreationContext, DEFAULT_SEARCH_RANGE};
