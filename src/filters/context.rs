//! Filter creation pass state

use super::filter::StatFilter;
use crate::items::ParsedItem;
use crate::stats::StatCalculated;

/// Default width of the search range, in percent of the value
pub const DEFAULT_SEARCH_RANGE: f64 = 10.0;

/// State of one filter creation pass over one item
#[derive(Debug, Clone)]
pub struct FiltersCreationContext<'a> {
    pub item: &'a ParsedItem,
    /// Filters created so far
    pub filters: Vec<StatFilter>,
    /// Item stats not yet turned into filters
    pub stats_by_type: Vec<StatCalculated>,
    /// Search range in percent
    pub search_in_range: f64,
}

impl<'a> FiltersCreationContext<'a> {
    pub fn new(item: &'a ParsedItem, search_in_range: f64) -> Self {
        Self {
            item,
            filters: Vec::new(),
            stats_by_type: item.stats_by_type.clone(),
            search_in_range,
        }
    }
}
