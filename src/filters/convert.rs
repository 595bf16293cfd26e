//! Calculated stat to filter conversion
//!
//! Turns an aggregated stat into a filter with a search range around its
//! current value.

use super::filter::{FilterBounds, FilterRoll, FilterTag, RollDefault, StatFilter};
use crate::items::ParsedItem;
use crate::stats::{StatBetter, StatCalculated};

/// Builds filters out of calculated stats
pub trait FilterConverter {
    /// Convert `calc` into a filter, widening the search by
    /// `search_in_range` percent of the value
    fn convert(&self, calc: &StatCalculated, search_in_range: f64, item: &ParsedItem) -> StatFilter;
}

/// Converter used by the price check window
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultConverter;

impl FilterConverter for DefaultConverter {
    fn convert(&self, calc: &StatCalculated, search_in_range: f64, _item: &ParsedItem) -> StatFilter {
        let stat = &calc.stat;

        let text = calc.sources.first()
            .map(|source| source.translation.string.as_str())
            .filter(|text| !text.is_empty())
            .or_else(|| stat.matchers.first().map(|m| m.string.as_str()))
            .unwrap_or(stat.reference.as_str())
            .to_string();

        StatFilter {
            trade_id: stat.trade.for_type(calc.modifier_type).to_vec(),
            stat_ref: stat.reference.clone(),
            text,
            tag: FilterTag::from(calc.modifier_type),
            sources: calc.sources.clone(),
            roll: filter_roll(calc, search_in_range),
            disabled: false,
            hidden: None,
        }
    }
}

/// Numeric part of the filter, `None` for stats without any roll
fn filter_roll(calc: &StatCalculated, search_in_range: f64) -> Option<FilterRoll> {
    if calc.sources.iter().all(|source| source.contribution().is_none()) {
        return None;
    }

    let value = calc.total().value;
    let dp = calc.sources.iter().any(|source| source.roll.is_some_and(|r| r.dp));

    let bounds = match calc.sources.as_slice() {
        [single] => single.roll.map(|r| FilterBounds { min: r.roll.min, max: r.roll.max }),
        _ => None,
    };

    let (min, max) = match calc.stat.better {
        StatBetter::PositiveRoll => {
            (Some(percent_roll(value, -search_in_range, f64::floor, dp)), None)
        }
        StatBetter::NegativeRoll => {
            (None, Some(percent_roll(value, search_in_range, f64::ceil, dp)))
        }
        StatBetter::NotComparable => (Some(value), Some(value)),
    };

    Some(FilterRoll {
        value,
        min,
        max,
        default: RollDefault { min, max },
        bounds,
        dp,
    })
}

/// Move `value` by `percent` of itself, then round with `round`
///
/// Rounds to two decimal places when `dp` is set, to whole numbers otherwise.
pub fn percent_roll(value: f64, percent: f64, round: fn(f64) -> f64, dp: bool) -> f64 {
    let result = value + value * percent / 100.0;
    if dp {
        round(result * 100.0) / 100.0
    } else {
        round(result)
    }
}
