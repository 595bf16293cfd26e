//! Derived property to filter assembly

use super::heuristics::Visibility;
use crate::filters::{FilterConverter, FilterTag, StatFilter};
use crate::items::ParsedItem;
use crate::stats::{
    ModifierInfo, ModifierType, ParsedRoll, Stat, StatBetter, StatCalculated, StatMatcher,
    StatRoll, StatSource, TradeIds,
};

/// A property computed from the item's property block
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedProperty {
    /// Display template, e.g. `Armour: #`
    pub reference: &'static str,
    /// Trade-site pseudo id, e.g. `armour.armour`
    pub trade_id: &'static str,
    pub roll: StatRoll,
    /// Display with two decimal places
    pub dp: bool,
    pub visibility: Visibility,
}

/// Build the filter for a derived property.
///
/// The converter does the generic work; the result is then tagged as a
/// property, stripped of sources, and given the property's visibility.
pub fn prop_to_filter(
    prop: &DerivedProperty,
    converter: &dyn FilterConverter,
    search_in_range: f64,
    item: &ParsedItem,
) -> StatFilter {
    let stat = Stat {
        reference: prop.reference.to_string(),
        matchers: vec![StatMatcher { string: prop.reference.to_string() }],
        trade: TradeIds {
            pseudo: vec![prop.trade_id.to_string()],
            ..Default::default()
        },
        better: StatBetter::PositiveRoll,
    };

    let calc = StatCalculated {
        modifier_type: ModifierType::Pseudo,
        sources: vec![StatSource {
            modifier: ModifierInfo {
                modifier_type: ModifierType::Pseudo,
                tags: Vec::new(),
            },
            translation: StatMatcher { string: prop.reference.to_string() },
            roll: Some(ParsedRoll {
                roll: prop.roll,
                dp: prop.dp,
                unscalable: false,
            }),
            contributes: Some(prop.roll),
        }],
        stat,
    };

    let mut filter = converter.convert(&calc, search_in_range, item);
    filter.tag = FilterTag::Property;
    filter.sources.clear();
    if let Some(disabled) = prop.visibility.disabled {
        filter.disabled = disabled;
    }
    if let Some(reason) = prop.visibility.hidden {
        filter.hidden = Some(reason.to_string());
    }

    log::debug!(
        "Property {} = {:.2} ({:.2}..{:.2}), disabled: {}",
        prop.trade_id, prop.roll.value, prop.roll.min, prop.roll.max, filter.disabled
    );
    filter
}
