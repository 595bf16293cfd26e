//! Default visibility of derived properties
//!
//! Pure rules deciding whether a property filter starts enabled, disabled,
//! or hidden from the default view.

use crate::items::ParsedItem;
use crate::stats::StatRoll;

/// Share of total DPS a damage type needs to count as the main source
pub const DOMINANCE_RATIO: f64 = 0.67;

pub const ELEMENTAL_NOT_MAIN: &str = "Elemental damage is not the main source of DPS";
pub const PHYSICAL_NOT_MAIN: &str = "Physical damage is not the main source of DPS";

/// Visibility overrides for one property filter.
///
/// `None` leaves the converter's default in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Visibility {
    pub disabled: Option<bool>,
    pub hidden: Option<&'static str>,
}

impl Visibility {
    pub fn enabled() -> Self {
        Self { disabled: Some(false), hidden: None }
    }

    pub fn disabled() -> Self {
        Self { disabled: Some(true), hidden: None }
    }
}

/// Item shows exactly one of armour, evasion, energy shield or ward
pub fn is_single_attr_armour(item: &ParsedItem) -> bool {
    item.defence_count() == 1
}

/// Hybrid defences start disabled, single-attribute ones enabled
pub fn defence_visibility(item: &ParsedItem) -> Visibility {
    Visibility {
        disabled: Some(!is_single_attr_armour(item)),
        hidden: None,
    }
}

/// `part` contributes less than the dominance ratio of `total`.
///
/// False when `total.value` is zero: the ratio is NaN.
pub fn is_minor_source(part: &StatRoll, total: &StatRoll) -> bool {
    part.ratio_of(total) < DOMINANCE_RATIO
}

pub fn elemental_dps_visibility(edps: &StatRoll, dps: &StatRoll) -> Visibility {
    let minor = is_minor_source(edps, dps);
    Visibility {
        disabled: Some(minor),
        hidden: minor.then_some(ELEMENTAL_NOT_MAIN),
    }
}

/// Physical DPS is only searched on bases bought for it, and only when it
/// makes up most of the damage
pub fn physical_dps_visibility(physical_relevant: bool, pdps: &StatRoll, dps: &StatRoll) -> Visibility {
    let minor = is_minor_source(pdps, dps);
    Visibility {
        disabled: Some(!physical_relevant || minor),
        hidden: minor.then_some(PHYSICAL_NOT_MAIN),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::ItemCategory;

    #[test]
    fn test_single_attr_armour() {
        let mut item = ParsedItem::new(ItemCategory::Helmet);
        item.armour_ev = Some(150.0);
        item.armour_block = Some(20.0);
        assert!(is_single_attr_armour(&item));
        assert_eq!(defence_visibility(&item), Visibility::enabled());

        item.armour_ward = Some(40.0);
        assert!(!is_single_attr_armour(&item));
        assert_eq!(defence_visibility(&item), Visibility::disabled());
    }

    #[test]
    fn test_elemental_minor_source_is_hidden() {
        let vis = elemental_dps_visibility(&StatRoll::fixed(40.0), &StatRoll::fixed(100.0));
        assert_eq!(vis.disabled, Some(true));
        assert_eq!(vis.hidden, Some(ELEMENTAL_NOT_MAIN));
    }

    #[test]
    fn test_elemental_main_source_is_enabled() {
        let vis = elemental_dps_visibility(&StatRoll::fixed(80.0), &StatRoll::fixed(100.0));
        assert_eq!(vis, Visibility::enabled());
    }

    #[test]
    fn test_physical_dps_depends_on_category() {
        let pdps = StatRoll::fixed(80.0);
        let dps = StatRoll::fixed(100.0);
        assert_eq!(physical_dps_visibility(true, &pdps, &dps), Visibility::enabled());
        assert_eq!(physical_dps_visibility(false, &pdps, &dps), Visibility::disabled());
    }

    #[test]
    fn test_physical_minor_source_is_hidden_and_disabled() {
        let vis = physical_dps_visibility(true, &StatRoll::fixed(30.0), &StatRoll::fixed(100.0));
        assert_eq!(vis.disabled, Some(true));
        assert_eq!(vis.hidden, Some(PHYSICAL_NOT_MAIN));
    }

    #[test]
    fn test_zero_dps_is_never_minor() {
        let zero = StatRoll::fixed(0.0);
        assert!(!is_minor_source(&zero, &zero));
        assert_eq!(elemental_dps_visibility(&zero, &zero), Visibility::enabled());
        assert_eq!(physical_dps_visibility(true, &zero, &zero), Visibility::enabled());
        assert_eq!(physical_dps_visibility(false, &zero, &zero), Visibility::disabled());
    }

    #[test]
    fn test_ratio_at_threshold_is_main_source() {
        assert!(!is_minor_source(&StatRoll::fixed(67.0), &StatRoll::fixed(100.0)));
        assert!(is_minor_source(&StatRoll::fixed(66.9), &StatRoll::fixed(100.0)));
    }
}
