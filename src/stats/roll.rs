//! Stat rolls
//!
//! A value together with the range it could have rolled in.

use std::ops::{Add, Mul};

use serde::{Deserialize, Serialize};

/// A property's representative value plus its possible range.
///
/// `min <= value <= max` is expected but not enforced; callers supply
/// consistent inputs.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct StatRoll {
    pub value: f64,
    pub min: f64,
    pub max: f64,
}

impl StatRoll {
    pub fn new(value: f64, min: f64, max: f64) -> Self {
        Self { value, min, max }
    }

    /// A roll with no range at all
    pub fn fixed(value: f64) -> Self {
        Self { value, min: value, max: value }
    }

    /// Share of `total` this roll's value represents.
    ///
    /// NaN when `total.value` is zero; every comparison against NaN is false.
    pub fn ratio_of(&self, total: &StatRoll) -> f64 {
        self.value / total.value
    }
}

/// Field-wise sum. Bounds are treated as uncorrelated.
impl Add for StatRoll {
    type Output = StatRoll;

    fn add(self, rhs: StatRoll) -> StatRoll {
        StatRoll {
            value: self.value + rhs.value,
            min: self.min + rhs.min,
            max: self.max + rhs.max,
        }
    }
}

/// Field-wise product: `min * min` and `max * max`.
///
/// Two rolls sourced from the same modifier are not modelled as correlated,
/// so the resulting range can be wider than what is actually reachable.
impl Mul for StatRoll {
    type Output = StatRoll;

    fn mul(self, rhs: StatRoll) -> StatRoll {
        StatRoll {
            value: self.value * rhs.value,
            min: self.min * rhs.min,
            max: self.max * rhs.max,
        }
    }
}

impl std::iter::Sum for StatRoll {
    fn sum<I: Iterator<Item = StatRoll>>(iter: I) -> StatRoll {
        iter.fold(StatRoll::default(), |acc, roll| acc + roll)
    }
}
