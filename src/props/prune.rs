//! Removal of stats subsumed by derived properties

use std::collections::HashSet;

use crate::stats::StatCalculated;

/// Drop every stat whose reference is in `used`, keeping the order of the
/// rest. Returns how many were removed.
pub fn remove_used_stats(stats: &mut Vec<StatCalculated>, used: &HashSet<String>) -> usize {
    let before = stats.len();
    stats.retain(|calc| !used.contains(calc.stat.reference.as_str()));
    let removed = before - stats.len();
    if removed > 0 {
        log::debug!("Removed {} stats covered by item properties", removed);
    }
    removed
}
