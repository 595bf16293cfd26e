//! Stat groupings
//!
//! Stat references split into flat and increased contributors of one
//! property family.

use serde::{Deserialize, Serialize};

/// Stat references contributing to a property, split by role
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StatRefs {
    /// Flat additions (`+# to Armour`, `Adds # to # Fire Damage`)
    pub flat: Vec<String>,
    /// Percentage increases (`#% increased Armour`)
    pub incr: Vec<String>,
}

/// Stats whose property value scales with item quality
pub type QualityStatGroup = StatRefs;

impl StatRefs {
    pub fn flat<S: Into<String>>(refs: impl IntoIterator<Item = S>) -> Self {
        Self {
            flat: refs.into_iter().map(Into::into).collect(),
            incr: Vec::new(),
        }
    }

    pub fn incr<S: Into<String>>(refs: impl IntoIterator<Item = S>) -> Self {
        Self {
            flat: Vec::new(),
            incr: refs.into_iter().map(Into::into).collect(),
        }
    }

    /// All references, flat first
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.flat.iter().chain(self.incr.iter()).map(String::as_str)
    }
}

/// Quality-affected stat groups per property family
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QualityStats {
    pub armour: QualityStatGroup,
    pub evasion: QualityStatGroup,
    pub energy_shield: QualityStatGroup,
    pub ward: QualityStatGroup,
    pub physical_damage: QualityStatGroup,
}

impl QualityStats {
    /// The four defence families, in emission order
    pub fn defences(&self) -> [&QualityStatGroup; 4] {
        [&self.armour, &self.evasion, &self.energy_shield, &self.ward]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iter_lists_flat_then_incr() {
        let group = StatRefs {
            flat: vec!["+# to Ward".to_string()],
            incr: vec!["#% increased Ward".to_string()],
        };
        let refs: Vec<&str> = group.iter().collect();
        assert_eq!(refs, vec!["+# to Ward", "#% increased Ward"]);
    }

    #[test]
    fn test_single_role_constructors() {
        let speed = StatRefs::incr(["#% increased Attack Speed"]);
        assert!(speed.flat.is_empty());
        assert_eq!(speed.incr.len(), 1);

        let block = StatRefs::flat(["+#% Chance to Block"]);
        assert!(block.incr.is_empty());
        assert_eq!(block.flat.len(), 1);
    }
}
