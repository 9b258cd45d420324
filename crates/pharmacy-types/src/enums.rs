//! Enumeration types for the pharmacy simulation.

use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The rule family a drug belongs to.
///
/// The category is resolved once from the drug's name. Any name that is not
/// recognized falls back to [`DrugCategory::Normal`]; there is no error path.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export, export_to = "bindings/")]
pub enum DrugCategory {
    /// Loses benefit as it ages, twice as fast once expired.
    #[default]
    Normal,
    /// Gains benefit as it ages, twice as fast once expired.
    HerbalTea,
    /// Never expires and never changes benefit.
    MagicPill,
    /// Gains benefit faster as expiry nears, then drops to zero once expired.
    Fervex,
    /// Degrades twice as fast as a normal drug.
    Dafalgan,
}

impl DrugCategory {
    /// Every recognized category, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::Normal,
        Self::HerbalTea,
        Self::MagicPill,
        Self::Fervex,
        Self::Dafalgan,
    ];

    /// Resolve a category from a drug name.
    ///
    /// Both the display spelling (`"Herbal Tea"`) and the compact identifier
    /// (`"HerbalTea"`) are accepted. Matching is case-sensitive. Unknown
    /// names resolve to [`DrugCategory::Normal`].
    pub fn from_name(name: &str) -> Self {
        match name {
            "Herbal Tea" | "HerbalTea" => Self::HerbalTea,
            "Magic Pill" | "MagicPill" => Self::MagicPill,
            "Fervex" => Self::Fervex,
            "Dafalgan" => Self::Dafalgan,
            _ => Self::Normal,
        }
    }

    /// The human-readable name of the category.
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::HerbalTea => "Herbal Tea",
            Self::MagicPill => "Magic Pill",
            Self::Fervex => "Fervex",
            Self::Dafalgan => "Dafalgan",
        }
    }

    /// Whether drugs of this category age at all.
    pub const fn ages(self) -> bool {
        !matches!(self, Self::MagicPill)
    }
}

impl fmt::Display for DrugCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_resolve() {
        assert_eq!(DrugCategory::from_name("Herbal Tea"), DrugCategory::HerbalTea);
        assert_eq!(DrugCategory::from_name("Magic Pill"), DrugCategory::MagicPill);
        assert_eq!(DrugCategory::from_name("Fervex"), DrugCategory::Fervex);
        assert_eq!(DrugCategory::from_name("Dafalgan"), DrugCategory::Dafalgan);
    }

    #[test]
    fn compact_identifiers_resolve() {
        assert_eq!(DrugCategory::from_name("HerbalTea"), DrugCategory::HerbalTea);
        assert_eq!(DrugCategory::from_name("MagicPill"), DrugCategory::MagicPill);
        assert_eq!(DrugCategory::from_name("Normal"), DrugCategory::Normal);
    }

    #[test]
    fn unknown_names_fall_back_to_normal() {
        assert_eq!(DrugCategory::from_name("Doliprane"), DrugCategory::Normal);
        assert_eq!(DrugCategory::from_name(""), DrugCategory::Normal);
        assert_eq!(DrugCategory::from_name("herbal tea"), DrugCategory::Normal);
        assert_eq!(DrugCategory::from_name("Fervex "), DrugCategory::Normal);
    }

    #[test]
    fn display_round_trips_through_from_name() {
        for category in DrugCategory::ALL {
            assert_eq!(DrugCategory::from_name(&category.to_string()), category);
        }
    }

    #[test]
    fn only_magic_pill_is_ageless() {
        let ageless: Vec<DrugCategory> = DrugCategory::ALL
            .into_iter()
            .filter(|c| !c.ages())
            .collect();
        assert_eq!(ageless, vec![DrugCategory::MagicPill]);
    }
}
