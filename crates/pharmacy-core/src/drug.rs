//! A single drug and its daily update.

use pharmacy_types::{DrugCategory, DrugRecord, DrugState};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::rules;

/// One drug in the catalogue.
///
/// The category is resolved from the name at construction and never changes.
/// `expires_in` and `benefit` are only ever changed by [`Drug::tick`].
/// Serializes as a [`DrugRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "DrugRecord", into = "DrugRecord")]
pub struct Drug {
    name: String,
    category: DrugCategory,
    state: DrugState,
}

impl Drug {
    /// Create a drug. Any name is accepted; unknown names use the normal rule.
    pub fn new(name: impl Into<String>, expires_in: i32, benefit: i32) -> Self {
        let name = name.into();
        let category = DrugCategory::from_name(&name);
        Self {
            name,
            category,
            state: DrugState::new(expires_in, benefit),
        }
    }

    /// Advance the drug by one day according to its category rule.
    pub fn tick(&mut self) {
        let before = self.state;
        self.state = rules::next_state(self.category, before);
        trace!(
            name = %self.name,
            category = %self.category,
            expires_in = self.state.expires_in,
            benefit = self.state.benefit,
            benefit_before = before.benefit,
            "drug ticked"
        );
    }

    /// Name as supplied at construction.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The rule category resolved from the name.
    pub const fn category(&self) -> DrugCategory {
        self.category
    }

    /// Days left before expiry.
    pub const fn expires_in(&self) -> i32 {
        self.state.expires_in
    }

    /// Current benefit.
    pub const fn benefit(&self) -> i32 {
        self.state.benefit
    }

    /// Both mutable fields as a value.
    pub const fn state(&self) -> DrugState {
        self.state
    }

    /// Whether the drug has reached its expiry date.
    pub const fn is_expired(&self) -> bool {
        self.state.is_expired()
    }

    /// Snapshot the drug for display or storage.
    pub fn to_record(&self) -> DrugRecord {
        DrugRecord::new(self.name.clone(), self.state.expires_in, self.state.benefit)
    }
}

impl From<DrugRecord> for Drug {
    fn from(record: DrugRecord) -> Self {
        Self::new(record.name, record.expires_in, record.benefit)
    }
}

impl From<Drug> for DrugRecord {
    fn from(drug: Drug) -> Self {
        Self::new(drug.name, drug.state.expires_in, drug.state.benefit)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn category_is_resolved_from_name() {
        assert_eq!(Drug::new("Herbal Tea", 10, 5).category(), DrugCategory::HerbalTea);
        assert_eq!(Drug::new("Doliprane", 20, 30).category(), DrugCategory::Normal);
    }

    #[test]
    fn constructor_accepts_values_as_is() {
        let drug = Drug::new("test", -4, 90);
        assert_eq!(drug.expires_in(), -4);
        assert_eq!(drug.benefit(), 90);
    }

    #[test]
    fn tick_applies_normal_rule() {
        let mut drug = Drug::new("test", 2, 3);
        drug.tick();
        assert_eq!(drug, Drug::new("test", 1, 2));
    }

    #[test]
    fn tick_keeps_name_and_category() {
        let mut drug = Drug::new("Fervex", 3, 10);
        drug.tick();
        drug.tick();
        assert_eq!(drug.name(), "Fervex");
        assert_eq!(drug.category(), DrugCategory::Fervex);
        assert_eq!(drug.state(), DrugState::new(1, 16));
    }

    #[test]
    fn magic_pill_never_changes() {
        let mut drug = Drug::new("Magic Pill", 5, 40);
        for _ in 0..100 {
            drug.tick();
        }
        assert_eq!(drug.expires_in(), 5);
        assert_eq!(drug.benefit(), 40);
    }

    #[test]
    fn expiry_flips_after_reaching_zero() {
        let mut drug = Drug::new("test", 1, 10);
        assert!(!drug.is_expired());
        drug.tick();
        assert!(drug.is_expired());
        assert_eq!(drug.expires_in(), 0);
    }

    #[test]
    fn serializes_as_record() {
        let drug = Drug::new("Dafalgan", 20, 30);
        let json = serde_json::to_string(&drug).unwrap();
        assert_eq!(json, r#"{"name":"Dafalgan","expiresIn":20,"benefit":30}"#);

        let back: Drug = serde_json::from_str(&json).unwrap();
        assert_eq!(back.category(), DrugCategory::Dafalgan);
        assert_eq!(back, drug);
    }

    #[test]
    fn record_conversion_preserves_name_verbatim() {
        let drug = Drug::from(DrugRecord::new("HerbalTea", 1, 1));
        assert_eq!(drug.category(), DrugCategory::HerbalTea);
        assert_eq!(drug.to_record().name, "HerbalTea");
        assert_eq!(DrugRecord::from(drug), DrugRecord::new("HerbalTea", 1, 1));
    }
}
