//! The pharmacy: an ordered catalogue of drugs advanced together.

use pharmacy_types::DrugRecord;

use crate::drug::Drug;

/// Ordered collection of drugs.
///
/// Order is the caller's and is never changed. Duplicates and an empty
/// catalogue are both legal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pharmacy {
    drugs: Vec<Drug>,
}

impl Pharmacy {
    /// Create a pharmacy holding `drugs` in the given order.
    pub const fn new(drugs: Vec<Drug>) -> Self {
        Self { drugs }
    }

    /// Advance every drug by one day, in stored order, and return the
    /// updated catalogue.
    pub fn advance_all(&mut self) -> &[Drug] {
        for drug in &mut self.drugs {
            drug.tick();
        }
        &self.drugs
    }

    /// The catalogue in stored order.
    pub fn drugs(&self) -> &[Drug] {
        &self.drugs
    }

    /// Number of drugs held.
    pub fn len(&self) -> usize {
        self.drugs.len()
    }

    /// Whether the catalogue is empty.
    pub fn is_empty(&self) -> bool {
        self.drugs.is_empty()
    }

    /// Number of drugs at or past their expiry date.
    pub fn expired_count(&self) -> usize {
        self.drugs.iter().filter(|d| d.is_expired()).count()
    }

    /// Snapshot every drug, in stored order.
    pub fn records(&self) -> Vec<DrugRecord> {
        self.drugs.iter().map(Drug::to_record).collect()
    }

    /// Give the drugs back to the caller.
    pub fn into_drugs(self) -> Vec<Drug> {
        self.drugs
    }
}

impl FromIterator<Drug> for Pharmacy {
    fn from_iter<I: IntoIterator<Item = Drug>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl From<Vec<DrugRecord>> for Pharmacy {
    fn from(records: Vec<DrugRecord>) -> Self {
        records.into_iter().map(Drug::from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn benefits(drugs: &[Drug]) -> Vec<i32> {
        drugs.iter().map(Drug::benefit).collect()
    }

    #[test]
    fn advances_single_drug() {
        let mut pharmacy = Pharmacy::new(vec![Drug::new("test", 2, 3)]);
        assert_eq!(pharmacy.advance_all(), &[Drug::new("test", 1, 2)]);
    }

    #[test]
    fn advances_every_drug_once() {
        let mut pharmacy = Pharmacy::new(vec![
            Drug::new("Test drug", 10, 17),
            Drug::new("Test drug", 10, 20),
            Drug::new("Test drug", 10, 20),
            Drug::new("Test drug", -2, 20),
        ]);
        assert_eq!(benefits(pharmacy.advance_all()), vec![16, 19, 19, 18]);
    }

    #[test]
    fn duplicates_advance_independently() {
        let mut pharmacy = Pharmacy::new(vec![
            Drug::new("Dafalgan", 10, 20),
            Drug::new("Dafalgan", 10, 20),
            Drug::new("Dafalgan", 10, 20),
            Drug::new("Test drug", 10, 20),
        ]);
        assert_eq!(benefits(pharmacy.advance_all()), vec![18, 18, 18, 19]);
    }

    #[test]
    fn empty_pharmacy_is_a_no_op() {
        let mut pharmacy = Pharmacy::default();
        assert!(pharmacy.advance_all().is_empty());
        assert!(pharmacy.is_empty());
        assert_eq!(pharmacy.len(), 0);
    }

    #[test]
    fn returned_slice_is_the_stored_catalogue() {
        let mut pharmacy: Pharmacy = vec![Drug::new("Fervex", 4, 10)].into_iter().collect();
        let returned = pharmacy.advance_all().to_vec();
        assert_eq!(returned, pharmacy.drugs());
    }

    #[test]
    fn counts_expired_drugs() {
        let pharmacy = Pharmacy::from(vec![
            DrugRecord::new("a", 0, 1),
            DrugRecord::new("b", 1, 1),
            DrugRecord::new("c", -3, 1),
        ]);
        assert_eq!(pharmacy.expired_count(), 2);
    }

    #[test]
    fn records_follow_stored_order() {
        let pharmacy = Pharmacy::new(vec![Drug::new("b", 1, 2), Drug::new("a", 3, 4)]);
        let names: Vec<String> = pharmacy.records().into_iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["b".to_owned(), "a".to_owned()]);
        assert_eq!(pharmacy.into_drugs().len(), 2);
    }
}
