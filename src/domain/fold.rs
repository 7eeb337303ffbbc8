// ============================================================
// Layer 3 — Fold Domain Type
// ============================================================
// One train/validation partition of the dataset.
//
// A fold always has exactly two sides, so it is a fixed
// two-field struct rather than an open-ended map. Serialised
// with serde it still reads as the familiar
//   {"train": [...], "val": [...]}
// object, so a list of folds is a valid splits_final.json.
//
// Invariant (upheld by the splitter, checked by infra::report):
//   every identifier sharing a patient key sits entirely in
//   `train` or entirely in `val`, never on both sides.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::data::patient_id::extract_patient_id;

/// A single cross-validation fold.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Fold {
    /// Sample identifiers used for training, in input order
    pub train: Vec<String>,

    /// Sample identifiers held out for validation, in input order
    pub val: Vec<String>,
}

/// The ordered list of folds produced by one split run.
pub type SplitSet = Vec<Fold>;

impl Fold {
    pub fn new(train: Vec<String>, val: Vec<String>) -> Self {
        Self { train, val }
    }

    /// Total number of identifiers on both sides
    pub fn len(&self) -> usize {
        self.train.len() + self.val.len()
    }

    pub fn is_empty(&self) -> bool {
        self.train.is_empty() && self.val.is_empty()
    }

    /// Unique patient keys on the training side
    pub fn train_patients(&self) -> BTreeSet<String> {
        patients_of(&self.train)
    }

    /// Unique patient keys on the validation side
    pub fn val_patients(&self) -> BTreeSet<String> {
        patients_of(&self.val)
    }

    /// Patient keys that appear on both sides, sorted.
    /// Empty for every fold the splitter produces.
    pub fn leaked_patients(&self) -> Vec<String> {
        let val = self.val_patients();
        self.train_patients()
            .into_iter()
            .filter(|p| val.contains(p))
            .collect()
    }
}

fn patients_of(identifiers: &[String]) -> BTreeSet<String> {
    identifiers.iter().map(|id| extract_patient_id(id)).collect()
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_len_counts_both_sides() {
        let fold = Fold::new(strings(&["1_a", "2_a"]), strings(&["3_a"]));
        assert_eq!(fold.len(), 3);
        assert!(!fold.is_empty());
        assert!(Fold::default().is_empty());
    }

    #[test]
    fn test_patient_sets() {
        let fold = Fold::new(strings(&["1_a", "1_b", "2_a"]), strings(&["3_a", "3_b"]));
        assert_eq!(fold.train_patients(), BTreeSet::from(["1".to_string(), "2".to_string()]));
        assert_eq!(fold.val_patients(), BTreeSet::from(["3".to_string()]));
        assert!(fold.leaked_patients().is_empty());
    }

    #[test]
    fn test_leaked_patients_detected() {
        // Patient 7 has one image on each side
        let fold = Fold::new(strings(&["7_a", "2_a"]), strings(&["7_b", "3_a"]));
        assert_eq!(fold.leaked_patients(), vec!["7".to_string()]);
    }

    #[test]
    fn test_serialises_as_train_val_object() {
        let fold = Fold::new(strings(&["1_a"]), strings(&["2_a"]));
        let json = serde_json::to_string(&fold).unwrap();
        assert_eq!(json, r#"{"train":["1_a"],"val":["2_a"]}"#);

        let back: Fold = serde_json::from_str(&json).unwrap();
        assert_eq!(back, fold);
    }
}
