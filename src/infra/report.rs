// ============================================================
// Layer 6 — Split Report
// ============================================================
// Summarises a split set fold by fold and checks that it obeys
// the rules every patient-grouped split set must follow:
//
//   1. No patient appears on both sides of any fold
//   2. Each patient is validated in exactly one fold
//   3. Every fold covers the same identifiers (train + val)
//
// The splitter guarantees all three by construction. The
// checks exist for split files loaded from disk, which may have
// been edited by hand or produced by another tool.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::domain::error::SplitError;
use crate::domain::fold::Fold;

/// Sample and patient counts for one fold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoldSummary {
    /// Zero-based fold index
    pub fold: usize,
    pub n_train: usize,
    pub n_val: usize,
    pub n_train_patients: usize,
    pub n_val_patients: usize,
    /// Patients found on both sides — empty for a valid fold
    pub leaked_patients: Vec<String>,
}

impl std::fmt::Display for FoldSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "fold {}: train {} images / {} patients, val {} images / {} patients",
            self.fold, self.n_train, self.n_train_patients, self.n_val, self.n_val_patients
        )?;
        if !self.leaked_patients.is_empty() {
            write!(f, ", LEAKED: {}", self.leaked_patients.join(","))?;
        }
        Ok(())
    }
}

/// Build one summary per fold.
pub fn summarize(splits: &[Fold]) -> Vec<FoldSummary> {
    splits
        .iter()
        .enumerate()
        .map(|(fold, f)| FoldSummary {
            fold,
            n_train: f.train.len(),
            n_val: f.val.len(),
            n_train_patients: f.train_patients().len(),
            n_val_patients: f.val_patients().len(),
            leaked_patients: f.leaked_patients(),
        })
        .collect()
}

/// Check the patient-grouping and partition invariants.
///
/// # Errors
/// `SplitError::InvalidSplitSet` describing the first violation found.
pub fn validate_split_set(splits: &[Fold]) -> Result<(), SplitError> {
    let Some(first) = splits.first() else {
        return Err(SplitError::InvalidSplitSet("split set has no folds".into()));
    };

    let reference = sorted_members(first);
    let mut validated: BTreeSet<String> = BTreeSet::new();

    for (i, fold) in splits.iter().enumerate() {
        let leaked = fold.leaked_patients();
        if !leaked.is_empty() {
            return Err(SplitError::InvalidSplitSet(format!(
                "fold {i} has patients on both sides: {}",
                leaked.join(", ")
            )));
        }

        for patient in fold.val_patients() {
            if !validated.insert(patient.clone()) {
                return Err(SplitError::InvalidSplitSet(format!(
                    "patient {patient} is validated in more than one fold"
                )));
            }
        }

        if sorted_members(fold) != reference {
            return Err(SplitError::InvalidSplitSet(format!(
                "fold {i} does not cover the same identifiers as fold 0"
            )));
        }
    }

    let mut all_patients = first.train_patients();
    all_patients.extend(first.val_patients());
    if let Some(patient) = all_patients.difference(&validated).next() {
        return Err(SplitError::InvalidSplitSet(format!(
            "patient {patient} is never validated"
        )));
    }

    Ok(())
}

/// All identifiers of a fold as a sorted multiset
fn sorted_members(fold: &Fold) -> Vec<&str> {
    let mut all: Vec<&str> = fold
        .train
        .iter()
        .chain(&fold.val)
        .map(String::as_str)
        .collect();
    all.sort_unstable();
    all
}
