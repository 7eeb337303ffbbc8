// ============================================================
// Layer 4 — Patient-Grouped Cross-Validation Splitter
// ============================================================
// Produces k train/validation folds in which no patient ever
// appears on both sides of the same fold.
//
// Why group by patient?
//   One patient usually contributes several images. If some of
//   them land in training and others in validation, the model
//   can recognise the patient rather than the pathology, and the
//   validation score is inflated. Splitting at patient level
//   keeps the validation set truly unseen.
//
// Pipeline:
//
//   identifiers ──► extract_patient_id ──► unique keys (sorted)
//                                               │
//                                               ▼
//                                   KFold (seeded shuffle)
//                                               │
//                                               ▼
//   Fold { train, val } ◄── expand keys back to identifiers
//
// Unique keys are sorted before shuffling so the result only
// depends on the identifiers and the seed, never on hash order.
// Expansion walks the original list, so both sides keep input
// order and duplicate identifiers travel together.

use std::collections::{BTreeSet, HashSet};

use crate::data::kfold::KFold;
use crate::data::patient_id::extract_patient_id;
use crate::domain::error::SplitError;
use crate::domain::fold::{Fold, SplitSet};

/// Seed used when the caller does not pick one
pub const DEFAULT_SEED: u64 = 12345;

/// Number of folds used when the caller does not pick one
pub const DEFAULT_N_SPLITS: usize = 5;

/// Split `train_identifiers` into `n_splits` patient-grouped folds.
///
/// # Arguments
/// * `train_identifiers` - Sample identifiers (usually file names)
/// * `seed`              - Seed for the fold shuffle
/// * `n_splits`          - Number of folds, at least 2
///
/// # Errors
/// `SplitError::InvalidParameter` if `n_splits < 2` or there are
/// fewer unique patients than folds.
///
/// # Example
/// ```
/// use patient_crossval::data::splitter::generate_crossval_split;
///
/// let ids = ["1_a", "1_b", "2_a", "3_a", "3_b", "3_c"];
/// let folds = generate_crossval_split(&ids, 0, 3).unwrap();
/// assert_eq!(folds.len(), 3);
/// ```
pub fn generate_crossval_split<S: AsRef<str>>(
    train_identifiers: &[S],
    seed:              u64,
    n_splits:          usize,
) -> Result<SplitSet, SplitError> {
    // Patient key for every identifier, aligned by position
    let patient_ids: Vec<String> = train_identifiers
        .iter()
        .map(|id| extract_patient_id(id.as_ref()))
        .collect();

    let unique_patients: Vec<&str> = patient_ids
        .iter()
        .map(String::as_str)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    tracing::debug!(
        "{} identifiers belong to {} unique patients",
        train_identifiers.len(),
        unique_patients.len()
    );

    let kfold = KFold::new(n_splits, seed);
    let mut splits = Vec::with_capacity(n_splits);

    for (i, fold_idx) in kfold.split(unique_patients.len())?.into_iter().enumerate() {
        let val_patients: HashSet<&str> =
            fold_idx.val.iter().map(|&k| unique_patients[k]).collect();

        let mut train = Vec::new();
        let mut val   = Vec::new();

        // Every key is either in this fold's group or not, so the
        // two sides are disjoint and together cover the input
        for (identifier, patient) in train_identifiers.iter().zip(&patient_ids) {
            if val_patients.contains(patient.as_str()) {
                val.push(identifier.as_ref().to_string());
            } else {
                train.push(identifier.as_ref().to_string());
            }
        }

        tracing::debug!(
            "Fold {}: {} train / {} val identifiers ({} val patients)",
            i,
            train.len(),
            val.len(),
            val_patients.len()
        );

        splits.push(Fold::new(train, val));
    }

    tracing::info!(
        "Generated {} folds over {} patients (seed {})",
        splits.len(),
        unique_patients.len(),
        seed
    );

    Ok(splits)
}
