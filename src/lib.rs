//! Patient-grouped k-fold cross-validation splits.
//!
//! Image identifiers are grouped by the numeric patient ID at the
//! start of their file name, so that no patient ever has images on
//! both the training and the validation side of a fold.
//!
//! ```
//! use patient_crossval::generate_crossval_split;
//!
//! let ids = ["6375522_20_R_FLOOR-3_0000.png", "6375522_21_L_0000.png", "42_a.png", "7_a.png"];
//! let folds = generate_crossval_split(&ids, 12345, 2).unwrap();
//! assert_eq!(folds.len(), 2);
//! ```

pub mod application;
pub mod cli;
pub mod data;
pub mod domain;
pub mod infra;

pub use data::patient_id::extract_patient_id;
pub use data::splitter::{generate_crossval_split, DEFAULT_N_SPLITS, DEFAULT_SEED};
pub use domain::{error::SplitError, fold::Fold, fold::SplitSet};
