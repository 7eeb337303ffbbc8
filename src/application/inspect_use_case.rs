// ============================================================
// Layer 2 — InspectUseCase
// ============================================================
// Loads a saved splits_final.json, summarises every fold and
// checks the patient-grouping invariants.

use anyhow::Result;
use std::path::PathBuf;

use crate::infra::{
    report::{summarize, validate_split_set, FoldSummary},
    splits_store::SplitsStore,
};

pub struct InspectUseCase {
    splits_dir: PathBuf,
}

impl InspectUseCase {
    pub fn new(splits_dir: impl Into<PathBuf>) -> Self {
        Self { splits_dir: splits_dir.into() }
    }

    /// Summarise the stored split set.
    ///
    /// Fails if the file is missing or breaks an invariant; the
    /// summaries are logged first so the offending fold is visible.
    pub fn execute(&self) -> Result<Vec<FoldSummary>> {
        let store  = SplitsStore::open(&self.splits_dir);
        let splits = store.load_splits()?;
        tracing::info!("Loaded {} folds from '{}'", splits.len(), self.splits_dir.display());

        let summaries = summarize(&splits);
        for s in &summaries {
            if s.leaked_patients.is_empty() {
                tracing::debug!("{}", s);
            } else {
                tracing::warn!("{}", s);
            }
        }

        validate_split_set(&splits)?;
        Ok(summaries)
    }
}
