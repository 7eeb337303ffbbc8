// ============================================================
// Layer 2 — SplitUseCase
// ============================================================
// Orchestrates a full split run in order:
//
//   Step 1: Load identifiers           (Layer 4 - data)
//   Step 2: Generate grouped folds     (Layer 4 - data)
//   Step 3: Validate the split set     (Layer 6 - infra)
//   Step 4: Save splits and config     (Layer 6 - infra)
//   Step 5: Log a per-fold summary     (Layer 6 - infra)

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::data::{
    loader::{DirectoryLister, ListFileSource},
    splitter::{generate_crossval_split, DEFAULT_N_SPLITS, DEFAULT_SEED},
};
use crate::domain::{fold::SplitSet, traits::IdentifierSource};
use crate::infra::{
    report::{summarize, validate_split_set},
    splits_store::SplitsStore,
};

// ─── Split Configuration ─────────────────────────────────────────────────────
// Everything needed to reproduce a split run.
// Serialisable so it can be saved next to splits_final.json.

/// Where the sample identifiers come from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IdentifierSourceConfig {
    /// File names inside a directory
    Directory {
        dir: String,
        extension: Option<String>,
    },
    /// A text file with one identifier per line
    ListFile { path: String },
}

impl IdentifierSourceConfig {
    /// Build the matching IdentifierSource implementation
    pub fn build(&self) -> Box<dyn IdentifierSource> {
        match self {
            Self::Directory { dir, extension } => {
                Box::new(DirectoryLister::new(dir, extension.clone()))
            }
            Self::ListFile { path } => Box::new(ListFileSource::new(path)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitConfig {
    pub source:     IdentifierSourceConfig,
    pub output_dir: String,
    pub seed:       u64,
    pub n_splits:   usize,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            source: IdentifierSourceConfig::Directory {
                dir:       "data/imagesTr".to_string(),
                extension: None,
            },
            output_dir: "splits".to_string(),
            seed:       DEFAULT_SEED,
            n_splits:   DEFAULT_N_SPLITS,
        }
    }
}

// ─── SplitUseCase ─────────────────────────────────────────────────────────────
pub struct SplitUseCase {
    config: SplitConfig,
}

impl SplitUseCase {
    pub fn new(config: SplitConfig) -> Self {
        Self { config }
    }

    /// Execute the split pipeline end to end and return the folds
    pub fn execute(&self) -> Result<SplitSet> {
        let cfg = &self.config;

        // ── Step 1: Load identifiers ──────────────────────────────────────────
        let identifiers = cfg.source.build().load_identifiers()?;
        tracing::info!("Loaded {} identifiers", identifiers.len());

        // ── Step 2: Patient-grouped k-fold ────────────────────────────────────
        let splits = generate_crossval_split(&identifiers, cfg.seed, cfg.n_splits)?;

        // ── Step 3: Sanity check before anything hits disk ────────────────────
        validate_split_set(&splits)?;

        // ── Step 4: Persist splits and the config that made them ──────────────
        let store = SplitsStore::new(&cfg.output_dir)?;
        let path  = store.save_splits(&splits)?;
        store.save_config(cfg)?;

        // ── Step 5: Summary ───────────────────────────────────────────────────
        for summary in summarize(&splits) {
            tracing::info!("{}", summary);
        }
        tracing::info!("Wrote {} folds to '{}'", splits.len(), path.display());

        Ok(splits)
    }
}
