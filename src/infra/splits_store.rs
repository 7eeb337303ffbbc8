// ============================================================
// Layer 6 — Splits Store
// ============================================================
// Saves and restores split sets as JSON.
//
// File layout:
//   <output_dir>/
//     splits_final.json   ← [{"train": [...], "val": [...]}, ...]
//     split_config.json   ← seed, n_splits and identifier source
//
// The config is stored next to the splits because the folds
// are only reproducible from the exact same seed, fold count
// and identifier list.

use anyhow::{Context, Result};
use std::{fs, path::PathBuf};

use crate::application::split_use_case::SplitConfig;
use crate::domain::fold::{Fold, SplitSet};

/// File name of the persisted split set
pub const SPLITS_FILE: &str = "splits_final.json";

/// File name of the persisted split configuration
pub const CONFIG_FILE: &str = "split_config.json";

/// Reads and writes split files in one directory.
pub struct SplitsStore {
    dir: PathBuf,
}

impl SplitsStore {
    /// Create a store rooted at `dir`, creating the directory if needed.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .with_context(|| format!("Cannot create output directory '{}'", dir.display()))?;
        Ok(Self { dir })
    }

    /// Open an existing store without creating anything.
    pub fn open(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Write the split set to `splits_final.json`, returning its path.
    pub fn save_splits(&self, splits: &[Fold]) -> Result<PathBuf> {
        let path = self.dir.join(SPLITS_FILE);
        let json = serde_json::to_string_pretty(splits)?;

        fs::write(&path, json)
            .with_context(|| format!("Cannot write splits to '{}'", path.display()))?;

        tracing::debug!("Saved {} folds to '{}'", splits.len(), path.display());
        Ok(path)
    }

    /// Read the split set back from `splits_final.json`.
    pub fn load_splits(&self) -> Result<SplitSet> {
        let path = self.dir.join(SPLITS_FILE);

        let json = fs::read_to_string(&path).with_context(|| {
            format!(
                "Cannot read splits from '{}'. Have you run 'split' first?",
                path.display()
            )
        })?;

        serde_json::from_str(&json)
            .with_context(|| format!("'{}' is not a valid split set", path.display()))
    }

    /// Write the configuration that produced the splits.
    pub fn save_config(&self, cfg: &SplitConfig) -> Result<()> {
        let path = self.dir.join(CONFIG_FILE);
        let json = serde_json::to_string_pretty(cfg)?;

        fs::write(&path, json)
            .with_context(|| format!("Cannot write config to '{}'", path.display()))?;

        tracing::debug!("Saved split config to '{}'", path.display());
        Ok(())
    }

    pub fn load_config(&self) -> Result<SplitConfig> {
        let path = self.dir.join(CONFIG_FILE);

        let json = fs::read_to_string(&path)
            .with_context(|| format!("Cannot read config from '{}'", path.display()))?;

        Ok(serde_json::from_str(&json)?)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::split_use_case::IdentifierSourceConfig;
    use tempfile::TempDir;

    #[test]
    fn test_splits_survive_save_and_load() {
        let tmp   = TempDir::new().unwrap();
        let store = SplitsStore::new(tmp.path().join("out")).unwrap();

        let splits = vec![
            Fold::new(vec!["1_a".into()], vec!["2_a".into()]),
            Fold::new(vec!["2_a".into()], vec!["1_a".into()]),
        ];
        let path = store.save_splits(&splits).unwrap();
        assert!(path.ends_with(SPLITS_FILE));

        assert_eq!(store.load_splits().unwrap(), splits);
    }

    #[test]
    fn test_splits_file_is_a_json_array_of_objects() {
        let tmp   = TempDir::new().unwrap();
        let store = SplitsStore::new(tmp.path()).unwrap();
        store
            .save_splits(&[Fold::new(vec!["1_a".into()], vec!["2_a".into()])])
            .unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(tmp.path().join(SPLITS_FILE)).unwrap())
                .unwrap();
        assert_eq!(raw[0]["train"][0], "1_a");
        assert_eq!(raw[0]["val"][0], "2_a");
    }

    #[test]
    fn test_config_survives_save_and_load() {
        let tmp   = TempDir::new().unwrap();
        let store = SplitsStore::new(tmp.path()).unwrap();

        let cfg = SplitConfig {
            source: IdentifierSourceConfig::ListFile { path: "ids.txt".into() },
            output_dir: tmp.path().display().to_string(),
            seed: 7,
            n_splits: 3,
        };
        store.save_config(&cfg).unwrap();

        let back = store.load_config().unwrap();
        assert_eq!(back.seed, 7);
        assert_eq!(back.n_splits, 3);
        assert_eq!(back.source, cfg.source);
    }

    #[test]
    fn test_loading_missing_splits_fails_with_hint() {
        let tmp = TempDir::new().unwrap();
        let err = SplitsStore::open(tmp.path()).load_splits().unwrap_err();
        assert!(format!("{err:#}").contains("Have you run 'split' first?"));
    }
}
