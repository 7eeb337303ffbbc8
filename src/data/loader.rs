// ============================================================
// Layer 4 — Identifier Sources
// ============================================================
// Produces the list of sample identifiers that gets split.
//
// Two sources are supported:
//   DirectoryLister → file names inside an image folder
//                     (non-recursive, optional extension filter)
//   ListFileSource  → a text file with one identifier per line
//
// Both return identifiers in a stable order. Directory entries
// come back from the OS in arbitrary order, so the lister sorts
// them; otherwise the same folder could give different folds on
// different machines.

use anyhow::{bail, Context, Result};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::domain::traits::IdentifierSource;

/// Lists image file names in a directory.
/// Implements the IdentifierSource trait from Layer 3.
pub struct DirectoryLister {
    /// Directory containing the samples
    dir: PathBuf,
    /// Keep only files with this extension (without the dot)
    extension: Option<String>,
}

impl DirectoryLister {
    pub fn new(dir: impl Into<PathBuf>, extension: Option<String>) -> Self {
        Self {
            dir: dir.into(),
            // Accept both "png" and ".png"
            extension: extension.map(|e| e.trim_start_matches('.').to_string()),
        }
    }

    fn keep(&self, path: &Path) -> bool {
        match &self.extension {
            Some(wanted) => path
                .extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| e.eq_ignore_ascii_case(wanted)),
            None => true,
        }
    }
}

impl IdentifierSource for DirectoryLister {
    fn load_identifiers(&self) -> Result<Vec<String>> {
        // Unlike a missing document corpus, an empty identifier list
        // can never be split, so a missing directory is an error
        if !self.dir.is_dir() {
            bail!("Images directory '{}' does not exist", self.dir.display());
        }

        let mut names = Vec::new();

        for entry in fs::read_dir(&self.dir)
            .with_context(|| format!("Cannot read directory '{}'", self.dir.display()))?
        {
            let entry = entry
                .with_context(|| format!("Cannot read an entry of '{}'", self.dir.display()))?;
            let path  = entry.path();

            // Follows symlinks, so linked images count; broken links do not
            if !path.is_file() {
                continue;
            }

            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                tracing::warn!("Skipping non UTF-8 file name: {}", path.display());
                continue;
            };

            // Hidden files (.DS_Store and friends) are never samples
            if name.starts_with('.') || !self.keep(&path) {
                tracing::debug!("Skipping '{}'", name);
                continue;
            }

            names.push(name.to_string());
        }

        if names.is_empty() {
            match &self.extension {
                Some(ext) => bail!(
                    "No .{} files found in '{}'",
                    ext,
                    self.dir.display()
                ),
                None => bail!("No files found in '{}'", self.dir.display()),
            }
        }

        names.sort();

        tracing::info!(
            "Found {} identifiers in '{}'",
            names.len(),
            self.dir.display()
        );
        Ok(names)
    }
}

/// Reads identifiers from a text file, one per line.
///
/// Blank lines and lines starting with `#` are ignored.
pub struct ListFileSource {
    path: PathBuf,
}

impl ListFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl IdentifierSource for ListFileSource {
    fn load_identifiers(&self) -> Result<Vec<String>> {
        let text = fs::read_to_string(&self.path)
            .with_context(|| format!("Cannot read identifier list '{}'", self.path.display()))?;

        let ids: Vec<String> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_string)
            .collect();

        tracing::info!(
            "Read {} identifiers from '{}'",
            ids.len(),
            self.path.display()
        );
        Ok(ids)
    }
}
