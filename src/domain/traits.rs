// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The splitter itself only needs a list of strings. Where those
// strings come from is a detail of the caller:
//   - DirectoryLister → file names in an image folder
//   - ListFileSource  → a text file with one identifier per line
//
// The application layer only sees IdentifierSource and works
// with both without any changes.

use anyhow::Result;

// ─── IdentifierSource ─────────────────────────────────────────────────────────
/// Any component that can produce the sample identifiers to split.
pub trait IdentifierSource {
    /// Load every sample identifier, in a stable order.
    fn load_identifiers(&self) -> Result<Vec<String>>;
}
