// ============================================================
// Layer 3 — Error Taxonomy
// ============================================================
// Splitting is a pure computation, so there is only one way
// to call it wrong: ask for an impossible number of folds.
// Malformed identifiers never fail — they fall back to being
// their own patient group.
//
// I/O failures (missing directories, unreadable JSON) are not
// part of this enum; those layers use anyhow with context.

/// Errors raised while generating or validating a split set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SplitError {
    /// `n_splits` is below 2 or exceeds the number of unique patients.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// A split set breaks the patient-grouping or partition invariants.
    #[error("Invalid split set: {0}")]
    InvalidSplitSet(String),
}
