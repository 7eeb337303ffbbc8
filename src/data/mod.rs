// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// This layer turns a pile of sample identifiers into
// patient-grouped cross-validation folds.
//
// The pipeline flows in this order:
//
//   image folder / list file
//       │
//       ▼
//   loader            → collects identifiers in a stable order
//       │
//       ▼
//   patient_id        → maps each identifier to its patient key
//       │
//       ▼
//   kfold             → seeded shuffle + k contiguous groups
//       │
//       ▼
//   splitter          → expands key groups back into Folds
//
// Each module is responsible for exactly one step.

/// Lists identifiers from a directory or a text file
pub mod loader;

/// Extracts the patient key from a file name
pub mod patient_id;

/// Seeded, shuffled k-fold index partitioning
pub mod kfold;

/// Patient-grouped train/validation fold generation
pub mod splitter;
