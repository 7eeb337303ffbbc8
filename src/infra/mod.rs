// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Cross-cutting concerns that don't belong in the splitting
// logic itself:
//
//   splits_store.rs — Persists the split set as
//                     splits_final.json (a JSON array of
//                     {"train": [...], "val": [...]} objects)
//                     plus the SplitConfig that produced it,
//                     so any run can be reproduced exactly.
//
//   report.rs       — Per-fold summaries (sample and patient
//                     counts) and an invariant check that can be
//                     run against any split file, including
//                     ones produced by other tools.

/// Split set and config persistence
pub mod splits_store;

/// Fold summaries and split set validation
pub mod report;
