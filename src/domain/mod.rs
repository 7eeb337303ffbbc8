// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Pure Rust structs, enums, and traits that define the core
// concepts of cross-validation splitting.
//
// Rules for this layer:
//   - NO file I/O
//   - NO randomness
//   - Only plain Rust structs, enums, and traits
//
// Think of this layer as the "dictionary" of the system —
// it defines what a Fold IS, not how one is produced.

// One train/validation partition
pub mod fold;

// The error taxonomy shared by every layer
pub mod error;

// Core abstractions (traits) that other layers implement
pub mod traits;
