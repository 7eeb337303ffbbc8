// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// This layer orchestrates the other layers to accomplish a
// specific goal (producing or checking a split set).
//
// Rules for this layer:
//   - No splitting math here
//   - No printing here (that's Layer 1)
//   - Only workflow coordination

// Generate, validate and save a split set
pub mod split_use_case;

// Load and check a saved split set
pub mod inspect_use_case;
