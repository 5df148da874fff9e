// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// This layer orchestrates the data layer to accomplish one
// user-facing goal: load a dataset and report on it.
//
// Rules for this layer:
//   - No parsing or preprocessing logic here
//   - No printing here (that's Layer 1)
//   - Only workflow coordination
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// The load-and-summarise workflow
pub mod load_use_case;
