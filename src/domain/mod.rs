// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust types that define what the loader works with.
//
// Rules for this layer:
//   - NO network calls
//   - NO file format parsing
//   - Only structs, enums, errors and traits
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// A (features, label) pair
pub mod sample;

// Loader configuration with validated setters
pub mod config;

// The library error type
pub mod errors;

// Seams other layers implement
pub mod traits;
