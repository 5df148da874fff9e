// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything from "a dataset name" to "batches of samples".
//
// The pipeline flows in this order:
//
//   dataset name / URL
//       │
//       ▼
//   Fetcher        → makes sure the bytes are on local disk
//       │
//       ▼
//   Reader         → parses by extension into raw Samples
//       │
//       ▼
//   Preprocessor   → normalize / augment / resize per sample
//       │
//       ▼
//   DataLoader     → holds the samples, filters, transforms
//       │
//       ▼
//   Batches        → contiguous batch_size windows
//
// Each module is responsible for exactly one step.
//
// Reference: Rust Book §13 (Iterators and Closures)

/// Resolves dataset names and URLs to local files
pub mod fetcher;

/// Extension-based dataset readers
pub mod reader;

/// Sample → Sample preprocessing functions
pub mod preprocessor;

/// Word-level text augmentations used by `augment`
pub mod text_augment;

/// LRU cache for index lookups
pub mod cache;

/// Batch iterator over loaded samples
pub mod batcher;

/// The DataLoader itself
pub mod loader;
