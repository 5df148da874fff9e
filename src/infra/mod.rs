// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Cross-cutting concerns that don't belong to any one step of
// the data pipeline:
//
//   timer.rs — times a named operation and logs the duration.
//              Every major loader step (fetch, read, preprocess)
//              is wrapped in it.
//
//   http.rs  — the ureq-backed Downloader used to fetch dataset
//              files over HTTP.
//
// Reference: Rust Book §7 (Modules)

/// Elapsed-time instrumentation wrapper
pub mod timer;

/// Streaming HTTP downloads
pub mod http;
