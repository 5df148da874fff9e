// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The loader never talks to the network directly. It asks a
// Downloader to put a URL's bytes at a local path:
//
//   - HttpDownloader (Layer 6) → streams over HTTP with ureq
//   - test fakes              → write fixed bytes, or fail
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use std::path::Path;

use crate::domain::errors::LoaderError;

// ─── Downloader ───────────────────────────────────────────────────────────────
/// Anything that can copy the resource at `url` into `dest`.
///
/// Failures are fatal for the caller: no retry, and a partially
/// written file is left where it is.
pub trait Downloader {
    fn download(&self, url: &str, dest: &Path) -> Result<(), LoaderError>;
}
