// ============================================================
// Layer 2 — LoadUseCase
// ============================================================
// Orchestrates a load from the command line:
//
//   Step 1: Build the DataLoader  (fetch → read → preprocess)
//   Step 2: Summarise it          (sample count, resolved name)
//   Step 3: Optionally peek at the first batch
//
// The report is returned rather than printed; Layer 1 decides
// how to show it.

use anyhow::{Context, Result};
use serde::Serialize;

use crate::data::{batcher::batch_count, loader::DataLoader};
use crate::domain::config::LoaderConfig;

/// Summary of one batch, for previews
#[derive(Debug, Clone, Serialize)]
pub struct BatchPreview {
    pub size:   usize,
    pub labels: Vec<String>,
}

/// What a load produced
#[derive(Debug, Clone, Serialize)]
pub struct LoadReport {
    pub dataset_name: String,
    pub sample_count: usize,
    pub batch_size:   usize,
    pub batch_count:  usize,
    pub first_batch:  Option<BatchPreview>,
}

pub struct LoadUseCase {
    config:  LoaderConfig,
    preview: bool,
}

impl LoadUseCase {
    pub fn new(config: LoaderConfig) -> Self {
        Self { config, preview: false }
    }

    /// Also summarise the first batch of a pass
    pub fn with_preview(mut self, preview: bool) -> Self {
        self.preview = preview;
        self
    }

    pub fn execute(self) -> Result<LoadReport> {
        let requested = self.config.dataset_name().to_string();

        // ── Step 1: Load ──────────────────────────────────────────────────────
        let mut loader = DataLoader::new(self.config)
            .with_context(|| format!("Failed to load dataset '{requested}'"))?;
        tracing::debug!("{}", loader);

        // ── Step 2 / 3: Summarise ─────────────────────────────────────────────
        let first_batch = if self.preview {
            loader.batches().next().map(|batch| BatchPreview {
                size:   batch.len(),
                labels: batch.iter().map(|s| s.label().to_string()).collect(),
            })
        } else {
            None
        };

        Ok(LoadReport {
            dataset_name: loader.dataset_name().to_string(),
            sample_count: loader.len(),
            batch_size:   loader.batch_size(),
            batch_count:  batch_count(loader.len(), loader.batch_size()),
            first_batch,
        })
    }
}
