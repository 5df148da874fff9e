// ============================================================
// Layer 3 — Loader Configuration
// ============================================================
// Everything a DataLoader needs to know before it loads:
//
//   dataset_name  — known name (MNIST), file name (iris.csv) or
//                   directory name under datasets_dir
//   batch_size    — samples per batch, must be >= 1
//   shuffle       — reshuffle at the start of every pass
//   url           — optional explicit download source
//   datasets_dir  — root of the local dataset layout
//   seed          — optional RNG seed for reproducible runs
//   preprocess    — optional preprocessing function
//
// The config is serialisable so it can live in a JSON file next
// to the data. The preprocessing function is code, not data, so
// it is skipped by serde and set through set_preprocess().
//
// Fields are private: all mutation goes through the setters.

use std::{fs, path::{Path, PathBuf}};

use serde::{Deserialize, Serialize};

use crate::data::preprocessor::Preprocessor;
use crate::domain::errors::LoaderError;

pub const DEFAULT_BATCH_SIZE: usize = 32;
pub const DEFAULT_DATASETS_DIR: &str = "datasets";

/// Settings for one DataLoader; missing JSON fields take their defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// Known dataset name, file name or directory name
    dataset_name: String,
    /// Samples per batch (>= 1)
    batch_size:   usize,
    /// Reshuffle at the start of each pass
    shuffle:      bool,
    /// Explicit download source; cleared once the download has happened
    url:          Option<String>,
    /// Root directory datasets are read from and downloaded into
    datasets_dir: PathBuf,
    /// RNG seed; entropy when absent
    seed:         Option<u64>,
    /// Per-sample preprocessing; identity when absent
    #[serde(skip)]
    preprocess:   Option<Preprocessor>,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            dataset_name: "MNIST".to_string(),
            batch_size:   DEFAULT_BATCH_SIZE,
            shuffle:      true,
            url:          None,
            datasets_dir: PathBuf::from(DEFAULT_DATASETS_DIR),
            seed:         None,
            preprocess:   None,
        }
    }
}

impl LoaderConfig {
    /// Config for `dataset_name` with every other field at its default
    pub fn new(dataset_name: impl Into<String>) -> Self {
        Self {
            dataset_name: dataset_name.into(),
            ..Self::default()
        }
    }

    /// Read a config from a JSON file. Missing fields take their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, LoaderError> {
        let raw = fs::read_to_string(path.as_ref())?;
        let config: Self = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings a loader cannot run with
    pub fn validate(&self) -> Result<(), LoaderError> {
        if self.batch_size == 0 {
            return Err(LoaderError::Configuration(
                "batch_size must be a positive integer".to_string(),
            ));
        }
        Ok(())
    }

    // ── Builders ──────────────────────────────────────────────────────────────

    /// Builder form of `set_batch_size`; checked by `validate`
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    pub fn with_shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }

    /// Download from this URL instead of the known-dataset table
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Read and download datasets under `dir`
    pub fn with_datasets_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.datasets_dir = dir.into();
        self
    }

    /// Seed the loader's RNG for reproducible shuffles and augmentation
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_preprocess(mut self, preprocess: Preprocessor) -> Self {
        self.preprocess = Some(preprocess);
        self
    }

    // ── Setters ───────────────────────────────────────────────────────────────

    /// Switch datasets; takes effect on the next load
    pub fn set_dataset_name(&mut self, name: impl Into<String>) {
        self.dataset_name = name.into();
    }

    /// Rejects zero; the previous value is kept on error.
    pub fn set_batch_size(&mut self, batch_size: usize) -> Result<(), LoaderError> {
        if batch_size == 0 {
            return Err(LoaderError::Configuration(
                "batch_size must be a positive integer".to_string(),
            ));
        }
        self.batch_size = batch_size;
        Ok(())
    }

    pub fn set_shuffle(&mut self, shuffle: bool) {
        self.shuffle = shuffle;
    }

    pub fn set_url(&mut self, url: Option<String>) {
        self.url = url;
    }

    /// Replace the preprocessing function; `None` means identity
    pub fn set_preprocess(&mut self, preprocess: Option<Preprocessor>) {
        self.preprocess = preprocess;
    }

    // ── Getters ───────────────────────────────────────────────────────────────

    pub fn dataset_name(&self) -> &str {
        &self.dataset_name
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    pub fn shuffle(&self) -> bool {
        self.shuffle
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    /// Root directory for local datasets
    pub fn datasets_dir(&self) -> &Path {
        &self.datasets_dir
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn preprocess(&self) -> Option<&Preprocessor> {
        self.preprocess.as_ref()
    }
}
