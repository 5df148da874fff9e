// ============================================================
// Layer 1 — CLI Arguments
// ============================================================
// All flags of the `dataset-loader` command.
//
//   dataset-loader <DATASET> [--batch_size N] [--url URL] ...
//
// clap's derive macros generate help text, error messages for
// missing args, and type conversion (string → usize, u64, …).
//
// Reference: Rust Book §12 (Building a CLI Program)

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};

use crate::data::preprocessor::Preprocessor;
use crate::domain::config::LoaderConfig;

/// Preprocessing functions selectable from the command line
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum PreprocessChoice {
    /// Leave samples unchanged
    Identity,
    /// Min-max rescale numeric features to [0, 1]
    Normalize,
    /// Random noise / text augmentation
    Augment,
    /// Resample image arrays to 32x32
    Resize,
}

impl PreprocessChoice {
    pub fn build(self) -> Preprocessor {
        match self {
            PreprocessChoice::Identity  => Preprocessor::identity(),
            PreprocessChoice::Normalize => Preprocessor::normalize(),
            PreprocessChoice::Augment   => Preprocessor::augment(),
            PreprocessChoice::Resize    => Preprocessor::resize_image_default(),
        }
    }
}

/// Every argument of the load command.
/// Each field becomes a positional arg or --flag.
#[derive(Args, Debug)]
pub struct LoadArgs {
    /// Dataset name (MNIST, CIFAR-10, CIFAR-100), file name under the
    /// datasets directory (iris.csv, reviews.txt), or a directory name
    pub dataset: String,

    /// Number of samples per batch [default: 32]
    #[arg(long = "batch_size")]
    pub batch_size: Option<usize>,

    /// URL to download the dataset from
    #[arg(long)]
    pub url: Option<String>,

    /// Keep the read order instead of reshuffling every pass
    #[arg(long)]
    pub no_shuffle: bool,

    /// Seed for shuffling, placeholder images and augmentation
    #[arg(long)]
    pub seed: Option<u64>,

    /// Root directory that holds the datasets
    #[arg(long)]
    pub datasets_dir: Option<PathBuf>,

    /// Preprocessing applied to every sample at load time
    #[arg(long, value_enum)]
    pub preprocess: Option<PreprocessChoice>,

    /// JSON file with loader settings; flags override it
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print the labels of the first batch
    #[arg(long)]
    pub preview: bool,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

impl LoadArgs {
    /// Convert CLI args into the loader configuration.
    /// Starts from the --config file when given, then applies flags.
    pub fn to_config(&self) -> Result<LoaderConfig> {
        let mut config = match &self.config {
            Some(path) => LoaderConfig::from_json_file(path)
                .with_context(|| format!("Cannot read config '{}'", path.display()))?,
            None => LoaderConfig::default(),
        };

        config.set_dataset_name(self.dataset.clone());
        if let Some(batch_size) = self.batch_size {
            config.set_batch_size(batch_size)?;
        }
        if self.url.is_some() {
            config.set_url(self.url.clone());
        }
        if self.no_shuffle {
            config.set_shuffle(false);
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if let Some(dir) = &self.datasets_dir {
            config = config.with_datasets_dir(dir.clone());
        }
        if let Some(choice) = self.preprocess {
            config.set_preprocess(Some(choice.build()));
        }
        Ok(config)
    }
}
