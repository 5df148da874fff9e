//! Fetch a named or URL-specified dataset, parse it by file extension,
//! run a pluggable preprocessing function over every sample, and hand
//! the result out as fixed-size batches.
//!
//! ```no_run
//! use dataset_loader::{DataLoader, LoaderConfig, Preprocessor};
//!
//! let config = LoaderConfig::new("iris.csv")
//!     .with_batch_size(16)
//!     .with_preprocess(Preprocessor::normalize());
//! let mut loader = DataLoader::new(config)?;
//! for batch in &mut loader {
//!     println!("{} samples", batch.len());
//! }
//! # Ok::<(), dataset_loader::LoaderError>(())
//! ```

pub mod application;
pub mod cli;
pub mod data;
pub mod domain;
pub mod infra;

pub use data::{
    batcher::Batches,
    cache::SampleCache,
    fetcher::{FetchOutcome, Fetcher},
    loader::{AugmentationScope, DataLoader},
    preprocessor::{augment, normalize, normalize_value, resize_image, Preprocessor},
    reader::DatasetFormat,
};
pub use domain::{
    config::LoaderConfig,
    errors::LoaderError,
    sample::{Features, Label, Sample},
    traits::Downloader,
};
pub use infra::{http::HttpDownloader, timer::timed};
