// ============================================================
// Layer 4 — Dataset Fetcher
// ============================================================
// Makes sure a dataset's bytes are on local storage before the
// reader runs. Three cases, checked in order:
//
//   1. An explicit URL was given
//        → download to datasets_dir/<name><url extension>
//        → the dataset is renamed to that file's basename
//          (e.g. "iris" + ".../iris.data.csv" → "iris.csv")
//        → the loader then drops the URL, so this happens once
//   2. datasets_dir/<name> does not exist
//        → look the name up in KNOWN_DATASETS and download
//        → unknown names are left alone; the reader then
//          degrades to an empty dataset
//   3. Otherwise nothing to do
//
// Download failures propagate: no retry, no cleanup.
//
// Reference: Rust Book §9 (Propagating Errors)

use std::path::{Path, PathBuf};

use crate::domain::{errors::LoaderError, traits::Downloader};

/// Download sources for the datasets known by name
pub const KNOWN_DATASETS: [(&str, &str); 3] = [
    ("MNIST", "http://yann.lecun.com/exdb/mnist/"),
    ("CIFAR-10", "https://www.cs.toronto.edu/~kriz/cifar-10-python.tar.gz"),
    ("CIFAR-100", "https://www.cs.toronto.edu/~kriz/cifar-100-python.tar.gz"),
];

/// What `Fetcher::fetch` did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Downloaded from a caller-supplied URL; carries the new dataset name
    DownloadedFromUrl { dataset_name: String, path: PathBuf },
    /// Downloaded from the known-dataset table
    DownloadedKnown { path: PathBuf },
    /// The dataset was already on disk
    AlreadyPresent,
    /// Not on disk and no source is known
    NoSource,
}

impl FetchOutcome {
    /// The dataset name after fetching, if it changed
    pub fn renamed_to(&self) -> Option<&str> {
        match self {
            FetchOutcome::DownloadedFromUrl { dataset_name, .. } => Some(dataset_name.as_str()),
            _ => None,
        }
    }
}

/// Look up the download URL for a known dataset name
pub fn known_dataset_url(dataset_name: &str) -> Option<&'static str> {
    KNOWN_DATASETS
        .iter()
        .find(|(name, _)| *name == dataset_name)
        .map(|(_, url)| *url)
}

/// Extension (with the leading dot) of the URL's path component, or ""
pub fn url_extension(url: &str) -> String {
    let path = match url.parse::<ureq::http::Uri>() {
        Ok(uri) => uri.path().to_string(),
        // Not a full URI; strip any query/fragment by hand
        Err(_) => url.split(['?', '#']).next().unwrap_or("").to_string(),
    };
    Path::new(&path)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{e}"))
        .unwrap_or_default()
}

pub struct Fetcher<'a> {
    datasets_dir: &'a Path,
    downloader:   &'a dyn Downloader,
}

impl<'a> Fetcher<'a> {
    pub fn new(datasets_dir: &'a Path, downloader: &'a dyn Downloader) -> Self {
        Self { datasets_dir, downloader }
    }

    pub fn fetch(&self, dataset_name: &str, url: Option<&str>) -> Result<FetchOutcome, LoaderError> {
        if let Some(url) = url {
            return self.fetch_from_url(dataset_name, url);
        }

        let local = self.datasets_dir.join(dataset_name);
        if local.exists() {
            tracing::debug!("Dataset '{}' already present at '{}'", dataset_name, local.display());
            return Ok(FetchOutcome::AlreadyPresent);
        }

        match known_dataset_url(dataset_name) {
            Some(source) => {
                tracing::info!("Downloading {} dataset...", dataset_name);
                self.downloader.download(source, &local)?;
                Ok(FetchOutcome::DownloadedKnown { path: local })
            }
            None => {
                tracing::warn!(
                    "Dataset '{}' not found under '{}' and no download source is known",
                    dataset_name,
                    self.datasets_dir.display()
                );
                Ok(FetchOutcome::NoSource)
            }
        }
    }

    fn fetch_from_url(&self, dataset_name: &str, url: &str) -> Result<FetchOutcome, LoaderError> {
        tracing::info!("Downloading dataset from {}...", url);
        let file_name = format!("{}{}", dataset_name, url_extension(url));
        let path      = self.datasets_dir.join(&file_name);
        self.downloader.download(url, &path)?;

        let dataset_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(&file_name)
            .to_string();
        Ok(FetchOutcome::DownloadedFromUrl { dataset_name, path })
    }
}
