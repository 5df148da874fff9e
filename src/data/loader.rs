// ============================================================
// Layer 4 — DataLoader
// ============================================================
// Owns a fully materialised dataset and hands it out in batches.
//
// Construction is eager:
//
//   fetch      → make sure the file/directory is on disk
//   read       → parse it into raw Samples (reader.rs)
//   preprocess → run the active Preprocessor over every sample
//
// After that the loader supports:
//   - batch iteration (reshuffling in place at the start of
//     each pass when shuffle is on; original order is lost)
//   - index lookup, plus a 32-entry LRU lookup cache
//   - whole-dataset rewrites: apply_transformation, filter_data
//   - a scoped preprocessing override (temporary_augmentation)
//
// The lookup cache is cleared on every mutation of the dataset
// (shuffle, transform, filter, reload), so get_sample never
// returns a sample that is no longer at that index.
//
// Not thread-safe: one owner, one thread.
//
// Reference: Rust Book §13 (Iterators), §15 (Drop, Deref)

use std::{
    fmt,
    ops::{Deref, DerefMut, Index},
};

use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

use crate::data::{
    batcher::{batch_count, Batches},
    cache::SampleCache,
    fetcher::Fetcher,
    preprocessor::Preprocessor,
    reader::read_dataset,
};
use crate::domain::{
    config::LoaderConfig,
    errors::LoaderError,
    sample::Sample,
    traits::Downloader,
};
use crate::infra::{http::HttpDownloader, timer::timed};

/// An eagerly loaded, preprocessed dataset served in batches
pub struct DataLoader {
    /// Active configuration; the dataset name changes after a URL download
    config:     LoaderConfig,
    /// Preprocessed samples in current (possibly shuffled) order
    samples:    Vec<Sample>,
    /// Single source of randomness for shuffling, placeholders and augmentation
    rng:        StdRng,
    /// Index lookups served by get_sample
    cache:      SampleCache,
    /// Backend used when the dataset is not on disk
    downloader: Box<dyn Downloader>,
}

impl DataLoader {
    /// Build and load a dataset, downloading over HTTP if needed
    pub fn new(config: LoaderConfig) -> Result<Self, LoaderError> {
        Self::with_downloader(config, Box::new(HttpDownloader::new()))
    }

    /// Build and load a dataset with a custom download backend
    pub fn with_downloader(
        config:     LoaderConfig,
        downloader: Box<dyn Downloader>,
    ) -> Result<Self, LoaderError> {
        config.validate()?;
        let rng = match config.seed() {
            Some(seed) => StdRng::seed_from_u64(seed),
            None       => StdRng::from_entropy(),
        };

        let mut loader = Self {
            config,
            samples: Vec::new(),
            rng,
            cache: SampleCache::default(),
            downloader,
        };
        loader.reload()?;
        Ok(loader)
    }

    /// Fetch, read and preprocess the dataset again, replacing the
    /// current samples. Uses whichever preprocessor is active now.
    pub fn reload(&mut self) -> Result<(), LoaderError> {
        timed("load_data", || -> Result<(), LoaderError> {
            self.fetch()?;

            let raw = timed("read_data", || {
                read_dataset(self.config.datasets_dir(), self.config.dataset_name(), &mut self.rng)
            });
            let processed = timed("preprocess_data", || self.preprocess_all(raw))?;

            self.samples = processed;
            self.cache.clear();
            tracing::info!(
                "Loaded {} samples from '{}'",
                self.samples.len(),
                self.config.dataset_name()
            );
            Ok(())
        })
    }

    fn fetch(&mut self) -> Result<(), LoaderError> {
        let outcome = timed("fetch_data", || {
            Fetcher::new(self.config.datasets_dir(), self.downloader.as_ref())
                .fetch(self.config.dataset_name(), self.config.url())
        })?;

        if let Some(new_name) = outcome.renamed_to() {
            tracing::debug!(
                "Dataset '{}' renamed to '{}' after download",
                self.config.dataset_name(),
                new_name
            );
            self.config.set_dataset_name(new_name);
            // The downloaded file is now the local copy; later reloads read it
            self.config.set_url(None);
        }
        Ok(())
    }

    fn preprocess_all(&mut self, raw: Vec<Sample>) -> Result<Vec<Sample>, LoaderError> {
        let preprocess = self.preprocessor();
        raw.into_iter()
            .map(|s| preprocess.apply(s, &mut self.rng))
            .collect()
    }

    /// Run the active preprocessor on one sample.
    ///
    /// Already-loaded samples are not affected by swapping the
    /// preprocessor; call this (or `reload`) to use the new one.
    pub fn preprocess(&mut self, sample: Sample) -> Result<Sample, LoaderError> {
        let preprocess = self.preprocessor();
        preprocess.apply(sample, &mut self.rng)
    }

    // ── Iteration ─────────────────────────────────────────────────────────────

    /// Start a pass over the dataset. With shuffle enabled the samples
    /// are permuted in place first.
    pub fn batches(&mut self) -> Batches<'_> {
        if self.config.shuffle() {
            self.samples.shuffle(&mut self.rng);
            self.cache.clear();
        }
        Batches::new(&self.samples, self.config.batch_size())
    }

    /// Number of batches one pass yields
    pub fn num_batches(&self) -> usize {
        batch_count(self.samples.len(), self.config.batch_size())
    }

    /// Iterate samples one at a time in current order
    pub fn iter(&self) -> std::slice::Iter<'_, Sample> {
        self.samples.iter()
    }

    /// All samples as a slice, in current order
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    // ── Random access ─────────────────────────────────────────────────────────

    /// Number of loaded samples
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Borrow the sample at `index`, bypassing the cache
    pub fn get(&self, index: usize) -> Option<&Sample> {
        self.samples.get(index)
    }

    /// Index lookup through the LRU cache
    pub fn get_sample(&mut self, index: usize) -> Option<Sample> {
        if let Some(hit) = self.cache.get(index) {
            return Some(hit.clone());
        }
        let sample = self.samples.get(index)?.clone();
        self.cache.insert(index, sample.clone());
        Some(sample)
    }

    /// Lookup cache state, mostly for inspecting hit/miss counts
    pub fn cache(&self) -> &SampleCache {
        &self.cache
    }

    // ── Dataset rewrites ──────────────────────────────────────────────────────

    /// Replace every sample with `f(sample)`
    pub fn apply_transformation<F>(&mut self, f: F)
    where
        F: FnMut(Sample) -> Sample,
    {
        let samples = std::mem::take(&mut self.samples);
        self.samples = samples.into_iter().map(f).collect();
        self.cache.clear();
    }

    /// Keep only the samples for which `predicate` holds
    pub fn filter_data<P>(&mut self, mut predicate: P)
    where
        P: FnMut(&Sample) -> bool,
    {
        self.samples.retain(|s| predicate(s));
        self.cache.clear();
    }

    // ── Configuration ─────────────────────────────────────────────────────────

    /// The configuration the loader is currently running with
    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    pub fn dataset_name(&self) -> &str {
        self.config.dataset_name()
    }

    pub fn batch_size(&self) -> usize {
        self.config.batch_size()
    }

    pub fn shuffle(&self) -> bool {
        self.config.shuffle()
    }

    /// Change the batch size for future passes; rejects 0
    pub fn set_batch_size(&mut self, batch_size: usize) -> Result<(), LoaderError> {
        self.config.set_batch_size(batch_size)
    }

    pub fn set_shuffle(&mut self, shuffle: bool) {
        self.config.set_shuffle(shuffle);
    }

    /// Swap the preprocessing function. `None` means identity.
    pub fn set_preprocessor(&mut self, preprocess: Option<Preprocessor>) {
        self.config.set_preprocess(preprocess);
    }

    /// The active preprocessor (identity when none is configured)
    pub fn preprocessor(&self) -> Preprocessor {
        self.config.preprocess().cloned().unwrap_or_default()
    }

    /// Temporarily run `augmentation` after the current preprocessor.
    ///
    /// The returned guard derefs to the loader. When it is dropped —
    /// normally or while unwinding — the previous preprocessor is put
    /// back exactly as it was.
    pub fn temporary_augmentation(&mut self, augmentation: Preprocessor) -> AugmentationScope<'_> {
        let original = self.config.preprocess().cloned();
        let combined = self.preprocessor().then(&augmentation);
        tracing::debug!("Entering temporary augmentation '{}'", combined.name());
        self.config.set_preprocess(Some(combined));
        AugmentationScope { loader: self, original }
    }
}

impl<'a> IntoIterator for &'a mut DataLoader {
    type Item     = &'a [Sample];
    type IntoIter = Batches<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.batches()
    }
}

impl Index<usize> for DataLoader {
    type Output = Sample;

    fn index(&self, index: usize) -> &Self::Output {
        &self.samples[index]
    }
}

impl fmt::Display for DataLoader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DataLoader(dataset={}, batch_size={}, shuffle={})",
            self.config.dataset_name(),
            self.config.batch_size(),
            self.config.shuffle()
        )
    }
}

impl fmt::Debug for DataLoader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataLoader")
            .field("config", &self.config)
            .field("samples", &self.samples.len())
            .field("cache", &self.cache.len())
            .finish()
    }
}

// ─── AugmentationScope ────────────────────────────────────────────────────────
/// Guard returned by `DataLoader::temporary_augmentation`
pub struct AugmentationScope<'a> {
    loader:   &'a mut DataLoader,
    original: Option<Preprocessor>,
}

impl Deref for AugmentationScope<'_> {
    type Target = DataLoader;

    fn deref(&self) -> &DataLoader {
        self.loader
    }
}

impl DerefMut for AugmentationScope<'_> {
    fn deref_mut(&mut self) -> &mut DataLoader {
        self.loader
    }
}

impl Drop for AugmentationScope<'_> {
    fn drop(&mut self) {
        tracing::debug!("Leaving temporary augmentation");
        self.loader.config.set_preprocess(self.original.take());
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::sample::{Features, Label};
    use std::{
        fs,
        panic::{self, AssertUnwindSafe},
        path::Path,
    };

    struct NoNetwork;

    impl Downloader for NoNetwork {
        fn download(&self, url: &str, _dest: &Path) -> Result<(), LoaderError> {
            Err(LoaderError::Transport { url: url.to_string(), reason: "no network in tests".into() })
        }
    }

    struct WriteBody(&'static str);

    impl Downloader for WriteBody {
        fn download(&self, _url: &str, dest: &Path) -> Result<(), LoaderError> {
            fs::create_dir_all(dest.parent().unwrap())?;
            fs::write(dest, self.0)?;
            Ok(())
        }
    }

    /// 10 CSV rows: features [i, i*2], label i % 3
    fn csv_fixture(dir: &Path) {
        let rows: String = (0..10).map(|i| format!("{},{},{}\n", i, i * 2, i % 3)).collect();
        fs::write(dir.join("rows.csv"), rows).unwrap();
    }

    fn csv_loader(dir: &Path, batch_size: usize, shuffle: bool) -> DataLoader {
        csv_fixture(dir);
        let config = LoaderConfig::new("rows.csv")
            .with_datasets_dir(dir)
            .with_batch_size(batch_size)
            .with_shuffle(shuffle)
            .with_seed(11);
        DataLoader::with_downloader(config, Box::new(NoNetwork)).unwrap()
    }

    fn first_feature(s: &Sample) -> f64 {
        s.features().as_values().unwrap()[0]
    }

    fn tag(suffix: &'static str) -> Preprocessor {
        Preprocessor::new(suffix, move |s: Sample, _: &mut StdRng| {
            let label = format!("{}{}", s.label(), suffix);
            Ok(s.with_label(Label::Text(label)))
        })
    }

    #[test]
    fn test_unshuffled_batches_keep_order() {
        let dir        = tempfile::tempdir().unwrap();
        let mut loader = csv_loader(dir.path(), 4, false);
        let sizes: Vec<usize> = loader.batches().map(|b| b.len()).collect();
        assert_eq!(sizes, vec![4, 4, 2]);

        let order: Vec<f64> = (&mut loader).into_iter().flatten().map(first_feature).collect();
        assert_eq!(order, (0..10).map(f64::from).collect::<Vec<_>>());
    }

    #[test]
    fn test_shuffled_pass_is_permutation() {
        let dir        = tempfile::tempdir().unwrap();
        let mut loader = csv_loader(dir.path(), 3, true);
        let mut seen: Vec<f64> = loader.batches().flatten().map(first_feature).collect();
        assert_eq!(seen.len(), 10);
        seen.sort_by(f64::total_cmp);
        assert_eq!(seen, (0..10).map(f64::from).collect::<Vec<_>>());
        assert_eq!(loader.num_batches(), 4);
    }

    #[test]
    fn test_consecutive_shuffled_passes_differ() {
        let dir  = tempfile::tempdir().unwrap();
        let rows: String = (0..50).map(|i| format!("{},{}\n", i, i % 2)).collect();
        fs::write(dir.path().join("fifty.csv"), rows).unwrap();
        let config = LoaderConfig::new("fifty.csv")
            .with_datasets_dir(dir.path())
            .with_batch_size(7)
            .with_seed(5);
        let mut loader = DataLoader::with_downloader(config, Box::new(NoNetwork)).unwrap();

        let first:  Vec<f64> = loader.batches().flatten().map(first_feature).collect();
        let second: Vec<f64> = loader.batches().flatten().map(first_feature).collect();
        assert_ne!(first, second);

        let expected: Vec<f64> = (0..50).map(f64::from).collect();
        for pass in [first, second] {
            let mut sorted = pass;
            sorted.sort_by(f64::total_cmp);
            assert_eq!(sorted, expected);
        }
    }

    #[test]
    fn test_shuffled_batch_counts_across_sizes() {
        for n in [1usize, 2, 9, 10, 17] {
            for b in [1usize, 3, 4, 10, 20] {
                let dir  = tempfile::tempdir().unwrap();
                let rows: String = (0..n).map(|i| format!("{},0\n", i)).collect();
                fs::write(dir.path().join("n.csv"), rows).unwrap();
                let config = LoaderConfig::new("n.csv")
                    .with_datasets_dir(dir.path())
                    .with_batch_size(b)
                    .with_seed(n as u64 * 31 + b as u64);
                let mut loader = DataLoader::with_downloader(config, Box::new(NoNetwork)).unwrap();

                let batches: Vec<Vec<f64>> = loader
                    .batches()
                    .map(|batch| batch.iter().map(first_feature).collect())
                    .collect();
                assert_eq!(batches.len(), n.div_ceil(b), "n={n} b={b}");
                assert!(batches.iter().all(|batch| !batch.is_empty() && batch.len() <= b));

                let mut seen: Vec<f64> = batches.into_iter().flatten().collect();
                seen.sort_by(f64::total_cmp);
                let expected: Vec<f64> = (0..n).map(|i| i as f64).collect();
                assert_eq!(seen, expected, "n={n} b={b}");
            }
        }
    }

    #[test]
    fn test_shuffle_is_destructive() {
        let dir        = tempfile::tempdir().unwrap();
        let mut loader = csv_loader(dir.path(), 10, true);
        let pass: Vec<f64> = loader.batches().flatten().map(first_feature).collect();
        // The stored order is now the shuffled order
        let stored: Vec<f64> = loader.iter().map(first_feature).collect();
        assert_eq!(pass, stored);
    }

    #[test]
    fn test_same_seed_same_shuffle() {
        let a_dir = tempfile::tempdir().unwrap();
        let b_dir = tempfile::tempdir().unwrap();
        let mut a = csv_loader(a_dir.path(), 5, true);
        let mut b = csv_loader(b_dir.path(), 5, true);
        let pa: Vec<f64> = a.batches().flatten().map(first_feature).collect();
        let pb: Vec<f64> = b.batches().flatten().map(first_feature).collect();
        assert_eq!(pa, pb);
    }

    #[test]
    fn test_index_and_len() {
        let dir    = tempfile::tempdir().unwrap();
        let loader = csv_loader(dir.path(), 4, false);
        assert_eq!(loader.len(), 10);
        assert_eq!(loader[3].label(), &Label::Int(0));
        assert!(loader.get(10).is_none());
    }

    #[test]
    fn test_missing_csv_constructs_empty() {
        let dir    = tempfile::tempdir().unwrap();
        let config = LoaderConfig::new("absent.csv").with_datasets_dir(dir.path());
        let mut loader = DataLoader::with_downloader(config, Box::new(NoNetwork)).unwrap();
        assert!(loader.is_empty());
        assert_eq!(loader.batches().count(), 0);
    }

    #[test]
    fn test_transport_failure_aborts_construction() {
        let dir    = tempfile::tempdir().unwrap();
        let config = LoaderConfig::new("MNIST").with_datasets_dir(dir.path());
        let err    = DataLoader::with_downloader(config, Box::new(NoNetwork)).unwrap_err();
        assert!(matches!(err, LoaderError::Transport { .. }));
    }

    #[test]
    fn test_known_image_dataset_loads_placeholders() {
        let dir    = tempfile::tempdir().unwrap();
        let config = LoaderConfig::new("CIFAR-10").with_datasets_dir(dir.path()).with_seed(3);
        let loader = DataLoader::with_downloader(config, Box::new(WriteBody("archive"))).unwrap();
        assert_eq!(loader.len(), 1000);
    }

    #[test]
    fn test_url_download_renames_dataset() {
        let dir    = tempfile::tempdir().unwrap();
        let config = LoaderConfig::new("remote")
            .with_datasets_dir(dir.path())
            .with_url("https://example.com/data/remote.csv");
        let loader = DataLoader::with_downloader(config, Box::new(WriteBody("1,2,0\n3,4,1\n"))).unwrap();
        assert_eq!(loader.dataset_name(), "remote.csv");
        assert_eq!(loader.len(), 2);
    }

    #[test]
    fn test_reload_after_url_download_reads_local_copy() {
        let dir    = tempfile::tempdir().unwrap();
        let config = LoaderConfig::new("remote")
            .with_datasets_dir(dir.path())
            .with_url("https://example.com/data/remote.csv");
        let mut loader =
            DataLoader::with_downloader(config, Box::new(WriteBody("1,2,0\n3,4,1\n"))).unwrap();
        assert!(loader.config().url().is_none());

        loader.reload().unwrap();
        loader.reload().unwrap();
        assert_eq!(loader.dataset_name(), "remote.csv");
        assert_eq!(loader.len(), 2);

        let files: Vec<String> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(files, vec!["remote.csv".to_string()]);
    }

    #[test]
    fn test_preprocessing_runs_at_load() {
        let dir = tempfile::tempdir().unwrap();
        csv_fixture(dir.path());
        let config = LoaderConfig::new("rows.csv")
            .with_datasets_dir(dir.path())
            .with_preprocess(Preprocessor::normalize());
        let loader = DataLoader::with_downloader(config, Box::new(NoNetwork)).unwrap();
        for s in loader.iter() {
            assert!(s.features().as_values().unwrap().iter().all(|v| (0.0..=1.0).contains(v)));
        }
    }

    #[test]
    fn test_preprocess_type_error_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("notes.txt"), "some words here lbl\n").unwrap();
        let config = LoaderConfig::new("notes.txt")
            .with_datasets_dir(dir.path())
            .with_preprocess(Preprocessor::resize_image_default());
        let err = DataLoader::with_downloader(config, Box::new(NoNetwork)).unwrap_err();
        assert!(matches!(err, LoaderError::TypeMismatch { .. }));
    }

    #[test]
    fn test_filter_data() {
        let dir        = tempfile::tempdir().unwrap();
        let mut loader = csv_loader(dir.path(), 4, false);
        loader.filter_data(|s| s.label() == &Label::Int(0));
        assert_eq!(loader.len(), 4);

        loader.filter_data(|s| s.features().len() > 0);
        assert_eq!(loader.len(), 4);
    }

    #[test]
    fn test_apply_transformation_rewrites_everything() {
        let dir        = tempfile::tempdir().unwrap();
        let mut loader = csv_loader(dir.path(), 4, false);
        loader.apply_transformation(|s| s.with_features(Features::Scalar(1.0)));
        assert!(loader.iter().all(|s| s.features() == &Features::Scalar(1.0)));
    }

    #[test]
    fn test_cache_invalidated_by_mutation() {
        let dir        = tempfile::tempdir().unwrap();
        let mut loader = csv_loader(dir.path(), 4, false);
        let before     = loader.get_sample(0).unwrap();
        assert_eq!(first_feature(&before), 0.0);
        assert!(loader.cache().contains(0));

        loader.filter_data(|s| first_feature(s) >= 5.0);
        assert!(loader.cache().is_empty());
        assert_eq!(first_feature(&loader.get_sample(0).unwrap()), 5.0);

        loader.apply_transformation(|s| s.with_features(Features::vector(vec![-1.0])));
        assert_eq!(first_feature(&loader.get_sample(0).unwrap()), -1.0);
    }

    #[test]
    fn test_get_sample_hits_cache() {
        let dir        = tempfile::tempdir().unwrap();
        let mut loader = csv_loader(dir.path(), 4, false);
        loader.get_sample(2);
        loader.get_sample(2);
        assert_eq!(loader.cache().stats(), (1, 1));
        assert!(loader.get_sample(99).is_none());
    }

    #[test]
    fn test_temporary_augmentation_composes_and_restores() {
        let dir        = tempfile::tempdir().unwrap();
        let mut loader = csv_loader(dir.path(), 4, false);
        let f          = tag("_f");
        loader.set_preprocessor(Some(f.clone()));

        let input = Sample::new(Features::Scalar(0.0), Label::text("x"));
        {
            let mut scope = loader.temporary_augmentation(tag("_a"));
            let out = scope.preprocess(input.clone()).unwrap();
            assert_eq!(out.label(), &Label::text("x_f_a"));
            assert!(!scope.preprocessor().same_as(&f));
        }

        assert!(loader.preprocessor().same_as(&f));
        let out = loader.preprocess(input).unwrap();
        assert_eq!(out.label(), &Label::text("x_f"));
    }

    #[test]
    fn test_temporary_augmentation_restores_none() {
        let dir        = tempfile::tempdir().unwrap();
        let mut loader = csv_loader(dir.path(), 4, false);
        drop(loader.temporary_augmentation(Preprocessor::augment()));
        assert!(loader.config().preprocess().is_none());
    }

    #[test]
    fn test_temporary_augmentation_restores_after_panic() {
        let dir        = tempfile::tempdir().unwrap();
        let mut loader = csv_loader(dir.path(), 4, false);
        let f          = tag("_f");
        loader.set_preprocessor(Some(f.clone()));

        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            let _scope = loader.temporary_augmentation(tag("_a"));
            panic!("boom inside scope");
        }));
        assert!(result.is_err());
        assert!(loader.preprocessor().same_as(&f));
    }

    #[test]
    fn test_reload_uses_active_preprocessor() {
        let dir        = tempfile::tempdir().unwrap();
        let mut loader = csv_loader(dir.path(), 4, false);
        {
            let mut scope = loader.temporary_augmentation(Preprocessor::new("zero", |s: Sample, _: &mut StdRng| {
                Ok(s.with_features(Features::Scalar(0.0)))
            }));
            scope.reload().unwrap();
        }
        assert!(loader.iter().all(|s| s.features() == &Features::Scalar(0.0)));
    }

    #[test]
    fn test_setters() {
        let dir        = tempfile::tempdir().unwrap();
        let mut loader = csv_loader(dir.path(), 4, false);
        loader.set_batch_size(3).unwrap();
        assert!(loader.set_batch_size(0).is_err());
        assert_eq!(loader.batch_size(), 3);
        assert_eq!(loader.batches().count(), 4);
        loader.set_shuffle(true);
        assert!(loader.shuffle());
    }

    #[test]
    fn test_display() {
        let dir    = tempfile::tempdir().unwrap();
        let loader = csv_loader(dir.path(), 8, false);
        assert_eq!(
            loader.to_string(),
            "DataLoader(dataset=rows.csv, batch_size=8, shuffle=false)"
        );
    }
}
