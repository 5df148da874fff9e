// ============================================================
// Layer 4 — Batch Iterator
// ============================================================
// Walks a slice of samples in contiguous windows of batch_size.
//
// How batching works here:
//   Input:  n samples, batch size b
//   Output: ceil(n / b) batches; every batch has b samples
//           except possibly the last, which holds the rest
//
//   n = 10, b = 4  →  [0..4] [4..8] [8..10]
//
// Batches borrow from the loader — no samples are copied.
//
// Reference: Rust Book §13 (Iterators), §8 (Slices)

use std::iter::FusedIterator;

use crate::domain::sample::Sample;

/// Iterator over `&[Sample]` batches
#[derive(Debug, Clone)]
pub struct Batches<'a> {
    samples:    &'a [Sample],
    batch_size: usize,
    cursor:     usize,
}

impl<'a> Batches<'a> {
    /// `batch_size` must be at least 1; the loader config enforces it.
    pub fn new(samples: &'a [Sample], batch_size: usize) -> Self {
        debug_assert!(batch_size > 0, "batch_size must be positive");
        Self { samples, batch_size: batch_size.max(1), cursor: 0 }
    }

    /// Position of the next batch's first sample
    pub fn cursor(&self) -> usize {
        self.cursor
    }
}

impl<'a> Iterator for Batches<'a> {
    type Item = &'a [Sample];

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor >= self.samples.len() {
            return None;
        }
        let end   = (self.cursor + self.batch_size).min(self.samples.len());
        let batch = &self.samples[self.cursor..end];
        self.cursor = end;
        Some(batch)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.samples.len().saturating_sub(self.cursor);
        let batches   = remaining.div_ceil(self.batch_size);
        (batches, Some(batches))
    }
}

impl ExactSizeIterator for Batches<'_> {}

impl FusedIterator for Batches<'_> {}

/// Number of batches `n` samples produce at batch size `b`
pub fn batch_count(n: usize, batch_size: usize) -> usize {
    n.div_ceil(batch_size.max(1))
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::sample::{Features, Label};

    fn samples(n: usize) -> Vec<Sample> {
        (0..n)
            .map(|i| Sample::new(Features::Scalar(i as f64), Label::Int(i as i64)))
            .collect()
    }

    #[test]
    fn test_last_batch_is_short() {
        let data  = samples(10);
        let sizes: Vec<usize> = Batches::new(&data, 4).map(|b| b.len()).collect();
        assert_eq!(sizes, vec![4, 4, 2]);
    }

    #[test]
    fn test_counts_and_order_for_many_sizes() {
        for n in 0..25 {
            let data = samples(n);
            for b in 1..8 {
                let batches: Vec<&[Sample]> = Batches::new(&data, b).collect();
                assert_eq!(batches.len(), batch_count(n, b));
                let flat: Vec<Sample> = batches.concat();
                assert_eq!(flat, data);
            }
        }
    }

    #[test]
    fn test_exact_size() {
        let data = samples(7);
        let mut it = Batches::new(&data, 3);
        assert_eq!(it.len(), 3);
        it.next();
        assert_eq!(it.len(), 2);
        assert_eq!(it.cursor(), 3);
    }

    #[test]
    fn test_empty_dataset_has_no_batches() {
        let data: Vec<Sample> = Vec::new();
        assert_eq!(Batches::new(&data, 32).count(), 0);
    }
}
