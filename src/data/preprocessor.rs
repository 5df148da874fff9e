// ============================================================
// Layer 4 — Sample Preprocessing
// ============================================================
// A Preprocessor is a named Sample → Sample function that runs
// once per sample at load time. Built-ins:
//
//   identity      → returns the sample unchanged (the default)
//   normalize     → min-max rescale numeric arrays to [0, 1];
//                   scalars assume a [0, 255] domain; text is
//                   left alone
//   augment       → text: one random word-level augmentation
//                   numbers: add N(0, 0.1) noise element-wise
//   resize_image  → resample an [h, w(, c)] array to a target
//                   pixel size (default 32×32)
//
// Preprocessors take the RNG explicitly so seeded loaders are
// reproducible, and return Result so a type mismatch surfaces
// as LoaderError::TypeMismatch instead of garbage data.
//
// Preprocessors are cheap to clone (shared Arc) and compose
// with then():
//
//   normalize.then(&augment)  ==  augment(normalize(x))
//
// Reference: Rust Book §13 (Closures), §16 (Arc)
//            image crate documentation (imageops::resize)

use std::{fmt, sync::Arc};

use image::{imageops::FilterType, GrayImage, RgbImage};
use rand::rngs::StdRng;
use rand_distr::{Distribution, Normal};

use crate::data::text_augment::augment_text;
use crate::domain::{
    errors::LoaderError,
    sample::{Features, Sample},
};

/// Standard deviation of the Gaussian noise added by `augment`
pub const NOISE_STD_DEV: f64 = 0.1;

/// Target size used by `Preprocessor::resize_image_default`
pub const DEFAULT_IMAGE_SIZE: (u32, u32) = (32, 32);

/// Upper bound of the assumed pixel domain for bare values
const PIXEL_MAX: f64 = 255.0;

type PreprocessFn = dyn Fn(Sample, &mut StdRng) -> Result<Sample, LoaderError> + Send + Sync;

// ─── Preprocessor ─────────────────────────────────────────────────────────────
/// A named, shareable preprocessing function.
#[derive(Clone)]
pub struct Preprocessor {
    name: Arc<str>,
    func: Arc<PreprocessFn>,
}

impl Preprocessor {
    /// Wrap an arbitrary function
    pub fn new<F>(name: impl Into<String>, func: F) -> Self
    where
        F: Fn(Sample, &mut StdRng) -> Result<Sample, LoaderError> + Send + Sync + 'static,
    {
        Self {
            name: Arc::from(name.into()),
            func: Arc::new(func),
        }
    }

    /// The default preprocessing: no change
    pub fn identity() -> Self {
        Self::new("identity", |sample, _| Ok(sample))
    }

    pub fn normalize() -> Self {
        Self::new("normalize", |sample, _| normalize(sample))
    }

    pub fn augment() -> Self {
        Self::new("augment", augment)
    }

    pub fn resize_image(width: u32, height: u32) -> Self {
        Self::new(format!("resize_image({width}x{height})"), move |sample, _| {
            resize_image(sample, (width, height))
        })
    }

    pub fn resize_image_default() -> Self {
        Self::resize_image(DEFAULT_IMAGE_SIZE.0, DEFAULT_IMAGE_SIZE.1)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn apply(&self, sample: Sample, rng: &mut StdRng) -> Result<Sample, LoaderError> {
        (self.func)(sample, rng)
    }

    /// Run `self` first, then `next`
    pub fn then(&self, next: &Preprocessor) -> Preprocessor {
        let first  = Arc::clone(&self.func);
        let second = Arc::clone(&next.func);
        Self {
            name: Arc::from(format!("{}+{}", self.name, next.name)),
            func: Arc::new(move |sample: Sample, rng: &mut StdRng| {
                let sample = first(sample, rng)?;
                second(sample, rng)
            }),
        }
    }

    /// True when both handles point at the same function
    pub fn same_as(&self, other: &Preprocessor) -> bool {
        Arc::ptr_eq(&self.func, &other.func)
    }
}

impl Default for Preprocessor {
    fn default() -> Self {
        Self::identity()
    }
}

impl fmt::Debug for Preprocessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Preprocessor").field(&&*self.name).finish()
    }
}

// ─── normalize ────────────────────────────────────────────────────────────────

/// Rescale a bare value from the [0, 255] pixel domain to [0, 1]
pub fn normalize_value(value: f64) -> f64 {
    value / PIXEL_MAX
}

/// Min-max rescale a sample's numeric features to [0, 1].
///
/// Text features pass through. A constant array (max == min) maps to
/// all zeros instead of NaN. Empty arrays, and arrays whose shape does
/// not match their length, are a type mismatch.
pub fn normalize(sample: Sample) -> Result<Sample, LoaderError> {
    let (features, label) = sample.into_parts();
    let features = match features {
        Features::Text(_) => features,
        Features::Scalar(v) => Features::Scalar(normalize_value(v)),
        Features::Array { values, shape } => {
            check_shape("normalize", &values, &shape)?;
            if values.is_empty() {
                return Err(LoaderError::type_mismatch("normalize", "empty array"));
            }
            let min   = values.iter().copied().fold(f64::INFINITY, f64::min);
            let max   = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            let range = max - min;
            let values = if range == 0.0 {
                tracing::debug!("normalize: constant array of {} values, mapping to 0", values.len());
                vec![0.0; values.len()]
            } else {
                values.iter().map(|v| (v - min) / range).collect()
            };
            Features::Array { values, shape }
        }
    };
    Ok(Sample::new(features, label))
}

// ─── augment ──────────────────────────────────────────────────────────────────

/// Randomly perturb a sample without touching its label
pub fn augment(sample: Sample, rng: &mut StdRng) -> Result<Sample, LoaderError> {
    let (features, label) = sample.into_parts();
    let noise = Normal::new(0.0, NOISE_STD_DEV)
        .map_err(|e| LoaderError::Configuration(format!("invalid noise distribution: {e}")))?;

    let features = match features {
        Features::Text(text) => Features::Text(augment_text(&text, rng)),
        Features::Scalar(v) => Features::Scalar(v + noise.sample(rng)),
        Features::Array { values, shape } => Features::Array {
            values: values.into_iter().map(|v| v + noise.sample(rng)).collect(),
            shape,
        },
    };
    Ok(Sample::new(features, label))
}

// ─── resize_image ─────────────────────────────────────────────────────────────

/// Resample an image-shaped array to `(width, height)` pixels.
///
/// Accepts shapes `[h, w]`, `[h, w, 1]` and `[h, w, 3]`. Values are
/// clamped to 0..=255 and truncated to bytes first, so features that
/// were already normalized to [0, 1] come out as (mostly) zeros.
pub fn resize_image(sample: Sample, size: (u32, u32)) -> Result<Sample, LoaderError> {
    let (features, label) = sample.into_parts();
    let (values, shape) = match features {
        Features::Array { values, shape } => (values, shape),
        other => return Err(LoaderError::type_mismatch("resize_image", other.kind())),
    };
    check_shape("resize_image", &values, &shape)?;

    let (h, w, channels) = match shape.as_slice() {
        [h, w]    => (*h, *w, 1),
        [h, w, c] if *c == 1 || *c == 3 => (*h, *w, *c),
        _ => {
            return Err(LoaderError::type_mismatch(
                "resize_image",
                format!("array of shape {shape:?}"),
            ))
        }
    };
    let (h, w) = (to_u32(h)?, to_u32(w)?);
    let (tw, th) = size;
    let bytes: Vec<u8> = values.iter().map(|v| v.clamp(0.0, PIXEL_MAX) as u8).collect();

    let resized: Vec<f64> = if channels == 1 {
        let img = GrayImage::from_raw(w, h, bytes)
            .ok_or_else(|| LoaderError::Image("pixel buffer does not match dimensions".into()))?;
        image::imageops::resize(&img, tw, th, FilterType::CatmullRom)
            .into_raw()
            .into_iter()
            .map(f64::from)
            .collect()
    } else {
        let img = RgbImage::from_raw(w, h, bytes)
            .ok_or_else(|| LoaderError::Image("pixel buffer does not match dimensions".into()))?;
        image::imageops::resize(&img, tw, th, FilterType::CatmullRom)
            .into_raw()
            .into_iter()
            .map(f64::from)
            .collect()
    };

    let mut new_shape = vec![th as usize, tw as usize];
    if shape.len() == 3 {
        new_shape.push(channels);
    }
    Ok(Sample::new(Features::array(resized, new_shape), label))
}

fn check_shape(operation: &'static str, values: &[f64], shape: &[usize]) -> Result<(), LoaderError> {
    let expected: usize = shape.iter().product();
    if expected != values.len() {
        return Err(LoaderError::type_mismatch(
            operation,
            format!("array of shape {shape:?} holding {} values", values.len()),
        ));
    }
    Ok(())
}

fn to_u32(n: usize) -> Result<u32, LoaderError> {
    u32::try_from(n).map_err(|_| LoaderError::Image(format!("dimension {n} is too large")))
}
