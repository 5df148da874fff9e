// ============================================================
// Layer 4 — Dataset Reader
// ============================================================
// Turns a local dataset into raw Samples. The format is picked
// from the dataset name alone:
//
//   *.jpg / *.png / *.gif        → Image      (placeholder samples)
//   *.csv                        → Csv
//   *.txt                        → Text
//   MNIST / CIFAR-10 / CIFAR-100 → Image
//   anything else                → Directory  (recursive walk)
//
// Readers are lenient. A missing file, a malformed row or a
// non-UTF-8 file is logged with tracing::warn! and the reader
// returns whatever it managed to read — possibly nothing. They
// never return an error, so a loader always constructs.
//
// CSV fields may be wrapped in double quotes ("1.5","2",0).
// Quoted fields containing commas are not supported.
//
// Image reading is a stand-in: it produces IMAGE_SAMPLE_COUNT
// random [32, 32, 3] arrays with labels in 0..10. No decoding.
//
// Reference: Rust Book §9 (Recoverable Errors), §12 (File I/O)
//            walkdir crate documentation

use std::{
    fs,
    io::{self, BufRead, BufReader},
    path::Path,
};

use rand::Rng;
use walkdir::WalkDir;

use crate::domain::sample::{Features, Label, Sample};

/// Dataset names that are read as image datasets regardless of extension
pub const IMAGE_DATASETS: [&str; 3] = ["MNIST", "CIFAR-10", "CIFAR-100"];

/// File extensions (without the dot) treated as images
pub const IMAGE_EXTENSIONS: [&str; 3] = ["jpg", "png", "gif"];

/// Number of placeholder samples an image dataset produces
pub const IMAGE_SAMPLE_COUNT: usize = 1000;

/// Shape of every placeholder image: height, width, channels
pub const IMAGE_SHAPE: [usize; 3] = [32, 32, 3];

/// Placeholder labels are drawn from 0..IMAGE_CLASSES
pub const IMAGE_CLASSES: i64 = 10;

// ─── DatasetFormat ────────────────────────────────────────────────────────────
/// How a dataset is read, decided from its name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetFormat {
    Image,
    Csv,
    Text,
    Directory,
}

impl DatasetFormat {
    /// Extension first, then the known-image-dataset whitelist,
    /// then directory mode.
    pub fn detect(dataset_name: &str) -> Self {
        let ext = Path::new(dataset_name)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("");

        if IMAGE_EXTENSIONS.contains(&ext) {
            DatasetFormat::Image
        } else if ext == "csv" {
            DatasetFormat::Csv
        } else if ext == "txt" {
            DatasetFormat::Text
        } else if IMAGE_DATASETS.contains(&dataset_name) {
            DatasetFormat::Image
        } else {
            DatasetFormat::Directory
        }
    }
}

/// Read `datasets_dir/dataset_name` in whatever format its name implies
pub fn read_dataset<R: Rng + ?Sized>(
    datasets_dir: &Path,
    dataset_name: &str,
    rng:          &mut R,
) -> Vec<Sample> {
    let path   = datasets_dir.join(dataset_name);
    let format = DatasetFormat::detect(dataset_name);
    tracing::debug!("Reading '{}' as {:?}", path.display(), format);

    match format {
        DatasetFormat::Image     => read_image_placeholder(rng),
        DatasetFormat::Csv       => read_csv(&path),
        DatasetFormat::Text      => read_text(&path),
        DatasetFormat::Directory => read_directory(&path),
    }
}

// ─── Image (placeholder) ──────────────────────────────────────────────────────

pub fn read_image_placeholder<R: Rng + ?Sized>(rng: &mut R) -> Vec<Sample> {
    let len: usize = IMAGE_SHAPE.iter().product();
    (0..IMAGE_SAMPLE_COUNT)
        .map(|_| {
            let values: Vec<f64> = (0..len).map(|_| rng.gen::<f64>()).collect();
            let label = rng.gen_range(0..IMAGE_CLASSES);
            Sample::new(Features::array(values, IMAGE_SHAPE.to_vec()), Label::Int(label))
        })
        .collect()
}

// ─── CSV ──────────────────────────────────────────────────────────────────────

/// Every column but the last is an f64 feature; the last is an integer label.
///
/// Blank lines are skipped. The first malformed row stops reading and
/// the rows parsed before it are returned.
pub fn read_csv(path: &Path) -> Vec<Sample> {
    let file = match fs::File::open(path) {
        Ok(f) => f,
        Err(e) => {
            report_open_error(path, &e);
            return Vec::new();
        }
    };

    let mut samples = Vec::new();
    for (line_no, line) in BufReader::new(file).lines().enumerate() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                tracing::warn!("Error reading CSV file '{}': {}", path.display(), e);
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }
        match parse_csv_row(&line) {
            Ok(sample) => samples.push(sample),
            Err(reason) => {
                tracing::warn!(
                    "Error reading CSV file '{}' at line {}: {}",
                    path.display(),
                    line_no + 1,
                    reason
                );
                break;
            }
        }
    }
    samples
}

fn parse_csv_row(line: &str) -> Result<Sample, String> {
    let fields: Vec<&str> = line.split(',').map(|f| unquote(f.trim())).collect();
    // split always yields at least one field
    let (label_field, feature_fields) = fields
        .split_last()
        .ok_or_else(|| "empty row".to_string())?;

    let label: i64 = label_field
        .parse()
        .map_err(|_| format!("label '{label_field}' is not an integer"))?;

    let features = feature_fields
        .iter()
        .map(|f| {
            f.parse::<f64>()
                .map_err(|_| format!("feature '{f}' is not a number"))
        })
        .collect::<Result<Vec<f64>, String>>()?;

    Ok(Sample::new(Features::vector(features), Label::Int(label)))
}

/// Strip one pair of surrounding double quotes, if present
fn unquote(field: &str) -> &str {
    field
        .strip_prefix('"')
        .and_then(|f| f.strip_suffix('"'))
        .map(str::trim)
        .unwrap_or(field)
}

// ─── Text ─────────────────────────────────────────────────────────────────────

/// One sample per line: the last whitespace-separated token is the label,
/// the rest (joined by single spaces) is the text. Lines with fewer than
/// two tokens are skipped.
pub fn read_text(path: &Path) -> Vec<Sample> {
    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            report_open_error(path, &e);
            return Vec::new();
        }
    };

    content
        .lines()
        .filter_map(|line| {
            let words: Vec<&str> = line.split_whitespace().collect();
            let (label, text) = words.split_last()?;
            if text.is_empty() {
                return None;
            }
            Some(Sample::new(Features::text(text.join(" ")), Label::text(*label)))
        })
        .collect()
}

// ─── Directory ────────────────────────────────────────────────────────────────

/// Every file under `root` (recursively) becomes a sample: its full text is
/// the feature, the name of the directory containing it is the label.
pub fn read_directory(root: &Path) -> Vec<Sample> {
    if !root.is_dir() {
        tracing::warn!(
            "Dataset directory '{}' does not exist, returning empty dataset",
            root.display()
        );
        return Vec::new();
    }

    let mut samples = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                tracing::warn!("Skipping unreadable entry under '{}': {}", root.display(), e);
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }

        let path  = entry.path();
        let label = path
            .parent()
            .and_then(|p| p.file_name())
            .and_then(|n| n.to_str())
            .unwrap_or_default()
            .to_string();

        match fs::read_to_string(path) {
            Ok(content) => samples.push(Sample::new(Features::Text(content), Label::Text(label))),
            Err(e) => tracing::warn!("Skipping '{}': {}", path.display(), e),
        }
    }
    samples
}

fn report_open_error(path: &Path, err: &io::Error) {
    if err.kind() == io::ErrorKind::NotFound {
        tracing::warn!("Error: Dataset file '{}' not found.", path.display());
    } else {
        tracing::warn!("Error reading dataset file '{}': {}", path.display(), err);
    }
}
