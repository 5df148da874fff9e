// ============================================================
// Layer 3 — Sample Domain Type
// ============================================================
// One (features, label) pair — the unit every other layer
// passes around.
//
// Features are a closed set of shapes:
//   Array  → numeric tensor data, row-major, with its shape
//   Scalar → a single number
//   Text   → a UTF-8 string (text datasets, directory datasets)
//
// Labels are either integer class ids or free-form strings.
//
// Samples have value semantics: fields are private and the only
// way to "change" a sample is to build a new one with
// with_features() / with_label().
//
// Reference: Rust Book §6 (Enums), §5 (Structs)

use std::fmt;

use serde::{Deserialize, Serialize};

// ─── Features ─────────────────────────────────────────────────────────────────
/// The feature payload of a sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Features {
    /// Row-major numeric data; `shape.iter().product()` should equal `values.len()`
    Array { values: Vec<f64>, shape: Vec<usize> },
    /// A single numeric value
    Scalar(f64),
    /// Raw text
    Text(String),
}

impl Features {
    /// Build a 1-D array (the shape CSV rows produce)
    pub fn vector(values: Vec<f64>) -> Self {
        let shape = vec![values.len()];
        Features::Array { values, shape }
    }

    /// Build an array with an explicit shape
    pub fn array(values: Vec<f64>, shape: Vec<usize>) -> Self {
        Features::Array { values, shape }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Features::Text(text.into())
    }

    /// Number of elements: array length, character count, or 1 for a scalar
    pub fn len(&self) -> usize {
        match self {
            Features::Array { values, .. } => values.len(),
            Features::Scalar(_) => 1,
            Features::Text(t) => t.chars().count(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Short name of the variant, used in type-mismatch errors
    pub fn kind(&self) -> &'static str {
        match self {
            Features::Array { .. } => "array",
            Features::Scalar(_) => "scalar",
            Features::Text(_) => "text",
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Features::Text(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_values(&self) -> Option<&[f64]> {
        match self {
            Features::Array { values, .. } => Some(values),
            _ => None,
        }
    }
}

// ─── Label ────────────────────────────────────────────────────────────────────
/// The target of a sample
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Label {
    /// Integer class id (image and CSV datasets)
    Int(i64),
    /// String label (text and directory datasets)
    Text(String),
}

impl Label {
    pub fn text(label: impl Into<String>) -> Self {
        Label::Text(label.into())
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Int(i) => write!(f, "{i}"),
            Label::Text(s) => write!(f, "{s}"),
        }
    }
}

// ─── Sample ───────────────────────────────────────────────────────────────────
/// An immutable (features, label) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    features: Features,
    label:    Label,
}

impl Sample {
    pub fn new(features: Features, label: Label) -> Self {
        Self { features, label }
    }

    pub fn features(&self) -> &Features {
        &self.features
    }

    pub fn label(&self) -> &Label {
        &self.label
    }

    /// Produce a new sample with the same label and different features
    pub fn with_features(self, features: Features) -> Self {
        Self { features, label: self.label }
    }

    /// Produce a new sample with the same features and a different label
    pub fn with_label(self, label: Label) -> Self {
        Self { features: self.features, label }
    }

    /// Split back into owned parts
    pub fn into_parts(self) -> (Features, Label) {
        (self.features, self.label)
    }
}
