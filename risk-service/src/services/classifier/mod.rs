//! Classifier abstraction and implementations.
//!
//! A [`Classifier`] maps one [`FeatureVector`] to one integer class label.
//! The production implementation is [`ModelArtifact`], parsed from the JSON
//! artifact exported by the training pipeline; `mock` provides fixed-output
//! classifiers for tests.

pub mod artifact;
pub mod linear;
pub mod mock;
pub mod tree;

pub use artifact::ModelArtifact;
pub use mock::{FailingClassifier, FixedClassifier};

use crate::models::FeatureVector;
use std::path::PathBuf;
use thiserror::Error;

/// Error raised while evaluating a loaded classifier.
#[derive(Error, Debug)]
pub enum ClassifierError {
    #[error("Feature index {0} is out of range")]
    FeatureOutOfRange(usize),

    #[error("Decision tree is malformed at node {0}")]
    MalformedTree(usize),

    #[error("Model produced no decision")]
    NoDecision,

    #[error("Inference failed: {0}")]
    Inference(String),
}

/// Error raised while loading a model artifact.
#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Model artifact not found at {0}")]
    NotFound(PathBuf),

    #[error("Failed to read model artifact {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed model artifact: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Invalid model artifact: {0}")]
    Invalid(String),
}

/// Read-only inference capability shared by every request.
pub trait Classifier: Send + Sync {
    /// Predict the class label for a single row.
    fn predict(&self, features: &FeatureVector) -> Result<i64, ClassifierError>;

    /// Short name of the underlying estimator, used in logs and health output.
    fn model_type(&self) -> &'static str;
}

/// Index of the largest value; ties resolve to the lowest index.
pub(crate) fn argmax(values: &[f64]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (index, &value) in values.iter().enumerate() {
        match best {
            Some((_, current)) if value <= current => {}
            _ => best = Some((index, value)),
        }
    }
    best.map(|(index, _)| index)
}
