//! Fixed-output classifiers for testing.

use super::{Classifier, ClassifierError};
use crate::models::FeatureVector;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Always returns the same class label and counts how often it was asked.
#[derive(Debug)]
pub struct FixedClassifier {
    label: i64,
    calls: AtomicUsize,
}

impl FixedClassifier {
    pub fn new(label: i64) -> Self {
        Self {
            label,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Classifier for FixedClassifier {
    fn predict(&self, _features: &FeatureVector) -> Result<i64, ClassifierError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.label)
    }

    fn model_type(&self) -> &'static str {
        "fixed"
    }
}

/// Always fails inference.
#[derive(Debug, Default)]
pub struct FailingClassifier;

impl Classifier for FailingClassifier {
    fn predict(&self, _features: &FeatureVector) -> Result<i64, ClassifierError> {
        Err(ClassifierError::Inference(
            "mock classifier configured to fail".to_string(),
        ))
    }

    fn model_type(&self) -> &'static str {
        "failing"
    }
}
