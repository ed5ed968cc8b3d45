//! JSON model artifact loaded at startup.

use super::linear::LogisticRegression;
use super::tree::{DecisionTree, RandomForest};
use super::{Classifier, ClassifierError, ModelError};
use crate::models::{FeatureVector, RiskLevel, FEATURE_NAMES};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "model_type", rename_all = "snake_case")]
pub enum Estimator {
    DecisionTree(DecisionTree),
    RandomForest(RandomForest),
    LogisticRegression(LogisticRegression),
}

impl Estimator {
    fn name(&self) -> &'static str {
        match self {
            Estimator::DecisionTree(_) => "decision_tree",
            Estimator::RandomForest(_) => "random_forest",
            Estimator::LogisticRegression(_) => "logistic_regression",
        }
    }
}

/// An immutable classifier read from disk.
///
/// Build it through [`ModelArtifact::from_json`], which rejects artifacts that
/// fail structural validation.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelArtifact {
    #[serde(default)]
    feature_names: Option<Vec<String>>,
    classes: Vec<i64>,
    #[serde(flatten)]
    estimator: Estimator,
}

impl ModelArtifact {
    pub fn from_json(raw: &str) -> Result<Self, ModelError> {
        let artifact: ModelArtifact = serde_json::from_str(raw)?;
        artifact.validate()?;
        Ok(artifact)
    }

    pub fn classes(&self) -> &[i64] {
        &self.classes
    }

    fn validate(&self) -> Result<(), ModelError> {
        if let Some(names) = &self.feature_names {
            if names.iter().map(String::as_str).ne(FEATURE_NAMES) {
                return Err(ModelError::Invalid(format!(
                    "feature_names {:?} do not match the expected order {:?}",
                    names, FEATURE_NAMES
                )));
            }
        }

        if self.classes.is_empty() {
            return Err(ModelError::Invalid("classes must not be empty".to_string()));
        }
        if let Some(label) = self
            .classes
            .iter()
            .find(|label| RiskLevel::try_from(**label).is_err())
        {
            return Err(ModelError::Invalid(format!(
                "class label {} has no risk level",
                label
            )));
        }

        let n_classes = self.classes.len();
        match &self.estimator {
            Estimator::DecisionTree(tree) => tree.validate(n_classes),
            Estimator::RandomForest(forest) => forest.validate(n_classes),
            Estimator::LogisticRegression(model) => {
                if n_classes < 2 {
                    return Err(ModelError::Invalid(
                        "logistic regression needs at least two classes".to_string(),
                    ));
                }
                model.validate(n_classes)
            }
        }
    }
}

impl Classifier for ModelArtifact {
    fn predict(&self, features: &FeatureVector) -> Result<i64, ClassifierError> {
        let index = match &self.estimator {
            Estimator::DecisionTree(tree) => tree.predict_index(features)?,
            Estimator::RandomForest(forest) => forest.predict_index(features)?,
            Estimator::LogisticRegression(model) => model.predict_index(features)?,
        };

        self.classes
            .get(index)
            .copied()
            .ok_or(ClassifierError::NoDecision)
    }

    fn model_type(&self) -> &'static str {
        self.estimator.name()
    }
}
