//! Decision tree and random forest estimators.
//!
//! Trees use the flat, pre-order node layout produced by scikit-learn's
//! `tree_` attribute: parallel arrays indexed by node id, with `-1` marking
//! the children of a leaf.

use super::{argmax, ClassifierError, ModelError};
use crate::models::{FeatureVector, FEATURE_COUNT};
use serde::Deserialize;

const LEAF: i64 = -1;

#[derive(Debug, Clone, Deserialize)]
pub struct DecisionTree {
    pub children_left: Vec<i64>,
    pub children_right: Vec<i64>,
    pub feature: Vec<i64>,
    pub threshold: Vec<f64>,
    /// Per-node class weights, one column per entry of the artifact's `classes`.
    pub value: Vec<Vec<f64>>,
}

impl DecisionTree {
    pub fn node_count(&self) -> usize {
        self.children_left.len()
    }

    fn is_leaf(&self, node: usize) -> bool {
        self.children_left[node] == LEAF
    }

    pub(crate) fn validate(&self, n_classes: usize) -> Result<(), ModelError> {
        let n = self.node_count();
        if n == 0 {
            return Err(ModelError::Invalid("decision tree has no nodes".to_string()));
        }
        if self.children_right.len() != n
            || self.feature.len() != n
            || self.threshold.len() != n
            || self.value.len() != n
        {
            return Err(ModelError::Invalid(format!(
                "decision tree arrays disagree in length (expected {} nodes)",
                n
            )));
        }

        for node in 0..n {
            let row = &self.value[node];
            if row.len() != n_classes {
                return Err(ModelError::Invalid(format!(
                    "node {} has {} class weights, expected {}",
                    node,
                    row.len(),
                    n_classes
                )));
            }
            if row.iter().any(|w| !w.is_finite() || *w < 0.0) {
                return Err(ModelError::Invalid(format!(
                    "node {} has a negative or non-finite class weight",
                    node
                )));
            }

            if self.is_leaf(node) {
                continue;
            }

            let (left, right) = (self.children_left[node], self.children_right[node]);
            // Pre-order layout: children always follow their parent, so no cycles.
            for child in [left, right] {
                if child <= node as i64 || child >= n as i64 {
                    return Err(ModelError::Invalid(format!(
                        "node {} has out-of-range child {}",
                        node, child
                    )));
                }
            }

            let feature = self.feature[node];
            if feature < 0 || feature >= FEATURE_COUNT as i64 {
                return Err(ModelError::Invalid(format!(
                    "node {} splits on unknown feature {}",
                    node, feature
                )));
            }
            if !self.threshold[node].is_finite() {
                return Err(ModelError::Invalid(format!(
                    "node {} has a non-finite threshold",
                    node
                )));
            }
        }

        Ok(())
    }

    /// Class weights of the leaf reached by `features`.
    pub(crate) fn leaf_weights(&self, features: &FeatureVector) -> Result<&[f64], ClassifierError> {
        let mut node = 0usize;

        // A root-to-leaf path visits each node at most once.
        for _ in 0..self.node_count() {
            let left = *self
                .children_left
                .get(node)
                .ok_or(ClassifierError::MalformedTree(node))?;

            if left == LEAF {
                return self
                    .value
                    .get(node)
                    .map(Vec::as_slice)
                    .ok_or(ClassifierError::MalformedTree(node));
            }

            let feature = usize::try_from(self.feature[node])
                .map_err(|_| ClassifierError::MalformedTree(node))?;
            let x = features
                .get(feature)
                .ok_or(ClassifierError::FeatureOutOfRange(feature))?;

            // Trees are fit on float32 inputs; thresholds sit between float32 values.
            let next = if f64::from(x as f32) <= self.threshold[node] {
                left
            } else {
                self.children_right[node]
            };
            node = usize::try_from(next).map_err(|_| ClassifierError::MalformedTree(node))?;
        }

        Err(ClassifierError::MalformedTree(node))
    }

    /// Index into the artifact's `classes` with the largest leaf weight.
    pub(crate) fn predict_index(&self, features: &FeatureVector) -> Result<usize, ClassifierError> {
        argmax(self.leaf_weights(features)?).ok_or(ClassifierError::NoDecision)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RandomForest {
    pub estimators: Vec<DecisionTree>,
}

impl RandomForest {
    pub(crate) fn validate(&self, n_classes: usize) -> Result<(), ModelError> {
        if self.estimators.is_empty() {
            return Err(ModelError::Invalid("random forest has no estimators".to_string()));
        }
        for (index, tree) in self.estimators.iter().enumerate() {
            tree.validate(n_classes).map_err(|e| match e {
                ModelError::Invalid(msg) => ModelError::Invalid(format!("estimator {}: {}", index, msg)),
                other => other,
            })?;
        }
        Ok(())
    }

    /// Average the normalised leaf weights of every tree and pick the best class.
    pub(crate) fn predict_index(&self, features: &FeatureVector) -> Result<usize, ClassifierError> {
        let mut totals: Vec<f64> = Vec::new();

        for tree in &self.estimators {
            let weights = tree.leaf_weights(features)?;
            if totals.is_empty() {
                totals = vec![0.0; weights.len()];
            }
            let sum: f64 = weights.iter().sum();
            if sum <= 0.0 {
                continue;
            }
            for (total, weight) in totals.iter_mut().zip(weights) {
                *total += weight / sum;
            }
        }

        argmax(&totals).ok_or(ClassifierError::NoDecision)
    }
}
