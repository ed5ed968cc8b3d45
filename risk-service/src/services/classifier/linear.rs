use super::{argmax, ClassifierError, ModelError};
use crate::models::{FeatureVector, FEATURE_COUNT};
use serde::Deserialize;

/// Standardisation applied before the linear model, as `(x - mean) / scale`.
#[derive(Debug, Clone, Deserialize)]
pub struct StandardScaler {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

impl StandardScaler {
    fn validate(&self) -> Result<(), ModelError> {
        if self.mean.len() != FEATURE_COUNT || self.scale.len() != FEATURE_COUNT {
            return Err(ModelError::Invalid(format!(
                "scaler must have {} means and scales",
                FEATURE_COUNT
            )));
        }
        if self.mean.iter().any(|m| !m.is_finite())
            || self.scale.iter().any(|s| !s.is_finite() || *s == 0.0)
        {
            return Err(ModelError::Invalid(
                "scaler has a non-finite mean or a zero scale".to_string(),
            ));
        }
        Ok(())
    }

    fn transform(&self, features: &FeatureVector) -> [f64; FEATURE_COUNT] {
        let mut out = *features.values();
        for (i, x) in out.iter_mut().enumerate() {
            *x = (*x - self.mean[i]) / self.scale[i];
        }
        out
    }
}

/// Multinomial or binary logistic regression.
#[derive(Debug, Clone, Deserialize)]
pub struct LogisticRegression {
    /// One row per class, or a single row for binary models.
    pub coef: Vec<Vec<f64>>,
    pub intercept: Vec<f64>,
    #[serde(default)]
    pub scaler: Option<StandardScaler>,
}

impl LogisticRegression {
    pub(crate) fn validate(&self, n_classes: usize) -> Result<(), ModelError> {
        let expected_rows = if n_classes == 2 { 1 } else { n_classes };
        if self.coef.len() != expected_rows {
            return Err(ModelError::Invalid(format!(
                "logistic regression has {} coefficient rows, expected {}",
                self.coef.len(),
                expected_rows
            )));
        }
        if self.intercept.len() != expected_rows {
            return Err(ModelError::Invalid(format!(
                "logistic regression has {} intercepts, expected {}",
                self.intercept.len(),
                expected_rows
            )));
        }
        if self.coef.iter().any(|row| row.len() != FEATURE_COUNT) {
            return Err(ModelError::Invalid(format!(
                "every coefficient row must have {} entries",
                FEATURE_COUNT
            )));
        }
        if self
            .coef
            .iter()
            .flatten()
            .chain(self.intercept.iter())
            .any(|v| !v.is_finite())
        {
            return Err(ModelError::Invalid(
                "logistic regression has non-finite parameters".to_string(),
            ));
        }
        if let Some(scaler) = &self.scaler {
            scaler.validate()?;
        }
        Ok(())
    }

    fn decision_function(&self, features: &FeatureVector) -> Vec<f64> {
        let x = match &self.scaler {
            Some(scaler) => scaler.transform(features),
            None => *features.values(),
        };

        self.coef
            .iter()
            .zip(&self.intercept)
            .map(|(row, b)| row.iter().zip(&x).map(|(w, xi)| w * xi).sum::<f64>() + b)
            .collect()
    }

    pub(crate) fn predict_index(&self, features: &FeatureVector) -> Result<usize, ClassifierError> {
        let scores = self.decision_function(features);
        if scores.iter().any(|s| !s.is_finite()) {
            return Err(ClassifierError::Inference(
                "decision function is not finite".to_string(),
            ));
        }

        match scores.as_slice() {
            [score] => Ok(usize::from(*score > 0.0)),
            _ => argmax(&scores).ok_or(ClassifierError::NoDecision),
        }
    }
}
