use super::classifier::ClassifierError;
use super::metrics::{record_inference, record_prediction, record_prediction_error};
use super::model_store::ModelStore;
use crate::models::{FeatureVector, Prediction, UnknownClass};
use service_core::error::AppError;
use std::time::Instant;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PredictionError {
    #[error("Classifier failed: {0}")]
    Classifier(#[from] ClassifierError),

    #[error("Model returned an unmapped label: {0}")]
    UnknownClass(#[from] UnknownClass),
}

impl From<PredictionError> for AppError {
    fn from(err: PredictionError) -> Self {
        AppError::InternalError(anyhow::Error::new(err))
    }
}

/// Runs one feature vector through the model and maps the label to a risk level.
#[derive(Clone)]
pub struct Predictor {
    store: ModelStore,
}

impl Predictor {
    pub fn new(store: ModelStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &ModelStore {
        &self.store
    }

    #[tracing::instrument(skip(self), fields(model_type = self.store.model_type()))]
    pub fn predict(&self, features: &FeatureVector) -> Result<Prediction, PredictionError> {
        let start = Instant::now();
        let result = self.store.classifier().predict(features);
        record_inference(self.store.model_type(), start.elapsed().as_secs_f64());

        let class_label = result.map_err(|e| {
            record_prediction_error("classifier");
            tracing::error!(error = %e, "Classifier failed");
            e
        })?;

        let prediction = Prediction::from_class(class_label).map_err(|e| {
            record_prediction_error("unknown_class");
            tracing::error!(class_label, "Model returned a label outside the risk domain");
            e
        })?;

        record_prediction(prediction.risk.as_str());
        tracing::debug!(class_label, risk = %prediction.risk, "Prediction complete");

        Ok(prediction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RiskLevel;
    use crate::services::classifier::{FailingClassifier, FixedClassifier};
    use std::sync::Arc;

    fn predictor_with(label: i64) -> Predictor {
        Predictor::new(ModelStore::from_classifier(
            Arc::new(FixedClassifier::new(label)),
            "test",
        ))
    }

    fn features() -> FeatureVector {
        FeatureVector::new(120.5, 42.0, 18.3)
    }

    #[test]
    fn test_maps_each_class_to_its_label() {
        for (label, risk) in [(0, RiskLevel::Low), (1, RiskLevel::Medium), (2, RiskLevel::High)] {
            let prediction = predictor_with(label).predict(&features()).unwrap();
            assert_eq!(prediction.class_label, label);
            assert_eq!(prediction.risk, risk);
        }
    }

    #[test]
    fn test_unknown_label_is_an_error() {
        let err = predictor_with(5).predict(&features()).unwrap_err();
        assert!(matches!(err, PredictionError::UnknownClass(UnknownClass(5))));
    }

    #[test]
    fn test_classifier_failure_propagates() {
        let predictor = Predictor::new(ModelStore::from_classifier(
            Arc::new(FailingClassifier),
            "test",
        ));
        let err = predictor.predict(&features()).unwrap_err();
        assert!(matches!(err, PredictionError::Classifier(_)));
    }

    #[test]
    fn test_errors_surface_as_internal() {
        let err: AppError = PredictionError::UnknownClass(UnknownClass(9)).into();
        assert!(matches!(err, AppError::InternalError(_)));
    }
}
