use crate::models::{FeatureVector, Prediction, RiskLevel, FEATURE_NAMES};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError, ValidationErrors};

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct PredictRequest {
    #[schema(example = 120.5)]
    pub cases_per_100k: f64,
    #[schema(example = 42.0)]
    pub median_age: f64,
    #[schema(example = 18.3)]
    pub aged_65_above: f64,
}

impl PredictRequest {
    /// Feature vector in training order.
    pub fn features(&self) -> FeatureVector {
        FeatureVector::new(self.cases_per_100k, self.median_age, self.aged_65_above)
    }
}

// Only finiteness is checked; the model accepts any real value.
impl Validate for PredictRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        for (field, value) in FEATURE_NAMES.into_iter().zip(self.features().values()) {
            if !value.is_finite() {
                let mut error = ValidationError::new("finite");
                error.message = Some("must be a finite number".into());
                errors.add(field, error);
            }
        }

        if errors.errors().is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PredictResponse {
    /// Raw class label from the model.
    #[schema(example = 2)]
    pub prediction: i64,
    pub risk: RiskLevel,
}

impl From<Prediction> for PredictResponse {
    fn from(prediction: Prediction) -> Self {
        Self {
            prediction: prediction.class_label,
            risk: prediction.risk,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HomeResponse {
    #[schema(example = "COVID Risk Prediction API")]
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "ok")]
    pub status: String,
    #[schema(example = "risk-service")]
    pub service: String,
    pub version: String,
    #[schema(example = "decision_tree")]
    pub model_type: String,
    #[schema(example = "models/covid_risk_model.json")]
    pub model_source: String,
    pub model_loaded_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_integers_as_floats() {
        let request: PredictRequest =
            serde_json::from_str(r#"{"cases_per_100k": 120, "median_age": 42, "aged_65_above": 18.3}"#)
                .unwrap();
        assert_eq!(request.features().values(), &[120.0, 42.0, 18.3]);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_non_finite_values_fail_validation() {
        let request = PredictRequest {
            cases_per_100k: f64::NAN,
            median_age: 42.0,
            aged_65_above: f64::INFINITY,
        };
        let errors = request.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("cases_per_100k"));
        assert!(fields.contains_key("aged_65_above"));
        assert!(!fields.contains_key("median_age"));
    }

    #[test]
    fn test_missing_field_is_rejected() {
        let result: Result<PredictRequest, _> =
            serde_json::from_str(r#"{"cases_per_100k": 1.0, "median_age": 2.0}"#);
        assert!(result.unwrap_err().to_string().contains("aged_65_above"));
    }

    #[test]
    fn test_response_shape() {
        let response = PredictResponse::from(Prediction::from_class(0).unwrap());
        assert_eq!(
            serde_json::to_value(response).unwrap(),
            serde_json::json!({"prediction": 0, "risk": "Low"})
        );
    }
}
