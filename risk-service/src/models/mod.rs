//! Domain models for the risk service.

pub mod features;
pub mod risk;

pub use features::{FeatureVector, FEATURE_COUNT, FEATURE_NAMES};
pub use risk::{Prediction, RiskLevel, UnknownClass};
