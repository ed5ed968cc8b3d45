pub mod prediction;

pub use prediction::{HealthResponse, HomeResponse, PredictRequest, PredictResponse};
