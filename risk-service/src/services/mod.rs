pub mod classifier;
pub mod metrics;
pub mod model_store;
pub mod predictor;

pub use classifier::{Classifier, ClassifierError, ModelArtifact, ModelError};
pub use metrics::{get_metrics, init_metrics};
pub use model_store::ModelStore;
pub use predictor::{PredictionError, Predictor};
