//! Process-wide, read-only model handle.

use super::classifier::{Classifier, ModelArtifact, ModelError};
use chrono::{DateTime, Utc};
use std::path::Path;
use std::sync::Arc;

/// Owns the classifier for the lifetime of the process.
///
/// Cloning is cheap and every clone shares the same classifier; there is no
/// way to swap or reload it once built.
#[derive(Clone)]
pub struct ModelStore {
    classifier: Arc<dyn Classifier>,
    source: String,
    loaded_at: DateTime<Utc>,
}

impl ModelStore {
    /// Read and validate the artifact at `path`.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, ModelError> {
        let path = path.as_ref();

        let raw = match tokio::fs::read_to_string(path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(ModelError::NotFound(path.to_path_buf()));
            }
            Err(e) => {
                return Err(ModelError::Io {
                    path: path.to_path_buf(),
                    source: e,
                });
            }
        };

        let artifact = ModelArtifact::from_json(&raw)?;

        tracing::info!(
            path = %path.display(),
            model_type = artifact.model_type(),
            classes = ?artifact.classes(),
            "Loaded model artifact"
        );

        Ok(Self::from_classifier(
            Arc::new(artifact),
            path.display().to_string(),
        ))
    }

    /// Wrap an already-built classifier, e.g. a test double.
    pub fn from_classifier(classifier: Arc<dyn Classifier>, source: impl Into<String>) -> Self {
        Self {
            classifier,
            source: source.into(),
            loaded_at: Utc::now(),
        }
    }

    pub fn classifier(&self) -> &dyn Classifier {
        self.classifier.as_ref()
    }

    pub fn model_type(&self) -> &'static str {
        self.classifier.model_type()
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }
}
