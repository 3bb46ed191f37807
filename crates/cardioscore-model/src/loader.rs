//! Loading classifiers from disk
//!
//! The artifact is read once at process start; a failed load refuses to
//! serve rather than running with an unchecked model.

use crate::artifact::ModelArtifact;
use crate::classifier::Classifier;
use crate::logistic::LogisticModel;
use cardioscore_core::Result;
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// Read and validate a model artifact from disk
pub fn load_artifact(path: impl AsRef<Path>) -> Result<ModelArtifact> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "reading model artifact");

    let raw = fs::read_to_string(path)?;
    let artifact: ModelArtifact = serde_json::from_str(&raw)?;
    artifact.validate()?;

    Ok(artifact)
}

/// Load a ready-to-serve classifier from an artifact on disk
pub fn load_classifier(path: impl AsRef<Path>) -> Result<Arc<dyn Classifier>> {
    let path = path.as_ref();
    let artifact = load_artifact(path)?;
    let model = LogisticModel::from_artifact(&artifact)?;

    tracing::info!(
        path = %path.display(),
        model = %model.name(),
        features = artifact.feature_names.len(),
        scaled = artifact.scaler.is_some(),
        "loaded classifier artifact"
    );

    Ok(Arc::new(model))
}
