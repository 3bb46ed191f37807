//! On-disk model artifact format and load-time validation
//!
//! The artifact is a JSON document produced by the training pipeline. It
//! carries its own feature schema and class ordering so that the positional
//! contract between training and serving is checked at startup instead of
//! assumed.

use cardioscore_core::{Error, Result, FEATURE_COUNT, FEATURE_NAMES};
use serde::{Deserialize, Serialize};

/// Artifact format version this build understands
pub const ARTIFACT_VERSION: u32 = 1;

/// Standard-scaler parameters applied before the linear model, when the
/// training pipeline scaled its inputs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScalerParams {
    /// Per-feature means, in artifact feature order
    pub mean: Vec<f64>,

    /// Per-feature standard deviations, in artifact feature order
    pub scale: Vec<f64>,
}

/// Serialized classifier artifact
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    /// Model family identifier
    pub model: String,

    /// Artifact format version
    pub version: u32,

    /// Feature names in the order the model was trained on
    pub feature_names: Vec<String>,

    /// Class labels in probability-output order
    pub classes: Vec<i64>,

    /// Linear coefficients, one per feature
    pub coefficients: Vec<f64>,

    /// Intercept term
    pub intercept: f64,

    /// Optional input scaler fitted during training
    #[serde(default)]
    pub scaler: Option<ScalerParams>,
}

impl ModelArtifact {
    /// Check the artifact against the compiled-in serving contract.
    ///
    /// Rejects unsupported model families, schema drift between training and
    /// serving feature order, and any class ordering other than `[0, 1]`.
    pub fn validate(&self) -> Result<()> {
        if self.model != "logistic_regression" {
            return Err(Error::artifact(format!(
                "unsupported model family '{}'",
                self.model
            )));
        }

        if self.version != ARTIFACT_VERSION {
            return Err(Error::artifact(format!(
                "artifact version {} not supported (expected {})",
                self.version, ARTIFACT_VERSION
            )));
        }

        if self.feature_names.len() != FEATURE_COUNT {
            return Err(Error::schema(format!(
                "artifact has {} features, serving schema has {}",
                self.feature_names.len(),
                FEATURE_COUNT
            )));
        }

        for (position, (trained, served)) in
            self.feature_names.iter().zip(FEATURE_NAMES).enumerate()
        {
            if trained != served {
                return Err(Error::schema(format!(
                    "feature order mismatch at position {position}: artifact has '{trained}', serving schema has '{served}'"
                )));
            }
        }

        if self.classes != [0, 1] {
            return Err(Error::schema(format!(
                "expected class ordering [0, 1], artifact has {:?}",
                self.classes
            )));
        }

        if self.coefficients.len() != FEATURE_COUNT {
            return Err(Error::schema(format!(
                "expected {} coefficients, artifact has {}",
                FEATURE_COUNT,
                self.coefficients.len()
            )));
        }

        if let Some(scaler) = &self.scaler {
            if scaler.mean.len() != FEATURE_COUNT || scaler.scale.len() != FEATURE_COUNT {
                return Err(Error::schema(format!(
                    "scaler arrays must have {} entries, artifact has mean={} scale={}",
                    FEATURE_COUNT,
                    scaler.mean.len(),
                    scaler.scale.len()
                )));
            }
            if scaler.scale.iter().any(|s| *s == 0.0 || !s.is_finite()) {
                return Err(Error::schema(
                    "scaler contains a zero or non-finite standard deviation",
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_artifact() -> ModelArtifact {
        ModelArtifact {
            model: "logistic_regression".to_string(),
            version: ARTIFACT_VERSION,
            feature_names: FEATURE_NAMES.iter().map(|n| n.to_string()).collect(),
            classes: vec![0, 1],
            coefficients: vec![0.1; FEATURE_COUNT],
            intercept: -0.5,
            scaler: None,
        }
    }

    #[test]
    fn valid_artifact_passes() {
        assert!(valid_artifact().validate().is_ok());
    }

    #[test]
    fn wrong_model_family_is_rejected() {
        let mut artifact = valid_artifact();
        artifact.model = "random_forest".to_string();
        assert!(matches!(
            artifact.validate(),
            Err(cardioscore_core::Error::Artifact(_))
        ));
    }

    #[test]
    fn reordered_features_are_rejected() {
        let mut artifact = valid_artifact();
        artifact.feature_names.swap(0, 1);
        assert!(matches!(
            artifact.validate(),
            Err(cardioscore_core::Error::Schema(_))
        ));
    }

    #[test]
    fn inverted_class_ordering_is_rejected() {
        let mut artifact = valid_artifact();
        artifact.classes = vec![1, 0];
        assert!(matches!(
            artifact.validate(),
            Err(cardioscore_core::Error::Schema(_))
        ));
    }

    #[test]
    fn coefficient_count_must_match_schema() {
        let mut artifact = valid_artifact();
        artifact.coefficients.pop();
        assert!(artifact.validate().is_err());
    }

    #[test]
    fn zero_scale_is_rejected() {
        let mut artifact = valid_artifact();
        artifact.scaler = Some(ScalerParams {
            mean: vec![0.0; FEATURE_COUNT],
            scale: vec![0.0; FEATURE_COUNT],
        });
        assert!(artifact.validate().is_err());
    }
}
