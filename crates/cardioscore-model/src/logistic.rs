//! Logistic-regression inference over the canonical feature schema

use crate::artifact::{ModelArtifact, ScalerParams};
use crate::classifier::{Classifier, POSITIVE_CLASS};
use cardioscore_core::{FeatureVector, Result, FEATURE_COUNT};

/// A validated logistic-regression model ready for inference.
///
/// Construction goes through [`LogisticModel::from_artifact`], which requires
/// the artifact to have passed validation; the model itself is immutable.
#[derive(Debug, Clone)]
pub struct LogisticModel {
    name: String,
    coefficients: [f64; FEATURE_COUNT],
    intercept: f64,
    scaler: Option<ScalerParams>,
}

impl LogisticModel {
    /// Build a model from a validated artifact
    pub fn from_artifact(artifact: &ModelArtifact) -> Result<Self> {
        artifact.validate()?;

        let mut coefficients = [0.0; FEATURE_COUNT];
        coefficients.copy_from_slice(&artifact.coefficients);

        Ok(Self {
            name: artifact.model.clone(),
            coefficients,
            intercept: artifact.intercept,
            scaler: artifact.scaler.clone(),
        })
    }

    /// Decision-function value for a single row: scaled dot product plus
    /// intercept
    fn decision(&self, features: &FeatureVector) -> f64 {
        let values = features.values();
        let mut z = self.intercept;
        match &self.scaler {
            Some(scaler) => {
                for i in 0..FEATURE_COUNT {
                    let scaled = (values[i] - scaler.mean[i]) / scaler.scale[i];
                    z += self.coefficients[i] * scaled;
                }
            }
            None => {
                for i in 0..FEATURE_COUNT {
                    z += self.coefficients[i] * values[i];
                }
            }
        }
        z
    }
}

impl Classifier for LogisticModel {
    fn predict(&self, features: &FeatureVector) -> Result<u8> {
        Ok(u8::from(self.predict_proba(features)?[POSITIVE_CLASS] >= 0.5))
    }

    fn predict_proba(&self, features: &FeatureVector) -> Result<[f64; 2]> {
        let positive = sigmoid(self.decision(features));
        Ok([1.0 - positive, positive])
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Numerically stable logistic sigmoid
fn sigmoid(z: f64) -> f64 {
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let e = z.exp();
        e / (1.0 + e)
    }
}
