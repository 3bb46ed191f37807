//! Classifier trait and common types

use cardioscore_core::{FeatureVector, Result};

/// Index of the positive class in probability output.
///
/// Guaranteed by load-time validation: artifacts whose class ordering is not
/// exactly `[0, 1]` are rejected before a classifier is ever constructed.
pub const POSITIVE_CLASS: usize = 1;

/// Trait for binary classifiers over the canonical feature schema.
///
/// Implementations are immutable after construction and shared across request
/// handlers without synchronization; inference is synchronous CPU work.
pub trait Classifier: std::fmt::Debug + Send + Sync {
    /// Predict the hard class label (0 or 1) for a single row
    fn predict(&self, features: &FeatureVector) -> Result<u8>;

    /// Per-class probabilities for a single row.
    ///
    /// The two entries sum to 1 with the positive class at
    /// [`POSITIVE_CLASS`].
    fn predict_proba(&self, features: &FeatureVector) -> Result<[f64; 2]>;

    /// Get the classifier name
    fn name(&self) -> &str;

    /// Positive-class probability together with the label it implies under
    /// the given decision threshold.
    fn predict_with_threshold(&self, features: &FeatureVector, threshold: f64) -> Result<(u8, f64)> {
        let probability = self.predict_proba(features)?[POSITIVE_CLASS];
        let label = u8::from(probability >= threshold);
        Ok((label, probability))
    }
}
