//! The fixed 13-feature input contract for the heart-disease classifier

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Number of input features the classifier consumes
pub const FEATURE_COUNT: usize = 13;

/// Canonical feature order. Every artifact and every request is checked
/// against this ordering; nothing in the system relies on it implicitly.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "age", "sex", "cp", "trestbps", "chol", "fbs", "restecg", "thalach", "exang", "oldpeak",
    "slope", "ca", "thal",
];

/// A single row of classifier input, in canonical feature order.
///
/// Built fresh from each request and discarded once inference returns.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector([f64; FEATURE_COUNT]);

impl FeatureVector {
    /// Create a feature vector from values already in canonical order
    pub fn new(values: [f64; FEATURE_COUNT]) -> Self {
        Self(values)
    }

    /// The raw values, in canonical order
    pub fn values(&self) -> &[f64; FEATURE_COUNT] {
        &self.0
    }
}

impl From<[f64; FEATURE_COUNT]> for FeatureVector {
    fn from(values: [f64; FEATURE_COUNT]) -> Self {
        Self(values)
    }
}

/// Incoming prediction payload.
///
/// Every field is optional at the deserialization layer so that a missing key
/// surfaces as a structured validation error naming the field, rather than a
/// generic deserialization failure. Unknown keys are ignored. Non-numeric
/// values are rejected by serde before validation runs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PredictRequest {
    pub age: Option<f64>,
    pub sex: Option<f64>,
    pub cp: Option<f64>,
    pub trestbps: Option<f64>,
    pub chol: Option<f64>,
    pub fbs: Option<f64>,
    pub restecg: Option<f64>,
    pub thalach: Option<f64>,
    pub exang: Option<f64>,
    pub oldpeak: Option<f64>,
    pub slope: Option<f64>,
    pub ca: Option<f64>,
    pub thal: Option<f64>,
}

impl PredictRequest {
    /// Each field paired with its canonical name, in canonical order
    fn fields(&self) -> [(&'static str, Option<f64>); FEATURE_COUNT] {
        [
            ("age", self.age),
            ("sex", self.sex),
            ("cp", self.cp),
            ("trestbps", self.trestbps),
            ("chol", self.chol),
            ("fbs", self.fbs),
            ("restecg", self.restecg),
            ("thalach", self.thalach),
            ("exang", self.exang),
            ("oldpeak", self.oldpeak),
            ("slope", self.slope),
            ("ca", self.ca),
            ("thal", self.thal),
        ]
    }

    /// Validate presence of all 13 fields and assemble the feature vector.
    ///
    /// Fails with [`Error::MissingField`] naming the first absent field in
    /// canonical order.
    pub fn to_features(&self) -> Result<FeatureVector> {
        let mut values = [0.0; FEATURE_COUNT];
        for (slot, (name, value)) in values.iter_mut().zip(self.fields()) {
            *slot = value.ok_or(Error::MissingField(name))?;
        }
        Ok(FeatureVector(values))
    }
}
