//! Cardioscore Model
//!
//! Classifier artifact handling and inference for the cardioscore service.
//!
//! Artifacts are JSON documents carrying the trained model's coefficients
//! together with its feature schema and class ordering. Both are validated
//! against the compiled-in serving contract at load time, so the positional
//! feature contract and the positive-class index are checked facts rather
//! than assumptions.

pub mod artifact;
pub mod classifier;
pub mod loader;
pub mod logistic;

pub use artifact::{ModelArtifact, ScalerParams, ARTIFACT_VERSION};
pub use classifier::{Classifier, POSITIVE_CLASS};
pub use loader::{load_artifact, load_classifier};
pub use logistic::LogisticModel;
