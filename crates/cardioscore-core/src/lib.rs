//! Cardioscore Core
//!
//! Shared types for the cardioscore prediction service.
//!
//! This crate provides:
//! - The canonical 13-feature input schema and `FeatureVector`
//! - The `PredictRequest` wire payload with presence validation
//! - Error types and result handling

pub mod error;
pub mod features;

pub use error::{Error, Result};
pub use features::{FeatureVector, PredictRequest, FEATURE_COUNT, FEATURE_NAMES};
