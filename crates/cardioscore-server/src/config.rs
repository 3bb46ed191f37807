//! Runtime configuration for the prediction service

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;

/// Shape of the `/predict` response.
///
/// One handler serves both shapes; input validation is applied identically in
/// either mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Hard class label only
    Label,
    /// Label plus the positive-class probability
    Probability,
}

impl FromStr for OutputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "label" => Ok(Self::Label),
            "probability" => Ok(Self::Probability),
            other => Err(format!(
                "unknown output mode '{other}' (expected 'label' or 'probability')"
            )),
        }
    }
}

/// Service configuration, assembled from CLI arguments at startup and
/// read-only afterwards
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Path to the classifier artifact
    pub model_path: PathBuf,

    /// Response shape for `/predict`
    pub output: OutputMode,

    /// Decision threshold for the positive class
    pub threshold: f64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from("models/heart_model.json"),
            output: OutputMode::Probability,
            threshold: 0.5,
        }
    }
}

impl ServiceConfig {
    /// Reject thresholds outside the unit interval
    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=1.0).contains(&self.threshold) || self.threshold.is_nan() {
            return Err(format!(
                "threshold must be within [0, 1], got {}",
                self.threshold
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_mode_parses_case_insensitively() {
        assert_eq!("label".parse::<OutputMode>().unwrap(), OutputMode::Label);
        assert_eq!(
            "Probability".parse::<OutputMode>().unwrap(),
            OutputMode::Probability
        );
        assert!("scores".parse::<OutputMode>().is_err());
    }

    #[test]
    fn threshold_outside_unit_interval_is_rejected() {
        let mut config = ServiceConfig::default();
        assert!(config.validate().is_ok());

        config.threshold = 1.5;
        assert!(config.validate().is_err());

        config.threshold = -0.1;
        assert!(config.validate().is_err());
    }
}
