//! Artifact loading tests
//!
//! Exercise the on-disk load path: well-formed artifacts produce a working
//! classifier, and artifacts that disagree with the serving contract are
//! rejected before inference is possible.

use cardioscore_core::{Error, FeatureVector, FEATURE_COUNT, FEATURE_NAMES};
use cardioscore_model::{load_artifact, load_classifier, POSITIVE_CLASS};
use std::io::Write;
use tempfile::NamedTempFile;

fn artifact_json() -> serde_json::Value {
    serde_json::json!({
        "model": "logistic_regression",
        "version": 1,
        "feature_names": FEATURE_NAMES,
        "classes": [0, 1],
        "coefficients": [
            0.03, 0.8, 0.5, 0.01, 0.002, 0.1, 0.2, -0.02, 0.7, 0.4, 0.3, 0.9, 0.6
        ],
        "intercept": -1.5,
        "scaler": null
    })
}

fn write_artifact(value: &serde_json::Value) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(value.to_string().as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn well_formed_artifact_loads_and_predicts() {
    let file = write_artifact(&artifact_json());
    let classifier = load_classifier(file.path()).unwrap();

    let features = FeatureVector::new([
        63.0, 1.0, 3.0, 145.0, 233.0, 1.0, 0.0, 150.0, 0.0, 2.3, 0.0, 0.0, 1.0,
    ]);
    let label = classifier.predict(&features).unwrap();
    let proba = classifier.predict_proba(&features).unwrap()[POSITIVE_CLASS];

    assert!(label == 0 || label == 1);
    assert!((0.0..=1.0).contains(&proba));
    assert_eq!(label == 1, proba >= 0.5);
}

#[test]
fn missing_file_is_an_io_error() {
    let err = load_classifier("/nonexistent/heart_model.json").unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn invalid_json_is_a_serialization_error() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"not json").unwrap();
    file.flush().unwrap();

    let err = load_classifier(file.path()).unwrap_err();
    assert!(matches!(err, Error::Serialization(_)));
}

#[test]
fn drifted_feature_order_is_rejected() {
    let mut value = artifact_json();
    let names = value["feature_names"].as_array_mut().unwrap();
    names.swap(0, 12);
    let file = write_artifact(&value);

    let err = load_classifier(file.path()).unwrap_err();
    assert!(matches!(err, Error::Schema(_)), "got {err:?}");
}

#[test]
fn inverted_classes_are_rejected() {
    let mut value = artifact_json();
    value["classes"] = serde_json::json!([1, 0]);
    let file = write_artifact(&value);

    let err = load_classifier(file.path()).unwrap_err();
    assert!(matches!(err, Error::Schema(_)), "got {err:?}");
}

#[test]
fn unsupported_model_family_is_rejected() {
    let mut value = artifact_json();
    value["model"] = serde_json::json!("gradient_boosting");
    let file = write_artifact(&value);

    let err = load_classifier(file.path()).unwrap_err();
    assert!(matches!(err, Error::Artifact(_)), "got {err:?}");
}

#[test]
fn load_artifact_exposes_metadata() {
    let file = write_artifact(&artifact_json());
    let artifact = load_artifact(file.path()).unwrap();

    assert_eq!(artifact.feature_names.len(), FEATURE_COUNT);
    assert_eq!(artifact.classes, vec![0, 1]);
    assert!(artifact.scaler.is_none());
}

#[test]
fn scaled_artifact_loads() {
    let mut value = artifact_json();
    value["scaler"] = serde_json::json!({
        "mean": vec![50.0; FEATURE_COUNT],
        "scale": vec![10.0; FEATURE_COUNT],
    });
    let file = write_artifact(&value);

    let classifier = load_classifier(file.path()).unwrap();
    let features = FeatureVector::new([50.0; FEATURE_COUNT]);
    let proba = classifier.predict_proba(&features).unwrap();
    assert!((proba[0] + proba[1] - 1.0).abs() < 1e-12);
}
