//! Classifier capability trait, probability adapter, and the model artifact
//!
//! The classifier is a capability, not a concrete type: it exposes a
//! probability-producing operation, a binary-label operation, or both. The
//! `positive_probability` adapter normalizes whichever is available into a
//! single positive-class probability.

use crate::error::{ArtifactError, ClassifierError};
use crate::features::FeatureVector;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default artifact filename, resolved relative to the working directory
pub const MODEL_FILENAME: &str = "diabetes_model.json";

/// A pre-trained binary classifier over the fixed feature vector
pub trait Classifier {
    /// Class probabilities (negative, positive) for one feature vector
    ///
    /// Returns `None` when the model does not support probability output;
    /// callers then fall back to `predict`.
    fn predict_proba(
        &self,
        features: &FeatureVector,
    ) -> Option<Result<(f64, f64), ClassifierError>> {
        let _ = features;
        None
    }

    /// Discrete label (0 = negative, 1 = positive) for one feature vector
    fn predict(&self, features: &FeatureVector) -> Result<u8, ClassifierError>;
}

/// Normalize a classifier's output to a positive-class probability
///
/// Prefers the probability capability. Without it, the 0/1 label stands in
/// as a degenerate probability, exactly as the original system behaved —
/// uncalibrated, pinned to the extremes, and kept only for compatibility.
pub fn positive_probability(
    model: &dyn Classifier,
    features: &FeatureVector,
) -> Result<f64, ClassifierError> {
    match model.predict_proba(features) {
        Some(result) => result.map(|(_, positive)| positive),
        None => model.predict(features).map(f64::from),
    }
}

/// Logistic-regression artifact deserialized from a JSON file
///
/// Coefficients are in `FeatureVector` order; the positive-class
/// probability is the sigmoid of the dot product plus intercept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LogisticModel {
    pub feature_names: Vec<String>,
    pub coefficients: Vec<f64>,
    pub intercept: f64,
}

impl LogisticModel {
    fn decision(&self, features: &FeatureVector) -> Result<f64, ClassifierError> {
        let x = features.as_array();
        if self.coefficients.len() != x.len() {
            return Err(ClassifierError(format!(
                "model expects {} coefficients, feature vector has {} entries",
                self.coefficients.len(),
                x.len()
            )));
        }
        let dot: f64 = self
            .coefficients
            .iter()
            .zip(x.iter())
            .map(|(w, v)| w * v)
            .sum();
        Ok(dot + self.intercept)
    }
}

impl Classifier for LogisticModel {
    fn predict_proba(
        &self,
        features: &FeatureVector,
    ) -> Option<Result<(f64, f64), ClassifierError>> {
        Some(self.decision(features).map(|z| {
            let positive = sigmoid(z);
            (1.0 - positive, positive)
        }))
    }

    fn predict(&self, features: &FeatureVector) -> Result<u8, ClassifierError> {
        let z = self.decision(features)?;
        Ok(u8::from(sigmoid(z) >= 0.5))
    }
}

fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

/// Load the classifier artifact from disk
///
/// Distinguishes a missing file from a file that fails to deserialize;
/// both are non-fatal to the caller, which disables prediction and keeps
/// the rest of the interface working.
pub fn load_artifact(path: &Path) -> Result<LogisticModel, ArtifactError> {
    if !path.exists() {
        return Err(ArtifactError::Missing {
            path: path.to_path_buf(),
        });
    }
    let contents = std::fs::read_to_string(path).map_err(|e| ArtifactError::Load {
        path: path.to_path_buf(),
        source: serde_json::Error::io(e),
    })?;
    serde_json::from_str(&contents).map_err(|e| ArtifactError::Load {
        path: path.to_path_buf(),
        source: e,
    })
}
