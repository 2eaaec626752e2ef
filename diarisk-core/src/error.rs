//! Error taxonomy for the screening pipeline
//!
//! Out-of-range numeric inputs are never errors: they are silently clipped
//! (safety-by-clamping). The variants here cover the remaining failure
//! modes: the classifier artifact, the category map, and the classifier
//! invocation itself.

use std::path::PathBuf;

/// Failure to invoke the classifier on a feature vector
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("classifier invocation failed: {0}")]
pub struct ClassifierError(pub String);

/// Failure to load the classifier artifact from disk
///
/// Both variants are non-fatal: prediction is disabled but the rest of the
/// interface keeps working.
#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    /// The artifact file does not exist at the expected path
    #[error("model artifact not found at '{path}': place the model file next to the binary and retry", path = .path.display())]
    Missing { path: PathBuf },

    /// The artifact file exists but could not be deserialized
    #[error("failed to load model artifact '{path}': {source}", path = .path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors surfaced by `Screening::assess`
#[derive(Debug, thiserror::Error)]
pub enum ScreeningError {
    /// No classifier artifact is available; prediction was not attempted
    #[error("no classifier available: {0}")]
    ModelUnavailable(String),

    /// The classifier invocation failed; no partial assessment is produced
    #[error("prediction failed: {0}")]
    Classification(#[from] ClassifierError),

    /// A family-history label outside the closed 5-entry set
    ///
    /// Unreachable through the CLI, which restricts input to the closed
    /// set; exists for programmatic callers.
    #[error("unrecognized family history label: {0:?}")]
    InvalidCategoryLabel(String),
}
