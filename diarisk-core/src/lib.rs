//! Diarisk core library - diabetes risk screening from basic health metrics

#![deny(warnings)]

// Global invariants enforced in this crate:
// - Screening is strictly per-submission
// - No global mutable state; configuration is passed in at construction
// - No randomness, clocks, threads, or async
// - Out-of-range numeric inputs are clipped, never rejected
// - Feature vector order is a contract with the classifier

pub mod advice;
pub mod classifier;
pub mod error;
pub mod features;
pub mod input;
pub mod ranges;
pub mod report;
pub mod risk;
pub mod screening;

pub use classifier::{load_artifact, positive_probability, Classifier, LogisticModel, MODEL_FILENAME};
pub use error::{ArtifactError, ClassifierError, ScreeningError};
pub use features::FeatureVector;
pub use input::{FamilyHistory, InputRecord};
pub use ranges::{clip, FallbackTable, FieldRange, RangeTable};
pub use report::{render_json, render_summary_text, render_text};
pub use risk::{bucketize, RiskTier};
pub use screening::{InputSummary, ModelState, RiskAssessment, Screening, ScreeningConfig};
