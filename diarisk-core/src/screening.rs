//! Screening pipeline orchestration
//!
//! Ties together clipping, BMI derivation, fallback substitution, feature
//! assembly, classification, bucketizing, and advice composition.
//!
//! Global invariants enforced:
//! - One independently computed FeatureVector and RiskAssessment per call
//! - An unavailable model short-circuits before feature assembly
//! - A classifier failure yields no partial assessment
//! - Every value in the summary has already been clipped

use crate::advice;
use crate::classifier::{positive_probability, Classifier};
use crate::error::ScreeningError;
use crate::features::{bmi, FeatureVector};
use crate::input::InputRecord;
use crate::ranges::{FallbackTable, RangeTable};
use crate::risk::{bucketize, RiskTier};
use serde::{Deserialize, Serialize};

/// Read-only configuration for the pipeline
///
/// The original kept these as module-level globals; passing them in at
/// construction keeps unit tests isolated and lets callers tighten bounds.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ScreeningConfig {
    pub ranges: RangeTable,
    pub fallbacks: FallbackTable,
}

/// Whether a loaded classifier is available for this process
pub enum ModelState {
    Ready(Box<dyn Classifier>),
    /// No artifact; the string is the human-readable reason shown to users
    Unavailable(String),
}

/// The clipped and derived values actually fed to the classifier
///
/// Rendered alongside the assessment, and kept visible even when the
/// prediction itself fails.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct InputSummary {
    pub glucose: f64,
    pub bmi: f64,
    pub age: f64,
    pub blood_pressure: f64,
    pub insulin_used: f64,
    pub dpf: f64,
    pub skin_thickness_used: f64,
    /// True iff the caller supplied the optional insulin value
    pub insulin_provided: bool,
    /// True iff the caller supplied the optional skin-thickness value
    pub skin_provided: bool,
}

impl InputSummary {
    /// The feature vector in classifier order
    pub fn to_features(&self) -> FeatureVector {
        FeatureVector {
            glucose: self.glucose,
            bmi: self.bmi,
            age: self.age,
            blood_pressure: self.blood_pressure,
            insulin: self.insulin_used,
            dpf: self.dpf,
            skin_thickness: self.skin_thickness_used,
        }
    }
}

/// Complete result of one screening submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct RiskAssessment {
    /// Positive-class probability in [0, 1]
    pub probability: f64,
    pub tier: RiskTier,
    /// The canned tier message
    pub message: String,
    /// Ordered advisory lines derived from the input values
    pub advice: Vec<String>,
    /// Tier-specific follow-up suggestions
    pub recommendations: Vec<String>,
    pub summary: InputSummary,
}

/// The screening pipeline: configuration plus a classifier handle
pub struct Screening {
    config: ScreeningConfig,
    model: ModelState,
}

impl Screening {
    /// Pipeline with a loaded classifier
    pub fn new(config: ScreeningConfig, classifier: Box<dyn Classifier>) -> Self {
        Self {
            config,
            model: ModelState::Ready(classifier),
        }
    }

    /// Pipeline without a classifier; `assess` reports the reason
    pub fn without_model(config: ScreeningConfig, reason: impl Into<String>) -> Self {
        Self {
            config,
            model: ModelState::Unavailable(reason.into()),
        }
    }

    /// Pipeline from an artifact on disk
    ///
    /// A load failure is non-fatal: the pipeline is constructed without a
    /// model and the failure reason is carried for reporting.
    pub fn from_artifact(config: ScreeningConfig, path: &std::path::Path) -> Self {
        match crate::classifier::load_artifact(path) {
            Ok(model) => Self::new(config, Box::new(model)),
            Err(e) => Self::without_model(config, e.to_string()),
        }
    }

    pub fn config(&self) -> &ScreeningConfig {
        &self.config
    }

    /// The unavailability reason, if the model failed to load
    pub fn model_unavailable_reason(&self) -> Option<&str> {
        match &self.model {
            ModelState::Ready(_) => None,
            ModelState::Unavailable(reason) => Some(reason),
        }
    }

    /// Clip and derive the values that would be fed to the classifier
    ///
    /// Fallback substitutes for the optional fields are clipped too; the
    /// defaults already lie in range, so that clip is a no-op, but custom
    /// fallback tables get the same safety net.
    pub fn summarize(&self, input: &InputRecord) -> InputSummary {
        let ranges = &self.config.ranges;
        let fallbacks = &self.config.fallbacks;

        let age = ranges.age.clip(f64::from(input.age));
        let glucose = ranges.glucose.clip(f64::from(input.glucose));
        let blood_pressure = ranges.blood_pressure.clip(f64::from(input.blood_pressure));
        let weight = ranges.weight.clip(input.weight_kg);
        let height = ranges.height.clip(input.height_cm);
        let bmi = ranges.bmi.clip(bmi(weight, height));

        let insulin_used = ranges
            .insulin
            .clip(input.insulin.map_or(fallbacks.insulin, f64::from));
        let skin_used = ranges
            .skin_thickness
            .clip(input.skin_thickness.map_or(fallbacks.skin_thickness, f64::from));

        InputSummary {
            glucose,
            bmi,
            age,
            blood_pressure,
            insulin_used,
            dpf: input.family_history.dpf_score(),
            skin_thickness_used: skin_used,
            insulin_provided: input.insulin.is_some(),
            skin_provided: input.skin_thickness.is_some(),
        }
    }

    /// Run the full pipeline for one submission
    ///
    /// With no model loaded, refuses before assembling features and
    /// reports the unavailability reason.
    pub fn assess(&self, input: &InputRecord) -> Result<RiskAssessment, ScreeningError> {
        let model = match &self.model {
            ModelState::Ready(model) => model.as_ref(),
            ModelState::Unavailable(reason) => {
                return Err(ScreeningError::ModelUnavailable(reason.clone()));
            }
        };

        let summary = self.summarize(input);
        let features = summary.to_features();

        let probability = positive_probability(model, &features)?;

        let tier = bucketize(probability);
        let advice = advice::advise(
            summary.glucose,
            summary.bmi,
            summary.blood_pressure,
            summary.age,
            summary.insulin_provided,
            summary.skin_provided,
        );

        Ok(RiskAssessment {
            probability,
            tier,
            message: tier.message().to_string(),
            advice: advice.into_iter().map(str::to_string).collect(),
            recommendations: tier
                .recommendations()
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
            summary,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClassifierError;
    use crate::input::FamilyHistory;

    /// Stub returning a fixed positive-class probability
    struct FixedProbability(f64);

    impl Classifier for FixedProbability {
        fn predict_proba(
            &self,
            _features: &FeatureVector,
        ) -> Option<Result<(f64, f64), ClassifierError>> {
            Some(Ok((1.0 - self.0, self.0)))
        }

        fn predict(&self, _features: &FeatureVector) -> Result<u8, ClassifierError> {
            Ok(u8::from(self.0 >= 0.5))
        }
    }

    /// Stub whose invocation always fails
    struct AlwaysFails;

    impl Classifier for AlwaysFails {
        fn predict(&self, _features: &FeatureVector) -> Result<u8, ClassifierError> {
            Err(ClassifierError("boom".to_string()))
        }
    }

    fn test_input() -> InputRecord {
        InputRecord {
            age: 40,
            pregnancies: 0,
            weight_kg: 70.0,
            height_cm: 170.0,
            glucose: 100,
            blood_pressure: 80,
            skin_thickness: None,
            insulin: None,
            family_history: FamilyHistory::None,
        }
    }

    #[test]
    fn test_half_probability_lands_in_medium_tier() {
        let screening = Screening::new(
            ScreeningConfig::default(),
            Box::new(FixedProbability(0.5)),
        );
        let assessment = screening.assess(&test_input()).unwrap();

        assert_eq!(assessment.probability, 0.5);
        assert_eq!(assessment.tier, RiskTier::Medium);
        assert!(!assessment.advice.is_empty());
        assert!(!assessment.summary.insulin_provided);
        assert!(!assessment.summary.skin_provided);
    }

    #[test]
    fn test_provided_flags_track_the_caller_not_the_fallback() {
        let mut input = test_input();
        input.insulin = Some(80); // equals the fallback value
        let screening = Screening::new(
            ScreeningConfig::default(),
            Box::new(FixedProbability(0.5)),
        );
        let assessment = screening.assess(&input).unwrap();

        assert!(assessment.summary.insulin_provided);
        assert!(!assessment.summary.skin_provided);
        assert_eq!(assessment.summary.insulin_used, 80.0);
    }

    #[test]
    fn test_summary_values_are_clipped_and_derived() {
        let mut input = test_input();
        input.glucose = 999; // above declared max 300
        input.insulin = Some(5); // below declared min 10
        let screening = Screening::new(
            ScreeningConfig::default(),
            Box::new(FixedProbability(0.1)),
        );
        let summary = screening.summarize(&input);

        assert_eq!(summary.glucose, 300.0);
        assert_eq!(summary.insulin_used, 10.0);
        assert_eq!(summary.bmi, 24.22);
        assert_eq!(summary.dpf, 0.05);
    }

    #[test]
    fn test_age_outside_declared_range_is_clipped() {
        let screening = Screening::new(
            ScreeningConfig::default(),
            Box::new(FixedProbability(0.1)),
        );

        let mut input = test_input();
        input.age = 500; // above declared max 100
        let summary = screening.summarize(&input);
        assert_eq!(summary.age, 100.0);
        assert_eq!(summary.to_features().age, 100.0);

        input.age = 3; // below declared min 10
        assert_eq!(screening.summarize(&input).age, 10.0);
    }

    #[test]
    fn test_extreme_bmi_clips_to_declared_floor() {
        let mut input = test_input();
        input.weight_kg = 20.0;
        input.height_cm = 220.0;
        let screening = Screening::new(
            ScreeningConfig::default(),
            Box::new(FixedProbability(0.1)),
        );
        assert_eq!(screening.summarize(&input).bmi, 10.0);
    }

    #[test]
    fn test_missing_model_short_circuits() {
        let screening =
            Screening::without_model(ScreeningConfig::default(), "artifact not found");
        let err = screening.assess(&test_input()).unwrap_err();
        assert!(matches!(err, ScreeningError::ModelUnavailable(reason) if reason == "artifact not found"));
    }

    #[test]
    fn test_classifier_failure_yields_no_assessment() {
        let screening = Screening::new(ScreeningConfig::default(), Box::new(AlwaysFails));
        let err = screening.assess(&test_input()).unwrap_err();
        assert!(matches!(err, ScreeningError::Classification(_)));
    }

    #[test]
    fn test_label_only_model_pins_probability_to_extremes() {
        struct LabelOnly;
        impl Classifier for LabelOnly {
            fn predict(&self, _features: &FeatureVector) -> Result<u8, ClassifierError> {
                Ok(1)
            }
        }
        let screening = Screening::new(ScreeningConfig::default(), Box::new(LabelOnly));
        let assessment = screening.assess(&test_input()).unwrap();
        assert_eq!(assessment.probability, 1.0);
        assert_eq!(assessment.tier, RiskTier::High);
    }
}
