//! BMI derivation and the fixed-order feature vector
//!
//! Global invariants enforced:
//! - Feature order is a contract with the classifier and never changes
//! - BMI rounds to 2 decimals before any clipping
//! - Feature assembly is deterministic and allocation-free

use serde::{Deserialize, Serialize};

/// Body-mass index from weight in kg and height in cm
///
/// `weight / (height/100)^2`, rounded to 2 decimal places. The caller
/// clips the result into the declared BMI range afterwards; extreme
/// weight/height combinations produce physiologically meaningless values
/// that must not leave the model's training distribution.
pub fn bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    let raw = weight_kg / (height_m * height_m);
    (raw * 100.0).round() / 100.0
}

/// The fixed-order numeric input consumed by the classifier
///
/// Field order mirrors `FEATURE_NAMES`; `as_array` is the only place the
/// order is spelled out.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct FeatureVector {
    pub glucose: f64,
    pub bmi: f64,
    pub age: f64,
    pub blood_pressure: f64,
    pub insulin: f64,
    pub dpf: f64,
    pub skin_thickness: f64,
}

impl FeatureVector {
    /// Number of features
    pub const LEN: usize = 7;

    /// Feature names in vector order
    pub const FEATURE_NAMES: [&'static str; Self::LEN] = [
        "glucose",
        "bmi",
        "age",
        "blood_pressure",
        "insulin",
        "dpf",
        "skin_thickness",
    ];

    /// The vector in classifier order
    pub fn as_array(&self) -> [f64; Self::LEN] {
        [
            self.glucose,
            self.bmi,
            self.age,
            self.blood_pressure,
            self.insulin,
            self.dpf,
            self.skin_thickness,
        ]
    }
}
