//! Risk tier bucketizing
//!
//! Global invariants enforced:
//! - Thresholds 0.30 and 0.60 belong to the upper tier
//! - Tier messages and recommendations are static and deterministic
//! - No validation of the probability; callers guarantee [0, 1]

use serde::{Deserialize, Serialize};

/// Ordinal risk tier derived from a predicted probability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTier {
    Low,    // < 0.30
    Medium, // 0.30 - 0.60
    High,   // >= 0.60
}

impl RiskTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskTier::Low => "low",
            RiskTier::Medium => "medium",
            RiskTier::High => "high",
        }
    }

    /// The canned message attached to this tier
    pub fn message(&self) -> &'static str {
        match self {
            RiskTier::Low => "Low risk. Keep up routine checkups and a consistent healthy lifestyle.",
            RiskTier::Medium => {
                "Moderate risk. Further screening and behavior changes are recommended."
            }
            RiskTier::High => {
                "High risk. Consult a physician and get blood testing (fasting glucose / HbA1c)."
            }
        }
    }

    /// Follow-up suggestions specific to this tier
    pub fn recommendations(&self) -> &'static [&'static str] {
        match self {
            RiskTier::Low => {
                &["Maintain current healthy habits and keep up regular health checkups."]
            }
            RiskTier::Medium => &[
                "Cut back on sugar and refined carbohydrates and control calorie intake.",
                "Start 150 minutes of aerobic exercise per week plus strength training twice a week.",
            ],
            RiskTier::High => &[
                "See a physician for blood testing (fasting glucose, HbA1c) and counseling.",
                "If pre-diabetes or diabetes is confirmed, follow the management plan your physician sets out.",
            ],
        }
    }
}

impl std::fmt::Display for RiskTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskTier::Low => write!(f, "LOW"),
            RiskTier::Medium => write!(f, "MEDIUM"),
            RiskTier::High => write!(f, "HIGH"),
        }
    }
}

/// Bucket a probability into a risk tier
///
/// Boundary values go to the upper bucket: 0.30 is Medium, 0.60 is High.
pub fn bucketize(probability: f64) -> RiskTier {
    if probability < 0.30 {
        RiskTier::Low
    } else if probability < 0.60 {
        RiskTier::Medium
    } else {
        RiskTier::High
    }
}
