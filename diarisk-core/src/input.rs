//! Input record and the family-history category map
//!
//! Global invariants enforced:
//! - The family-history category set is closed (exactly 5 entries)
//! - Questionnaire labels are a data contract and are matched verbatim
//! - DPF scores are fixed constants, never computed

use crate::error::ScreeningError;
use serde::{Deserialize, Serialize};

/// Family-history answer from the questionnaire
///
/// Maps to a DPF-like score, a numeric proxy for family-history strength
/// fed to the classifier. The labels are the original questionnaire
/// strings (Thai) and must not be altered: they are the closed input set
/// the presentation layer offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FamilyHistory {
    None,
    DistantRelative,
    Parent,
    ParentAndSiblings,
    MultipleRelatives,
}

impl FamilyHistory {
    /// All categories, in questionnaire order
    pub const ALL: [FamilyHistory; 5] = [
        FamilyHistory::None,
        FamilyHistory::DistantRelative,
        FamilyHistory::Parent,
        FamilyHistory::ParentAndSiblings,
        FamilyHistory::MultipleRelatives,
    ];

    /// Resolve a raw questionnaire label
    ///
    /// Unreachable through the CLI (closed choice set); programmatic
    /// callers get `InvalidCategoryLabel` for anything else.
    pub fn from_label(label: &str) -> Result<Self, ScreeningError> {
        match label {
            "ไม่มีประวัติในครอบครัว" => Ok(FamilyHistory::None),
            "ญาติห่าง (เช่น ป้า/น้า/อา) เป็น" => Ok(FamilyHistory::DistantRelative),
            "พ่อหรือแม่เป็น" => Ok(FamilyHistory::Parent),
            "พ่อแม่ + พี่น้องเป็น" => Ok(FamilyHistory::ParentAndSiblings),
            "หลายคนในครอบครัวเป็น" => Ok(FamilyHistory::MultipleRelatives),
            other => Err(ScreeningError::InvalidCategoryLabel(other.to_string())),
        }
    }

    /// The original questionnaire label
    pub fn label(&self) -> &'static str {
        match self {
            FamilyHistory::None => "ไม่มีประวัติในครอบครัว",
            FamilyHistory::DistantRelative => "ญาติห่าง (เช่น ป้า/น้า/อา) เป็น",
            FamilyHistory::Parent => "พ่อหรือแม่เป็น",
            FamilyHistory::ParentAndSiblings => "พ่อแม่ + พี่น้องเป็น",
            FamilyHistory::MultipleRelatives => "หลายคนในครอบครัวเป็น",
        }
    }

    /// DPF-like score for this category
    pub fn dpf_score(&self) -> f64 {
        match self {
            FamilyHistory::None => 0.05,
            FamilyHistory::DistantRelative => 0.5,
            FamilyHistory::Parent => 1.0,
            FamilyHistory::ParentAndSiblings => 2.0,
            FamilyHistory::MultipleRelatives => 2.5,
        }
    }
}

/// Raw health metrics for one submission
///
/// Transient value object: created by the presentation layer, consumed by
/// one `Screening::assess` call, then discarded. Numeric fields may lie
/// outside their declared ranges; the pipeline clips them rather than
/// rejecting the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct InputRecord {
    pub age: u32,
    pub pregnancies: u32,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub glucose: u32,
    pub blood_pressure: u32,
    /// Optional; the median fallback substitutes when absent
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub skin_thickness: Option<u32>,
    /// Optional; the median fallback substitutes when absent
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub insulin: Option<u32>,
    pub family_history: FamilyHistory,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parent_label_maps_to_one() {
        let category = FamilyHistory::from_label("พ่อหรือแม่เป็น").unwrap();
        assert_eq!(category, FamilyHistory::Parent);
        assert_eq!(category.dpf_score(), 1.0);
    }

    #[test]
    fn test_all_labels_round_trip() {
        for category in FamilyHistory::ALL {
            assert_eq!(FamilyHistory::from_label(category.label()).unwrap(), category);
        }
    }

    #[test]
    fn test_dpf_scores() {
        assert_eq!(FamilyHistory::None.dpf_score(), 0.05);
        assert_eq!(FamilyHistory::DistantRelative.dpf_score(), 0.5);
        assert_eq!(FamilyHistory::ParentAndSiblings.dpf_score(), 2.0);
        assert_eq!(FamilyHistory::MultipleRelatives.dpf_score(), 2.5);
    }

    #[test]
    fn test_unknown_label_is_rejected() {
        let err = FamilyHistory::from_label("unknown").unwrap_err();
        assert!(matches!(err, ScreeningError::InvalidCategoryLabel(label) if label == "unknown"));
    }
}
