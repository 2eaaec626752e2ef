//! Range clipping and the declared input ranges
//!
//! Global invariants enforced:
//! - clip(v, lo, hi) always lands in [lo, hi]
//! - clip is the identity on in-range values and idempotent everywhere
//! - Range and fallback tables are read-only configuration, never mutated

use serde::{Deserialize, Serialize};

/// Clamp a scalar into an inclusive [min, max] range
///
/// Pure and total: `max(min, min(value, max))`. Every numeric field passes
/// through this before further computation, including derived BMI.
pub fn clip(value: f64, min: f64, max: f64) -> f64 {
    value.min(max).max(min)
}

/// An inclusive numeric range for a single input field
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct FieldRange {
    pub min: f64,
    pub max: f64,
}

impl FieldRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Clip a value into this range
    pub fn clip(&self, value: f64) -> f64 {
        clip(value, self.min, self.max)
    }

    /// Whether a value already lies inside this range
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Declared ranges for every input field plus derived BMI
///
/// Explicit configuration rather than an ambient global so tests can
/// construct a pipeline with custom bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct RangeTable {
    pub age: FieldRange,
    pub pregnancies: FieldRange,
    pub weight: FieldRange,
    pub height: FieldRange,
    pub glucose: FieldRange,
    pub blood_pressure: FieldRange,
    pub skin_thickness: FieldRange,
    pub insulin: FieldRange,
    pub bmi: FieldRange,
}

impl Default for RangeTable {
    fn default() -> Self {
        Self {
            age: FieldRange::new(10.0, 100.0),
            pregnancies: FieldRange::new(0.0, 20.0),
            weight: FieldRange::new(20.0, 250.0),
            height: FieldRange::new(100.0, 220.0),
            glucose: FieldRange::new(40.0, 300.0),
            blood_pressure: FieldRange::new(40.0, 140.0),
            skin_thickness: FieldRange::new(5.0, 80.0),
            insulin: FieldRange::new(10.0, 400.0),
            bmi: FieldRange::new(10.0, 60.0),
        }
    }
}

/// Median substitutes for the two optional fields
///
/// The defaults lie inside the declared ranges, so clipping a substituted
/// value is a no-op; the pipeline still clips it for consistency.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct FallbackTable {
    pub insulin: f64,
    pub skin_thickness: f64,
}

impl Default for FallbackTable {
    fn default() -> Self {
        Self {
            insulin: 80.0,
            skin_thickness: 20.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clip_in_range_is_identity() {
        assert_eq!(clip(50.0, 40.0, 140.0), 50.0);
        assert_eq!(clip(40.0, 40.0, 140.0), 40.0);
        assert_eq!(clip(140.0, 40.0, 140.0), 140.0);
    }

    #[test]
    fn test_clip_out_of_range() {
        assert_eq!(clip(30.0, 40.0, 140.0), 40.0);
        assert_eq!(clip(500.0, 40.0, 300.0), 300.0);
    }

    #[test]
    fn test_clip_always_lands_in_range() {
        for v in [-1000.0, -1.0, 0.0, 9.99, 10.0, 55.5, 100.0, 1e9] {
            let clipped = clip(v, 10.0, 100.0);
            assert!((10.0..=100.0).contains(&clipped));
        }
    }

    #[test]
    fn test_clip_idempotent() {
        for v in [-50.0, 5.0, 42.0, 99.0, 250.0] {
            let once = clip(v, 10.0, 100.0);
            assert_eq!(clip(once, 10.0, 100.0), once);
        }
    }

    #[test]
    fn test_field_range_contains() {
        let range = FieldRange::new(5.0, 80.0);
        assert!(range.contains(5.0));
        assert!(range.contains(80.0));
        assert!(!range.contains(4.9));
        assert!(!range.contains(80.1));
    }

    #[test]
    fn test_fallbacks_lie_inside_declared_ranges() {
        let ranges = RangeTable::default();
        let fallbacks = FallbackTable::default();
        assert!(ranges.insulin.contains(fallbacks.insulin));
        assert!(ranges.skin_thickness.contains(fallbacks.skin_thickness));
    }
}
