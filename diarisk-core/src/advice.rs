//! Advisory composition from the clipped input values
//!
//! Global invariants enforced:
//! - Advisory order is fixed: weight, glucose, blood pressure,
//!   data completeness, age
//! - Each advisory is an independent static template
//! - Exactly one weight line and one glucose line fire per submission

/// BMI at or above this is the obese advisory; [25, 30) is overweight
const BMI_OBESE: f64 = 30.0;
const BMI_OVERWEIGHT: f64 = 25.0;

/// Glucose at or above this is the urgent advisory; [140, 200) pre-diabetes
const GLUCOSE_URGENT: f64 = 200.0;
const GLUCOSE_ELEVATED: f64 = 140.0;

/// Single-sided thresholds
const BLOOD_PRESSURE_HIGH: f64 = 120.0;
const AGE_SENIOR: f64 = 60.0;

/// Compose the ordered advisory list for one submission
///
/// Inputs are the already-clipped values fed to the classifier plus the
/// two provided flags for the optional fields. The data-completeness line
/// is a single combined message, not one per missing field.
pub fn advise(
    glucose: f64,
    bmi: f64,
    blood_pressure: f64,
    age: f64,
    insulin_provided: bool,
    skin_provided: bool,
) -> Vec<&'static str> {
    let mut advice = Vec::new();

    // 1. Weight
    if bmi >= BMI_OBESE {
        advice.push(
            "BMI in the obese range: aim for gradual weight loss through diet, calorie control, and at least 150 minutes of exercise per week.",
        );
    } else if bmi >= BMI_OVERWEIGHT {
        advice.push(
            "BMI in the overweight range: consider adjusting diet and activity to avoid further gain.",
        );
    } else {
        advice.push("BMI in the healthy range: keep up balanced nutrition and regular activity.");
    }

    // 2. Glucose
    if glucose >= GLUCOSE_URGENT {
        advice.push("Glucose is very high: get a blood test and consult a physician promptly.");
    } else if glucose >= GLUCOSE_ELEVATED {
        advice.push(
            "Glucose is elevated (possible pre-diabetes): adjust diet and repeat the measurement.",
        );
    } else {
        advice.push("Glucose is within the normal range as entered.");
    }

    // 3. Blood pressure (single-sided, silent below the threshold)
    if blood_pressure >= BLOOD_PRESSURE_HIGH {
        advice.push(
            "Blood pressure is on the high side: monitor it and adjust habits (less salt, more exercise).",
        );
    }

    // 4. Data completeness (one combined line)
    if !insulin_provided || !skin_provided {
        advice.push(
            "Insulin or skin thickness was not provided: for a detailed assessment, have the real values measured clinically.",
        );
    }

    // 5. Age
    if age >= AGE_SENIOR {
        advice.push(
            "Age 60 or above: schedule regular checkups, as metabolic disease risk rises with age.",
        );
    }

    advice
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_five_advisories_fire_in_order() {
        let advice = advise(250.0, 32.0, 130.0, 65.0, false, true);
        assert_eq!(advice.len(), 5);
        assert!(advice[0].contains("obese"));
        assert!(advice[1].contains("very high"));
        assert!(advice[2].contains("Blood pressure"));
        assert!(advice[3].contains("not provided"));
        assert!(advice[4].contains("Age 60"));
    }

    #[test]
    fn test_minimal_case_fires_only_weight_and_glucose() {
        let advice = advise(100.0, 22.0, 80.0, 40.0, true, true);
        assert_eq!(advice.len(), 2);
        assert!(advice[0].contains("healthy range"));
        assert!(advice[1].contains("normal range"));
    }

    #[test]
    fn test_weight_branches_are_exclusive() {
        assert!(advise(100.0, 30.0, 80.0, 40.0, true, true)[0].contains("obese"));
        assert!(advise(100.0, 29.9, 80.0, 40.0, true, true)[0].contains("overweight"));
        assert!(advise(100.0, 25.0, 80.0, 40.0, true, true)[0].contains("overweight"));
        assert!(advise(100.0, 24.9, 80.0, 40.0, true, true)[0].contains("healthy"));
    }

    #[test]
    fn test_glucose_branches_are_exclusive() {
        assert!(advise(200.0, 22.0, 80.0, 40.0, true, true)[1].contains("very high"));
        assert!(advise(199.0, 22.0, 80.0, 40.0, true, true)[1].contains("elevated"));
        assert!(advise(140.0, 22.0, 80.0, 40.0, true, true)[1].contains("elevated"));
        assert!(advise(139.0, 22.0, 80.0, 40.0, true, true)[1].contains("normal"));
    }

    #[test]
    fn test_completeness_line_is_single_even_when_both_missing() {
        let advice = advise(100.0, 22.0, 80.0, 40.0, false, false);
        let missing: Vec<_> = advice
            .iter()
            .filter(|line| line.contains("not provided"))
            .collect();
        assert_eq!(missing.len(), 1);
    }

    #[test]
    fn test_blood_pressure_and_age_thresholds_are_inclusive() {
        let advice = advise(100.0, 22.0, 120.0, 60.0, true, true);
        assert_eq!(advice.len(), 4);
        let advice = advise(100.0, 22.0, 119.0, 59.0, true, true);
        assert_eq!(advice.len(), 2);
    }
}
