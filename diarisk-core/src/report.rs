//! Rendering of summaries and assessments
//!
//! Global invariants enforced:
//! - Deterministic output ordering
//! - Identical input yields byte-for-byte identical output

use crate::screening::{InputSummary, RiskAssessment};

/// Render the clipped input summary as aligned text
pub fn render_summary_text(summary: &InputSummary) -> String {
    let mut output = String::new();
    output.push_str("Values used for assessment\n");

    let rows = [
        ("Glucose", format!("{:.2}", summary.glucose)),
        ("BMI", format!("{:.2}", summary.bmi)),
        ("Age", format!("{:.0}", summary.age)),
        ("Blood pressure", format!("{:.2}", summary.blood_pressure)),
        ("Insulin (used)", format!("{:.2}", summary.insulin_used)),
        ("DPF", format!("{:.2}", summary.dpf)),
        (
            "Skin thickness (used)",
            format!("{:.2}", summary.skin_thickness_used),
        ),
        ("Insulin provided", yes_no(summary.insulin_provided)),
        ("Skin provided", yes_no(summary.skin_provided)),
    ];

    for (label, value) in rows {
        output.push_str(&format!("  {:<22} {}\n", label, value));
    }
    output
}

/// Render a complete assessment as text
///
/// Sections in fixed order: input summary, probability, tier + message,
/// advice, tier recommendations, and the estimated-values note when a
/// fallback was substituted.
pub fn render_text(assessment: &RiskAssessment) -> String {
    let mut output = String::new();

    output.push_str(&render_summary_text(&assessment.summary));
    output.push('\n');
    output.push_str(&format!(
        "Risk probability: {:.2}\n",
        assessment.probability
    ));
    output.push_str(&format!(
        "Risk tier: {} - {}\n",
        assessment.tier, assessment.message
    ));

    output.push_str("\nHealth advice:\n");
    for line in &assessment.advice {
        output.push_str(&format!("  - {}\n", line));
    }

    output.push_str("\nSuggestions for this risk tier:\n");
    for line in &assessment.recommendations {
        output.push_str(&format!("  - {}\n", line));
    }

    if !assessment.summary.insulin_provided || !assessment.summary.skin_provided {
        output.push_str(
            "\nNote: insulin or skin thickness was estimated; results are less precise than with measured values.\n",
        );
    }

    output
}

/// Render a complete assessment as pretty-printed JSON
pub fn render_json(assessment: &RiskAssessment) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(assessment)
}

fn yes_no(flag: bool) -> String {
    if flag { "yes" } else { "no" }.to_string()
}
