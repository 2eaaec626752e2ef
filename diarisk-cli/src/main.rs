//! Diarisk CLI - command-line presentation layer for diabetes risk screening

#![deny(warnings)]

// Global invariants enforced:
// - The pipeline runs exactly once per invocation
// - Artifact-load failures are warnings, not fatal errors
// - The input summary prints even when prediction fails

use anyhow::Context;
use clap::{Parser, Subcommand};
use diarisk_core::{
    render_json, render_summary_text, render_text, FamilyHistory, InputRecord, Screening,
    ScreeningConfig, ScreeningError, MODEL_FILENAME,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "diarisk")]
#[command(about = "Diabetes risk screening from basic health metrics")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Assess diabetes risk for one set of inputs
    Assess {
        /// Age in years
        #[arg(long, value_parser = clap::value_parser!(u32).range(10..=100))]
        age: u32,

        /// Number of pregnancies
        #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(u32).range(0..=20))]
        pregnancies: u32,

        /// Weight in kilograms
        #[arg(long)]
        weight: f64,

        /// Height in centimeters
        #[arg(long)]
        height: f64,

        /// Glucose level (mg/dL)
        #[arg(long)]
        glucose: u32,

        /// Diastolic blood pressure (mmHg)
        #[arg(long)]
        blood_pressure: u32,

        /// Skin thickness (mm), if known
        #[arg(long)]
        skin_thickness: Option<u32>,

        /// Insulin level (uU/mL), if known
        #[arg(long)]
        insulin: Option<u32>,

        /// Family history of diabetes
        #[arg(long, value_enum, default_value_t = FamilyHistoryArg::None)]
        family_history: FamilyHistoryArg,

        /// Path to the classifier artifact
        #[arg(long, default_value = MODEL_FILENAME)]
        model: PathBuf,

        /// Output format
        #[arg(long, default_value = "text")]
        format: OutputFormat,
    },
    /// Print the declared input ranges and fallback values
    Ranges,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Family-history categories as CLI-friendly keys
#[derive(Clone, Copy, clap::ValueEnum)]
enum FamilyHistoryArg {
    /// No family history
    None,
    /// A distant relative (aunt/uncle)
    Distant,
    /// A parent
    Parent,
    /// Parents plus siblings
    ParentSiblings,
    /// Multiple family members
    Multiple,
}

impl From<FamilyHistoryArg> for FamilyHistory {
    fn from(arg: FamilyHistoryArg) -> Self {
        match arg {
            FamilyHistoryArg::None => FamilyHistory::None,
            FamilyHistoryArg::Distant => FamilyHistory::DistantRelative,
            FamilyHistoryArg::Parent => FamilyHistory::Parent,
            FamilyHistoryArg::ParentSiblings => FamilyHistory::ParentAndSiblings,
            FamilyHistoryArg::Multiple => FamilyHistory::MultipleRelatives,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Assess {
            age,
            pregnancies,
            weight,
            height,
            glucose,
            blood_pressure,
            skin_thickness,
            insulin,
            family_history,
            model,
            format,
        } => {
            let input = InputRecord {
                age,
                pregnancies,
                weight_kg: weight,
                height_cm: height,
                glucose,
                blood_pressure,
                skin_thickness,
                insulin,
                family_history: family_history.into(),
            };

            let screening = Screening::from_artifact(ScreeningConfig::default(), &model);
            // Stderr keeps stdout parseable for --format json
            eprintln!("{}", model_status_line(&screening, &model));

            run_assessment(&screening, &input, format)
        }
        Commands::Ranges => {
            print_ranges(&ScreeningConfig::default());
            Ok(())
        }
    }
}

/// One-line model status: a load confirmation or the unavailability reason
fn model_status_line(screening: &Screening, path: &std::path::Path) -> String {
    match screening.model_unavailable_reason() {
        Some(reason) => format!("Warning: {}", reason),
        None => format!("Model loaded from '{}', ready to predict", path.display()),
    }
}

/// Run the pipeline once and render the result
///
/// The input summary prints before prediction so it stays visible when the
/// classifier is unavailable or fails.
fn run_assessment(
    screening: &Screening,
    input: &InputRecord,
    format: OutputFormat,
) -> anyhow::Result<()> {
    match screening.assess(input) {
        Ok(assessment) => match format {
            OutputFormat::Text => {
                print!("{}", render_text(&assessment));
            }
            OutputFormat::Json => {
                let json = render_json(&assessment).context("failed to serialize assessment")?;
                println!("{}", json);
            }
        },
        Err(e @ ScreeningError::ModelUnavailable(_)) => {
            print!("{}", render_summary_text(&screening.summarize(input)));
            anyhow::bail!("cannot predict: {}", e);
        }
        Err(e @ ScreeningError::Classification(_)) => {
            print!("{}", render_summary_text(&screening.summarize(input)));
            anyhow::bail!("{}", e);
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}

/// Print the declared ranges and fallbacks as aligned text
fn print_ranges(config: &ScreeningConfig) {
    let ranges = &config.ranges;
    let rows = [
        ("age", ranges.age),
        ("pregnancies", ranges.pregnancies),
        ("weight (kg)", ranges.weight),
        ("height (cm)", ranges.height),
        ("glucose (mg/dL)", ranges.glucose),
        ("blood pressure (mmHg)", ranges.blood_pressure),
        ("skin thickness (mm)", ranges.skin_thickness),
        ("insulin (uU/mL)", ranges.insulin),
        ("bmi (derived)", ranges.bmi),
    ];

    println!("{:<22} {:>8} {:>8}", "FIELD", "MIN", "MAX");
    for (name, range) in rows {
        println!("{:<22} {:>8} {:>8}", name, range.min, range.max);
    }

    println!();
    println!("Fallbacks when optional fields are missing:");
    println!("  insulin        {}", config.fallbacks.insulin);
    println!("  skin thickness {}", config.fallbacks.skin_thickness);
}
