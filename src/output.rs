use std::path::PathBuf;

use clap::ValueEnum;
use colored::Colorize;
use serde::Serialize;

use crate::error::Result;
use crate::runner::{ConversionReport, SkippedRecords};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Json,
    Pretty,
    Minimal,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TypeCounts {
    measurement_records: usize,
    exercise_records: usize,
    workout_records: usize,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ReportSummary<'a> {
    dry_run: bool,
    written: Vec<String>,
    converted: TypeCounts,
    skipped: &'a SkippedRecords,
}

/// End-of-run report: converted counts, the skipped records grouped by type
/// with their reasons, and the files written.
pub fn print_report(
    report: &ConversionReport,
    written: &[PathBuf],
    dry_run: bool,
    format: Format,
) -> Result<()> {
    match format {
        Format::Json => {
            let summary = ReportSummary {
                dry_run,
                written: written.iter().map(|path| path.display().to_string()).collect(),
                converted: TypeCounts {
                    measurement_records: report.converted.measurement_records.len(),
                    exercise_records: report.converted.exercise_records.len(),
                    workout_records: report.converted.workout_records.len(),
                },
                skipped: &report.skipped,
            };
            println!("{}", serde_json::to_string(&summary)?);
        }
        Format::Pretty => {
            let heading = if dry_run {
                format!(
                    "Dry run: {} records would convert (nothing written)",
                    report.converted.total()
                )
            } else {
                format!("Converted {} records", report.converted.total())
            };
            println!("{}", heading.bold());
            println!(
                "  measurements: {} | exercises: {} | workouts: {}",
                report.converted.measurement_records.len(),
                report.converted.exercise_records.len(),
                report.converted.workout_records.len()
            );

            if !report.skipped.is_empty() {
                println!(
                    "{}",
                    format!("Skipped {} records", report.skipped.total()).bold()
                );
                for skipped in &report.skipped.measurement_records {
                    println!(
                        "  measurement {}: {}",
                        label(skipped.record.id.as_deref()),
                        skipped.reason
                    );
                }
                for skipped in &report.skipped.exercise_records {
                    println!(
                        "  exercise {}: {}",
                        label(skipped.record.id.as_deref()),
                        skipped.reason
                    );
                }
                for skipped in &report.skipped.workout_records {
                    println!(
                        "  workout {}: {}",
                        label(skipped.record.id.as_deref()),
                        skipped.reason
                    );
                }
            }

            for path in written {
                println!("Wrote {}", path.display());
            }
        }
        Format::Minimal => {
            println!("{:12} {:>9} {:>7}", "TYPE", "CONVERTED", "SKIPPED");
            println!("{}", "-".repeat(30));
            println!(
                "{:12} {:>9} {:>7}",
                "measurement",
                report.converted.measurement_records.len(),
                report.skipped.measurement_records.len()
            );
            println!(
                "{:12} {:>9} {:>7}",
                "exercise",
                report.converted.exercise_records.len(),
                report.skipped.exercise_records.len()
            );
            println!(
                "{:12} {:>9} {:>7}",
                "workout",
                report.converted.workout_records.len(),
                report.skipped.workout_records.len()
            );
        }
    }
    Ok(())
}

fn label(id: Option<&str>) -> &str {
    id.unwrap_or("<no id>")
}
