//! Single-pass batch conversion over one loaded export document.

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::config::WorkoutRules;
use crate::model::{
    ExerciseOut, LegacyExercise, LegacyMeasurement, LegacyWorkout, MeasurementOut, WorkoutOut,
};
use crate::normalize::{Skipped, normalize_exercise, normalize_measurement, normalize_workout};

/// One legacy export document: up to three top-level arrays, absent arrays
/// read as empty.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InputDocument {
    pub measurement_records: Vec<LegacyMeasurement>,
    pub exercise_records: Vec<LegacyExercise>,
    pub workout_records: Vec<LegacyWorkout>,
}

/// Converted arrays; also the wire shape of the combined output document.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConvertedRecords {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub measurement_records: Vec<MeasurementOut>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub exercise_records: Vec<ExerciseOut>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub workout_records: Vec<WorkoutOut>,
}

impl ConvertedRecords {
    pub fn total(&self) -> usize {
        self.measurement_records.len() + self.exercise_records.len() + self.workout_records.len()
    }
}

/// Records that failed validation, grouped by type, originals untouched.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkippedRecords {
    pub measurement_records: Vec<Skipped<LegacyMeasurement>>,
    pub exercise_records: Vec<Skipped<LegacyExercise>>,
    pub workout_records: Vec<Skipped<LegacyWorkout>>,
}

impl SkippedRecords {
    pub fn total(&self) -> usize {
        self.measurement_records.len() + self.exercise_records.len() + self.workout_records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Result of one run; constructed fresh per run and owned by the caller.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionReport {
    pub converted: ConvertedRecords,
    pub skipped: SkippedRecords,
}

/// Normalize every record in the document, in dependency order: workouts
/// correlate against the already-converted exercise sequence, so exercises
/// go first. Each input record ends up in exactly one of converted/skipped.
pub fn run_conversion(
    document: InputDocument,
    catalog: &Catalog,
    rules: &WorkoutRules,
) -> ConversionReport {
    let mut report = ConversionReport::default();

    for record in document.measurement_records {
        match normalize_measurement(record, catalog) {
            Ok(out) => report.converted.measurement_records.push(out),
            Err(skipped) => report.skipped.measurement_records.push(skipped),
        }
    }

    for record in document.exercise_records {
        match normalize_exercise(record, catalog) {
            Ok(out) => report.converted.exercise_records.push(out),
            Err(skipped) => report.skipped.exercise_records.push(skipped),
        }
    }

    for record in document.workout_records {
        match normalize_workout(record, &report.converted.exercise_records, catalog, rules) {
            Ok(out) => report.converted.workout_records.push(out),
            Err(skipped) => report.skipped.workout_records.push(skipped),
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::SkipReason;
    use serde_json::json;

    fn document(raw: serde_json::Value) -> InputDocument {
        serde_json::from_value(raw).unwrap()
    }

    #[test]
    fn missing_arrays_read_as_empty() {
        let doc = document(json!({}));
        assert!(doc.measurement_records.is_empty());
        assert!(doc.exercise_records.is_empty());
        assert!(doc.workout_records.is_empty());
    }

    #[test]
    fn workouts_correlate_against_exercises_from_the_same_document() {
        let doc = document(json!({
            "exerciseRecords": [{
                "id": "3F6-836-N3M",
                "createdAt": 1_666_350_244_000_i64,
                "actionName": "Barbell Rows",
                "data": {"sets": [{"weight": "60", "reps": "5"}]}
            }],
            "workoutRecords": [{
                "id": "LY0-TGR-0D6",
                "createdAt": 1_666_350_244_529_i64,
                "actionName": "StrongLifts 5x5 - Alpha",
                "endedAt": 1_666_350_959_580_i64
            }]
        }));

        let report = run_conversion(doc, &Catalog::builtin(), &WorkoutRules::default());

        assert_eq!(report.converted.exercise_records.len(), 1);
        assert_eq!(report.converted.workout_records.len(), 1);
        assert_eq!(
            report.converted.workout_records[0].exercise_record_ids,
            vec![report.converted.exercise_records[0].id]
        );
    }

    #[test]
    fn every_record_lands_in_exactly_one_collection() {
        let doc = document(json!({
            "measurementRecords": [
                {"createdAt": 1_000_000_i64, "actionName": "Body Weight", "value": 172},
                {"createdAt": 1_000_000_i64, "actionName": "Blood Pressure", "value": 120}
            ],
            "exerciseRecords": [{
                "createdAt": 1_000_000_i64,
                "actionName": "Deadlift",
                "data": {"sets": [{"weight": "140", "reps": "5"}]}
            }],
            "workoutRecords": [{
                "createdAt": 9_000_000_i64,
                "actionName": "StrongLifts 5x5 - Beta"
            }]
        }));

        let report = run_conversion(doc, &Catalog::builtin(), &WorkoutRules::default());

        assert_eq!(report.converted.total(), 2);
        assert_eq!(report.skipped.total(), 2);
        assert_eq!(
            report.skipped.measurement_records[0].reason,
            SkipReason::UnknownAction
        );
        assert_eq!(
            report.skipped.workout_records[0].reason,
            SkipReason::NoCorrelatedExercises
        );
    }

    #[test]
    fn skipped_records_keep_their_original_fields() {
        let doc = document(json!({
            "measurementRecords": [{
                "id": "WB7-029-97C",
                "type": "MeasurementRecord",
                "createdAt": 1_645_137_416_086_i64,
                "date": "Thu Feb 17 2022",
                "actionId": "MLZ-5VD-XF2",
                "actionName": "Resting Heart Rate",
                "value": 58
            }]
        }));
        let original = doc.measurement_records[0].clone();

        let report = run_conversion(doc, &Catalog::builtin(), &WorkoutRules::default());

        assert_eq!(report.skipped.measurement_records[0].record, original);
    }
}
