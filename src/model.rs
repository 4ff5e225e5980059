use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

use crate::record_id::RecordId;

/// Legacy measurement entry as exported (`type: "MeasurementRecord"`).
///
/// Every known field is optional at the type level; absence is a validation
/// concern, not a parse failure. Fields this pipeline does not consume
/// (`type`, `date`, `actionId`, ...) are captured in `extra` so a skipped
/// record re-serializes without field loss.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyMeasurement {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_name: Option<String>,
    /// Kept as a raw JSON number so the recorded value survives unchanged
    /// (an integer `172` must not come back as `172.0`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Number>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Legacy exercise entry (`type: "ExerciseRecord"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyExercise {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<ExerciseData>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseData {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sets: Vec<LegacySet>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One (weight, reps) pair as recorded; both sides are strings in the export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegacySet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reps: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Legacy workout entry (`type: "WorkoutRecord"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyWorkout {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ended_at: Option<i64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasurementOut {
    pub id: RecordId,
    pub created_date: DateTime<Utc>,
    pub parent_id: String,
    pub measurement_value: Number,
}

/// Converted exercise. `weights` and `reps` are parallel sequences built
/// positionally from the accepted set pairs; they are always equal in length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseOut {
    pub id: RecordId,
    pub created_date: DateTime<Utc>,
    pub parent_id: String,
    pub weights: Vec<u32>,
    pub reps: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutOut {
    pub id: RecordId,
    pub created_date: DateTime<Utc>,
    pub parent_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finished_date: Option<DateTime<Utc>>,
    pub exercise_record_ids: Vec<RecordId>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn legacy_measurement_preserves_unconsumed_fields() {
        let raw = json!({
            "id": "WB7-029-97C",
            "type": "MeasurementRecord",
            "createdAt": 1645137416086_i64,
            "date": "Thu Feb 17 2022",
            "actionId": "MLZ-5VD-XF2",
            "actionName": "Body Weight",
            "value": 172
        });

        let record: LegacyMeasurement = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(record.created_at, Some(1645137416086));
        assert_eq!(record.extra.get("type"), Some(&json!("MeasurementRecord")));

        let back = serde_json::to_value(&record).unwrap();
        assert_eq!(back, raw);
    }

    #[test]
    fn legacy_measurement_omits_absent_fields() {
        let record: LegacyMeasurement = serde_json::from_value(json!({})).unwrap();
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, "{}");
    }

    #[test]
    fn legacy_exercise_round_trips_sets() {
        let raw = json!({
            "id": "3F6-836-N3M",
            "createdAt": 1625221437591_i64,
            "actionName": "Barbell Rows",
            "data": {
                "sets": [
                    {"weight": "60", "reps": "5"},
                    {"reps": "5"}
                ]
            }
        });

        let record: LegacyExercise = serde_json::from_value(raw.clone()).unwrap();
        let sets = &record.data.as_ref().unwrap().sets;
        assert_eq!(sets.len(), 2);
        assert_eq!(sets[0].weight.as_deref(), Some("60"));
        assert_eq!(sets[1].weight, None);

        assert_eq!(serde_json::to_value(&record).unwrap(), raw);
    }

    #[test]
    fn workout_out_omits_missing_finished_date() {
        let workout = WorkoutOut {
            id: RecordId::generate(),
            created_date: Utc::now(),
            parent_id: "2158e1b2-27e0-4012-bb14-3846b3ee1d6a".into(),
            finished_date: None,
            exercise_record_ids: vec![RecordId::generate()],
        };

        let json = serde_json::to_string(&workout).unwrap();
        assert!(!json.contains("finishedDate"));
        assert!(json.contains("exerciseRecordIds"));
    }

    #[test]
    fn converted_records_round_trip_json() {
        let exercise = ExerciseOut {
            id: RecordId::generate(),
            created_date: Utc::now(),
            parent_id: "08b12cc1-d4b9-4d22-82db-9e33b3e5c3fa".into(),
            weights: vec![60, 60],
            reps: vec![5, 5],
        };

        let json = serde_json::to_string(&exercise).unwrap();
        let parsed: ExerciseOut = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, exercise);
    }
}
