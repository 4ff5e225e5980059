//! Per-record-type transforms from the legacy shape to the target shape.
//!
//! Each entry point is a pure function: it either yields a converted record
//! or hands the input back untouched with the reason it was rejected. No
//! input is ever mutated and nothing is written anywhere.

use std::fmt;

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use serde_json::Number;

use crate::catalog::{ActionKind, Catalog};
use crate::config::{MissingFinishPolicy, WorkoutRules};
use crate::correlate::correlate;
use crate::model::{
    ExerciseOut, LegacyExercise, LegacyMeasurement, LegacySet, LegacyWorkout, MeasurementOut,
    WorkoutOut,
};
use crate::record_id::RecordId;

/// Why a record failed validation and was routed to the skipped collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    MissingCreatedAt,
    InvalidCreatedAt,
    UnknownAction,
    MissingValue,
    NoValidSets,
    InvalidEndedAt,
    NoCorrelatedExercises,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingCreatedAt => write!(f, "createdAt is missing"),
            Self::InvalidCreatedAt => write!(f, "createdAt is not a representable instant"),
            Self::UnknownAction => write!(f, "actionName does not resolve to a known action"),
            Self::MissingValue => write!(f, "value is missing"),
            Self::NoValidSets => {
                write!(f, "no set entry has both a weight and a non-zero reps count")
            }
            Self::InvalidEndedAt => write!(f, "finish instant is not representable"),
            Self::NoCorrelatedExercises => {
                write!(f, "no exercise record falls within the correlation window")
            }
        }
    }
}

/// A rejected record, preserved exactly as it arrived.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Skipped<T> {
    pub reason: SkipReason,
    pub record: T,
}

fn created_date(created_at: Option<i64>) -> Result<DateTime<Utc>, SkipReason> {
    let millis = created_at.ok_or(SkipReason::MissingCreatedAt)?;
    DateTime::from_timestamp_millis(millis).ok_or(SkipReason::InvalidCreatedAt)
}

fn resolve_parent(
    action_name: Option<&str>,
    kind: ActionKind,
    catalog: &Catalog,
) -> Result<String, SkipReason> {
    action_name
        .and_then(|name| catalog.resolve(kind, name))
        .map(|entry| entry.id.to_string())
        .ok_or(SkipReason::UnknownAction)
}

pub fn normalize_measurement(
    record: LegacyMeasurement,
    catalog: &Catalog,
) -> Result<MeasurementOut, Skipped<LegacyMeasurement>> {
    match measurement_fields(&record, catalog) {
        Ok((created_date, parent_id, measurement_value)) => Ok(MeasurementOut {
            id: RecordId::generate(),
            created_date,
            parent_id,
            measurement_value,
        }),
        Err(reason) => Err(Skipped { reason, record }),
    }
}

fn measurement_fields(
    record: &LegacyMeasurement,
    catalog: &Catalog,
) -> Result<(DateTime<Utc>, String, Number), SkipReason> {
    let created = created_date(record.created_at)?;
    let parent = resolve_parent(record.action_name.as_deref(), ActionKind::Measurement, catalog)?;
    let value = record.value.clone().ok_or(SkipReason::MissingValue)?;
    Ok((created, parent, value))
}

pub fn normalize_exercise(
    record: LegacyExercise,
    catalog: &Catalog,
) -> Result<ExerciseOut, Skipped<LegacyExercise>> {
    match exercise_fields(&record, catalog) {
        Ok((created_date, parent_id, weights, reps)) => Ok(ExerciseOut {
            id: RecordId::generate(),
            created_date,
            parent_id,
            weights,
            reps,
        }),
        Err(reason) => Err(Skipped { reason, record }),
    }
}

fn exercise_fields(
    record: &LegacyExercise,
    catalog: &Catalog,
) -> Result<(DateTime<Utc>, String, Vec<u32>, Vec<u32>), SkipReason> {
    let created = created_date(record.created_at)?;
    let parent = resolve_parent(record.action_name.as_deref(), ActionKind::Exercise, catalog)?;

    let sets = record
        .data
        .as_ref()
        .map(|data| data.sets.as_slice())
        .unwrap_or_default();

    let mut weights = Vec::new();
    let mut reps = Vec::new();
    for set in sets {
        if let Some((weight, rep_count)) = accepted_pair(set) {
            weights.push(weight);
            reps.push(rep_count);
        }
    }

    if weights.is_empty() {
        return Err(SkipReason::NoValidSets);
    }
    Ok((created, parent, weights, reps))
}

/// A set pair counts only when reps is present and not the literal `"0"` and
/// a weight is present; both must parse as integers. Rejected pairs are
/// dropped whole, so the parallel weight/reps sequences never diverge.
fn accepted_pair(set: &LegacySet) -> Option<(u32, u32)> {
    let reps = set.reps.as_deref()?;
    if reps == "0" {
        return None;
    }
    let weight = set.weight.as_deref()?;
    Some((weight.trim().parse().ok()?, reps.trim().parse().ok()?))
}

pub fn normalize_workout(
    record: LegacyWorkout,
    exercises: &[ExerciseOut],
    catalog: &Catalog,
    rules: &WorkoutRules,
) -> Result<WorkoutOut, Skipped<LegacyWorkout>> {
    match workout_fields(&record, exercises, catalog, rules) {
        Ok((created_date, parent_id, finished_date, exercise_record_ids)) => Ok(WorkoutOut {
            id: RecordId::generate(),
            created_date,
            parent_id,
            finished_date,
            exercise_record_ids,
        }),
        Err(reason) => Err(Skipped { reason, record }),
    }
}

type WorkoutFields = (DateTime<Utc>, String, Option<DateTime<Utc>>, Vec<RecordId>);

fn workout_fields(
    record: &LegacyWorkout,
    exercises: &[ExerciseOut],
    catalog: &Catalog,
    rules: &WorkoutRules,
) -> Result<WorkoutFields, SkipReason> {
    let started_at = record.created_at.ok_or(SkipReason::MissingCreatedAt)?;
    let created =
        DateTime::from_timestamp_millis(started_at).ok_or(SkipReason::InvalidCreatedAt)?;
    let parent = resolve_parent(record.action_name.as_deref(), ActionKind::Workout, catalog)?;
    let finished = finished_date(record.ended_at, created, rules)?;

    let exercise_record_ids = correlate(started_at, exercises, rules.window_ms);
    if exercise_record_ids.is_empty() {
        return Err(SkipReason::NoCorrelatedExercises);
    }

    Ok((created, parent, finished, exercise_record_ids))
}

fn finished_date(
    ended_at: Option<i64>,
    created: DateTime<Utc>,
    rules: &WorkoutRules,
) -> Result<Option<DateTime<Utc>>, SkipReason> {
    match ended_at {
        Some(millis) => DateTime::from_timestamp_millis(millis)
            .map(Some)
            .ok_or(SkipReason::InvalidEndedAt),
        None => match rules.missing_finish {
            MissingFinishPolicy::Omit => Ok(None),
            MissingFinishPolicy::AssumeDuration => Duration::try_minutes(rules.assumed_duration_mins)
                .and_then(|duration| created.checked_add_signed(duration))
                .map(Some)
                .ok_or(SkipReason::InvalidEndedAt),
        },
    }
}
