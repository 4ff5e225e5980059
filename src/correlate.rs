//! Fixed-window temporal join between workouts and converted exercises.

use crate::model::ExerciseOut;
use crate::record_id::RecordId;

/// Collect the ids of every exercise whose creation instant falls inside the
/// closed interval `[started_at - window, started_at + window]` around a
/// workout start.
///
/// The scan is a plain nearest-neighbor pass over the exercise sequence;
/// batches are hundreds to low thousands of records, so O(workouts x
/// exercises) is fine. The join is many-to-many: nothing stops one exercise
/// from matching several workouts. Output order is the exercise sequence
/// order, which callers must preserve for reproducible output.
pub fn correlate(started_at_millis: i64, exercises: &[ExerciseOut], window_ms: i64) -> Vec<RecordId> {
    let lower = started_at_millis.saturating_sub(window_ms);
    let upper = started_at_millis.saturating_add(window_ms);

    exercises
        .iter()
        .filter(|exercise| {
            let at = exercise.created_date.timestamp_millis();
            at >= lower && at <= upper
        })
        .map(|exercise| exercise.id)
        .collect()
}
