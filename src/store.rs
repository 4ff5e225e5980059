//! Reads the legacy export document and writes the converted documents.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::Serialize;

use crate::error::{ConvertError, Result};
use crate::runner::{ConvertedRecords, InputDocument};

/// Load one export document. A missing file or unparseable JSON is fatal for
/// the whole run; no partial output is ever produced from a bad input.
pub fn read_document(path: &Path) -> Result<InputDocument> {
    let raw = fs::read_to_string(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => ConvertError::InputMissing(path.display().to_string()),
        _ => ConvertError::Io(err),
    })?;

    serde_json::from_str(&raw).map_err(|source| ConvertError::InputParse {
        path: path.display().to_string(),
        source,
    })
}

/// Write the converted records: one combined document, or one document per
/// record type. Returns the paths written. Skipped records never reach an
/// output file.
pub fn write_outputs(
    converted: &ConvertedRecords,
    out_dir: &Path,
    combined: bool,
) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(out_dir)?;

    if combined {
        return Ok(vec![write_document(out_dir, "converted-records", converted)?]);
    }

    let measurement = ConvertedRecords {
        measurement_records: converted.measurement_records.clone(),
        ..Default::default()
    };
    let exercise = ConvertedRecords {
        exercise_records: converted.exercise_records.clone(),
        ..Default::default()
    };
    let workout = ConvertedRecords {
        workout_records: converted.workout_records.clone(),
        ..Default::default()
    };

    Ok(vec![
        write_document(out_dir, "converted-measurement-records", &measurement)?,
        write_document(out_dir, "converted-exercise-records", &exercise)?,
        write_document(out_dir, "converted-workout-records", &workout)?,
    ])
}

fn write_document<T: Serialize>(out_dir: &Path, stem: &str, document: &T) -> Result<PathBuf> {
    let name = format!(
        "{stem}-{}-{}.json",
        Utc::now().format("%Y-%m-%d"),
        random_suffix()?
    );
    let path = out_dir.join(name);
    fs::write(&path, serde_json::to_string_pretty(document)?)?;
    Ok(path)
}

/// Five random uppercase alphanumerics, enough to keep same-day runs from
/// clobbering each other.
fn random_suffix() -> Result<String> {
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

    let mut bytes = [0_u8; 5];
    getrandom::fill(&mut bytes).map_err(|err| ConvertError::Entropy(err.to_string()))?;

    Ok(bytes
        .iter()
        .map(|byte| CHARSET[(*byte as usize) % CHARSET.len()] as char)
        .collect())
}
