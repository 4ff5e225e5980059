use std::fmt;

use clap::ValueEnum;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
#[clap(rename_all = "snake_case")]
pub enum ActionKind {
    Measurement,
    Exercise,
    Workout,
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Measurement => write!(f, "measurement"),
            Self::Exercise => write!(f, "exercise"),
            Self::Workout => write!(f, "workout"),
        }
    }
}

/// One input an action tracks per entry, as a declared capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionInput {
    Confirmation,
    MultipleSets,
    WeightLbs,
    Reps,
}

impl fmt::Display for ActionInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Confirmation => write!(f, "confirmation"),
            Self::MultipleSets => write!(f, "multiple_sets"),
            Self::WeightLbs => write!(f, "weight_lbs"),
            Self::Reps => write!(f, "reps"),
        }
    }
}

/// Declarative descriptor for one known legacy action: the stable identifier
/// it maps to, the record kind it belongs to, and the inputs it tracks.
/// Exceptions (an exercise that tracks reps without a weight) are a data
/// difference here, not a branch keyed on an identifier string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ActionEntry {
    pub id: &'static str,
    pub name: &'static str,
    pub kind: ActionKind,
    pub inputs: &'static [ActionInput],
}

const WEIGHT_AND_REPS: &[ActionInput] = &[
    ActionInput::MultipleSets,
    ActionInput::WeightLbs,
    ActionInput::Reps,
];

const REPS_ONLY: &[ActionInput] = &[ActionInput::MultipleSets, ActionInput::Reps];

const ENTRIES: &[ActionEntry] = &[
    ActionEntry {
        id: "b4450018-1506-450f-a429-9903aded5c9b",
        name: "Body Weight",
        kind: ActionKind::Measurement,
        inputs: &[],
    },
    ActionEntry {
        id: "50c1fc75-0975-45f8-8177-ff4988b00de2",
        name: "Barbell Squats",
        kind: ActionKind::Exercise,
        inputs: WEIGHT_AND_REPS,
    },
    ActionEntry {
        id: "d681459e-10c8-40ae-94e9-9b06b7c40367",
        name: "Barbell Bench Press",
        kind: ActionKind::Exercise,
        inputs: WEIGHT_AND_REPS,
    },
    ActionEntry {
        id: "08b12cc1-d4b9-4d22-82db-9e33b3e5c3fa",
        name: "Barbell Rows",
        kind: ActionKind::Exercise,
        inputs: WEIGHT_AND_REPS,
    },
    ActionEntry {
        id: "cc279615-91a6-42ac-a073-4339e7c2034f",
        name: "Barbell Overhead Press",
        kind: ActionKind::Exercise,
        inputs: WEIGHT_AND_REPS,
    },
    ActionEntry {
        id: "b8f1a60e-7f21-4f62-8757-d9b371bffd45",
        name: "Deadlift",
        kind: ActionKind::Exercise,
        inputs: WEIGHT_AND_REPS,
    },
    ActionEntry {
        id: "4976dbac-8bce-4ad4-b9d6-27edeecb93d0",
        name: "Resistance Bands",
        kind: ActionKind::Exercise,
        inputs: REPS_ONLY,
    },
    ActionEntry {
        id: "2158e1b2-27e0-4012-bb14-3846b3ee1d6a",
        name: "StrongLifts 5x5 - Alpha",
        kind: ActionKind::Workout,
        inputs: &[],
    },
    ActionEntry {
        id: "f3a1537c-4d63-43e1-99bd-df5ef59ac220",
        name: "StrongLifts 5x5 - Beta",
        kind: ActionKind::Workout,
        inputs: &[],
    },
];

/// Fixed mapping from legacy action names to stable identifiers.
///
/// Resolution is kind-aware: a name that only exists for another record kind
/// does not resolve. Unknown names yield `None`, never a substitute.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    entries: &'static [ActionEntry],
}

impl Catalog {
    pub fn builtin() -> Self {
        Self { entries: ENTRIES }
    }

    pub fn resolve(&self, kind: ActionKind, name: &str) -> Option<&'static ActionEntry> {
        self.entries
            .iter()
            .find(|entry| entry.kind == kind && entry.name == name)
    }

    pub fn entries(&self) -> &'static [ActionEntry] {
        self.entries
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_known_names_to_stable_ids() {
        let catalog = Catalog::builtin();

        let body_weight = catalog
            .resolve(ActionKind::Measurement, "Body Weight")
            .unwrap();
        assert_eq!(body_weight.id, "b4450018-1506-450f-a429-9903aded5c9b");

        let rows = catalog.resolve(ActionKind::Exercise, "Barbell Rows").unwrap();
        assert_eq!(rows.id, "08b12cc1-d4b9-4d22-82db-9e33b3e5c3fa");

        let alpha = catalog
            .resolve(ActionKind::Workout, "StrongLifts 5x5 - Alpha")
            .unwrap();
        assert_eq!(alpha.id, "2158e1b2-27e0-4012-bb14-3846b3ee1d6a");
    }

    #[test]
    fn unknown_name_does_not_resolve() {
        let catalog = Catalog::builtin();
        assert!(catalog.resolve(ActionKind::Exercise, "Cable Flys").is_none());
    }

    #[test]
    fn resolution_is_kind_aware() {
        let catalog = Catalog::builtin();
        assert!(catalog.resolve(ActionKind::Workout, "Barbell Rows").is_none());
        assert!(
            catalog
                .resolve(ActionKind::Exercise, "StrongLifts 5x5 - Alpha")
                .is_none()
        );
    }

    #[test]
    fn band_exercise_tracks_reps_without_weight() {
        let catalog = Catalog::builtin();
        let bands = catalog
            .resolve(ActionKind::Exercise, "Resistance Bands")
            .unwrap();
        assert!(bands.inputs.contains(&ActionInput::Reps));
        assert!(!bands.inputs.contains(&ActionInput::WeightLbs));
    }

    #[test]
    fn stable_ids_are_unique() {
        use std::collections::HashSet;

        let ids: HashSet<&str> = Catalog::builtin()
            .entries()
            .iter()
            .map(|entry| entry.id)
            .collect();
        assert_eq!(ids.len(), Catalog::builtin().entries().len());
    }
}
