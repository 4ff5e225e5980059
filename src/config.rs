use std::fmt;
use std::path::PathBuf;

use clap::ValueEnum;

/// Half-width of the correlation window around a workout start.
pub const DEFAULT_CORRELATION_WINDOW_MS: i64 = 2_000;

/// Workout length assumed by [`MissingFinishPolicy::AssumeDuration`].
pub const DEFAULT_ASSUMED_DURATION_MINS: i64 = 45;

/// What to record as `finishedDate` when a workout has no `endedAt`.
///
/// The two legacy pipelines disagreed here; the policy is an explicit choice
/// rather than a silent merge. `Omit` is the default.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[clap(rename_all = "kebab-case")]
pub enum MissingFinishPolicy {
    /// Emit no `finishedDate` field at all.
    #[default]
    Omit,
    /// Record `createdAt` plus the configured assumed duration.
    AssumeDuration,
}

impl fmt::Display for MissingFinishPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Omit => write!(f, "omit"),
            Self::AssumeDuration => write!(f, "assume-duration"),
        }
    }
}

/// Tunable workout-normalization constants, surfaced as configuration
/// instead of living inside the correlator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkoutRules {
    pub window_ms: i64,
    pub missing_finish: MissingFinishPolicy,
    pub assumed_duration_mins: i64,
}

impl Default for WorkoutRules {
    fn default() -> Self {
        Self {
            window_ms: DEFAULT_CORRELATION_WINDOW_MS,
            missing_finish: MissingFinishPolicy::default(),
            assumed_duration_mins: DEFAULT_ASSUMED_DURATION_MINS,
        }
    }
}

/// Everything one conversion run needs to know.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Path to the legacy JSON export.
    pub input: PathBuf,
    /// Directory the converted documents are written into.
    pub out_dir: PathBuf,
    /// One combined output document when true, three per-type documents
    /// otherwise.
    pub combined: bool,
    pub rules: WorkoutRules,
}

impl RunConfig {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            out_dir: PathBuf::from("output"),
            combined: true,
            rules: WorkoutRules::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_documented_constants() {
        let rules = WorkoutRules::default();
        assert_eq!(rules.window_ms, 2_000);
        assert_eq!(rules.missing_finish, MissingFinishPolicy::Omit);
        assert_eq!(rules.assumed_duration_mins, 45);
    }

    #[test]
    fn run_config_defaults_to_combined_output() {
        let config = RunConfig::new("export.json");
        assert!(config.combined);
        assert_eq!(config.out_dir, PathBuf::from("output"));
    }
}
