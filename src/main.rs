use std::path::PathBuf;

use clap::{Parser, Subcommand};
use ftconv::catalog::ActionKind;
use ftconv::config::{
    DEFAULT_ASSUMED_DURATION_MINS, DEFAULT_CORRELATION_WINDOW_MS, MissingFinishPolicy, RunConfig,
    WorkoutRules,
};
use ftconv::output::Format;

#[derive(Parser)]
#[command(
    name = "ftconv",
    version,
    about = "Converts fitness tracker JSON exports to the current record schema"
)]
struct Cli {
    /// Output format
    #[arg(long, global = true, value_enum, default_value = "json")]
    format: Format,
    /// Shorthand for --format pretty
    #[arg(long, global = true, hide = true)]
    pretty: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a legacy export and write the converted records
    Convert {
        /// Path to the legacy JSON export
        input: PathBuf,
        /// Write one file per record type instead of a single combined file
        #[arg(long)]
        split: bool,
        /// Directory the converted documents are written into
        #[arg(long, default_value = "output")]
        out_dir: PathBuf,
        /// Run the conversion and print the report without writing files
        #[arg(long)]
        dry_run: bool,
        /// Correlation window around a workout start, in milliseconds
        #[arg(long, default_value_t = DEFAULT_CORRELATION_WINDOW_MS)]
        window_ms: i64,
        /// What to record as finishedDate when a workout has no endedAt
        #[arg(long, value_enum, default_value_t = MissingFinishPolicy::Omit)]
        missing_finish: MissingFinishPolicy,
        /// Workout length assumed by the assume-duration policy, in minutes
        #[arg(long, default_value_t = DEFAULT_ASSUMED_DURATION_MINS)]
        assumed_duration_mins: i64,
    },
    /// List the known legacy actions and their input descriptors
    Actions {
        /// Only show actions of this kind
        #[arg(long, value_enum)]
        kind: Option<ActionKind>,
    },
}

fn run(cli: Cli, format: Format) -> ftconv::error::Result<()> {
    match cli.command {
        Commands::Convert {
            input,
            split,
            out_dir,
            dry_run,
            window_ms,
            missing_finish,
            assumed_duration_mins,
        } => {
            let config = RunConfig {
                input,
                out_dir,
                combined: !split,
                rules: WorkoutRules {
                    window_ms,
                    missing_finish,
                    assumed_duration_mins,
                },
            };
            ftconv::commands::convert::run(config, dry_run, format)
        }
        Commands::Actions { kind } => ftconv::commands::actions::run(kind, format),
    }
}

fn main() {
    let cli = Cli::parse();
    let format = if cli.pretty {
        Format::Pretty
    } else {
        cli.format
    };
    if let Err(e) = run(cli, format) {
        match format {
            Format::Json => {
                eprintln!(
                    "{}",
                    serde_json::json!({
                        "error": e.code(),
                        "message": e.to_string()
                    })
                );
            }
            _ => eprintln!("error: {e}"),
        }
        std::process::exit(1);
    }
}
