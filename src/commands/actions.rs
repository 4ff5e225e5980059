use colored::Colorize;

use crate::catalog::{ActionKind, Catalog};
use crate::error::Result;
use crate::output::Format;

pub fn run(kind: Option<ActionKind>, format: Format) -> Result<()> {
    let catalog = Catalog::builtin();
    let entries: Vec<_> = catalog
        .entries()
        .iter()
        .filter(|entry| kind.is_none_or(|kind| entry.kind == kind))
        .collect();

    match format {
        Format::Json => println!("{}", serde_json::to_string(&entries)?),
        Format::Pretty => {
            for entry in entries {
                println!("{} ({})", entry.name.bold(), entry.kind);
                println!("  id: {}", entry.id);
                if !entry.inputs.is_empty() {
                    let inputs: Vec<String> =
                        entry.inputs.iter().map(|input| input.to_string()).collect();
                    println!("  inputs: {}", inputs.join(", "));
                }
            }
        }
        Format::Minimal => {
            for entry in entries {
                println!("{:12} {:36} {}", entry.kind.to_string(), entry.id, entry.name);
            }
        }
    }
    Ok(())
}
