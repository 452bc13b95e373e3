//! Implementation of the `wirekit list` command.

use wirekit_adapters::load_manifest;
use wirekit_core::domain::{Outcome, RegistrationEntry, plan};

use crate::{
    cli::{ListArgs, ListFormat, global::GlobalArgs},
    config::AppConfig,
    error::{CliResult, IntoCli as _},
    output::OutputManager,
};

pub fn execute(
    args: ListArgs,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let path = super::resolve_manifest(args.manifest, &config)?;
    let descriptors = load_manifest(&path).with_cli_context(|| "loading manifest")?;

    let entries: Vec<RegistrationEntry> = plan(&descriptors)
        .into_iter()
        .filter_map(|c| match c.outcome {
            Outcome::Register(entry) => Some(entry),
            Outcome::Skip(_) => None,
        })
        .collect();

    match args.format {
        ListFormat::Table => {
            output.header(&format!("Registrations in {}:", path.display()))?;
            for entry in &entries {
                output.print(&format!(
                    "  {} -> {}  [{}]",
                    entry.interface, entry.implementation, entry.lifetime
                ))?;
            }
            output.print(&format!("\n{} total", entries.len()))?;
        }

        ListFormat::List => {
            for entry in &entries {
                println!("{}", entry.interface);
            }
        }

        ListFormat::Json => {
            // Serialise as a JSON array to stdout (bypasses OutputManager
            // because JSON output must be parseable even in non-TTY pipes).
            let json =
                serde_json::to_string_pretty(&entries).unwrap_or_else(|_| "[]".into());
            println!("{json}");
        }

        ListFormat::Csv => {
            println!("interface,implementation,lifetime");
            for entry in &entries {
                println!(
                    "{},{},{}",
                    entry.interface, entry.implementation, entry.lifetime
                );
            }
        }
    }

    Ok(())
}
