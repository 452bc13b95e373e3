//! Implementation of the `wirekit check` command.
//!
//! Runs the registrar over a manifest with a recording container and
//! reports, per type, what registered and what was skipped. `--strict`
//! turns convention violations (capability declared, interface missing)
//! into a non-zero exit.

use tracing::instrument;

use wirekit_adapters::{RecordingContainer, load_manifest};
use wirekit_core::application::RegistrarService;
use wirekit_core::domain::SkipReason;

use crate::{
    cli::{CheckArgs, OutputFormat, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli as _},
    output::OutputManager,
};

#[instrument(skip_all)]
pub fn execute(
    args: CheckArgs,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let path = super::resolve_manifest(args.manifest, &config)?;
    let descriptors = load_manifest(&path).with_cli_context(|| "loading manifest")?;

    let container = RecordingContainer::new();
    let registrar = RegistrarService::new(Box::new(container));
    let report = registrar
        .register_all(&descriptors)
        .with_cli_context(|| "running registration pass")?;

    if output.format() == OutputFormat::Json {
        // Serialise to stdout directly (bypasses OutputManager because JSON
        // output must be parseable even in non-TTY pipes).
        let json = serde_json::json!({
            "manifest": path,
            "registered": report.entries,
            "skipped": report
                .skipped
                .iter()
                .map(|s| serde_json::json!({ "type": s.type_name, "reason": s.reason }))
                .collect::<Vec<_>>(),
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&json).unwrap_or_else(|_| "{}".into())
        );
    } else {
        output.header(&format!("Registration report: {}", path.display()))?;

        for entry in &report.entries {
            output.success(&format!(
                "{} -> {}  [{}]",
                entry.interface, entry.implementation, entry.lifetime
            ))?;
        }
        for skip in &report.skipped {
            let line = format!("{}  (skipped: {})", skip.type_name, skip.reason);
            match skip.reason {
                // The one skip worth a human's attention: the type asked for
                // registration and didn't get it.
                SkipReason::NoMatchingInterface => output.warning(&line)?,
                _ => output.info(&line)?,
            }
        }

        output.print(&format!(
            "\n{} registered, {} skipped",
            report.registered_count(),
            report.skipped_count()
        ))?;
    }

    if args.strict {
        let violations = report.convention_violations().count();
        if violations > 0 {
            return Err(CliError::ConventionViolations { count: violations });
        }
    }

    Ok(())
}
