//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No registration logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "wirekit",
    bin_name = "wirekit",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Service registration, inspected",
    long_about = "Wirekit classifies generated service manifests and shows \
                  what registers into the container, with which lifetime, \
                  and what gets skipped.",
    after_help = "EXAMPLES:\n\
        \x20 wirekit check services.toml\n\
        \x20 wirekit check services.toml --strict\n\
        \x20 wirekit list services.toml --format json\n\
        \x20 wirekit completions bash > /usr/share/bash-completion/completions/wirekit",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the registrar over a manifest and report the outcome per type.
    #[command(
        visible_alias = "c",
        about = "Check what a manifest registers",
        after_help = "EXAMPLES:\n\
            \x20 wirekit check services.toml\n\
            \x20 wirekit check services.toml --strict\n\
            \x20 wirekit check --output-format json services.toml"
    )]
    Check(CheckArgs),

    /// List the registration entries a manifest produces.
    #[command(
        visible_alias = "ls",
        about = "List registration entries",
        after_help = "EXAMPLES:\n\
            \x20 wirekit list services.toml\n\
            \x20 wirekit list services.toml --format csv\n\
            \x20 wirekit list services.toml --format json"
    )]
    List(ListArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 wirekit completions bash > ~/.local/share/bash-completion/completions/wirekit\n\
            \x20 wirekit completions zsh  > ~/.zfunc/_wirekit\n\
            \x20 wirekit completions fish > ~/.config/fish/completions/wirekit.fish"
    )]
    Completions(CompletionsArgs),

    /// Manage the Wirekit configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 wirekit config get defaults.manifest\n\
            \x20 wirekit config set defaults.manifest ./services.toml\n\
            \x20 wirekit config list"
    )]
    Config(ConfigCommands),
}

// ── check ─────────────────────────────────────────────────────────────────────

/// Arguments for `wirekit check`.
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Manifest to check.  Falls back to `defaults.manifest` from the
    /// configuration file when omitted.
    #[arg(value_name = "MANIFEST", help = "Descriptor manifest (services.toml)")]
    pub manifest: Option<PathBuf>,

    /// Fail when a capability-bearing type lacks its conventional interface.
    #[arg(
        long = "strict",
        help = "Exit non-zero on convention violations (silent skips)"
    )]
    pub strict: bool,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `wirekit list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Manifest to list.  Falls back to `defaults.manifest` from the
    /// configuration file when omitted.
    #[arg(value_name = "MANIFEST", help = "Descriptor manifest (services.toml)")]
    pub manifest: Option<PathBuf>,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One interface per line.
    List,
    /// JSON array.
    Json,
    /// CSV rows.
    Csv,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `wirekit completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `wirekit config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.manifest`.
        key: String,
    },
    /// Set a configuration key to a value.
    Set {
        /// Dotted key path.
        key: String,
        /// New value.
        value: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_check_command() {
        let cli = Cli::parse_from(["wirekit", "check", "services.toml", "--strict"]);
        match cli.command {
            Commands::Check(args) => {
                assert_eq!(args.manifest.unwrap(), PathBuf::from("services.toml"));
                assert!(args.strict);
            }
            other => panic!("expected Check, got {other:?}"),
        }
    }

    #[test]
    fn check_alias() {
        let cli = Cli::parse_from(["wirekit", "c", "services.toml"]);
        assert!(matches!(cli.command, Commands::Check(_)));
    }

    #[test]
    fn parse_list_with_format() {
        let cli = Cli::parse_from(["wirekit", "list", "services.toml", "--format", "json"]);
        match cli.command {
            Commands::List(args) => assert!(matches!(args.format, ListFormat::Json)),
            other => panic!("expected List, got {other:?}"),
        }
    }

    #[test]
    fn manifest_is_optional() {
        let cli = Cli::parse_from(["wirekit", "check"]);
        match cli.command {
            Commands::Check(args) => assert!(args.manifest.is_none()),
            other => panic!("expected Check, got {other:?}"),
        }
    }

    #[test]
    fn parse_config_set() {
        let cli = Cli::parse_from([
            "wirekit",
            "config",
            "set",
            "defaults.manifest",
            "./services.toml",
        ]);
        match cli.command {
            Commands::Config(ConfigCommands::Set { key, value }) => {
                assert_eq!(key, "defaults.manifest");
                assert_eq!(value, "./services.toml");
            }
            other => panic!("expected Config Set, got {other:?}"),
        }
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        // clap should reject --quiet --verbose together
        let result = Cli::try_parse_from(["wirekit", "--quiet", "--verbose", "list"]);
        assert!(result.is_err());
    }
}
