//! Implementation of the `wirekit completions` command.

use std::io;

use clap::CommandFactory;
use clap_complete::{generate, shells};

use crate::{
    cli::{Cli, CompletionsArgs, Shell},
    error::CliResult,
};

pub fn execute(args: CompletionsArgs) -> CliResult<()> {
    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    let mut stdout = io::stdout();

    match args.shell {
        Shell::Bash => generate(shells::Bash, &mut cmd, bin_name, &mut stdout),
        Shell::Zsh => generate(shells::Zsh, &mut cmd, bin_name, &mut stdout),
        Shell::Fish => generate(shells::Fish, &mut cmd, bin_name, &mut stdout),
        Shell::PowerShell => generate(shells::PowerShell, &mut cmd, bin_name, &mut stdout),
        Shell::Elvish => generate(shells::Elvish, &mut cmd, bin_name, &mut stdout),
    }

    Ok(())
}
