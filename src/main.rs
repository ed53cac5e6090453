//! CLI entry point and command handlers for fieldcheck.

mod cmd;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::io;

use cmd::check::Field;

#[derive(Parser)]
#[command(name = "fieldcheck")]
#[command(version)]
#[command(about = "Personal data validation tester", long_about = None)]
#[command(
    after_help = "EXAMPLES:\n    fieldcheck                              Interactive menu tester\n    fieldcheck check email user@example.com  Validate one value and exit\n    fieldcheck check id 12345678Z --json     Machine-readable outcome\n\n    Exit code is 1 when the value is rejected; set FIELDCHECK_QUIET=1 to\n    suppress the message and branch on the exit code alone."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive validation menu (the default)
    Menu,
    /// Validate a single field value and exit
    Check {
        /// Field to validate
        #[arg(value_enum)]
        field: Field,
        /// Raw value to validate
        value: String,
        /// Document type code for the id field (only 1 is recognized)
        #[arg(long, default_value_t = 1)]
        type_code: i32,
        /// Print the outcome as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show version information
    Version {
        /// Show additional build information
        #[arg(long, short)]
        verbose: bool,
    },
    /// Generate shell completion script
    Completion {
        /// Shell to generate completions for (bash, zsh, fish, powershell)
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        None | Some(Commands::Menu) => cmd::menu::run_menu(),
        Some(Commands::Check {
            field,
            value,
            type_code,
            json,
        }) => cmd::check::cmd_check(field, &value, type_code, json),
        Some(Commands::Version { verbose }) => cmd_version(verbose),
        Some(Commands::Completion { shell }) => cmd_completion(shell),
    }
}

fn cmd_version(verbose: bool) -> Result<()> {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    println!("fieldcheck {}", VERSION);

    if verbose {
        const GIT_SHA: &str = env!("GIT_SHA");
        const BUILD_DATE: &str = env!("BUILD_DATE");
        println!("commit: {}", GIT_SHA);
        println!("built: {}", BUILD_DATE);
    }

    Ok(())
}

/// Generate shell completion script
fn cmd_completion(shell: Shell) -> Result<()> {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "fieldcheck", &mut io::stdout());
    Ok(())
}
