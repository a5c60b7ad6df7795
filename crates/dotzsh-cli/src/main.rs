//! dotzsh CLI
//!
//! Provisions an interactive zsh environment: prerequisite packages,
//! oh-my-zsh plus plugins, auxiliary tools, and an idempotent rewrite of
//! the user's zshrc.

mod cli;
mod commands;
mod config;
mod error;

use clap::Parser;
use clap::error::ErrorKind;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::Cli;
use commands::ProvisionOptions;
use error::{CliError, Result};

fn main() {
    // Help and version exit 0; any other parse failure (unknown flag,
    // stray argument) prints the error plus usage and exits 1.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    if let Err(e) = run(cli) {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(exit_code(&e));
    }
}

/// A failed install exits with the failing command's own exit code when
/// one is known; everything else exits 1.
fn exit_code(e: &CliError) -> i32 {
    match e {
        CliError::Install(dotzsh_install::Error::InstallFailed {
            exit_code: Some(code),
            ..
        }) => *code,
        _ => 1,
    }
}

fn run(cli: Cli) -> Result<()> {
    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    commands::run_provision(ProvisionOptions {
        dry_run: cli.dry_run,
        restore_zshrc: cli.restore_zshrc,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn install_failure_propagates_the_command_exit_code() {
        let e = CliError::Install(dotzsh_install::Error::InstallFailed {
            name: "apt-get install".to_string(),
            command: "sudo apt-get install -y zsh".to_string(),
            exit_code: Some(100),
        });
        assert_eq!(exit_code(&e), 100);
    }

    #[test]
    fn install_failure_without_a_code_exits_one() {
        let e = CliError::Install(dotzsh_install::Error::InstallFailed {
            name: "oh-my-zsh bootstrap".to_string(),
            command: "sh -c ...".to_string(),
            exit_code: None,
        });
        assert_eq!(exit_code(&e), 1);
    }

    #[test]
    fn other_errors_exit_one() {
        let e = CliError::Io(std::io::Error::other("disk gone"));
        assert_eq!(exit_code(&e), 1);
    }
}
