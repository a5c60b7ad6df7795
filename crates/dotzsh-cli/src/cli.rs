//! CLI argument parsing using clap derive

use clap::Parser;

/// dotzsh - provision an interactive zsh environment
///
/// Installs prerequisite packages, oh-my-zsh and its plugins, auxiliary
/// tools, and rewrites ~/.zshrc idempotently to wire everything together.
#[derive(Parser, Debug)]
#[command(name = "dotzsh")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Report every action without changing the system
    #[arg(long)]
    pub dry_run: bool,

    /// Restore a broken or missing ~/.zshrc before provisioning
    #[arg(long)]
    pub restore_zshrc: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
