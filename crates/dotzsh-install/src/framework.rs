//! oh-my-zsh bootstrap
//!
//! The upstream installer is invoked through the system shell, with the
//! environment set so it neither launches zsh, switches the login shell,
//! nor replaces an existing zshrc. Installation is idempotent: an existing
//! install directory short-circuits the whole step.

use dotzsh_fs::ZshrcLayout;

use crate::error::Result;
use crate::exec::run_shell;

const BOOTSTRAP_COMMAND: &str =
    "sh -c \"$(curl -fsSL https://raw.githubusercontent.com/ohmyzsh/ohmyzsh/master/tools/install.sh)\"";

/// Outcome of the framework bootstrap step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameworkStatus {
    /// Install directory already present; nothing was run.
    AlreadyInstalled,
    /// The bootstrap installer ran to completion.
    Installed,
    /// Dry-run: the bootstrap would have run.
    WouldInstall,
}

/// Install oh-my-zsh into the layout's directory if it is absent.
pub fn ensure_installed(layout: &ZshrcLayout, dry_run: bool) -> Result<FrameworkStatus> {
    let dir = layout.oh_my_zsh();
    if dir.is_dir() {
        tracing::debug!(dir = %dir.display(), "oh-my-zsh already installed");
        return Ok(FrameworkStatus::AlreadyInstalled);
    }

    if dry_run {
        return Ok(FrameworkStatus::WouldInstall);
    }

    run_shell(
        "oh-my-zsh bootstrap",
        BOOTSTRAP_COMMAND,
        &[("RUNZSH", "no"), ("CHSH", "no"), ("KEEP_ZSHRC", "yes")],
    )?;
    Ok(FrameworkStatus::Installed)
}
