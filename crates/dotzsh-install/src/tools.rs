//! Auxiliary command-line tool installation
//!
//! `uv`-managed tools are pinned to an interpreter version and
//! force-reinstalled so repeated runs converge on the requested state.
//! npm-managed tools are best effort: a missing npm is a skip, not a
//! failure.

use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::exec::{check_binary_on_path, run_shell};

/// Outcome of a tool install step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolStatus {
    /// Tool installed; the resolved binary path when it could be found.
    Installed(Option<PathBuf>),
    /// The package manager for this tool is absent; step skipped.
    ManagerMissing(String),
    /// Dry-run: the command that would have run.
    WouldRun(String),
}

/// Install a tool via `uv tool install`, pinned to `python` and
/// force-reinstalling. Requires `uv` on PATH. The tool's binary path is
/// resolved after the install.
pub fn uv_tool_install(tool: &str, python: &str, dry_run: bool) -> Result<ToolStatus> {
    let uv = check_binary_on_path("uv")?;
    let command = format!(
        "{} tool install {tool} --python {python} --force",
        uv.display()
    );

    if dry_run {
        return Ok(ToolStatus::WouldRun(command));
    }

    run_shell(tool, &command, &[])?;
    let binary = check_binary_on_path(tool).ok();
    if binary.is_none() {
        tracing::warn!(tool, "installed but binary not found on PATH");
    }
    Ok(ToolStatus::Installed(binary))
}

/// Install a global npm package. Absence of npm is reported as a skip.
pub fn npm_global_install(package: &str, dry_run: bool) -> Result<ToolStatus> {
    let npm = match check_binary_on_path("npm") {
        Ok(path) => path,
        Err(Error::BinaryNotFound { .. }) => {
            return Ok(ToolStatus::ManagerMissing("npm".to_string()));
        }
        Err(e) => return Err(e),
    };

    let command = format!("{} install -g {package}", npm.display());
    if dry_run {
        return Ok(ToolStatus::WouldRun(command));
    }

    run_shell(package, &command, &[])?;
    Ok(ToolStatus::Installed(None))
}
