//! Shell command execution and PATH probing

use std::path::PathBuf;
use std::process::Command;

use crate::error::{Error, Result};

/// Build a [`Command`] that executes `cmd_str` via `sh -c`.
pub(crate) fn shell_command(cmd_str: &str) -> Command {
    let mut c = Command::new("sh");
    c.arg("-c").arg(cmd_str);
    c
}

/// Run `cmd_str` via the system shell with extra environment variables.
///
/// Stdout and stderr are inherited so package-manager and installer output
/// streams live to the terminal. A non-zero exit code returns
/// [`Error::InstallFailed`].
pub(crate) fn run_shell(name: &str, cmd_str: &str, envs: &[(&str, &str)]) -> Result<()> {
    tracing::debug!(name, command = cmd_str, "running shell command");
    let mut cmd = shell_command(cmd_str);
    for (key, value) in envs {
        cmd.env(key, value);
    }
    cmd.stdin(std::process::Stdio::inherit())
        .stdout(std::process::Stdio::inherit())
        .stderr(std::process::Stdio::inherit());

    let status = cmd.status().map_err(|_e| Error::InstallFailed {
        name: name.to_string(),
        command: cmd_str.to_string(),
        exit_code: None,
    })?;

    if !status.success() {
        return Err(Error::InstallFailed {
            name: name.to_string(),
            command: cmd_str.to_string(),
            exit_code: status.code(),
        });
    }

    Ok(())
}

/// Verify a binary is on PATH. Returns the resolved path or [`Error::BinaryNotFound`].
pub fn check_binary_on_path(tool: &str) -> Result<PathBuf> {
    let path_var = std::env::var_os("PATH").unwrap_or_default();
    std::env::split_paths(&path_var)
        .map(|dir| dir.join(tool))
        .find(|candidate| candidate.is_file())
        .ok_or_else(|| Error::BinaryNotFound {
            tool: tool.to_string(),
            hint: install_hint(tool).map(str::to_string),
        })
}

fn install_hint(tool: &str) -> Option<&'static str> {
    match tool {
        "uv" => Some("\n  Install: curl -LsSf https://astral.sh/uv/install.sh | sh"),
        "npm" => Some("\n  Install: https://nodejs.org"),
        "git" => Some("\n  Install it with your system package manager"),
        _ => None,
    }
}
