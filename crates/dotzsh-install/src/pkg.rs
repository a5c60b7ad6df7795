//! OS package manager detection and invocation
//!
//! Detection is first-found on PATH. Absence of any supported manager is
//! not an error at this layer; the caller decides whether to warn and
//! continue (assuming dependencies are already satisfied).

use crate::error::Result;
use crate::exec::{check_binary_on_path, run_shell};

/// A supported system package manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManager {
    Apt,
    Dnf,
    Pacman,
    Brew,
}

impl PackageManager {
    /// Detect the first supported manager present on PATH.
    pub fn detect() -> Option<Self> {
        [Self::Apt, Self::Dnf, Self::Pacman, Self::Brew]
            .into_iter()
            .find(|pm| check_binary_on_path(pm.binary()).is_ok())
    }

    /// The binary probed for on PATH.
    pub fn binary(&self) -> &'static str {
        match self {
            Self::Apt => "apt-get",
            Self::Dnf => "dnf",
            Self::Pacman => "pacman",
            Self::Brew => "brew",
        }
    }

    /// Non-interactive install command for the given packages.
    pub fn install_command(&self, packages: &[&str]) -> String {
        let list = packages.join(" ");
        match self {
            Self::Apt => format!("sudo apt-get install -y {list}"),
            Self::Dnf => format!("sudo dnf install -y {list}"),
            Self::Pacman => format!("sudo pacman -S --noconfirm --needed {list}"),
            Self::Brew => format!("brew install {list}"),
        }
    }

    /// Install the given packages. In dry-run mode the command is reported,
    /// not executed.
    pub fn install(&self, packages: &[&str], dry_run: bool) -> Result<String> {
        let command = self.install_command(packages);
        if dry_run {
            return Ok(format!("[dry-run] Would run: {command}"));
        }
        run_shell(&format!("{} install", self.binary()), &command, &[])?;
        Ok(format!("Installed: {}", packages.join(" ")))
    }
}

impl std::fmt::Display for PackageManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.binary())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn install_commands_are_noninteractive() {
        assert_eq!(
            PackageManager::Apt.install_command(&["zsh", "git"]),
            "sudo apt-get install -y zsh git"
        );
        assert_eq!(
            PackageManager::Dnf.install_command(&["zsh"]),
            "sudo dnf install -y zsh"
        );
        assert_eq!(
            PackageManager::Pacman.install_command(&["zsh"]),
            "sudo pacman -S --noconfirm --needed zsh"
        );
        assert_eq!(
            PackageManager::Brew.install_command(&["zsh"]),
            "brew install zsh"
        );
    }

    #[test]
    fn dry_run_reports_instead_of_executing() {
        let action = PackageManager::Apt.install(&["zsh"], true).unwrap();
        assert_eq!(action, "[dry-run] Would run: sudo apt-get install -y zsh");
    }
}
