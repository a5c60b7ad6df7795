//! Fixed filesystem layout for the provisioned shell environment.
//!
//! Every path the tool touches hangs off the user's home directory. The
//! layout is constructed once and threaded explicitly into operations so
//! tests can point it at a scratch directory instead of the real home.

use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Resolved paths for the zshrc, its backup, and the oh-my-zsh tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZshrcLayout {
    home: PathBuf,
}

impl ZshrcLayout {
    /// Build the layout from the current user's home directory.
    pub fn from_home_dir() -> Result<Self> {
        let home = dirs::home_dir().ok_or(Error::HomeNotFound)?;
        Ok(Self::new(home))
    }

    /// Build the layout rooted at an explicit directory.
    pub fn new(home: impl Into<PathBuf>) -> Self {
        Self { home: home.into() }
    }

    /// The root the layout was built from.
    pub fn home(&self) -> &Path {
        &self.home
    }

    /// `~/.zshrc` - the managed config file.
    pub fn zshrc(&self) -> PathBuf {
        self.home.join(".zshrc")
    }

    /// `~/.zshrc.pre-ohmyzsh-backup` - the one-time pristine backup.
    pub fn backup(&self) -> PathBuf {
        self.home.join(".zshrc.pre-ohmyzsh-backup")
    }

    /// `~/.oh-my-zsh` - the framework install directory.
    pub fn oh_my_zsh(&self) -> PathBuf {
        self.home.join(".oh-my-zsh")
    }

    /// The framework-provided zshrc template, if the framework is installed.
    pub fn zshrc_template(&self) -> PathBuf {
        self.oh_my_zsh().join("templates").join("zshrc.zsh-template")
    }

    /// `~/.oh-my-zsh/custom/plugins` - one subdirectory per installed plugin.
    pub fn custom_plugins(&self) -> PathBuf {
        self.oh_my_zsh().join("custom").join("plugins")
    }

    /// Directory for a single named plugin.
    pub fn plugin_dir(&self, name: &str) -> PathBuf {
        self.custom_plugins().join(name)
    }
}
