//! Plugin repository cloning
//!
//! Each plugin is cloned by name and URL into the oh-my-zsh custom plugins
//! directory, once. An existing plugin directory is left untouched, never
//! updated in place.

use std::fs;

use git2::Repository;

use dotzsh_fs::ZshrcLayout;

use crate::error::Result;

/// A plugin to clone into the custom plugins directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plugin {
    pub name: String,
    pub url: String,
}

impl Plugin {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// The fixed plugin set installed by default.
pub fn default_plugins() -> Vec<Plugin> {
    vec![
        Plugin::new(
            "zsh-autosuggestions",
            "https://github.com/zsh-users/zsh-autosuggestions.git",
        ),
        Plugin::new(
            "zsh-syntax-highlighting",
            "https://github.com/zsh-users/zsh-syntax-highlighting.git",
        ),
        Plugin::new(
            "zsh-completions",
            "https://github.com/zsh-users/zsh-completions.git",
        ),
    ]
}

/// Outcome of a single plugin install.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluginStatus {
    /// Freshly cloned.
    Cloned,
    /// Directory already present; left untouched.
    AlreadyPresent,
    /// Dry-run: the clone would have happened.
    WouldClone,
}

/// Clone a plugin into the layout's custom plugins directory if absent.
pub fn install_plugin(layout: &ZshrcLayout, plugin: &Plugin, dry_run: bool) -> Result<PluginStatus> {
    let dir = layout.plugin_dir(&plugin.name);
    if dir.is_dir() {
        tracing::debug!(plugin = plugin.name, "plugin directory exists, skipping clone");
        return Ok(PluginStatus::AlreadyPresent);
    }

    if dry_run {
        return Ok(PluginStatus::WouldClone);
    }

    fs::create_dir_all(layout.custom_plugins())?;
    Repository::clone(&plugin.url, &dir)?;
    Ok(PluginStatus::Cloned)
}
