//! Provisioning configuration
//!
//! Built-in defaults, optionally overridden by `~/.config/dotzsh/config.toml`.
//! A missing file means defaults; a malformed file is a fatal argument-class
//! error raised before any side effect.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use dotzsh_install::Plugin;
use dotzsh_rc::BlockInputs;

use crate::error::{CliError, Result};

/// A plugin entry in the config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginSpec {
    pub name: String,
    pub url: String,
}

/// Everything the provisioning run is parameterized by.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProvisionConfig {
    /// Core packages installed via the system package manager.
    pub prerequisites: Vec<String>,
    /// Plugins cloned into the custom plugins directory.
    pub plugins: Vec<PluginSpec>,
    /// Directories the managed block prepends to PATH.
    pub path_entries: Vec<String>,
    /// Interpreter version the uv-managed tool is pinned to.
    pub python_pin: String,
    /// Tool installed via `uv tool install` and aliased in the block.
    pub uv_tool: Option<String>,
    /// Global npm package to install when npm is available.
    pub npm_package: Option<String>,
}

impl Default for ProvisionConfig {
    fn default() -> Self {
        Self {
            prerequisites: vec!["zsh".to_string(), "git".to_string(), "curl".to_string()],
            plugins: vec![
                PluginSpec {
                    name: "zsh-autosuggestions".to_string(),
                    url: "https://github.com/zsh-users/zsh-autosuggestions.git".to_string(),
                },
                PluginSpec {
                    name: "zsh-syntax-highlighting".to_string(),
                    url: "https://github.com/zsh-users/zsh-syntax-highlighting.git".to_string(),
                },
                PluginSpec {
                    name: "zsh-completions".to_string(),
                    url: "https://github.com/zsh-users/zsh-completions.git".to_string(),
                },
            ],
            path_entries: vec!["$HOME/.local/bin".to_string()],
            python_pin: "3.11".to_string(),
            uv_tool: Some("thefuck".to_string()),
            npm_package: Some("@openai/codex".to_string()),
        }
    }
}

impl ProvisionConfig {
    /// Load the config from the default location, falling back to defaults
    /// when no file exists.
    pub fn load() -> Result<Self> {
        match default_config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load and parse an explicit config file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::ConfigParse {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// The plugins as installer values.
    pub fn plugin_list(&self) -> Vec<Plugin> {
        self.plugins
            .iter()
            .map(|p| Plugin::new(&p.name, &p.url))
            .collect()
    }

    /// The inputs the managed block is rendered from. The plugins line
    /// always starts with `git` (an oh-my-zsh built-in) followed by the
    /// cloned plugins, and the alias hook names the uv-managed tool.
    pub fn block_inputs(&self) -> BlockInputs {
        let mut plugins = vec!["git".to_string()];
        plugins.extend(self.plugins.iter().map(|p| p.name.clone()));
        BlockInputs {
            plugins,
            path_entries: self.path_entries.clone(),
            completion_hook: true,
            alias_tool: self.uv_tool.clone(),
        }
    }
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("dotzsh").join("config.toml"))
}
