//! External collaborators for dotzsh
//!
//! Thin, idempotent wrappers over the OS package manager, the oh-my-zsh
//! bootstrap installer, plugin repositories, and the uv/npm tool
//! installers. Every operation takes an explicit `dry_run` flag and
//! reports instead of executing when it is set.

pub mod error;
pub mod exec;
pub mod framework;
pub mod pkg;
pub mod plugins;
pub mod tools;

pub use error::{Error, Result};
pub use exec::check_binary_on_path;
pub use framework::{FrameworkStatus, ensure_installed};
pub use pkg::PackageManager;
pub use plugins::{Plugin, PluginStatus, default_plugins, install_plugin};
pub use tools::{ToolStatus, npm_global_install, uv_tool_install};
