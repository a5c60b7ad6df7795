//! The provisioning sequence
//!
//! Best-effort contract: optional steps downgrade their failures to
//! warnings so one broken tool never blocks the rest; core prerequisite
//! installation and the zshrc rewrite are fail-fast.

use colored::Colorize;

use dotzsh_fs::ZshrcLayout;
use dotzsh_install::{
    FrameworkStatus, PackageManager, PluginStatus, ToolStatus, ensure_installed, install_plugin,
    npm_global_install, uv_tool_install,
};
use dotzsh_rc::{RewriteOptions, restore, rewrite};

use crate::config::ProvisionConfig;
use crate::error::Result;

/// Options for a provisioning run.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProvisionOptions {
    pub dry_run: bool,
    pub restore_zshrc: bool,
}

fn warn(message: impl AsRef<str>) {
    eprintln!("{}: {}", "warning".yellow().bold(), message.as_ref());
}

/// Run the full provisioning sequence against the real home directory.
pub fn run_provision(options: ProvisionOptions) -> Result<()> {
    let layout = ZshrcLayout::from_home_dir()?;
    let config = ProvisionConfig::load()?;
    run_provision_with(&layout, &config, options)
}

/// Provisioning against an explicit layout and config (used by tests).
pub fn run_provision_with(
    layout: &ZshrcLayout,
    config: &ProvisionConfig,
    options: ProvisionOptions,
) -> Result<()> {
    let dry_run = options.dry_run;

    // Restore runs before anything else: later steps assume a file worth
    // editing.
    if options.restore_zshrc {
        let report = restore(layout, dry_run)?;
        for action in &report.actions {
            println!("  {action}");
        }
    }

    // Core prerequisites: fatal on failure. No supported manager is only a
    // warning; the run continues assuming dependencies are satisfied.
    match PackageManager::detect() {
        Some(pm) => {
            println!("Installing prerequisites with {pm}...");
            let packages: Vec<&str> = config.prerequisites.iter().map(String::as_str).collect();
            let action = pm.install(&packages, dry_run)?;
            println!("  {action}");
        }
        None => warn(
            "no supported package manager found (apt-get/dnf/pacman/brew); \
             assuming prerequisites are already installed",
        ),
    }

    // Framework bootstrap: best effort, later steps are independent of it.
    match ensure_installed(layout, dry_run) {
        Ok(FrameworkStatus::AlreadyInstalled) => {
            println!("oh-my-zsh already installed.");
        }
        Ok(FrameworkStatus::Installed) => println!("Installed oh-my-zsh."),
        Ok(FrameworkStatus::WouldInstall) => {
            println!("  [dry-run] Would install oh-my-zsh");
        }
        Err(e) => warn(format!("oh-my-zsh bootstrap failed: {e}")),
    }

    // Plugins: per-plugin failures are warnings.
    for plugin in config.plugin_list() {
        match install_plugin(layout, &plugin, dry_run) {
            Ok(PluginStatus::Cloned) => println!("Cloned plugin {}.", plugin.name),
            Ok(PluginStatus::AlreadyPresent) => {
                println!("Plugin {} already present.", plugin.name);
            }
            Ok(PluginStatus::WouldClone) => {
                println!("  [dry-run] Would clone {} from {}", plugin.name, plugin.url);
            }
            Err(e) => warn(format!("could not install plugin {}: {e}", plugin.name)),
        }
    }

    // uv-managed tool: warning on failure.
    if let Some(tool) = &config.uv_tool {
        match uv_tool_install(tool, &config.python_pin, dry_run) {
            Ok(ToolStatus::Installed(Some(path))) => {
                println!("Installed {tool} ({}).", path.display());
            }
            Ok(ToolStatus::Installed(None)) => println!("Installed {tool}."),
            Ok(ToolStatus::WouldRun(cmd)) => println!("  [dry-run] Would run: {cmd}"),
            Ok(ToolStatus::ManagerMissing(manager)) => {
                println!("Skipping {tool}: {manager} not found.");
            }
            Err(e) => warn(format!("could not install {tool}: {e}")),
        }
    }

    // npm package: absent npm is a skip, failure a warning.
    if let Some(package) = &config.npm_package {
        match npm_global_install(package, dry_run) {
            Ok(ToolStatus::Installed(_)) => println!("Installed {package}."),
            Ok(ToolStatus::WouldRun(cmd)) => println!("  [dry-run] Would run: {cmd}"),
            Ok(ToolStatus::ManagerMissing(manager)) => {
                println!("Skipping {package}: {manager} not found.");
            }
            Err(e) => warn(format!("could not install {package}: {e}")),
        }
    }

    // The rewrite is all-or-nothing: any error here aborts the run.
    println!("Rewriting {}...", layout.zshrc().display());
    let report = rewrite(layout, &config.block_inputs(), &RewriteOptions { dry_run })?;
    for action in &report.actions {
        println!("  {action}");
    }
    if let Some(diff) = &report.diff
        && !diff.is_empty()
    {
        println!("\n{diff}");
    }

    if dry_run {
        println!("\n{} dry run complete, nothing was changed.", "done".green().bold());
    } else {
        println!("\n{} zsh environment provisioned.", "done".green().bold());
    }
    Ok(())
}
