//! Flag-gated restore of a broken or missing zshrc
//!
//! Runs before any installation step so the later rewrite has a file worth
//! editing. A healthy file is never touched.

use std::fs;

use dotzsh_fs::{ZshrcLayout, write_text};

use crate::Result;
use crate::health::is_broken_or_missing;

/// The single action a restore run took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestoreOutcome {
    /// File was healthy; nothing was done.
    Healthy,
    /// Restored from the one-time backup.
    FromBackup,
    /// Restored from the framework-provided template.
    FromTemplate,
    /// Neither source existed; created an empty file.
    CreatedEmpty,
}

/// Report of a restore run.
#[derive(Debug, Clone)]
pub struct RestoreReport {
    pub outcome: RestoreOutcome,
    pub actions: Vec<String>,
}

/// Restore the zshrc if the health check judges it broken or missing.
///
/// Source precedence: non-empty backup, then framework template, then an
/// empty file. Exactly one of the three is used. In dry-run mode the chosen
/// action is reported and nothing is written.
pub fn restore(layout: &ZshrcLayout, dry_run: bool) -> Result<RestoreReport> {
    let zshrc = layout.zshrc();

    if !is_broken_or_missing(&zshrc) {
        return Ok(RestoreReport {
            outcome: RestoreOutcome::Healthy,
            actions: vec![format!("{} is healthy, nothing to restore", zshrc.display())],
        });
    }

    let backup = layout.backup();
    let backup_content = fs::read_to_string(&backup).ok().filter(|c| !c.is_empty());

    if let Some(content) = backup_content {
        if dry_run {
            return Ok(RestoreReport {
                outcome: RestoreOutcome::FromBackup,
                actions: vec![format!(
                    "[dry-run] Would restore {} from {}",
                    zshrc.display(),
                    backup.display()
                )],
            });
        }
        write_text(&zshrc, &content)?;
        return Ok(RestoreReport {
            outcome: RestoreOutcome::FromBackup,
            actions: vec![format!(
                "Restored {} from {}",
                zshrc.display(),
                backup.display()
            )],
        });
    }

    let template = layout.zshrc_template();
    if let Ok(content) = fs::read_to_string(&template) {
        if dry_run {
            return Ok(RestoreReport {
                outcome: RestoreOutcome::FromTemplate,
                actions: vec![format!(
                    "[dry-run] Would restore {} from {}",
                    zshrc.display(),
                    template.display()
                )],
            });
        }
        write_text(&zshrc, &content)?;
        return Ok(RestoreReport {
            outcome: RestoreOutcome::FromTemplate,
            actions: vec![format!(
                "Restored {} from {}",
                zshrc.display(),
                template.display()
            )],
        });
    }

    if dry_run {
        return Ok(RestoreReport {
            outcome: RestoreOutcome::CreatedEmpty,
            actions: vec![format!("[dry-run] Would create empty {}", zshrc.display())],
        });
    }
    write_text(&zshrc, "")?;
    Ok(RestoreReport {
        outcome: RestoreOutcome::CreatedEmpty,
        actions: vec![format!("Created empty {}", zshrc.display())],
    })
}
