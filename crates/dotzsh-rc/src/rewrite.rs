//! Full rewrite orchestration
//!
//! Drives the zshrc through ensure-exists, one-time backup, legacy cleanup,
//! old-block removal, and fresh-block insertion. All destructive edits
//! happen on the in-memory line sequence; the real file is only replaced by
//! a single atomic write at the end, so any failure mid-run leaves the
//! original untouched.

use std::fs;

use similar::TextDiff;

use dotzsh_fs::{ZshrcLayout, copy_once, read_text, write_text};

use crate::Result;
use crate::block::remove_block;
use crate::insert::insert_block;
use crate::legacy::cleanup_legacy;
use crate::render::{BlockInputs, render_block};

/// Options for a rewrite run.
#[derive(Debug, Clone, Default)]
pub struct RewriteOptions {
    /// If true, report every action without modifying the filesystem.
    /// Actions are prefixed with "[dry-run] Would ..."
    pub dry_run: bool,
}

/// Report from a rewrite run.
#[derive(Debug, Clone)]
pub struct RewriteReport {
    /// Actions taken (or, in dry-run, announced).
    pub actions: Vec<String>,
    /// Unified diff of the change, populated in dry-run mode.
    pub diff: Option<String>,
}

fn action(dry_run: bool, would: String, did: String) -> String {
    if dry_run {
        format!("[dry-run] Would {would}")
    } else {
        did
    }
}

/// Rewrite the zshrc so it contains exactly one up-to-date managed block.
///
/// User-authored content outside the block survives byte-for-byte; legacy
/// fragments and any previous block are deleted; the fresh block lands
/// after the anchor line when one exists, at end of file otherwise.
pub fn rewrite(
    layout: &ZshrcLayout,
    inputs: &BlockInputs,
    options: &RewriteOptions,
) -> Result<RewriteReport> {
    let zshrc = layout.zshrc();
    let mut actions = Vec::new();

    // ENSURE_FILE_EXISTS
    let original = if zshrc.exists() {
        read_text(&zshrc)?
    } else {
        let template = layout.zshrc_template();
        let (content, source) = match fs::read_to_string(&template) {
            Ok(content) => (content, format!("from {}", template.display())),
            Err(_) => (String::new(), "empty".to_string()),
        };
        actions.push(action(
            options.dry_run,
            format!("create {} ({})", zshrc.display(), source),
            format!("Created {} ({})", zshrc.display(), source),
        ));
        if !options.dry_run {
            write_text(&zshrc, &content)?;
        }
        content
    };

    // BACKED_UP - one-time only, never refreshed
    let backup = layout.backup();
    if !backup.exists() {
        if options.dry_run {
            actions.push(format!(
                "[dry-run] Would back up {} to {}",
                zshrc.display(),
                backup.display()
            ));
        } else if copy_once(&zshrc, &backup)? {
            actions.push(format!(
                "Backed up {} to {}",
                zshrc.display(),
                backup.display()
            ));
        }
    }

    let mut lines: Vec<String> = original.lines().map(String::from).collect();

    // LEGACY_CLEANED
    let (cleaned, removed_headers) = cleanup_legacy(lines);
    lines = cleaned;
    for header in removed_headers {
        actions.push(action(
            options.dry_run,
            format!("remove legacy fragment \"{header}\""),
            format!("Removed legacy fragment \"{header}\""),
        ));
    }

    // OLD_BLOCK_REMOVED
    let (without_block, removed) = remove_block(lines);
    lines = without_block;
    if removed {
        actions.push(action(
            options.dry_run,
            "remove previous managed block".to_string(),
            "Removed previous managed block".to_string(),
        ));
    }

    // NEW_BLOCK_INSERTED
    let block = render_block(inputs);
    let (with_block, anchor) = insert_block(lines, &block);
    lines = with_block;
    match anchor {
        Some(idx) => actions.push(action(
            options.dry_run,
            format!("insert managed block after anchor line {}", idx + 1),
            format!("Inserted managed block after anchor line {}", idx + 1),
        )),
        None => actions.push(action(
            options.dry_run,
            "append managed block at end of file".to_string(),
            "Appended managed block at end of file".to_string(),
        )),
    }

    let new_content = format!("{}\n", lines.join("\n"));

    if options.dry_run {
        let diff = TextDiff::from_lines(&original, &new_content)
            .unified_diff()
            .header("current", "rewritten")
            .to_string();
        actions.push(format!("[dry-run] Would write {}", zshrc.display()));
        return Ok(RewriteReport {
            actions,
            diff: Some(diff),
        });
    }

    write_text(&zshrc, &new_content)?;
    actions.push(format!("Wrote {}", zshrc.display()));
    tracing::debug!(path = %zshrc.display(), "rewrite complete");

    Ok(RewriteReport {
        actions,
        diff: None,
    })
}
