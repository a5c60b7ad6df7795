//! End-to-end provisioning flows against a scratch home directory

use std::fs;

use pretty_assertions::assert_eq;
use tempfile::TempDir;

use dotzsh_fs::ZshrcLayout;
use dotzsh_install::{FrameworkStatus, Plugin, PluginStatus, ensure_installed, install_plugin};
use dotzsh_rc::{
    BLOCK_END, BLOCK_START, BlockInputs, RestoreOutcome, RewriteOptions, restore, rewrite,
};

fn apply() -> RewriteOptions {
    RewriteOptions { dry_run: false }
}

#[test]
fn restore_then_rewrite_converges_from_a_broken_file() {
    let temp = TempDir::new().unwrap();
    let layout = ZshrcLayout::new(temp.path());

    // Broken: non-empty but never sources the framework
    fs::write(layout.zshrc(), "PROMPT='%n>'\n").unwrap();
    fs::create_dir_all(layout.zshrc_template().parent().unwrap()).unwrap();
    fs::write(layout.zshrc_template(), "source $ZSH/oh-my-zsh.sh\n").unwrap();

    let report = restore(&layout, false).unwrap();
    assert_eq!(report.outcome, RestoreOutcome::FromTemplate);

    rewrite(&layout, &BlockInputs::default(), &apply()).unwrap();
    let content = fs::read_to_string(layout.zshrc()).unwrap();
    let lines: Vec<&str> = content.lines().collect();

    assert_eq!(lines[0], "source $ZSH/oh-my-zsh.sh");
    assert_eq!(lines[2], BLOCK_START);
    assert_eq!(lines.last(), Some(&BLOCK_END));
}

#[test]
fn repeated_full_runs_never_change_the_file_again() {
    let temp = TempDir::new().unwrap();
    let layout = ZshrcLayout::new(temp.path());
    fs::write(
        layout.zshrc(),
        "export ZSH=~/.oh-my-zsh\nsource $ZSH/oh-my-zsh.sh\n\
         # dotzsh: thefuck alias\neval \"$(thefuck --alias)\"\nalias ll='ls -l'\n",
    )
    .unwrap();
    let inputs = BlockInputs::default();

    rewrite(&layout, &inputs, &apply()).unwrap();
    let first = fs::read_to_string(layout.zshrc()).unwrap();
    let first_backup = fs::read_to_string(layout.backup()).unwrap();

    for _ in 0..3 {
        rewrite(&layout, &inputs, &apply()).unwrap();
    }

    assert_eq!(fs::read_to_string(layout.zshrc()).unwrap(), first);
    assert_eq!(fs::read_to_string(layout.backup()).unwrap(), first_backup);
    assert!(first_backup.contains("# dotzsh: thefuck alias"));
}

#[test]
fn framework_and_plugin_steps_are_idempotent_without_network() {
    let temp = TempDir::new().unwrap();
    let layout = ZshrcLayout::new(temp.path());

    // Pre-provisioned framework and plugin directories
    fs::create_dir_all(layout.oh_my_zsh()).unwrap();
    let plugin = Plugin::new("zsh-autosuggestions", "https://invalid.example/repo.git");
    fs::create_dir_all(layout.plugin_dir(&plugin.name)).unwrap();

    assert_eq!(
        ensure_installed(&layout, false).unwrap(),
        FrameworkStatus::AlreadyInstalled
    );
    assert_eq!(
        install_plugin(&layout, &plugin, false).unwrap(),
        PluginStatus::AlreadyPresent
    );
}

#[test]
fn dry_run_full_sequence_reports_but_mutates_nothing() {
    let temp = TempDir::new().unwrap();
    let layout = ZshrcLayout::new(temp.path());
    let original = "# user file without anchor\nalias ll='ls -l'\n";
    fs::write(layout.zshrc(), original).unwrap();

    let restore_report = restore(&layout, true).unwrap();
    let rewrite_report = rewrite(
        &layout,
        &BlockInputs::default(),
        &RewriteOptions { dry_run: true },
    )
    .unwrap();

    assert_eq!(fs::read_to_string(layout.zshrc()).unwrap(), original);
    assert!(!layout.backup().exists());
    // Broken (anchor-less) file with no backup and no template: restore
    // would create an empty file
    assert_eq!(restore_report.outcome, RestoreOutcome::CreatedEmpty);
    assert!(
        rewrite_report
            .actions
            .iter()
            .any(|a| a.contains("append managed block"))
    );
}
