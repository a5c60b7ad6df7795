//! Binary-level flag and exit-code contract

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn dotzsh() -> Command {
    Command::cargo_bin("dotzsh").unwrap()
}

#[test]
fn help_exits_zero_and_lists_flags() {
    dotzsh()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--dry-run"))
        .stdout(predicate::str::contains("--restore-zshrc"));
}

#[test]
fn short_help_exits_zero() {
    dotzsh().arg("-h").assert().success();
}

#[test]
fn version_exits_zero() {
    dotzsh().arg("--version").assert().success();
}

#[test]
fn unknown_flag_exits_one_with_usage() {
    dotzsh()
        .arg("--no-such-flag")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn positional_argument_exits_one() {
    dotzsh().arg("stray").assert().code(1);
}

#[test]
fn dry_run_against_scratch_home_exits_zero_and_writes_nothing() {
    let home = TempDir::new().unwrap();
    let config = TempDir::new().unwrap();

    dotzsh()
        .arg("--dry-run")
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", config.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("dry run complete"));

    assert!(!home.path().join(".zshrc").exists());
    assert!(!home.path().join(".zshrc.pre-ohmyzsh-backup").exists());
}

#[cfg(unix)]
#[test]
fn fatal_prerequisite_failure_propagates_the_command_exit_code() {
    use std::os::unix::fs::PermissionsExt;

    let home = TempDir::new().unwrap();
    let config = TempDir::new().unwrap();
    let bin = TempDir::new().unwrap();

    // A package manager that gets detected, and a sudo that fails with a
    // distinctive code when the install command runs.
    for (name, body) in [
        ("apt-get", "#!/bin/sh\nexit 0\n"),
        ("sudo", "#!/bin/sh\nexit 7\n"),
    ] {
        let path = bin.path().join(name);
        std::fs::write(&path, body).unwrap();
        let mut perms = std::fs::metadata(&path).unwrap().permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(&path, perms).unwrap();
    }
    let path_var = format!(
        "{}:{}",
        bin.path().display(),
        std::env::var("PATH").unwrap_or_default()
    );

    dotzsh()
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", config.path())
        .env("PATH", path_var)
        .assert()
        .code(7)
        .stderr(predicate::str::contains("error"));
}

#[test]
fn dry_run_with_restore_reports_the_restore_step() {
    let home = TempDir::new().unwrap();
    let config = TempDir::new().unwrap();
    std::fs::write(home.path().join(".zshrc"), "source $ZSH/oh-my-zsh.sh\n").unwrap();

    dotzsh()
        .args(["--dry-run", "--restore-zshrc"])
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", config.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("healthy"));
}
