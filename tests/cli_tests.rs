//! CLI integration tests

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

fn readahead_bin() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_readahead"));
    cmd.env("READAHEAD_LOG_TARGET", "console")
        .env("READAHEAD_LOG", "off");
    cmd
}

#[test]
fn help_output() {
    for flag in ["-h", "--help"] {
        readahead_bin()
            .arg(flag)
            .assert()
            .success()
            .stdout(predicate::str::contains("collect [DIRECTORY]"))
            .stdout(predicate::str::contains("replay [DIRECTORY]"))
            .stdout(predicate::str::contains("analyze [PACK FILE]"))
            .stdout(predicate::str::contains("--files-max=INT"))
            .stdout(predicate::str::contains("--filelist=PATH"));
    }
}

#[test]
fn help_halts_parsing() {
    readahead_bin()
        .args(["--files-max=5", "--help", "foobar", "a", "b"])
        .assert()
        .success()
        .stdout(predicate::str::contains("collect [DIRECTORY]"))
        .stderr(predicate::str::is_empty());
}

#[test]
fn collect_with_limits() {
    readahead_bin()
        .args(["--files-max=100", "--timeout=30", "collect", "/boot"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn collect_without_directory() {
    readahead_bin().arg("collect").assert().success();
}

#[test]
fn replay_and_analyze() {
    readahead_bin().arg("replay").assert().success();
    readahead_bin().args(["replay", "/"]).assert().success();
    readahead_bin().args(["analyze", "pack.bin"]).assert().success();
}

#[test]
fn collect_with_filelist() {
    let mut list = tempfile::NamedTempFile::new().unwrap();
    writeln!(list, "/usr/lib/systemd/systemd").unwrap();
    writeln!(list, "/etc/fstab").unwrap();

    readahead_bin()
        .arg(format!("--filelist={}", list.path().display()))
        .arg("collect")
        .assert()
        .success();
}

#[test]
fn engine_requests_are_logged() {
    readahead_bin()
        .env("READAHEAD_LOG", "info")
        .args(["--files-max=100", "--timeout=30", "collect", "/boot"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Collect requested"))
        .stderr(predicate::str::contains("root=/boot"))
        .stderr(predicate::str::contains("files_max=100"));
}

#[test]
fn log_filter_silences_output() {
    readahead_bin()
        .args(["analyze", "pack.bin"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}
