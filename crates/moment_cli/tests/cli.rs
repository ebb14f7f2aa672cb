use std::fs;
use std::path::Path;

use predicates::prelude::*;
use rust_xlsxwriter::Workbook;
use tempfile::tempdir;

fn moment() -> assert_cmd::Command {
    assert_cmd::Command::new(env!("CARGO_BIN_EXE_moment"))
}

/// Write a manifest with a header row followed by `rows`.
fn write_manifest(path: &Path, rows: &[[&str; 3]]) {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Sheet1").expect("sheet name");
    for (n_col, c_header) in ["File", "Source", "Destination"].iter().enumerate() {
        worksheet
            .write_string(0, n_col as u16, *c_header)
            .expect("write header");
    }
    for (n_row, cells) in rows.iter().enumerate() {
        for (n_col, c_value) in cells.iter().enumerate() {
            worksheet
                .write_string(n_row as u32 + 1, n_col as u16, *c_value)
                .expect("write cell");
        }
    }
    workbook.save(path).expect("save workbook");
}

#[test]
fn help_lists_flags() {
    moment()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--src-file"))
        .stdout(predicate::str::contains("--abs-path"))
        .stdout(predicate::str::contains("--no-header"));
}

#[test]
fn missing_manifest_aborts() {
    let tmp = tempdir().expect("tempdir");
    moment()
        .current_dir(tmp.path())
        .args(["-s", "nope.xlsx"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Manifest file not found"));
}

#[test]
fn directory_manifest_aborts() {
    let tmp = tempdir().expect("tempdir");
    fs::create_dir_all(tmp.path().join("folder.xlsx")).expect("mkdir");
    moment()
        .current_dir(tmp.path())
        .args(["-s", "folder.xlsx"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("folder"));
}

#[test]
fn unsupported_manifest_aborts_before_transfer() {
    let tmp = tempdir().expect("tempdir");
    fs::write(tmp.path().join("files.csv"), "a.txt,in,out\n").expect("write csv");
    moment()
        .current_dir(tmp.path())
        .args(["-s", "files.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Supported formats"));
    assert!(!tmp.path().join("out").exists());
}

#[test]
fn copy_run_reports_success_and_skip() {
    let tmp = tempdir().expect("tempdir");
    fs::create_dir_all(tmp.path().join("in")).expect("mkdir in");
    fs::write(tmp.path().join("in/a.txt"), "alpha").expect("write a");
    write_manifest(
        &tmp.path().join("files.xlsx"),
        &[["a.txt", "in", "out"], ["ghost.txt", "in", "out"]],
    );

    moment()
        .current_dir(tmp.path())
        .args(["-s", "files.xlsx", "-v"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Skipped: 1"))
        .stdout(predicate::str::contains("Succeeded: 1"))
        .stdout(predicate::str::contains("Total: 2"))
        .stdout(predicate::str::contains("Row: 3"));

    assert_eq!(
        fs::read_to_string(tmp.path().join("out/a.txt")).expect("read copy"),
        "alpha"
    );
    assert!(tmp.path().join("in/a.txt").exists());
}

#[test]
fn dry_run_creates_nothing() {
    let tmp = tempdir().expect("tempdir");
    fs::create_dir_all(tmp.path().join("in")).expect("mkdir in");
    fs::write(tmp.path().join("in/a.txt"), "alpha").expect("write a");
    write_manifest(&tmp.path().join("files.xlsx"), &[["a.txt", "in", "out"]]);

    moment()
        .current_dir(tmp.path())
        .args(["-s", "files.xlsx", "--move", "--test"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Succeeded: 1"));

    assert!(!tmp.path().join("out").exists());
    assert!(tmp.path().join("in/a.txt").exists());
}

#[test]
fn move_with_logging_appends_status_log() {
    let tmp = tempdir().expect("tempdir");
    fs::create_dir_all(tmp.path().join("in")).expect("mkdir in");
    fs::write(tmp.path().join("in/a.txt"), "alpha").expect("write a");
    write_manifest(&tmp.path().join("files.xlsx"), &[["a.txt", "in", "out"]]);

    moment()
        .current_dir(tmp.path())
        .env_remove("MOMENT_LOG_FILE")
        .args(["-s", "files.xlsx", "-m", "-l"])
        .assert()
        .success();

    assert!(!tmp.path().join("in/a.txt").exists());
    assert_eq!(
        fs::read_to_string(tmp.path().join("out/a.txt")).expect("read moved"),
        "alpha"
    );

    let txt_log = fs::read_to_string(tmp.path().join("log.txt")).expect("read log");
    assert!(txt_log.contains("Status: Succeeded - Row: 2 - File: "));
    assert!(txt_log.contains("a.txt"));
    assert!(txt_log.contains("\nSkipped: 0\nSucceeded: 1\nTotal: 1\n"));
}

#[test]
fn custom_log_file_accumulates_runs() {
    let tmp = tempdir().expect("tempdir");
    write_manifest(&tmp.path().join("files.xlsx"), &[["ghost.txt", "in", "out"]]);

    for _ in 0..2 {
        moment()
            .current_dir(tmp.path())
            .args(["-s", "files.xlsx", "-l", "--log-file", "run.log"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Skipped: 1"));
    }

    let txt_log = fs::read_to_string(tmp.path().join("run.log")).expect("read log");
    assert_eq!(txt_log.matches("Status: Skipped - Row: 2").count(), 2);
}
