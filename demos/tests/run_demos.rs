use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::ffi::OsStr;
use std::fs;
use std::path::Path;
use std::process::Command;

fn is_numbered_rs(entry: &fs::DirEntry) -> bool {
    let path = entry.path();
    path.is_file()
        && path.extension() == Some(OsStr::new("rs"))
        && path
            .file_name()
            .and_then(OsStr::to_str)
            .is_some_and(|n| n.chars().next().is_some_and(|c| c.is_ascii_digit()))
}

fn demo(name: &str) -> Command {
    let mut cmd = Command::new("cargo");
    cmd.arg("run").arg("--quiet").arg("--example").arg(name);
    cmd.env("FINESTRA_DEMOS_USE_MOCK", "1");
    cmd
}

#[test]
fn run_all_demos_with_mock() {
    let demos_dir = Path::new("examples");
    let entries = fs::read_dir(demos_dir).expect("read demos dir");
    let mut found_any = false;
    for entry in entries.flatten().filter(is_numbered_rs) {
        let path = entry.path();
        let name = path
            .file_stem()
            .and_then(OsStr::to_str)
            .expect("demo name")
            .to_string();
        found_any = true;
        demo(&name).assert().success();
    }
    assert!(found_any, "no demos found to run");
}

#[test]
fn recap_lists_every_fixture() {
    demo("01_matrix_recap")
        .assert()
        .success()
        .stdout(predicate::str::contains("Number of companies: 4"))
        .stdout(predicate::str::contains("List of tickers: AAPL, MSFT, SAP, TSLA"));
}

#[test]
fn bad_window_sizes_fail_cleanly() {
    demo("03_window_summary")
        .args(["ignored", "1", "20,abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("bad window size"));
}

#[test]
fn explicit_data_directory_is_read() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(
        dir.path().join("alpha.csv"),
        "Date,Close\n2024-01-02,1\n2024-01-03,2\n2024-01-04,1\n",
    )
    .expect("write csv");
    let mut cmd = Command::new("cargo");
    cmd.args(["run", "--quiet", "--example", "02_check_ranges", "--"])
        .arg(dir.path());
    cmd.env_remove("FINESTRA_DEMOS_USE_MOCK")
        .env_remove("FINESTRA_DEMO_DATA")
        .assert()
        .success()
        .stdout(predicate::str::contains("ALPHA: 3 rows | 2024-01-02 -> 2024-01-04"));
}
