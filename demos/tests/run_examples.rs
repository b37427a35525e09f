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

#[test]
fn run_all_examples_with_mock() {
    let examples_dir = Path::new("examples");
    let entries = fs::read_dir(examples_dir).expect("read examples dir");
    let mut found_any = false;
    for entry in entries.flatten().filter(is_numbered_rs) {
        let path = entry.path();
        let name_owned = path
            .file_stem()
            .and_then(OsStr::to_str)
            .expect("example name")
            .to_string();
        found_any = true;
        let mut cmd = Command::new("cargo");
        cmd.arg("run").arg("--example").arg(&name_owned);
        cmd.env("TICKERSCOPE_USE_MOCK", "1");
        cmd.assert()
            .success()
            .stdout(predicate::str::contains("Using Mock Connector"));
    }
    assert!(found_any, "no examples found to run");
}

#[test]
fn dashboard_example_reports_missing_data_for_unknown_symbol() {
    let mut cmd = Command::new("cargo");
    cmd.args(["run", "--example", "03_dashboard"]);
    cmd.env("TICKERSCOPE_USE_MOCK", "1");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Ticker: ZZZZINVALI"))
        .stdout(predicate::str::contains(
            "No price data found for the specified parameters.",
        ))
        .stdout(predicate::str::contains("Today's News: 4 item(s)"));
}
