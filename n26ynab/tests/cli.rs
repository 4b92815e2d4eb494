//! Тесты CLI `n26ynab`: запуск бинарника на временных файлах.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

const INPUT: &str = "\
Date,Payee,Account number,Transaction type,Payment reference,Category,Amount (EUR),Amount (Foreign Currency),Type Foreign Currency,Exchange Rate
2021-03-05,Jane Doe,DE00..,Transfer,Rent,Housing,-500.00,,,
2021-03-07,Diner,,MasterCard Payment,Lunch,Food,-85.00,100,USD,0.85
";

#[allow(deprecated)]
fn n26ynab() -> Command {
    Command::cargo_bin("n26ynab").unwrap()
}

fn write_input(dir: &Path) -> std::path::PathBuf {
    let input = dir.join("statement.csv");
    fs::write(&input, INPUT).unwrap();
    input
}

#[test]
fn converts_to_default_output() {
    let dir = tempdir().unwrap();
    let input = write_input(dir.path());

    n26ynab()
        .args(["--input", input.to_str().unwrap()])
        .assert()
        .success()
        .stderr(predicate::str::contains("started conversion"))
        .stderr(predicate::str::contains("finished conversion"));

    let content = fs::read_to_string(dir.path().join("statement_YNAB.csv")).unwrap();
    let lines: Vec<_> = content.lines().collect();
    assert_eq!(lines[0], "Date,Payee,Memo,Amount");
    assert_eq!(lines[1], "2021-03-05,Jane Doe,Transfer - Rent,-500.00");
    assert!(lines[2].ends_with("| FX: 100USD @ 0.85,-85.00"), "{}", lines[2]);
}

#[test]
fn explicit_output_and_category_memo() {
    let dir = tempdir().unwrap();
    let input = write_input(dir.path());
    let output = dir.path().join("ynab.csv");

    n26ynab()
        .args([
            "-i",
            input.to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
            "--memo-field",
            "category",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&output).unwrap();
    assert!(content.contains("Transfer - Housing"));
    assert!(!dir.path().join("statement_YNAB.csv").exists());
}

#[test]
fn custom_suffix() {
    let dir = tempdir().unwrap();
    let input = write_input(dir.path());

    n26ynab()
        .args(["-i", input.to_str().unwrap(), "--suffix", "budget"])
        .assert()
        .success();

    assert!(dir.path().join("statement_budget.csv").exists());
}

#[test]
fn missing_input_argument() {
    n26ynab()
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("--input"));
}

#[test]
fn input_file_not_found() {
    let dir = tempdir().unwrap();

    n26ynab()
        .args(["-i", dir.path().join("missing.csv").to_str().unwrap()])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("input file not found"));
}

#[test]
fn unparsable_input() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("broken.csv");
    fs::write(&input, format!("{INPUT}2021-03-08,Bakery,,Card,,,abc,,,\n")).unwrap();

    n26ynab()
        .args(["-i", input.to_str().unwrap()])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("record 3: invalid amount"));

    assert!(!dir.path().join("broken_YNAB.csv").exists());
}
