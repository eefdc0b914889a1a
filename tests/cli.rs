use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;

fn passbook(data_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("passbook").unwrap();
    cmd.arg("--data-dir").arg(data_dir);
    cmd
}

fn write_statement(dir: &Path, rows: &[&str]) -> PathBuf {
    let path = dir.join("stmt.csv");
    let mut content = String::from(
        "Description,,Summary Amt.\n\
         Beginning balance as of 04/01/2024,,\"10,541.95\"\n\
         Total credits,,\"28,789.38\"\n\
         Total debits,,\"-31,711.25\"\n\
         Ending balance as of 09/01/2025,,\"7,620.08\"\n\
         \n\
         Date,Description,Amount,Running Bal.\n",
    );
    for row in rows {
        content.push_str(row);
        content.push('\n');
    }
    std::fs::write(&path, &content).unwrap();
    path
}

#[test]
fn test_import_then_report() {
    let dir = tempfile::tempdir().unwrap();
    let data_dir = dir.path().join("data");
    let stmt = write_statement(
        dir.path(),
        &[
            "04/01/2024,Beginning balance as of 04/01/2024,,\"10,541.95\"",
            "05/10/2024,\"CREDIT CARD Bill Payment\",\"-25.49\",\"10,516.46\"",
            "05/24/2024,\"Client deposit\",\"100.00\",\"10,616.46\"",
            "06/01/2024,\"Utility payment\",\"-50.00\",\"10,566.46\"",
        ],
    );

    passbook(&data_dir)
        .arg("import")
        .arg(&stmt)
        .args(["Bank of America", "1234567890", "--account-name", "Checking"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Transactions imported: 3"));

    passbook(&data_dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("2024-05")
                .and(predicate::str::contains("$100.00"))
                .and(predicate::str::contains("$25.49"))
                .and(predicate::str::contains("$74.51")),
        );

    passbook(&data_dir)
        .args(["list", "--limit", "2"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Utility payment")
                .and(predicate::str::contains("CREDIT CARD Bill Payment").not()),
        );

    passbook(&data_dir)
        .arg("balance")
        .assert()
        .success()
        .stdout(predicate::str::contains("$10,566.46").and(predicate::str::contains("Checking")));

    passbook(&data_dir)
        .arg("accounts")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Bank of America")
                .and(predicate::str::contains("1234567890"))
                .and(predicate::str::contains("$10,566.46")),
        );
}

#[test]
fn test_import_reports_row_errors_bounded() {
    let dir = tempfile::tempdir().unwrap();
    let data_dir = dir.path().join("data");
    let stmt = write_statement(
        dir.path(),
        &[
            "05/10/2024,\"Valid Transaction\",\"-25.49\",\"10,516.46\"",
            "invalid-date,\"Broken Date\",\"100.00\",\"10,616.46\"",
        ],
    );

    passbook(&data_dir)
        .arg("import")
        .arg(&stmt)
        .args(["Test Bank", "1234567890"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Transactions imported: 1")
                .and(predicate::str::contains("Row errors: 1"))
                .and(predicate::str::contains("Row 8"))
                .and(predicate::str::contains("invalid-date")),
        );
}

#[test]
fn test_import_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let data_dir = dir.path().join("data");

    passbook(&data_dir)
        .args(["import", "does-not-exist.csv", "Test Bank", "1234567890"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_reports_on_empty_ledger() {
    let dir = tempfile::tempdir().unwrap();
    let data_dir = dir.path().join("data");

    passbook(&data_dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No transactions found."));

    passbook(&data_dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("No monthly data found."));
}
