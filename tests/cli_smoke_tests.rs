use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn report_flag_prints_profitability_without_prompting() {
    let temp = tempdir().expect("temp dir");
    Command::cargo_bin("dapur_core_cli")
        .expect("binary exists")
        .env("DAPUR_CORE_HOME", temp.path())
        .arg("--report")
        .assert()
        .success()
        .stdout(predicate::str::contains("Profitability"))
        .stdout(predicate::str::contains("Profit"));
}
