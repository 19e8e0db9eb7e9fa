//! CLI smoke tests

use assert_cmd::Command;
use std::fs;
use tempfile::TempDir;

fn dntr() -> Command {
    let mut command = Command::cargo_bin("dntr").unwrap();
    command.env_remove("DOTNET_ROOT");
    command
}

#[test]
fn no_arguments_prints_usage_error() {
    dntr()
        .assert()
        .failure()
        .stderr(predicates::str::contains("Usage"));
}

#[test]
fn invalid_dotnet_home_aborts_before_any_test() {
    let tests = TempDir::new().unwrap();
    let not_a_home = TempDir::new().unwrap();

    dntr()
        .arg(tests.path())
        .arg(not_a_home.path())
        .assert()
        .failure()
        .stderr(predicates::str::contains(
            "does not look like a .NET Core home directory",
        ));
}

#[test]
fn missing_test_root_aborts() {
    let home = TempDir::new().unwrap();
    fs::write(home.path().join("dotnet"), "").unwrap();

    dntr()
        .arg(home.path().join("no-such-tests"))
        .arg(home.path())
        .assert()
        .failure()
        .stderr(predicates::str::contains("bad file search root"));
}
