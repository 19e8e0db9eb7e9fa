//! End-to-end pipeline tests against a scripted fake `dotnet`.
//!
//! The fake home contains a shell script standing in for the real launcher:
//! `new console` scaffolds a `Program.cs`, `build` creates the expected
//! `bin/<configuration>/<framework>/<name>.dll` artifact, and invoking a
//! `.dll` path succeeds only if the artifact exists. This exercises the full
//! match → scaffold → inject → build → run cycle without a .NET install.

#![cfg(unix)]

use dntr_runner::{match_tests, report, Orchestrator};
use dntr_sdk::DotnetHome;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;
use tempfile::TempDir;

const WORKING_TOOLCHAIN: &str = r#"#!/bin/sh
case "$1" in
  new)
    echo "scaffolding console project"
    : > Program.cs
    ;;
  build)
    mkdir -p "bin/$3/$5"
    : > "bin/$3/$5/$(basename "$PWD").dll"
    echo "build succeeded"
    ;;
  --info)
    echo "fake dotnet info"
    ;;
  *.dll)
    test -f "$1" || exit 4
    echo "hello from the test program"
    ;;
  *)
    exit 9
    ;;
esac
exit 0
"#;

fn fake_home(script: &str) -> (TempDir, DotnetHome) {
    let dir = TempDir::new().unwrap();
    let dotnet = dir.path().join("dotnet");
    fs::write(&dotnet, script).unwrap();
    fs::set_permissions(&dotnet, fs::Permissions::from_mode(0o755)).unwrap();
    fs::create_dir_all(dir.path().join("shared/Microsoft.NETCore.App/2.0.3")).unwrap();
    fs::create_dir_all(dir.path().join("sdk/2.1.4")).unwrap();
    let home = DotnetHome::new(dir.path()).unwrap();
    (dir, home)
}

fn write_test_file(dir: &Path, name: &str, header: &str) {
    let source = format!("{header}\nusing System;\nclass T {{ static void Main() {{}} }}\n");
    fs::write(dir.join(name), source).unwrap();
}

#[test]
fn passing_test_compiles_and_runs() {
    let (_home_guard, home) = fake_home(WORKING_TOOLCHAIN);
    let tests = TempDir::new().unwrap();
    write_test_file(tests.path(), "pass.cs", "// <test/>");
    let work_root = TempDir::new().unwrap();

    let outcome = match_tests(&home, tests.path()).unwrap();
    assert_eq!(outcome.tests.len(), 1);

    let mut observed = Vec::new();
    let orchestrator = Orchestrator::new(&home, work_root.path());
    let results = orchestrator
        .execute_all(outcome.tests, |result| {
            observed.push(result.test.source_file.clone())
        })
        .unwrap();

    assert_eq!(results.len(), 1);
    let result = &results[0];
    assert!(result.success);
    assert!(result.compile.success);
    assert!(result.run_output.is_some());
    assert_eq!(observed.len(), 1);

    // The template entry point was replaced by the injected source.
    let work_dir = &result.compile.working_directory;
    assert!(!work_dir.join("Program.cs").exists());
    assert!(work_dir.join("pass.cs").exists());
}

#[test]
fn scaffold_failure_marks_test_failed_without_running() {
    let script = "#!/bin/sh\necho 'no template' >&2\nexit 1\n";
    let (_home_guard, home) = fake_home(script);
    let tests = TempDir::new().unwrap();
    write_test_file(tests.path(), "t.cs", "// <test/>");
    let work_root = TempDir::new().unwrap();

    let outcome = match_tests(&home, tests.path()).unwrap();
    let results = Orchestrator::new(&home, work_root.path())
        .execute_all(outcome.tests, |_| {})
        .unwrap();

    let result = &results[0];
    assert!(!result.success);
    assert!(!result.compile.success);
    assert!(result.run_output.is_none());
    assert!(result.compile.output.contains("no template"));
}

#[test]
fn build_failure_marks_test_failed_without_running() {
    let script = r#"#!/bin/sh
case "$1" in
  new) : > Program.cs ;;
  build) echo "error CS0000" >&2; exit 1 ;;
esac
exit 0
"#;
    let (_home_guard, home) = fake_home(script);
    let tests = TempDir::new().unwrap();
    write_test_file(tests.path(), "t.cs", "// <test/>");
    let work_root = TempDir::new().unwrap();

    let outcome = match_tests(&home, tests.path()).unwrap();
    let results = Orchestrator::new(&home, work_root.path())
        .execute_all(outcome.tests, |_| {})
        .unwrap();

    let result = &results[0];
    assert!(!result.success);
    assert!(!result.compile.success);
    assert!(result.run_output.is_none());
    assert!(result.compile.output.contains("error CS0000"));
}

#[test]
fn run_failure_is_recorded_with_compile_success() {
    let script = r#"#!/bin/sh
case "$1" in
  new) : > Program.cs ;;
  build) mkdir -p "bin/$3/$5"; : > "bin/$3/$5/$(basename "$PWD").dll" ;;
  *.dll) echo "unhandled exception" >&2; exit 134 ;;
esac
exit 0
"#;
    let (_home_guard, home) = fake_home(script);
    let tests = TempDir::new().unwrap();
    write_test_file(tests.path(), "t.cs", "// <test/>");
    let work_root = TempDir::new().unwrap();

    let outcome = match_tests(&home, tests.path()).unwrap();
    let results = Orchestrator::new(&home, work_root.path())
        .execute_all(outcome.tests, |_| {})
        .unwrap();

    let result = &results[0];
    assert!(!result.success);
    assert!(result.compile.success);
    let run_output = result.run_output.as_deref().unwrap();
    assert!(run_output.contains("unhandled exception"));
    assert!(run_output.contains("Exit code: 134"));
}

#[test]
fn release_configuration_flows_into_build_and_run_paths() {
    let (_home_guard, home) = fake_home(WORKING_TOOLCHAIN);
    let tests = TempDir::new().unwrap();
    write_test_file(
        tests.path(),
        "release.cs",
        "// <test><compile configuration=\"Release\"/></test>",
    );
    let work_root = TempDir::new().unwrap();

    let outcome = match_tests(&home, tests.path()).unwrap();
    let results = Orchestrator::new(&home, work_root.path())
        .execute_all(outcome.tests, |_| {})
        .unwrap();

    let result = &results[0];
    assert!(result.success);
    assert!(result.compile.output.contains("build -c Release -f netcoreapp2.0"));
    assert!(result
        .compile
        .working_directory
        .join("bin/Release/netcoreapp2.0")
        .is_dir());
}

#[test]
fn each_test_gets_its_own_working_directory() {
    let (_home_guard, home) = fake_home(WORKING_TOOLCHAIN);
    let tests = TempDir::new().unwrap();
    write_test_file(tests.path(), "one.cs", "// <test/>");
    write_test_file(tests.path(), "two.cs", "// <test/>");
    let work_root = TempDir::new().unwrap();

    let outcome = match_tests(&home, tests.path()).unwrap();
    let results = Orchestrator::new(&home, work_root.path())
        .execute_all(outcome.tests, |_| {})
        .unwrap();

    assert_eq!(results.len(), 2);
    assert_ne!(
        results[0].compile.working_directory,
        results[1].compile.working_directory
    );
    for result in &results {
        assert!(result.compile.working_directory.starts_with(work_root.path()));
    }
}

#[test]
fn report_includes_environment_and_per_test_blocks() {
    let (_home_guard, home) = fake_home(WORKING_TOOLCHAIN);
    let tests = TempDir::new().unwrap();
    write_test_file(tests.path(), "pass.cs", "// <test/>");
    let work_root = TempDir::new().unwrap();

    let outcome = match_tests(&home, tests.path()).unwrap();
    let results = Orchestrator::new(&home, work_root.path())
        .execute_all(outcome.tests, |_| {})
        .unwrap();

    let report = report::generate(&home, &results);
    assert!(report.contains("Found runtimes: 2.0"));
    assert!(report.contains("Found SDKs: 2.1.4"));
    assert!(report.contains("fake dotnet info"));
    assert!(report.contains("# Test:"));
    assert!(report.contains("# Compiling:"));
    assert!(report.contains("# Executing:"));
    assert!(report.contains("Total: 1, Passed: 1, Failed: 0"));
}
