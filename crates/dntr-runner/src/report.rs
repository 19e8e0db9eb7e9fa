//! Plain-text run report

use crate::orchestrator::ExecutionResult;
use dntr_sdk::DotnetHome;
use std::fmt::Write;

/// Pass/fail counts over a completed run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
}

pub fn summarize(results: &[ExecutionResult]) -> Summary {
    let passed = results.iter().filter(|r| r.success).count();
    Summary {
        total: results.len(),
        passed,
        failed: results.len() - passed,
    }
}

/// Render the full report: environment preamble, per-test command output,
/// final summary line
pub fn generate(home: &DotnetHome, results: &[ExecutionResult]) -> String {
    let mut report = String::new();

    let _ = writeln!(report, "Test Report");
    let _ = writeln!(
        report,
        "Generated on {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    let _ = writeln!(report);

    let _ = writeln!(report, "Tested dotnet at: {}", home.root().display());
    let _ = writeln!(report, "Found runtimes: {}", joined(home.runtime_versions()));
    let _ = writeln!(report, "Found SDKs: {}", joined(home.sdk_versions()));
    let _ = writeln!(report);

    let _ = writeln!(report, "dotnet --info:");
    match home.info() {
        Ok(info) => {
            let _ = writeln!(report, "{}", info.stdout);
        }
        Err(error) => {
            let _ = writeln!(report, "(unavailable: {error})");
        }
    }
    let _ = writeln!(report);

    for result in results {
        let _ = writeln!(report, "# Test: {}", result.test.source_file.display());
        let _ = writeln!(report, "# Compiling:\n{}", result.compile.output);
        if let Some(run_output) = &result.run_output {
            let _ = writeln!(report, "# Executing:\n{run_output}");
        }
        let _ = writeln!(report);
    }

    let summary = summarize(results);
    let _ = writeln!(report);
    let _ = writeln!(
        report,
        "Total: {}, Passed: {}, Failed: {}",
        summary.total, summary.passed, summary.failed
    );
    let _ = writeln!(report);

    report
}

fn joined<T: ToString>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
