//! Console output for skipped files, per-test results and the summary

use colored::*;
use dntr_runner::report::summarize;
use dntr_runner::{ExecutionResult, SkippedFile};

pub struct ConsoleReporter {
    /// Show command output for failing tests
    verbose: bool,
}

impl ConsoleReporter {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Called from the orchestrator's observer, immediately after each test
    pub fn print_result(&self, result: &ExecutionResult) {
        if result.success {
            println!(
                "{}   {}",
                "Pass:".green().bold(),
                result.test.source_file.display()
            );
            return;
        }

        println!(
            "{} {}",
            "FAILED:".red().bold(),
            result.test.source_file.display()
        );
        if self.verbose {
            for line in result.compile.output.lines() {
                println!("    {}", line.dimmed());
            }
            if let Some(run_output) = &result.run_output {
                for line in run_output.lines() {
                    println!("    {}", line.dimmed());
                }
            }
        }
    }

    pub fn print_summary(&self, results: &[ExecutionResult]) {
        let summary = summarize(results);
        let failed = if summary.failed > 0 {
            summary.failed.to_string().red().bold()
        } else {
            summary.failed.to_string().normal()
        };

        println!();
        println!(
            "Total: {}, Passed: {}, Failed: {}",
            summary.total.to_string().bold(),
            summary.passed.to_string().green().bold(),
            failed
        );
        println!();
    }
}

/// Warn about files that declared themselves tests but were excluded
pub fn print_skipped(skipped: &[SkippedFile]) {
    for file in skipped {
        eprintln!(
            "{} skipping {}: {}",
            "warning:".yellow().bold(),
            file.path.display(),
            file.reason
        );
    }
}
