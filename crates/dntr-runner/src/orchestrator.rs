//! Per-test compile/execute orchestration
//!
//! Tests run strictly sequentially, in discovery order, each in a fresh
//! uniquely named directory under the run's working root. The cycle per test
//! is scaffold → inject source → build → run; the first failing stage stops
//! the cycle and the result records how far it got. Every toolchain command
//! receives its working directory explicitly.

use crate::matcher::TestInfo;
use crate::{RunnerError, RunnerResult};
use dntr_sdk::{DotnetHome, ProcessOutput};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the entry-point file `dotnet new console` scaffolds
const TEMPLATE_ENTRY_POINT: &str = "Program.cs";

/// Outcome of the scaffold+build phase for one test
#[derive(Debug, Clone)]
pub struct CompileResult {
    pub success: bool,
    pub working_directory: PathBuf,
    /// Concatenated formatted output of every command that ran
    pub output: String,
}

/// Final outcome for one test
#[derive(Debug, Clone)]
pub struct ExecutionResult {
    pub test: TestInfo,
    pub success: bool,
    pub compile: CompileResult,
    /// Formatted output of the run step; `None` when compilation failed and
    /// execution was never attempted
    pub run_output: Option<String>,
}

/// Drives the compile/execute cycle for matched tests
pub struct Orchestrator<'a> {
    home: &'a DotnetHome,
    working_root: PathBuf,
}

impl<'a> Orchestrator<'a> {
    pub fn new(home: &'a DotnetHome, working_root: impl Into<PathBuf>) -> Self {
        Self {
            home,
            working_root: working_root.into(),
        }
    }

    /// Execute every test, invoking `observer` with each result as soon as
    /// it is produced, before the next test starts. No retry semantics.
    pub fn execute_all(
        &self,
        tests: Vec<TestInfo>,
        mut observer: impl FnMut(&ExecutionResult),
    ) -> RunnerResult<Vec<ExecutionResult>> {
        let mut results = Vec::with_capacity(tests.len());
        for test in tests {
            let result = self.execute_one(test)?;
            observer(&result);
            results.push(result);
        }
        Ok(results)
    }

    fn execute_one(&self, test: TestInfo) -> RunnerResult<ExecutionResult> {
        let working_dir = self.isolated_directory()?;

        let compile = self.compile(&working_dir, &test)?;
        if !compile.success {
            return Ok(ExecutionResult {
                test,
                success: false,
                compile,
                run_output: None,
            });
        }

        let run = self.run(&working_dir, &test)?;
        Ok(ExecutionResult {
            test,
            success: run.success(),
            compile,
            run_output: Some(run.formatted()),
        })
    }

    /// A fresh uniquely named directory under the working root. The
    /// directory is kept: it holds the build tree referenced by the report.
    fn isolated_directory(&self) -> RunnerResult<PathBuf> {
        let dir = tempfile::Builder::new()
            .prefix("test.")
            .tempdir_in(&self.working_root)
            .map_err(|error| RunnerError::io(&self.working_root, error))?;
        Ok(dir.keep())
    }

    fn compile(&self, working_dir: &Path, test: &TestInfo) -> RunnerResult<CompileResult> {
        let mut output = String::new();

        let scaffold = self.home.exec(&["new", "console"], working_dir)?;
        output.push_str(&scaffold.formatted());
        if !scaffold.success() {
            return Ok(CompileResult {
                success: false,
                working_directory: working_dir.to_path_buf(),
                output,
            });
        }

        // Replace the template entry point with the test source, keeping the
        // test's original file name.
        let template = working_dir.join(TEMPLATE_ENTRY_POINT);
        fs::remove_file(&template).map_err(|error| RunnerError::io(&template, error))?;
        let file_name = test
            .source_file
            .file_name()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(TEMPLATE_ENTRY_POINT));
        let destination = working_dir.join(file_name);
        fs::copy(&test.source_file, &destination)
            .map_err(|error| RunnerError::io(&test.source_file, error))?;

        let configuration = test.header.configuration.to_string();
        let build = self.home.exec(
            &[
                "build",
                "-c",
                &configuration,
                "-f",
                &test.header.target_framework,
            ],
            working_dir,
        )?;
        output.push_str(&build.formatted());

        Ok(CompileResult {
            success: build.success(),
            working_directory: working_dir.to_path_buf(),
            output,
        })
    }

    /// Invoke the built binary. The working directory's generated name is
    /// also the application name, which fixes the output path.
    fn run(&self, working_dir: &Path, test: &TestInfo) -> RunnerResult<ProcessOutput> {
        let application = working_dir
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let binary = format!(
            "bin/{}/{}/{}.dll",
            test.header.configuration, test.header.target_framework, application
        );
        Ok(self.home.exec(&[&binary], working_dir)?)
    }
}
