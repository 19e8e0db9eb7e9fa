//! Toolchain invocation
//!
//! Every scaffold/build/run step goes through [`DotnetHome::exec`]: spawn the
//! home's `dotnet` launcher in an explicit working directory, block until it
//! exits, capture both output streams. The working directory is always a
//! parameter; nothing here touches the process-wide current directory, so
//! callers stay re-entrant.

use crate::home::DotnetHome;
use crate::{SdkError, SdkResult};
use std::fmt::Write;
use std::path::Path;
use std::process::Command;

/// Captured outcome of one toolchain command
#[derive(Debug, Clone)]
pub struct ProcessOutput {
    /// The command line as invoked, for reports
    pub command_line: String,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl ProcessOutput {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }

    /// Uniform textual block (command line, exit code, both streams) used
    /// verbatim in reports
    pub fn formatted(&self) -> String {
        let mut block = String::new();
        let _ = writeln!(block, "{}", self.command_line);
        let _ = writeln!(block, "Exit code: {}", self.exit_code);
        let _ = writeln!(block, "=== stdout ===");
        let _ = writeln!(block, "{}", self.stdout);
        let _ = writeln!(block, "=== stdout end ===");
        let _ = writeln!(block, "=== stderr ===");
        let _ = writeln!(block, "{}", self.stderr);
        let _ = writeln!(block, "=== stderr end ===");
        block.push('\n');
        block
    }
}

impl DotnetHome {
    /// Run `dotnet <args>` in `working_dir`, blocking until it exits.
    ///
    /// A non-zero exit is not an error here; only failure to spawn the
    /// process at all is. Killed-by-signal is reported as exit code -1.
    pub fn exec(&self, args: &[&str], working_dir: &Path) -> SdkResult<ProcessOutput> {
        let dotnet = self.dotnet_path();
        let command_line = format!("{} {}", dotnet.display(), args.join(" "));

        let output = Command::new(&dotnet)
            .args(args)
            .current_dir(working_dir)
            .output()
            .map_err(|error| SdkError::Spawn {
                command: command_line.clone(),
                error,
            })?;

        Ok(ProcessOutput {
            command_line,
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }

    /// `dotnet --info` output, for report preambles
    pub fn info(&self) -> SdkResult<ProcessOutput> {
        self.exec(&["--info"], self.root())
    }
}
