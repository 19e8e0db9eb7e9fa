//! Test discovery, matching and execution
//!
//! The pipeline: [`discovery`] walks the test root for candidate source
//! files, [`matcher`] keeps the ones whose headers parse and whose
//! requirements the installed distribution can satisfy, [`orchestrator`]
//! compiles and runs each survivor in an isolated working directory, and
//! [`report`] renders the aggregated results as plain text.
//!
//! Compile and run failures are first-class outcomes recorded per test;
//! `RunnerError` is reserved for harness faults (unreadable roots, failed
//! directory setup, unspawnable toolchain) that abort the run.

pub mod discovery;
pub mod matcher;
pub mod orchestrator;
pub mod report;

pub use matcher::{match_tests, MatchOutcome, SkippedFile, TestInfo};
pub use orchestrator::{CompileResult, ExecutionResult, Orchestrator};

use std::path::PathBuf;
use thiserror::Error;

pub type RunnerResult<T> = Result<T, RunnerError>;

#[derive(Error, Debug)]
pub enum RunnerError {
    #[error("bad file search root {}", .0.display())]
    BadTestRoot(PathBuf),

    #[error("I/O error at {}: {error}", .path.display())]
    Io {
        path: PathBuf,
        error: std::io::Error,
    },

    #[error(transparent)]
    Sdk(#[from] dntr_sdk::SdkError),
}

impl RunnerError {
    /// Create an I/O error with path context
    pub fn io(path: impl Into<PathBuf>, error: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            error,
        }
    }
}
