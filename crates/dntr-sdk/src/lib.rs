//! .NET distribution introspection
//!
//! A "home" is an installation directory containing the `dotnet` launcher,
//! one or more shared runtimes and zero or more SDKs. [`DotnetHome`] answers
//! what the installation can run (runtime versions, framework monikers) and
//! executes toolchain commands against it.

pub mod home;
pub mod process;

pub use home::{DotnetHome, SdkVersion};
pub use process::ProcessOutput;

use std::path::PathBuf;
use thiserror::Error;

pub type SdkResult<T> = Result<T, SdkError>;

#[derive(Error, Debug)]
pub enum SdkError {
    #[error("{} does not look like a .NET Core home directory", .0.display())]
    InvalidHome(PathBuf),

    #[error("failed to run '{command}': {error}")]
    Spawn {
        command: String,
        error: std::io::Error,
    },
}
