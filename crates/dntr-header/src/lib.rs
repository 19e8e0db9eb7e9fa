//! Test header grammar
//!
//! Regression tests are plain C# source files that declare what they need in a
//! leading line-comment block:
//!
//! ```text
//! // <test>
//! //   <requires runtime="[1.0,2.0)" />
//! //   <compile configuration="Release" framework="netcoreapp2.0" />
//! // </test>
//! ```
//!
//! This crate owns the three layers that turn that block into structured
//! metadata:
//! - [`version`]: two-component versions and `[min,max)` interval ranges
//! - [`extract`]: pulling the `<test>` fragment out of the leading comments
//! - [`header`]: parsing the fragment into a [`TestHeader`]
//!
//! Files without a `<test>` marker are not tests and parse to `None`; files
//! with a broken marker or invalid attribute values produce a typed
//! [`HeaderError`] so callers can decide between warning and aborting.

pub mod extract;
pub mod header;
mod markup;
pub mod version;

pub use extract::{extract_fragment, first_comment_block, Extraction};
pub use header::{parse_source, Configuration, TestHeader, DEFAULT_FRAMEWORK};
pub use version::{SemVersion, VersionRange};

use thiserror::Error;

pub type HeaderResult<T> = Result<T, HeaderError>;

/// Errors produced while parsing a test header
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HeaderError {
    #[error("invalid version '{0}': expected MAJOR.MINOR")]
    InvalidVersion(String),

    #[error("invalid version range '{0}': expected interval syntax such as [1.0,2.0)")]
    InvalidRange(String),

    #[error("unknown build configuration '{0}': expected Debug or Release")]
    InvalidConfiguration(String),

    #[error("test header opened with <test> but never closed")]
    UnterminatedHeader,

    #[error("malformed test header markup: {0}")]
    Markup(String),
}
