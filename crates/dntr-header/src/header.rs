//! Header parsing: extracted fragment to [`TestHeader`]

use crate::extract::{self, Extraction};
use crate::markup;
use crate::version::VersionRange;
use crate::{HeaderError, HeaderResult};
use std::fmt;

/// Framework moniker assumed when a header does not name one
pub const DEFAULT_FRAMEWORK: &str = "netcoreapp2.0";

/// Build configuration passed to the toolchain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Configuration {
    #[default]
    Debug,
    Release,
}

impl Configuration {
    /// Case-insensitive: only `debug` and `release` are accepted
    pub fn parse(value: &str) -> HeaderResult<Self> {
        match value.to_ascii_lowercase().as_str() {
            "debug" => Ok(Configuration::Debug),
            "release" => Ok(Configuration::Release),
            _ => Err(HeaderError::InvalidConfiguration(value.to_string())),
        }
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Configuration::Debug => "Debug",
            Configuration::Release => "Release",
        })
    }
}

/// Structured metadata declared by a test file's leading comment block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestHeader {
    pub configuration: Configuration,
    pub target_framework: String,
    pub target_runtime_version: VersionRange,
}

impl Default for TestHeader {
    fn default() -> Self {
        Self {
            configuration: Configuration::Debug,
            target_framework: DEFAULT_FRAMEWORK.to_string(),
            target_runtime_version: VersionRange::default(),
        }
    }
}

/// Parse raw source text into a header.
///
/// `Ok(None)` means the file carries no `<test>` marker and is not a test;
/// errors mean the file claims to be a test but its header is unusable.
pub fn parse_source(source: &str) -> HeaderResult<Option<TestHeader>> {
    parse_extraction(extract::fragment_from_source(source))
}

/// Parse an extraction outcome into a header
pub fn parse_extraction(extraction: Extraction) -> HeaderResult<Option<TestHeader>> {
    match extraction {
        Extraction::Absent => Ok(None),
        Extraction::Unterminated => Err(HeaderError::UnterminatedHeader),
        Extraction::Fragment(fragment) => parse_fragment(&fragment).map(Some),
    }
}

/// Parse a complete fragment into a header.
///
/// `requires` and `compile` children are processed in document order and a
/// later occurrence of an attribute overwrites an earlier one. Keeping the
/// last write is the documented duplicate policy, not an accident. Unknown
/// elements and attributes are ignored.
pub fn parse_fragment(fragment: &str) -> HeaderResult<TestHeader> {
    let document = markup::parse(fragment)?;
    if document.root != "test" {
        return Err(HeaderError::Markup(format!(
            "expected <test> root element, found <{}>",
            document.root
        )));
    }

    let mut header = TestHeader::default();
    for element in &document.children {
        match element.name.as_str() {
            "requires" => {
                for (name, value) in &element.attributes {
                    if name == "runtime" {
                        header.target_runtime_version = VersionRange::parse(value)?;
                    }
                }
            }
            "compile" => {
                for (name, value) in &element.attributes {
                    match name.as_str() {
                        "configuration" => header.configuration = Configuration::parse(value)?,
                        "framework" => header.target_framework = value.to_lowercase(),
                        _ => {}
                    }
                }
            }
            _ => {}
        }
    }
    Ok(header)
}
