//! Two-component versions and interval ranges
//!
//! Runtime requirements are expressed at `major.minor` granularity; patch
//! numbers never participate in matching. An unbounded range end uses
//! [`SemVersion::MAX`] as a sentinel rather than a true infinity, so equality
//! at the sentinel behaves like any other version.

use crate::{HeaderError, HeaderResult};
use std::fmt;
use std::str::FromStr;

/// A `major.minor` version, ordered by major then minor
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SemVersion {
    pub major: u32,
    pub minor: u32,
}

impl SemVersion {
    /// Sentinel used as the "no upper bound" end of a range
    pub const MAX: SemVersion = SemVersion {
        major: u32::MAX,
        minor: u32::MAX,
    };

    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }
}

impl fmt::Display for SemVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

impl FromStr for SemVersion {
    type Err = HeaderError;

    /// Accepts exactly two dot-separated decimal components
    fn from_str(text: &str) -> HeaderResult<Self> {
        let invalid = || HeaderError::InvalidVersion(text.to_string());
        let (major, minor) = text.split_once('.').ok_or_else(invalid)?;
        if minor.contains('.') {
            return Err(invalid());
        }
        Ok(SemVersion {
            major: major.parse().map_err(|_| invalid())?,
            minor: minor.parse().map_err(|_| invalid())?,
        })
    }
}

/// An interval of versions with independently inclusive/exclusive bounds
///
/// The default range is unconstrained: `[0.0, MAX.MAX]`, both ends inclusive.
/// `min <= max` is not enforced; an inverted range simply contains nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionRange {
    pub min: SemVersion,
    pub min_inclusive: bool,
    pub max: SemVersion,
    pub max_inclusive: bool,
}

impl Default for VersionRange {
    fn default() -> Self {
        Self {
            min: SemVersion::new(0, 0),
            min_inclusive: true,
            max: SemVersion::MAX,
            max_inclusive: true,
        }
    }
}

impl VersionRange {
    /// Parse an interval literal such as `[1.0,2.0)` or `(,)`.
    ///
    /// The grammar is `(\[|\()(MAJOR.MINOR)?,(MAJOR.MINOR)?(\]|\))`. The
    /// bracket decides whether the corresponding bound is inclusive, except
    /// that a missing bound keeps the inclusive default since it represents
    /// "no bound at all". A bare version with no brackets is rejected: ranges
    /// must use interval syntax.
    pub fn parse(text: &str) -> HeaderResult<Self> {
        let invalid = || HeaderError::InvalidRange(text.to_string());

        let inner = text
            .strip_prefix(['[', '('])
            .and_then(|t| t.strip_suffix([']', ')']))
            .ok_or_else(invalid)?;
        let (low, high) = inner.split_once(',').ok_or_else(invalid)?;
        if high.contains(',') {
            return Err(invalid());
        }

        let mut range = VersionRange::default();
        if !low.is_empty() {
            range.min = low.parse()?;
            range.min_inclusive = text.starts_with('[');
        }
        if !high.is_empty() {
            range.max = high.parse()?;
            range.max_inclusive = text.ends_with(']');
        }
        Ok(range)
    }

    /// Whether `version` falls inside this range, honoring the inclusive
    /// flags exactly at the bounds
    pub fn contains(&self, version: SemVersion) -> bool {
        if version < self.min || version > self.max {
            return false;
        }
        if version == self.max && self.max_inclusive {
            return true;
        }
        if version == self.min && self.min_inclusive {
            return true;
        }
        version > self.min && version < self.max
    }
}

impl fmt::Display for VersionRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{},{}{}",
            if self.min_inclusive { '[' } else { '(' },
            self.min,
            self.max,
            if self.max_inclusive { ']' } else { ')' },
        )
    }
}
