//! Installed distribution introspection

use crate::{SdkError, SdkResult};
use dntr_header::SemVersion;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Directory under the home that holds shared runtime installations
const RUNTIME_DIR: &str = "shared/Microsoft.NETCore.App";
/// Directory under the home that holds SDK installations
const SDK_DIR: &str = "sdk";

/// A three-component SDK version. Patch is informative for reports but never
/// matched against version ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SdkVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl fmt::Display for SdkVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Handle on an installed .NET home directory.
///
/// Construction validates that the directory actually is a home (it must
/// directly contain the `dotnet` executable). Enumeration results are
/// computed on first access and cached for the lifetime of the handle.
#[derive(Debug)]
pub struct DotnetHome {
    root: PathBuf,
    runtimes: OnceLock<Vec<SemVersion>>,
    sdks: OnceLock<Vec<SdkVersion>>,
    frameworks: OnceLock<Vec<String>>,
}

impl DotnetHome {
    pub fn new(root: impl Into<PathBuf>) -> SdkResult<Self> {
        let root = root.into();
        if !root.join("dotnet").is_file() {
            return Err(SdkError::InvalidHome(root));
        }
        Ok(Self {
            root,
            runtimes: OnceLock::new(),
            sdks: OnceLock::new(),
            frameworks: OnceLock::new(),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the `dotnet` launcher inside this home
    pub fn dotnet_path(&self) -> PathBuf {
        self.root.join("dotnet")
    }

    /// Distinct `major.minor` runtime versions installed in this home.
    ///
    /// Patch components are dropped: two installations differing only in
    /// patch satisfy the same ranges, which are expressed at `major.minor`
    /// granularity. Directory names that are not versions are skipped.
    pub fn runtime_versions(&self) -> &[SemVersion] {
        self.runtimes.get_or_init(|| {
            let mut versions: Vec<SemVersion> = subdirectory_names(&self.root.join(RUNTIME_DIR))
                .iter()
                .filter_map(|name| parse_version_dir(name))
                .map(|(major, minor, _)| SemVersion::new(major, minor))
                .collect();
            versions.sort();
            versions.dedup();
            versions
        })
    }

    /// SDK versions installed in this home, patch included
    pub fn sdk_versions(&self) -> &[SdkVersion] {
        self.sdks.get_or_init(|| {
            let mut versions: Vec<SdkVersion> = subdirectory_names(&self.root.join(SDK_DIR))
                .iter()
                .filter_map(|name| parse_version_dir(name))
                .map(|(major, minor, patch)| SdkVersion {
                    major,
                    minor,
                    patch,
                })
                .collect();
            versions.sort();
            versions
        })
    }

    /// Framework monikers this home can target: one `netcoreappX.Y` per
    /// distinct installed runtime version. Derived, never read from a file.
    pub fn supported_frameworks(&self) -> &[String] {
        self.frameworks.get_or_init(|| {
            self.runtime_versions()
                .iter()
                .map(|v| format!("netcoreapp{}.{}", v.major, v.minor))
                .collect()
        })
    }
}

/// Names of the immediate subdirectories of `path`; empty if unreadable
fn subdirectory_names(path: &Path) -> Vec<String> {
    let Ok(entries) = fs::read_dir(path) else {
        return Vec::new();
    };
    entries
        .filter_map(Result::ok)
        .filter(|entry| entry.path().is_dir())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .collect()
}

/// Parse a `major.minor[.patch]` directory name; patch defaults to zero
fn parse_version_dir(name: &str) -> Option<(u32, u32, u32)> {
    let mut parts = name.split('.');
    let major = parts.next()?.parse().ok()?;
    let minor = parts.next()?.parse().ok()?;
    let patch = match parts.next() {
        Some(part) => part.parse().ok()?,
        None => 0,
    };
    if parts.next().is_some() {
        return None;
    }
    Some((major, minor, patch))
}
