//! Matching discovered files against the installed distribution

use crate::{discovery, RunnerResult};
use dntr_header::{header, TestHeader};
use dntr_sdk::DotnetHome;
use std::fs;
use std::path::{Path, PathBuf};

/// A discovered, runnable test
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestInfo {
    pub source_file: PathBuf,
    pub header: TestHeader,
}

/// A file that declared itself a test but was excluded, with the reason
#[derive(Debug, Clone)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: String,
}

/// The matched test set plus per-file warnings
#[derive(Debug, Default)]
pub struct MatchOutcome {
    pub tests: Vec<TestInfo>,
    pub skipped: Vec<SkippedFile>,
}

/// Discover candidate files under `root` and keep the runnable tests.
///
/// A file is a test if its header parses to something; it is runnable if the
/// home has a runtime inside the header's version range and supports the
/// header's framework. Header problems (unterminated marker, bad range, bad
/// configuration) exclude the file with a warning and never abort the run;
/// files without a `<test>` marker are skipped silently, as are tests whose
/// requirements this distribution simply cannot satisfy.
pub fn match_tests(home: &DotnetHome, root: &Path) -> RunnerResult<MatchOutcome> {
    let mut outcome = MatchOutcome::default();

    for path in discovery::find_candidate_files(root)? {
        let source = match fs::read_to_string(&path) {
            Ok(source) => source,
            Err(error) => {
                outcome.skipped.push(SkippedFile {
                    path,
                    reason: format!("unreadable file: {error}"),
                });
                continue;
            }
        };

        match header::parse_source(&source) {
            Ok(Some(test_header)) => {
                if is_runnable(home, &test_header) {
                    outcome.tests.push(TestInfo {
                        source_file: path,
                        header: test_header,
                    });
                }
            }
            Ok(None) => {} // not a test
            Err(error) => outcome.skipped.push(SkippedFile {
                path,
                reason: error.to_string(),
            }),
        }
    }

    Ok(outcome)
}

fn is_runnable(home: &DotnetHome, header: &TestHeader) -> bool {
    let runtime_available = home
        .runtime_versions()
        .iter()
        .any(|version| header.target_runtime_version.contains(*version));
    let framework_supported = home
        .supported_frameworks()
        .iter()
        .any(|moniker| moniker == &header.target_framework);

    runtime_available && framework_supported
}
