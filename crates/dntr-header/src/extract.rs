//! Leading-comment header extraction
//!
//! The header lives in the first contiguous block of `//` comments in a
//! source file. Extraction is plain text scanning: no C# parsing happens
//! here. Collected lines are concatenated without separators, so a
//! multi-line header must form well-formed markup once joined.

const COMMENT_MARKER: &str = "//";
const OPEN_TAG: &str = "<test>";
const CLOSE_TAG: &str = "</test>";
const SELF_CLOSED_TAG: &str = "<test/>";

/// Outcome of scanning the leading comment block for a `<test>` fragment
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    /// No `<test>` marker at all: the file is not a test
    Absent,
    /// A `<test>` marker was opened but the comment block ended before
    /// `</test>`: the header is malformed
    Unterminated,
    /// The complete fragment, ready for markup parsing
    Fragment(String),
}

/// Collect the first contiguous block of `//` comment lines.
///
/// Lines before the block are skipped; the block ends at the first line that
/// does not start (after trimming) with `//`. Later comment blocks are never
/// examined. Returns trimmed lines, comment marker included.
pub fn first_comment_block(source: &str) -> Vec<String> {
    let mut lines = source.lines().map(str::trim);
    let mut block = Vec::new();

    let mut current = lines.next();
    while let Some(line) = current {
        if line.starts_with(COMMENT_MARKER) {
            break;
        }
        current = lines.next();
    }
    while let Some(line) = current {
        if !line.starts_with(COMMENT_MARKER) {
            break;
        }
        block.push(line.to_string());
        current = lines.next();
    }

    block
}

/// Extract the `<test>` fragment from a collected comment block.
///
/// Each line is stripped of its comment marker and surrounding whitespace.
/// A line beginning `<test/>` before any open marker is a complete header by
/// itself. Otherwise accumulation starts at the line beginning `<test>` and
/// ends with the line containing `</test>`; anything after the close marker
/// on that line is discarded and later lines are not examined.
pub fn extract_fragment(lines: &[String]) -> Extraction {
    let mut buffer = String::new();
    let mut started = false;

    for line in lines {
        let trimmed = line.trim();
        let stripped = trimmed.strip_prefix(COMMENT_MARKER).unwrap_or(trimmed).trim();

        if started {
            match stripped.find(CLOSE_TAG) {
                Some(end) => {
                    buffer.push_str(&stripped[..end + CLOSE_TAG.len()]);
                    return Extraction::Fragment(buffer);
                }
                None => buffer.push_str(stripped),
            }
        } else if stripped.starts_with(SELF_CLOSED_TAG) {
            return Extraction::Fragment(SELF_CLOSED_TAG.to_string());
        } else if stripped.starts_with(OPEN_TAG) {
            started = true;
            if let Some(end) = stripped.find(CLOSE_TAG) {
                buffer.push_str(&stripped[..end + CLOSE_TAG.len()]);
                return Extraction::Fragment(buffer);
            }
            buffer.push_str(stripped);
        }
    }

    if started {
        Extraction::Unterminated
    } else {
        Extraction::Absent
    }
}

/// Convenience: run both phases over raw source text
pub fn fragment_from_source(source: &str) -> Extraction {
    extract_fragment(&first_comment_block(source))
}
