//! Unified diff hunk parsing.
//!
//! Hunks attached to review comments carry the `@@`-header but no file
//! header lines, so this parser works on the bare hunk text.

use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

use crate::types::{DiffLineRecord, ParsedHunk};

static HEADER_REGEX: OnceLock<Regex> = OnceLock::new();

/// Errors that can occur while parsing a diff hunk.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The hunk text was empty.
    #[error("empty diff hunk")]
    EmptyHunk,
    /// The first line did not match the `@@ -a,b +c,d @@` header form.
    #[error("invalid diff hunk header: {0}")]
    InvalidHeader(String),
}

/// Parse a diff hunk into header ranges and per-line records.
///
/// Line numbers are assigned by walking the body from the header's
/// starting positions: additions advance the new counter, deletions the
/// old counter, context lines both.
///
/// # Example
///
/// ```
/// use gh_diff_lines::{parse_hunk, DiffLineKind};
///
/// let hunk = "@@ -1,2 +1,3 @@\n context\n+added\n another";
/// let parsed = parse_hunk(hunk)?;
///
/// assert_eq!(parsed.new_start, 1);
/// assert_eq!(parsed.records.len(), 3);
/// assert_eq!(parsed.records[1].kind, DiffLineKind::Addition);
/// assert_eq!(parsed.records[1].new_line, Some(2));
/// # Ok::<(), gh_diff_lines::ParseError>(())
/// ```
pub fn parse_hunk(hunk: &str) -> Result<ParsedHunk, ParseError> {
    if hunk.is_empty() {
        return Err(ParseError::EmptyHunk);
    }

    let regex = HEADER_REGEX.get_or_init(|| {
        Regex::new(r"@@\s+-(\d+)(?:,(\d+))?\s+\+(\d+)(?:,(\d+))?\s+@@")
            .expect("hunk header regex must compile")
    });

    let mut lines = hunk.lines();
    let header = lines.next().ok_or(ParseError::EmptyHunk)?;

    let caps = regex
        .captures(header)
        .ok_or_else(|| ParseError::InvalidHeader(header.to_string()))?;

    let invalid = || ParseError::InvalidHeader(header.to_string());
    let old_start: u32 = caps[1].parse().map_err(|_| invalid())?;
    let old_count: u32 = caps
        .get(2)
        .map_or(Ok(1), |m| m.as_str().parse())
        .map_err(|_| invalid())?;
    let new_start: u32 = caps[3].parse().map_err(|_| invalid())?;
    let new_count: u32 = caps
        .get(4)
        .map_or(Ok(1), |m| m.as_str().parse())
        .map_err(|_| invalid())?;

    let mut records = Vec::new();
    let mut old_line = old_start;
    let mut new_line = new_start;

    for line in lines {
        if line.is_empty() {
            continue;
        }

        if let Some(content) = line.strip_prefix('+') {
            records.push(DiffLineRecord::addition(content, new_line));
            new_line += 1;
        } else if let Some(content) = line.strip_prefix('-') {
            records.push(DiffLineRecord::deletion(content, old_line));
            old_line += 1;
        } else if let Some(content) = line.strip_prefix(' ') {
            records.push(DiffLineRecord::context(content, old_line, new_line));
            old_line += 1;
            new_line += 1;
        } else {
            // Lines without a prefix character show up in hunks taken
            // from comment payloads; treat them as context verbatim.
            records.push(DiffLineRecord::context(line, old_line, new_line));
            old_line += 1;
            new_line += 1;
        }
    }

    Ok(ParsedHunk {
        old_start,
        old_count,
        new_start,
        new_count,
        records,
    })
}
