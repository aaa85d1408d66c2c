//! Matching comment line anchors against parsed hunk records.

use crate::types::{ChangeKind, DiffLineRecord, DiffSide};

/// Result of looking a comment's line numbers up in a hunk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineMatch {
    /// How the commented line changed.
    pub change: ChangeKind,
    /// Exact line content when a hunk record matched, `None` otherwise.
    pub content: Option<String>,
}

/// Find the hunk record a comment refers to.
///
/// Records are scanned in hunk order and the first one whose new or old
/// line number equals the comment's wins. When nothing matches, the
/// change kind is inferred from which line numbers the comment carries
/// and no content is returned.
pub fn correlate(
    records: &[DiffLineRecord],
    line_new: Option<u32>,
    line_old: Option<u32>,
) -> LineMatch {
    for record in records {
        let new_hit = line_new.is_some() && record.new_line == line_new;
        let old_hit = line_old.is_some() && record.old_line == line_old;
        if new_hit || old_hit {
            return LineMatch {
                change: record.kind.into(),
                content: Some(record.content.clone()),
            };
        }
    }

    let change = match (line_old, line_new) {
        (None, Some(_)) => ChangeKind::Addition,
        (Some(_), None) => ChangeKind::Deletion,
        (Some(_), Some(_)) => ChangeKind::Modification,
        (None, None) => ChangeKind::Context,
    };

    LineMatch {
        change,
        content: None,
    }
}

/// Split a comment's line/original_line pair into (new, old) numbers.
///
/// On the right side `line` points into the new file and
/// `original_line` into the old one; on the left side the meanings are
/// swapped.
pub fn comment_lines(
    side: DiffSide,
    line: Option<u32>,
    original_line: Option<u32>,
) -> (Option<u32>, Option<u32>) {
    match side {
        DiffSide::Right => (line, original_line),
        DiffSide::Left => (original_line, line),
    }
}

/// Human-readable description of where a comment sits in the diff.
///
/// Falls back to a numberless phrase when the relevant line number is
/// missing.
pub fn context_phrase(change: ChangeKind, line_new: Option<u32>, line_old: Option<u32>) -> String {
    match change {
        ChangeKind::Addition => match line_new {
            Some(line) => format!("New line {} added", line),
            None => "Line addition".to_string(),
        },
        ChangeKind::Deletion => match line_old {
            Some(line) => format!("Line {} deleted", line),
            None => "Line deletion".to_string(),
        },
        ChangeKind::Modification => match (line_new, line_old) {
            (Some(new), Some(old)) => format!("Line {} modified (was line {})", new, old),
            _ => "Line modification".to_string(),
        },
        ChangeKind::Context => "Context line".to_string(),
    }
}
