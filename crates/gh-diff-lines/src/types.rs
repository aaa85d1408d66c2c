//! Line-level data structures for parsed diff hunks.

use serde::{Deserialize, Serialize};

/// Line type in a hunk body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffLineKind {
    /// Added line (+).
    Addition,
    /// Removed line (-).
    Deletion,
    /// Unchanged line.
    Context,
}

/// A single hunk body line with its position in both file versions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffLineRecord {
    /// Line type.
    pub kind: DiffLineKind,
    /// Line content (without the leading +/-/ ).
    pub content: String,
    /// Line number in the old file (for Context and Deletion).
    pub old_line: Option<u32>,
    /// Line number in the new file (for Context and Addition).
    pub new_line: Option<u32>,
}

impl DiffLineRecord {
    /// Create a context record.
    pub fn context(content: impl Into<String>, old_line: u32, new_line: u32) -> Self {
        Self {
            kind: DiffLineKind::Context,
            content: content.into(),
            old_line: Some(old_line),
            new_line: Some(new_line),
        }
    }

    /// Create an addition record.
    pub fn addition(content: impl Into<String>, new_line: u32) -> Self {
        Self {
            kind: DiffLineKind::Addition,
            content: content.into(),
            old_line: None,
            new_line: Some(new_line),
        }
    }

    /// Create a deletion record.
    pub fn deletion(content: impl Into<String>, old_line: u32) -> Self {
        Self {
            kind: DiffLineKind::Deletion,
            content: content.into(),
            old_line: Some(old_line),
            new_line: None,
        }
    }
}

/// A fully parsed hunk: header ranges plus the ordered body records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedHunk {
    /// Old file starting line.
    pub old_start: u32,
    /// Number of lines in the old version.
    pub old_count: u32,
    /// New file starting line.
    pub new_start: u32,
    /// Number of lines in the new version.
    pub new_count: u32,
    /// Body lines in order.
    pub records: Vec<DiffLineRecord>,
}

/// Which side of the diff a comment is anchored on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiffSide {
    /// Old file (deletions side).
    Left,
    /// New file (additions side).
    Right,
}

impl DiffSide {
    /// Convert to GitHub API string representation.
    pub fn as_github_str(&self) -> &'static str {
        match self {
            DiffSide::Left => "LEFT",
            DiffSide::Right => "RIGHT",
        }
    }
}

/// Classification of the line a comment refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeKind {
    /// The commented line was added.
    Addition,
    /// The commented line was removed.
    Deletion,
    /// The commented line changed (both versions exist).
    Modification,
    /// The commented line is unchanged context.
    Context,
}

impl From<DiffLineKind> for ChangeKind {
    fn from(kind: DiffLineKind) -> Self {
        match kind {
            DiffLineKind::Addition => ChangeKind::Addition,
            DiffLineKind::Deletion => ChangeKind::Deletion,
            DiffLineKind::Context => ChangeKind::Context,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_constructors() {
        let ctx = DiffLineRecord::context("unchanged", 5, 7);
        assert_eq!(ctx.kind, DiffLineKind::Context);
        assert_eq!(ctx.old_line, Some(5));
        assert_eq!(ctx.new_line, Some(7));

        let add = DiffLineRecord::addition("new line", 10);
        assert_eq!(add.kind, DiffLineKind::Addition);
        assert_eq!(add.old_line, None);
        assert_eq!(add.new_line, Some(10));

        let del = DiffLineRecord::deletion("removed line", 8);
        assert_eq!(del.kind, DiffLineKind::Deletion);
        assert_eq!(del.old_line, Some(8));
        assert_eq!(del.new_line, None);
    }

    #[test]
    fn test_diff_side_github_str() {
        assert_eq!(DiffSide::Left.as_github_str(), "LEFT");
        assert_eq!(DiffSide::Right.as_github_str(), "RIGHT");
    }

    #[test]
    fn test_diff_side_serde() {
        assert_eq!(serde_json::to_string(&DiffSide::Left).unwrap(), "\"LEFT\"");
        assert_eq!(serde_json::to_string(&DiffSide::Right).unwrap(), "\"RIGHT\"");

        let side: DiffSide = serde_json::from_str("\"RIGHT\"").unwrap();
        assert_eq!(side, DiffSide::Right);
    }

    #[test]
    fn test_change_kind_serde() {
        let kinds = vec![
            (ChangeKind::Addition, "\"addition\""),
            (ChangeKind::Deletion, "\"deletion\""),
            (ChangeKind::Modification, "\"modification\""),
            (ChangeKind::Context, "\"context\""),
        ];

        for (kind, expected_json) in kinds {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, expected_json);

            let deserialized: ChangeKind = serde_json::from_str(&json).unwrap();
            assert_eq!(deserialized, kind);
        }
    }

    #[test]
    fn test_change_kind_from_line_kind() {
        assert_eq!(ChangeKind::from(DiffLineKind::Addition), ChangeKind::Addition);
        assert_eq!(ChangeKind::from(DiffLineKind::Deletion), ChangeKind::Deletion);
        assert_eq!(ChangeKind::from(DiffLineKind::Context), ChangeKind::Context);
    }
}
