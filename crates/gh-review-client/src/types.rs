//! Review feedback data transfer objects
//!
//! These types mirror the wire shapes of the remote review queries.
//! They are intentionally separate from the assembled domain models
//! to keep this crate pure and reusable.

use chrono::{DateTime, Utc};
use gh_diff_lines::DiffSide;
use serde::{Deserialize, Serialize};

/// One page of a cursor-driven result set
///
/// When `has_next_page` is true, `end_cursor` names the position the
/// follow-up request must resume from.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// Items on this page, in remote order
    pub nodes: Vec<T>,

    /// Cursor of the last item, used to request the next page
    pub end_cursor: Option<String>,

    /// Whether more pages follow this one
    pub has_next_page: bool,
}

impl<T> Page<T> {
    /// Create the final page of a result set.
    pub fn last(nodes: Vec<T>) -> Self {
        Self {
            nodes,
            end_cursor: None,
            has_next_page: false,
        }
    }

    /// Create a page with more results waiting at `cursor`.
    pub fn with_next(nodes: Vec<T>, cursor: impl Into<String>) -> Self {
        Self {
            nodes,
            end_cursor: Some(cursor.into()),
            has_next_page: true,
        }
    }
}

/// A review thread node from the thread list query
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreadNode {
    /// Opaque node id
    pub id: String,

    /// Whether the thread was marked as addressed
    pub is_resolved: bool,

    /// Whether later pushes superseded the commented diff region
    pub is_outdated: bool,

    /// File path the thread is anchored to
    pub path: String,

    /// Anchor line number, relative to `diff_side`
    pub line: Option<u32>,

    /// First line of a multi-line anchor, relative to `diff_side`
    pub start_line: Option<u32>,

    /// Which file version the anchor line numbers refer to
    pub diff_side: DiffSide,

    /// First page of the thread's comments
    pub comments: Page<ThreadCommentNode>,
}

/// A comment node inside a review thread
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreadCommentNode {
    /// Opaque node id
    pub id: String,

    /// Comment body (markdown)
    pub body: String,

    /// Author login
    pub author: String,

    /// When the comment was created
    pub created_at: DateTime<Utc>,

    /// Diff hunk around the commented line; empty when unavailable
    pub diff_hunk: String,

    /// Id of the comment this one replies to, if any
    pub reply_to: Option<String>,

    /// Web URL of the comment
    pub url: String,
}

/// A PR-level comment node with no file anchor
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneralCommentNode {
    /// Opaque node id
    pub id: String,

    /// Comment body (markdown)
    pub body: String,

    /// Author login
    pub author: String,

    /// When the comment was created
    pub created_at: DateTime<Utc>,

    /// Web URL of the comment
    pub url: String,
}

/// A review comment from the flat REST listing
///
/// Unlike the thread nodes above, this carries its own file/line
/// anchor and diff hunk, so it can be enriched without further
/// queries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewComment {
    /// Numeric comment id
    pub id: u64,

    /// File path the comment is on
    pub path: String,

    /// Anchor line number, relative to `side`
    pub line: Option<u32>,

    /// Anchor line in the other file version, when known
    pub original_line: Option<u32>,

    /// Which side of the diff the comment is on
    pub side: Option<DiffSide>,

    /// Comment body text
    pub body: String,

    /// Author login
    pub author: String,

    /// When the comment was created
    pub created_at: DateTime<Utc>,

    /// Web URL of the comment
    pub html_url: String,

    /// Raw diff hunk around the commented line; may be empty
    pub diff_hunk: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_constructors() {
        let last: Page<u32> = Page::last(vec![1, 2]);
        assert_eq!(last.nodes, vec![1, 2]);
        assert_eq!(last.end_cursor, None);
        assert!(!last.has_next_page);

        let partial: Page<u32> = Page::with_next(vec![3], "cursor-abc");
        assert_eq!(partial.end_cursor.as_deref(), Some("cursor-abc"));
        assert!(partial.has_next_page);
    }

    #[test]
    fn test_thread_node_deserialization() {
        let json = r#"{
            "id": "RT_node1",
            "isResolved": false,
            "isOutdated": true,
            "path": "src/lib.rs",
            "line": 42,
            "startLine": null,
            "diffSide": "RIGHT",
            "comments": {
                "nodes": [
                    {
                        "id": "C_node1",
                        "body": "nit: rename this",
                        "author": "reviewer",
                        "createdAt": "2024-05-01T12:00:00Z",
                        "diffHunk": "@@ -40,3 +40,4 @@\n context",
                        "replyTo": null,
                        "url": "https://example.com/c/1"
                    }
                ],
                "endCursor": null,
                "hasNextPage": false
            }
        }"#;

        let node: ThreadNode = serde_json::from_str(json).unwrap();
        assert_eq!(node.id, "RT_node1");
        assert!(!node.is_resolved);
        assert!(node.is_outdated);
        assert_eq!(node.line, Some(42));
        assert_eq!(node.start_line, None);
        assert_eq!(node.diff_side, DiffSide::Right);
        assert_eq!(node.comments.nodes.len(), 1);
        assert_eq!(node.comments.nodes[0].author, "reviewer");
        assert_eq!(node.comments.nodes[0].reply_to, None);
        assert!(!node.comments.has_next_page);
    }

    #[test]
    fn test_thread_comment_node_reply_reference() {
        let json = r#"{
            "id": "C_node2",
            "body": "done",
            "author": "committer",
            "createdAt": "2024-05-01T13:30:00Z",
            "diffHunk": "",
            "replyTo": "C_node1",
            "url": "https://example.com/c/2"
        }"#;

        let node: ThreadCommentNode = serde_json::from_str(json).unwrap();
        assert_eq!(node.reply_to.as_deref(), Some("C_node1"));
        assert!(node.diff_hunk.is_empty());
    }

    #[test]
    fn test_review_comment_serialization() {
        let comment = ReviewComment {
            id: 9001,
            path: "src/main.rs".to_string(),
            line: Some(12),
            original_line: Some(10),
            side: Some(DiffSide::Right),
            body: "please add a test".to_string(),
            author: "reviewer".to_string(),
            created_at: Utc::now(),
            html_url: "https://example.com/pull/1#discussion_r9001".to_string(),
            diff_hunk: "@@ -10,2 +10,3 @@\n context\n+added".to_string(),
        };

        let json = serde_json::to_string(&comment).unwrap();
        let deserialized: ReviewComment = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.id, 9001);
        assert_eq!(deserialized.path, "src/main.rs");
        assert_eq!(deserialized.side, Some(DiffSide::Right));
        assert_eq!(deserialized.line, Some(12));
    }

    #[test]
    fn test_review_comment_side_wire_casing() {
        let json = serde_json::to_string(&Some(DiffSide::Left)).unwrap();
        assert_eq!(json, "\"LEFT\"");
    }
}
