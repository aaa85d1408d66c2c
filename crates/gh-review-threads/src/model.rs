//! Assembled review feedback models.
//!
//! Everything here is built fresh per invocation from fetched pages;
//! nothing persists across runs.

use chrono::{DateTime, Utc};
use gh_diff_lines::{ChangeKind, DiffSide};
use serde::{Deserialize, Serialize};

/// A single comment inside a review thread.
///
/// Carries the thread's anchor (path, side, resolved line pair) so the
/// comment stays meaningful when detached from its thread.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    /// Opaque comment id.
    pub id: String,
    /// Author login.
    pub author: String,
    /// Comment body (markdown).
    pub body: String,
    /// When the comment was created.
    pub created_at: DateTime<Utc>,
    /// Web URL of the comment.
    pub html_url: String,
    /// File path, inherited from the thread.
    pub path: String,
    /// Diff side, inherited from the thread.
    pub side: DiffSide,
    /// Anchor line in the post-change file.
    pub line_new: Option<u32>,
    /// Anchor line in the pre-change file.
    pub line_old: Option<u32>,
    /// Whether this comment replies to an earlier one.
    pub is_reply: bool,
}

/// A review conversation anchored to one file location.
///
/// Comments are ordered root first, replies in arrival order. The
/// representative `diff_hunk` is the opening comment's hunk when that
/// comment carried one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewThread {
    /// Opaque thread id.
    pub id: String,
    /// File path the thread is anchored to.
    pub file: String,
    /// Whether the thread was marked as addressed.
    pub is_resolved: bool,
    /// Whether later pushes superseded the commented diff region.
    pub is_outdated: bool,
    /// Anchor line in the post-change file.
    pub line_new: Option<u32>,
    /// Anchor line in the pre-change file.
    pub line_old: Option<u32>,
    /// First line of a multi-line anchor, post-change side.
    pub start_line_new: Option<u32>,
    /// First line of a multi-line anchor, pre-change side.
    pub start_line_old: Option<u32>,
    /// Diff hunk of the opening comment, when it carried one.
    pub diff_hunk: Option<String>,
    /// Conversation, root comment first.
    pub comments: Vec<Comment>,
}

/// A PR-level comment with no file/line anchor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneralComment {
    /// Opaque comment id.
    pub id: String,
    /// Comment body (markdown).
    pub body: String,
    /// Author login.
    pub author: String,
    /// When the comment was created.
    pub created_at: DateTime<Utc>,
    /// Web URL of the comment.
    pub html_url: String,
}

/// Aggregate counts and affected file/author lists for a thread feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewSummary {
    /// Threads awaiting action.
    pub unresolved_threads: usize,
    /// Threads marked as addressed.
    pub resolved_threads: usize,
    /// Threads anchored to superseded diff regions; counted
    /// independently of resolution state.
    pub outdated_threads: usize,
    /// PR-level comments without a file anchor.
    pub general_comments: usize,
    /// Comments across all threads plus general comments.
    pub total_comments: usize,
    /// Deduplicated, lexicographically sorted file paths.
    pub files_affected: Vec<String>,
    /// Deduplicated, lexicographically sorted author logins.
    pub authors: Vec<String>,
}

/// Complete thread-based review data for one pull request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewFeed {
    /// Pull request number.
    pub pr_number: u64,
    /// Repository owner.
    pub owner: String,
    /// Repository name.
    pub repo: String,
    /// Review threads in deterministic order.
    pub threads: Vec<ReviewThread>,
    /// General comments in arrival order.
    pub general_comments: Vec<GeneralComment>,
    /// Aggregate counts and lists.
    pub summary: ReviewSummary,
}

/// A flat review comment enriched with its resolved diff anchor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnchoredComment {
    /// Numeric comment id.
    pub id: u64,
    /// File path the comment is on.
    pub file: String,
    /// Anchor line in the post-change file.
    pub line_new: Option<u32>,
    /// Anchor line in the pre-change file.
    pub line_old: Option<u32>,
    /// How the commented line changed.
    pub change: ChangeKind,
    /// Exact line content when the hunk contained the anchor line.
    pub line_content: Option<String>,
    /// One-line description of where the comment sits in the diff.
    pub context: String,
    /// Comment body text.
    pub body: String,
    /// Author login.
    pub author: String,
    /// When the comment was created.
    pub created_at: DateTime<Utc>,
    /// Web URL of the comment.
    pub html_url: String,
    /// Raw diff hunk the anchor was resolved from.
    pub diff_hunk: String,
}

/// Aggregate counts for a flat comment batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentSummary {
    /// Number of comments in the batch.
    pub total_comments: usize,
    /// Deduplicated, lexicographically sorted file paths.
    pub files_affected: Vec<String>,
    /// Deduplicated, lexicographically sorted author logins.
    pub authors: Vec<String>,
}

/// Flat annotated comments for one pull request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentFeed {
    /// Pull request number.
    pub pr_number: u64,
    /// Repository owner.
    pub owner: String,
    /// Repository name.
    pub repo: String,
    /// Annotated comments in deterministic order.
    pub comments: Vec<AnchoredComment>,
    /// Aggregate counts and lists.
    pub summary: CommentSummary,
}
