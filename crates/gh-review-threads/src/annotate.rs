//! Flat review-comment annotation.
//!
//! REST review comments arrive with their own diff hunk attached.
//! Annotation parses that hunk, looks the comment's line up in it, and
//! carries the match (content, change kind, context phrase) alongside
//! the comment. Unlike the thread path this is pure: the batch is
//! already fetched.

use gh_diff_lines::{DiffSide, comment_lines, context_phrase, correlate, parse_hunk};
use gh_review_client::ReviewComment;
use log::debug;

use crate::model::{AnchoredComment, CommentFeed};
use crate::order::sort_anchored_comments;
use crate::summary::comment_summary;

/// Annotate a batch of review comments against their diff hunks.
pub fn annotate_comments(comments: Vec<ReviewComment>) -> Vec<AnchoredComment> {
    comments.into_iter().map(annotate_comment).collect()
}

/// Annotate one review comment against its own diff hunk.
///
/// A hunk that fails to parse degrades that comment to the fallback
/// classification; it never fails the batch.
pub fn annotate_comment(comment: ReviewComment) -> AnchoredComment {
    let side = comment.side.unwrap_or(DiffSide::Left);
    let (line_new, line_old) = comment_lines(side, comment.line, comment.original_line);

    let records = if comment.diff_hunk.is_empty() {
        Vec::new()
    } else {
        match parse_hunk(&comment.diff_hunk) {
            Ok(parsed) => parsed.records,
            Err(err) => {
                debug!("comment {}: unusable diff hunk: {}", comment.id, err);
                Vec::new()
            }
        }
    };

    let found = correlate(&records, line_new, line_old);
    let context = context_phrase(found.change, line_new, line_old);

    AnchoredComment {
        id: comment.id,
        file: comment.path,
        line_new,
        line_old,
        change: found.change,
        line_content: found.content,
        context,
        body: comment.body,
        author: comment.author,
        created_at: comment.created_at,
        html_url: comment.html_url,
        diff_hunk: comment.diff_hunk,
    }
}

/// Annotate, order, and summarize a comment batch into a feed.
pub fn comment_feed(
    owner: &str,
    repo: &str,
    pr_number: u64,
    comments: Vec<ReviewComment>,
) -> CommentFeed {
    let mut comments = annotate_comments(comments);
    sort_anchored_comments(&mut comments);
    let summary = comment_summary(&comments);

    CommentFeed {
        pr_number,
        owner: owner.to_string(),
        repo: repo.to_string(),
        comments,
        summary,
    }
}
