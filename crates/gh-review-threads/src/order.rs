//! Deterministic ordering for threads and flat comments.
//!
//! Both sorts are total: every comparison chain ends in the unique id,
//! so equal inputs always produce the same output regardless of
//! arrival order.

use crate::model::{AnchoredComment, ReviewThread};

/// Order threads for display: by file, unresolved first within a
/// file, then by anchor line, then by id.
pub fn sort_threads(threads: &mut [ReviewThread]) {
    threads.sort_by(|a, b| {
        a.file
            .cmp(&b.file)
            .then_with(|| a.is_resolved.cmp(&b.is_resolved))
            .then_with(|| thread_line_key(a).cmp(&thread_line_key(b)))
            .then_with(|| a.id.cmp(&b.id))
    });
}

/// Order flat comments by file, then anchor line, then id.
pub fn sort_anchored_comments(comments: &mut [AnchoredComment]) {
    comments.sort_by(|a, b| {
        a.file
            .cmp(&b.file)
            .then_with(|| comment_line_key(a).cmp(&comment_line_key(b)))
            .then_with(|| a.id.cmp(&b.id))
    });
}

/// Anchor line of a thread, falling through end line to range start.
/// Threads with no line at all sort after every anchored thread.
fn thread_line_key(thread: &ReviewThread) -> u32 {
    thread
        .line_new
        .or(thread.line_old)
        .or(thread.start_line_new)
        .or(thread.start_line_old)
        .unwrap_or(u32::MAX)
}

fn comment_line_key(comment: &AnchoredComment) -> u32 {
    comment.line_new.or(comment.line_old).unwrap_or(u32::MAX)
}
