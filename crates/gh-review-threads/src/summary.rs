//! Aggregate counts over a fetched feed.

use std::collections::HashSet;

use crate::model::{AnchoredComment, CommentSummary, GeneralComment, ReviewSummary, ReviewThread};

/// Summarize a thread feed.
///
/// Resolution counts partition the threads (`unresolved + resolved ==
/// threads.len()`); the outdated count overlaps both. File and author
/// lists are deduplicated and sorted, with general comment authors
/// folded in.
pub fn review_summary(
    threads: &[ReviewThread],
    general_comments: &[GeneralComment],
) -> ReviewSummary {
    let mut seen_files: HashSet<&str> = HashSet::new();
    let mut files_affected = Vec::new();
    let mut seen_authors: HashSet<&str> = HashSet::new();
    let mut authors = Vec::new();

    let mut unresolved_threads = 0;
    let mut resolved_threads = 0;
    let mut outdated_threads = 0;
    let mut total_comments = 0;

    for thread in threads {
        if thread.is_resolved {
            resolved_threads += 1;
        } else {
            unresolved_threads += 1;
        }
        if thread.is_outdated {
            outdated_threads += 1;
        }
        total_comments += thread.comments.len();

        if seen_files.insert(&thread.file) {
            files_affected.push(thread.file.clone());
        }
        for comment in &thread.comments {
            if seen_authors.insert(&comment.author) {
                authors.push(comment.author.clone());
            }
        }
    }

    for comment in general_comments {
        if seen_authors.insert(&comment.author) {
            authors.push(comment.author.clone());
        }
    }
    total_comments += general_comments.len();

    files_affected.sort();
    authors.sort();

    ReviewSummary {
        unresolved_threads,
        resolved_threads,
        outdated_threads,
        general_comments: general_comments.len(),
        total_comments,
        files_affected,
        authors,
    }
}

/// Summarize a flat comment batch.
pub fn comment_summary(comments: &[AnchoredComment]) -> CommentSummary {
    let mut seen_files: HashSet<&str> = HashSet::new();
    let mut files_affected = Vec::new();
    let mut seen_authors: HashSet<&str> = HashSet::new();
    let mut authors = Vec::new();

    for comment in comments {
        if seen_files.insert(&comment.file) {
            files_affected.push(comment.file.clone());
        }
        if seen_authors.insert(&comment.author) {
            authors.push(comment.author.clone());
        }
    }

    files_affected.sort();
    authors.sort();

    CommentSummary {
        total_comments: comments.len(),
        files_affected,
        authors,
    }
}
