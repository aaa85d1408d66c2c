//! Pagination drain and thread assembly.
//!
//! Each drain is strictly sequential: one request in flight, every
//! page consumed before the result is returned. A caller never
//! observes a partially fetched feed; any page failure aborts the
//! whole run with a [`FetchError`].

use gh_diff_lines::DiffSide;
use gh_review_client::{ReviewSource, ThreadCommentNode, ThreadNode};
use log::debug;

use crate::error::FetchError;
use crate::model::{Comment, GeneralComment, ReviewFeed, ReviewThread};
use crate::options::FetchOptions;
use crate::order::sort_threads;
use crate::summary::review_summary;

/// Split a side-relative line number into its (new, old) halves.
///
/// Review threads report one line number plus the diff side it belongs
/// to: the right side points into the post-change file, the left side
/// into the pre-change file.
pub fn resolve_line(side: DiffSide, raw_line: Option<u32>) -> (Option<u32>, Option<u32>) {
    match side {
        DiffSide::Right => (raw_line, None),
        DiffSide::Left => (None, raw_line),
    }
}

/// Fetch, filter, order, and summarize a pull request's review feedback.
///
/// Composes [`collect_threads`] and [`collect_general_comments`] into
/// the complete feed handed to a renderer: threads in deterministic
/// order, general comments (when requested) in arrival order, and the
/// aggregate summary.
pub async fn fetch_review_feed(
    source: &dyn ReviewSource,
    owner: &str,
    repo: &str,
    pr_number: u64,
    options: FetchOptions,
) -> Result<ReviewFeed, FetchError> {
    let mut threads = collect_threads(source, owner, repo, pr_number, options).await?;

    let general_comments = if options.include_general {
        collect_general_comments(source, owner, repo, pr_number).await?
    } else {
        Vec::new()
    };

    sort_threads(&mut threads);
    let summary = review_summary(&threads, &general_comments);

    Ok(ReviewFeed {
        pr_number,
        owner: owner.to_string(),
        repo: repo.to_string(),
        threads,
        general_comments,
        summary,
    })
}

/// Drain every review thread page and assemble the retained threads.
///
/// Threads filtered out by `options` are dropped before their comments
/// are materialized. Retained threads appear in arrival order; callers
/// impose ordering separately.
pub async fn collect_threads(
    source: &dyn ReviewSource,
    owner: &str,
    repo: &str,
    pr_number: u64,
    options: FetchOptions,
) -> Result<Vec<ReviewThread>, FetchError> {
    let mut threads = Vec::new();
    let mut cursor: Option<String> = None;
    let mut page = 1usize;

    loop {
        let batch = source
            .fetch_threads_page(owner, repo, pr_number, cursor.as_deref())
            .await
            .map_err(|cause| FetchError::Threads { page, cause })?;

        debug!("review threads page {}: {} nodes", page, batch.nodes.len());

        for node in batch.nodes {
            if node.is_resolved && !options.include_resolved {
                debug!("skipping resolved thread {}", node.id);
                continue;
            }
            if node.is_outdated && !options.include_outdated {
                debug!("skipping outdated thread {}", node.id);
                continue;
            }

            threads.push(assemble_thread(source, node).await?);
        }

        if !batch.has_next_page {
            break;
        }
        cursor = batch.end_cursor;
        page += 1;
    }

    Ok(threads)
}

/// Drain every general comment page for a pull request.
pub async fn collect_general_comments(
    source: &dyn ReviewSource,
    owner: &str,
    repo: &str,
    pr_number: u64,
) -> Result<Vec<GeneralComment>, FetchError> {
    let mut comments = Vec::new();
    let mut cursor: Option<String> = None;
    let mut page = 1usize;

    loop {
        let batch = source
            .fetch_general_comments_page(owner, repo, pr_number, cursor.as_deref())
            .await
            .map_err(|cause| FetchError::GeneralComments { page, cause })?;

        debug!("general comments page {}: {} nodes", page, batch.nodes.len());

        for node in batch.nodes {
            comments.push(GeneralComment {
                id: node.id,
                body: node.body,
                author: node.author,
                created_at: node.created_at,
                html_url: node.url,
            });
        }

        if !batch.has_next_page {
            break;
        }
        cursor = batch.end_cursor;
        page += 1;
    }

    Ok(comments)
}

/// Build one thread from its node, draining comment continuations.
async fn assemble_thread(
    source: &dyn ReviewSource,
    node: ThreadNode,
) -> Result<ReviewThread, FetchError> {
    let ThreadNode {
        id,
        is_resolved,
        is_outdated,
        path,
        line,
        start_line,
        diff_side,
        comments,
    } = node;

    let (line_new, line_old) = resolve_line(diff_side, line);
    let (start_line_new, start_line_old) = resolve_line(diff_side, start_line);

    let mut thread = ReviewThread {
        id,
        file: path,
        is_resolved,
        is_outdated,
        line_new,
        line_old,
        start_line_new,
        start_line_old,
        diff_hunk: None,
        comments: Vec::new(),
    };

    for comment in comments.nodes {
        append_comment(&mut thread, diff_side, comment);
    }

    if comments.has_next_page {
        drain_remaining_comments(source, &mut thread, diff_side, comments.end_cursor).await?;
    }

    Ok(thread)
}

/// Follow a thread's own comment cursor until exhausted.
///
/// Scoped by thread id; the thread list cursor is untouched. `cursor`
/// is the embedded first page's end cursor.
async fn drain_remaining_comments(
    source: &dyn ReviewSource,
    thread: &mut ReviewThread,
    side: DiffSide,
    mut cursor: Option<String>,
) -> Result<(), FetchError> {
    let mut page = 1usize;

    loop {
        let batch = source
            .fetch_thread_comments_page(&thread.id, cursor.as_deref())
            .await
            .map_err(|cause| FetchError::ThreadComments {
                thread_id: thread.id.clone(),
                page,
                cause,
            })?;

        debug!(
            "thread {} comments page {}: {} nodes",
            thread.id,
            page,
            batch.nodes.len()
        );

        for node in batch.nodes {
            append_comment(thread, side, node);
        }

        if !batch.has_next_page {
            return Ok(());
        }
        cursor = batch.end_cursor;
        page += 1;
    }
}

/// Append one comment, denormalizing the thread's anchor onto it.
fn append_comment(thread: &mut ReviewThread, side: DiffSide, node: ThreadCommentNode) {
    thread.comments.push(Comment {
        id: node.id,
        author: node.author,
        body: node.body,
        created_at: node.created_at,
        html_url: node.url,
        path: thread.file.clone(),
        side,
        line_new: thread.line_new,
        line_old: thread.line_old,
        is_reply: node.reply_to.is_some(),
    });

    // Only the opening comment supplies the representative hunk;
    // later comments never overwrite it.
    if thread.comments.len() == 1 && !node.diff_hunk.is_empty() {
        thread.diff_hunk = Some(node.diff_hunk);
    }
}
