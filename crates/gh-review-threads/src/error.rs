//! Aggregation errors.

use thiserror::Error;

/// Errors raised while draining paginated review data.
///
/// Every variant names the query that failed and the 1-based page it
/// failed on, so a partial drain is never mistaken for a complete one.
/// The `cause` is whatever the injected [`ReviewSource`] surfaced.
///
/// [`ReviewSource`]: gh_review_client::ReviewSource
#[derive(Debug, Error)]
pub enum FetchError {
    /// The review thread list query failed.
    #[error("review threads query failed on page {page}: {cause}")]
    Threads { page: usize, cause: anyhow::Error },

    /// A thread-scoped comment continuation query failed.
    #[error("comments query for thread {thread_id} failed on page {page}: {cause}")]
    ThreadComments {
        thread_id: String,
        page: usize,
        cause: anyhow::Error,
    },

    /// The general PR comment list query failed.
    #[error("general comments query failed on page {page}: {cause}")]
    GeneralComments { page: usize, cause: anyhow::Error },
}
