//! Review feedback source trait
//!
//! This module defines the paginated queries an aggregation run
//! consumes. Concrete implementations (GraphQL transport, fixtures,
//! caching decorators) are supplied by the embedding application.

use crate::types::{GeneralCommentNode, Page, ThreadCommentNode, ThreadNode};
use async_trait::async_trait;

/// Paginated source of pull request review feedback
///
/// Each operation returns one page per call; callers drive the cursor
/// loop and keep requesting pages until `has_next_page` is false.
/// Request timeouts are the implementation's responsibility; callers
/// only sequence the calls.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` to allow sharing across
/// async tasks and threads.
///
/// # Example
///
/// ```rust,ignore
/// use gh_review_client::{Page, ReviewSource, ThreadNode};
///
/// async fn first_page(source: &dyn ReviewSource) -> anyhow::Result<Page<ThreadNode>> {
///     source.fetch_threads_page("rust-lang", "rust", 123, None).await
/// }
/// ```
#[async_trait]
pub trait ReviewSource: Send + Sync {
    /// Fetch one page of review threads for a pull request
    ///
    /// # Arguments
    ///
    /// * `owner` - Repository owner (user or organization)
    /// * `repo` - Repository name
    /// * `pr_number` - Pull request number
    /// * `cursor` - Resume position from the previous page, `None` for the first
    ///
    /// # Returns
    ///
    /// The next page of thread nodes, each carrying the first page of
    /// its own comments.
    async fn fetch_threads_page(
        &self,
        owner: &str,
        repo: &str,
        pr_number: u64,
        cursor: Option<&str>,
    ) -> anyhow::Result<Page<ThreadNode>>;

    /// Fetch one page of comments for a single review thread
    ///
    /// Used when a thread holds more comments than its embedded first
    /// page. The continuation is scoped by thread id and independent
    /// of the thread list cursor.
    ///
    /// # Arguments
    ///
    /// * `thread_id` - Id of the thread to continue
    /// * `cursor` - Resume position from the previous page
    ///
    /// # Returns
    ///
    /// The next page of comment nodes for that thread.
    async fn fetch_thread_comments_page(
        &self,
        thread_id: &str,
        cursor: Option<&str>,
    ) -> anyhow::Result<Page<ThreadCommentNode>>;

    /// Fetch one page of PR-level comments without a file anchor
    ///
    /// # Arguments
    ///
    /// * `owner` - Repository owner
    /// * `repo` - Repository name
    /// * `pr_number` - Pull request number
    /// * `cursor` - Resume position from the previous page, `None` for the first
    ///
    /// # Returns
    ///
    /// The next page of general comment nodes.
    async fn fetch_general_comments_page(
        &self,
        owner: &str,
        repo: &str,
        pr_number: u64,
        cursor: Option<&str>,
    ) -> anyhow::Result<Page<GeneralCommentNode>>;
}
