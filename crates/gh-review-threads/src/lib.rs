//! Review thread aggregation for pull requests.
//!
//! Drains a paginated [`ReviewSource`](gh_review_client::ReviewSource)
//! into complete, filtered review threads, imposes a deterministic
//! order, and derives summary counts. A parallel flat path annotates
//! already-fetched REST review comments against their diff hunks.
//!
//! The crate never talks to the network itself; the embedding
//! application injects the transport as a `ReviewSource`
//! implementation.
//!
//! # Example
//!
//! ```rust,ignore
//! use gh_review_threads::{fetch_review_feed, FetchOptions};
//!
//! let options = FetchOptions {
//!     include_general: true,
//!     ..Default::default()
//! };
//! let feed = fetch_review_feed(&source, "octo", "widgets", 42, options).await?;
//!
//! println!(
//!     "{} unresolved threads across {} files",
//!     feed.summary.unresolved_threads,
//!     feed.summary.files_affected.len(),
//! );
//! for thread in &feed.threads {
//!     println!("{}: {} comments", thread.file, thread.comments.len());
//! }
//! ```

pub mod aggregate;
pub mod annotate;
pub mod error;
pub mod model;
pub mod options;
pub mod order;
pub mod summary;

pub use aggregate::{collect_general_comments, collect_threads, fetch_review_feed, resolve_line};
pub use annotate::{annotate_comment, annotate_comments, comment_feed};
pub use error::FetchError;
pub use model::{
    AnchoredComment, Comment, CommentFeed, CommentSummary, GeneralComment, ReviewFeed,
    ReviewSummary, ReviewThread,
};
pub use options::FetchOptions;
pub use order::{sort_anchored_comments, sort_threads};
pub use summary::{comment_summary, review_summary};
