//! Abstract source of pull request review feedback.
//!
//! This crate defines the paginated fetch capability the thread
//! aggregation engine consumes, plus the wire-shaped types those
//! queries return. No network code lives here: a transport implements
//! [`ReviewSource`] and gets injected by the embedding application.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │              ReviewSource trait                  │
//! │  - fetch_threads_page()                          │
//! │  - fetch_thread_comments_page()                  │
//! │  - fetch_general_comments_page()                 │
//! └─────────────────────────────────────────────────┘
//!                        ▲
//!        ┌───────────────┴───────────────┐
//!        │                               │
//! ┌─────────────────┐         ┌─────────────────────┐
//! │ GraphQL/REST    │         │ fixtures, replays,  │
//! │ transport       │         │ caching decorators  │
//! └─────────────────┘         └─────────────────────┘
//! ```

pub mod source;
pub mod types;

pub use source::ReviewSource;
pub use types::{GeneralCommentNode, Page, ReviewComment, ThreadCommentNode, ThreadNode};
