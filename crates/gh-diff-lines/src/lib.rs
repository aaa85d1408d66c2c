//! GitHub Diff Line Correlation
//!
//! A library for parsing the diff hunks attached to pull request review
//! comments and resolving which changed line a comment refers to.
//!
//! # Example
//!
//! ```
//! use gh_diff_lines::{comment_lines, context_phrase, correlate, parse_hunk, DiffSide};
//!
//! let hunk = "@@ -10,3 +20,3 @@\n context\n-old value\n+new value";
//! let parsed = parse_hunk(hunk)?;
//!
//! // A comment on line 21 of the new file side.
//! let (line_new, line_old) = comment_lines(DiffSide::Right, Some(21), None);
//! let found = correlate(&parsed.records, line_new, line_old);
//!
//! assert_eq!(found.content.as_deref(), Some("new value"));
//! assert_eq!(context_phrase(found.change, line_new, line_old), "New line 21 added");
//! # Ok::<(), gh_diff_lines::ParseError>(())
//! ```

mod types;
mod parser;
mod correlate;

pub use types::*;
pub use parser::{parse_hunk, ParseError};
pub use correlate::{comment_lines, context_phrase, correlate, LineMatch};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_correlate_flow() {
        let hunk = "@@ -1,3 +1,4 @@\n fn main() {\n+    init_logging();\n     run();\n }";
        let parsed = parse_hunk(hunk).unwrap();

        let (line_new, line_old) = comment_lines(DiffSide::Right, Some(2), None);
        let found = correlate(&parsed.records, line_new, line_old);

        assert_eq!(found.change, ChangeKind::Addition);
        assert_eq!(found.content.as_deref(), Some("    init_logging();"));
        assert_eq!(context_phrase(found.change, line_new, line_old), "New line 2 added");
    }
}
