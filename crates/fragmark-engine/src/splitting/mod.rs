//! # Splitting Passes
//!
//! Each pass consumes a fragment sequence and produces a new one,
//! recognizing exactly one syntax form. Passes only inspect plain fragments;
//! anything already typed passes through untouched.
//!
//! ## Modules
//!
//! - **`delimiter`**: `split_by_delimiter()` for wrapping-character styles
//!   (bold, italic, code)
//! - **`brackets`**: `split_images()` / `split_links()` for `![...](...)`
//!   and `[...](...)` syntax
//!
//! ## Ordering
//!
//! Pass order is load-bearing: delimiter passes must run before bracket
//! passes, and image splitting before link splitting, because the link
//! pattern alone would also match inside image syntax. The pipeline in
//! [`crate::pipeline`] encodes the one valid order.

pub mod brackets;
pub mod delimiter;

pub use brackets::{split_images, split_links};
pub use delimiter::split_by_delimiter;

/// Failure raised by the delimiter pass.
///
/// The bracket passes and the extractors are infallible; this is the only
/// error the tokenizer produces.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SplitError {
    /// A plain fragment contained an odd number of delimiter occurrences,
    /// leaving one unterminated styled run.
    #[error("unmatched delimiter {delimiter:?} in {text:?}")]
    UnmatchedDelimiter { delimiter: String, text: String },
}
