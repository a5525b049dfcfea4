//! # fragmark-engine
//!
//! Tokenizes inline Markdown into a flat sequence of typed [`Fragment`]s
//! (plain, bold, italic, code, image, link) for a downstream renderer to
//! consume. The entry point is [`text_to_fragments`]; the individual
//! splitting passes are exposed for callers that need finer control.

pub mod extract;
pub mod fragment;
pub mod pipeline;
pub mod splitting;

// Re-export key types for easier usage
pub use extract::{extract_images, extract_links};
pub use fragment::{Fragment, FragmentKind};
pub use pipeline::text_to_fragments;
pub use splitting::{SplitError, split_by_delimiter, split_images, split_links};
