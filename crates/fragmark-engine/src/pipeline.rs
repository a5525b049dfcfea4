//! The full tokenizing pipeline.
//!
//! Composes the five splitting passes in the one order that works:
//! bold, then italic, then code, then images, then links. Bold before italic
//! keeps `**` from being eaten as two empty `*` runs; images before links
//! keeps `![...](...)` from being mis-captured as a link.

use log::debug;

use crate::fragment::{Fragment, FragmentKind};
use crate::splitting::{SplitError, split_by_delimiter, split_images, split_links};

/// Delimiter passes in application order.
const DELIMITER_PASSES: [(&str, FragmentKind); 3] = [
    ("**", FragmentKind::Bold),
    ("*", FragmentKind::Italic),
    ("`", FragmentKind::Code),
];

/// Tokenizes raw inline text into typed fragments.
///
/// Starts from a single plain fragment and applies every splitting pass.
/// This is the entry point the surrounding document-assembly layer calls.
///
/// # Errors
///
/// Returns [`SplitError::UnmatchedDelimiter`] if any delimiter style is
/// unterminated in the input.
pub fn text_to_fragments(text: &str) -> Result<Vec<Fragment>, SplitError> {
    let mut fragments = vec![Fragment::plain(text)];
    for (delimiter, kind) in DELIMITER_PASSES {
        fragments = split_by_delimiter(&fragments, delimiter, kind)?;
    }
    let fragments = split_links(&split_images(&fragments));
    debug!("tokenized {} byte(s) into {} fragment(s)", text.len(), fragments.len());
    Ok(fragments)
}
