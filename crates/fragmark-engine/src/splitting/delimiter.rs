use log::debug;

use crate::fragment::{Fragment, FragmentKind};

use super::SplitError;

/// Splits plain fragments on a literal wrapping delimiter.
///
/// Pieces alternate plain/`kind` starting with plain: a text like
/// `"a **b** c"` split on `**` yields plain `"a "`, bold `"b"`, plain
/// `" c"`. Empty pieces are emitted, not dropped, so `"**b**"` yields an
/// empty plain fragment on each side. Fragments that are not plain, or whose
/// text contains no delimiter, pass through unchanged.
///
/// # Errors
///
/// Returns [`SplitError::UnmatchedDelimiter`] if any plain fragment contains
/// an odd number of delimiter occurrences. Parity is checked before anything
/// is emitted for that fragment, so a failing call produces no partial
/// output.
pub fn split_by_delimiter(
    fragments: &[Fragment],
    delimiter: &str,
    kind: FragmentKind,
) -> Result<Vec<Fragment>, SplitError> {
    let mut out = Vec::with_capacity(fragments.len());

    for fragment in fragments {
        if fragment.kind != FragmentKind::Plain {
            out.push(fragment.clone());
            continue;
        }

        let pieces: Vec<&str> = fragment.text.split(delimiter).collect();
        if pieces.len() == 1 {
            out.push(fragment.clone());
            continue;
        }

        // n delimiter occurrences yield n + 1 pieces; an even piece count
        // means an odd occurrence count, i.e. an unterminated run.
        if pieces.len() % 2 == 0 {
            debug!(
                "unmatched {delimiter:?} ({} occurrences) in {:?}",
                pieces.len() - 1,
                fragment.text
            );
            return Err(SplitError::UnmatchedDelimiter {
                delimiter: delimiter.to_string(),
                text: fragment.text.clone(),
            });
        }

        for (i, piece) in pieces.iter().enumerate() {
            let piece_kind = if i % 2 == 0 { FragmentKind::Plain } else { kind };
            out.push(Fragment::styled(*piece, piece_kind));
        }
    }

    Ok(out)
}
