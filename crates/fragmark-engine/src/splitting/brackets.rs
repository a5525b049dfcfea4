use log::trace;

use crate::extract::{extract_images, extract_links};
use crate::fragment::{Fragment, FragmentKind};

/// Splits plain fragments on `![alt](url)` image syntax.
///
/// Each extracted image becomes an image fragment; the text around it stays
/// plain. Empty gaps before, between, and after matches are dropped. Plain
/// fragments without image syntax, and non-plain fragments, pass through
/// unchanged.
pub fn split_images(fragments: &[Fragment]) -> Vec<Fragment> {
    split_on_captures(fragments, extract_images, "!", |alt, url| {
        Fragment::image(alt, url)
    })
}

/// Splits plain fragments on `[anchor](url)` link syntax.
///
/// Same algorithm as [`split_images`]. Must run after image splitting: the
/// link extractor also matches the tail of image syntax, and only the
/// pipeline ordering prevents an image being re-captured as a link.
pub fn split_links(fragments: &[Fragment]) -> Vec<Fragment> {
    split_on_captures(fragments, extract_links, "", |anchor, url| {
        Fragment::link(anchor, url)
    })
}

/// Shared capture-walking splitter for the two bracket styles.
///
/// Re-locates each extracted capture as a literal substring, searching
/// forward from the end of the previous match so repeated identical markup
/// is consumed once each, left to right.
fn split_on_captures(
    fragments: &[Fragment],
    extract: fn(&str) -> Vec<(String, String)>,
    prefix: &str,
    make: fn(String, String) -> Fragment,
) -> Vec<Fragment> {
    let mut out = Vec::with_capacity(fragments.len());

    for fragment in fragments {
        if fragment.kind != FragmentKind::Plain {
            out.push(fragment.clone());
            continue;
        }

        let captures = extract(&fragment.text);
        if captures.is_empty() {
            out.push(fragment.clone());
            continue;
        }
        trace!("{} capture(s) in {:?}", captures.len(), fragment.text);

        let text = &fragment.text;
        let mut cursor = 0;
        for (label, destination) in captures {
            let markup = format!("{prefix}[{label}]({destination})");
            let Some(offset) = text[cursor..].find(&markup) else {
                continue;
            };
            let start = cursor + offset;
            if start > cursor {
                out.push(Fragment::plain(&text[cursor..start]));
            }
            cursor = start + markup.len();
            out.push(make(label, destination));
        }
        if cursor < text.len() {
            out.push(Fragment::plain(&text[cursor..]));
        }
    }

    out
}
