use serde::{Deserialize, Serialize};

/// The closed set of inline styles a fragment can carry.
///
/// `Image` and `Link` are the only kinds for which a fragment's
/// `destination` is meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FragmentKind {
    /// Unstyled text between recognized constructs.
    Plain,
    /// Bold text (`**`-delimited).
    Bold,
    /// Italic text (`*`-delimited).
    Italic,
    /// Inline code (backtick-delimited).
    Code,
    /// An image; `text` holds the alt text, `destination` the source URL.
    Image,
    /// A link; `text` holds the anchor text, `destination` the target URL.
    Link,
}

/// A typed, immutable run of inline text.
///
/// Fragments are produced by the splitting passes and never mutated after
/// construction; each pass allocates fresh fragments for its output. Two
/// fragments are equal iff text, kind, and destination all match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fragment {
    /// Literal text content, or the label (alt/anchor) for image and link.
    pub text: String,
    pub kind: FragmentKind,
    /// Target URL for `Image` and `Link` fragments; `None` otherwise.
    pub destination: Option<String>,
}

impl Fragment {
    /// Creates a plain-text fragment.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::styled(text, FragmentKind::Plain)
    }

    /// Creates a fragment of the given kind with no destination.
    pub fn styled(text: impl Into<String>, kind: FragmentKind) -> Self {
        Self {
            text: text.into(),
            kind,
            destination: None,
        }
    }

    /// Creates an image fragment from alt text and source URL.
    pub fn image(alt: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: alt.into(),
            kind: FragmentKind::Image,
            destination: Some(url.into()),
        }
    }

    /// Creates a link fragment from anchor text and target URL.
    pub fn link(anchor: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: anchor.into(),
            kind: FragmentKind::Link,
            destination: Some(url.into()),
        }
    }
}
