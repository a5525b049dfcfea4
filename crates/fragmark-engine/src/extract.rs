//! Pattern extraction for bracket-based inline syntax.
//!
//! Both extractors return `(label, destination)` capture pairs in
//! left-to-right order of first occurrence, duplicates preserved. Absence of
//! matches is a normal result, never an error.

use std::sync::OnceLock;

use regex::Regex;

fn image_regex() -> &'static Regex {
    static IMAGE_REGEX: OnceLock<Regex> = OnceLock::new();
    IMAGE_REGEX
        .get_or_init(|| Regex::new(r"!\[([^\]]*)\]\(([^)]+)\)").expect("Invalid image regex"))
}

fn link_regex() -> &'static Regex {
    static LINK_REGEX: OnceLock<Regex> = OnceLock::new();
    LINK_REGEX.get_or_init(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("Invalid link regex"))
}

/// Extracts `![alt](url)` image captures from `text`.
///
/// Alt text may be empty; the URL must be non-empty. Matching is non-greedy
/// within each bracket/paren pair (alt excludes `]`, url excludes `)`).
pub fn extract_images(text: &str) -> Vec<(String, String)> {
    image_regex()
        .captures_iter(text)
        .map(|caps| (caps[1].to_string(), caps[2].to_string()))
        .collect()
}

/// Extracts `[anchor](url)` link captures from `text`.
///
/// The pattern does not exclude a preceding `!`, so it also matches the tail
/// of image syntax. Callers run image splitting before link splitting; that
/// pipeline ordering, not the pattern, keeps images out of link results.
pub fn extract_links(text: &str) -> Vec<(String, String)> {
    link_regex()
        .captures_iter(text)
        .map(|caps| (caps[1].to_string(), caps[2].to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn extract_single_image() {
        let pairs = extract_images("This is text with an ![image](https://i.imgur.com/zjjcJKZ.png)");
        assert_eq!(
            pairs,
            vec![("image".to_string(), "https://i.imgur.com/zjjcJKZ.png".to_string())]
        );
    }

    #[test]
    fn extract_images_in_order() {
        let pairs = extract_images("![rick roll](https://i.imgur.com/aKaOqIh.gif) and ![obi wan](https://i.imgur.com/fJRm4Vk.jpeg)");
        assert_eq!(
            pairs,
            vec![
                ("rick roll".to_string(), "https://i.imgur.com/aKaOqIh.gif".to_string()),
                ("obi wan".to_string(), "https://i.imgur.com/fJRm4Vk.jpeg".to_string()),
            ]
        );
    }

    #[test]
    fn extract_images_preserves_duplicates() {
        let pairs = extract_images("![a](u) then ![a](u)");
        assert_eq!(
            pairs,
            vec![
                ("a".to_string(), "u".to_string()),
                ("a".to_string(), "u".to_string()),
            ]
        );
    }

    #[test]
    fn extract_image_with_empty_alt() {
        let pairs = extract_images("decorative: ![](https://example.com/x.png)");
        assert_eq!(
            pairs,
            vec![(String::new(), "https://example.com/x.png".to_string())]
        );
    }

    #[test]
    fn extract_links_in_order() {
        let pairs = extract_links(
            "This is text with a [link](https://boot.dev) and [another link](https://blog.boot.dev)",
        );
        assert_eq!(
            pairs,
            vec![
                ("link".to_string(), "https://boot.dev".to_string()),
                ("another link".to_string(), "https://blog.boot.dev".to_string()),
            ]
        );
    }

    #[test]
    fn link_pattern_also_matches_inside_image_syntax() {
        // Intentional: separation of images from links is the pipeline's job.
        let pairs = extract_links("![alt](https://example.com/pic.png)");
        assert_eq!(
            pairs,
            vec![("alt".to_string(), "https://example.com/pic.png".to_string())]
        );
    }

    #[test]
    fn no_matches_yield_empty() {
        assert_eq!(extract_images("no images here"), vec![]);
        assert_eq!(extract_links("no links here"), vec![]);
    }

    #[test]
    fn unbalanced_brackets_are_not_matches() {
        assert_eq!(extract_images("![dangling](no close"), vec![]);
        assert_eq!(extract_links("[danglingalone"), vec![]);
    }
}
