//! Structural extraction from editor-generated HTML.
//!
//! These walkers are regex based, which is enough for the bounded markup a
//! rich-text editor emits (p, h1-h3, img). They are not a general HTML
//! parser and make no attempt to handle adversarial input.

use fancy_regex::Regex as FancyRegex;
use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

use super::text::strip_html;

/// A heading found in body HTML, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Heading {
    pub level: u8,
    pub text: String,
}

/// An `<img>` tag found in body HTML, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ImageTag {
    pub has_alt: bool,
}

/// Split HTML into plain-text paragraphs.
///
/// Fragments are delimited by `</p>`, an opening `<p...>` or blank lines;
/// each fragment is tag-stripped and empty fragments are dropped.
pub fn paragraphs_from_html(html: &str) -> Vec<String> {
    if html.is_empty() {
        return Vec::new();
    }
    static SPLIT_RE: OnceLock<Regex> = OnceLock::new();
    let split_re = SPLIT_RE.get_or_init(|| Regex::new(r"(?i)</p>|<p[^>]*>|\n\n+").unwrap());
    split_re
        .split(html)
        .map(strip_html)
        .filter(|p| !p.is_empty())
        .collect()
}

/// Split plain text into trimmed, non-empty sentences on `.`, `!`, `?`.
pub fn sentences(text: &str) -> Vec<String> {
    static SENTENCE_RE: OnceLock<Regex> = OnceLock::new();
    let sentence_re = SENTENCE_RE.get_or_init(|| Regex::new(r"[.!?]+").unwrap());
    sentence_re
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Extract `<h1>`-`<h3>` headings in document order, markup stripped.
///
/// The closing tag must match the opening level, so the pattern needs a
/// backreference and runs on fancy-regex.
pub fn parse_headings(html: &str) -> Vec<Heading> {
    static HEADING_RE: OnceLock<FancyRegex> = OnceLock::new();
    let heading_re = HEADING_RE
        .get_or_init(|| FancyRegex::new(r"(?is)<h([1-3])[^>]*>(.*?)</h\1>").unwrap());

    heading_re
        .captures_iter(html)
        .filter_map(|caps| caps.ok())
        .filter_map(|caps| {
            let level: u8 = caps.get(1)?.as_str().parse().ok()?;
            let text = strip_html(caps.get(2).map(|m| m.as_str()).unwrap_or(""));
            Some(Heading { level, text })
        })
        .collect()
}

/// Scan `<img>` tags in document order, flagging which carry a non-empty
/// `alt` attribute.
pub fn images_in_html(html: &str) -> Vec<ImageTag> {
    static IMG_RE: OnceLock<Regex> = OnceLock::new();
    static ALT_RE: OnceLock<Regex> = OnceLock::new();
    let img_re = IMG_RE.get_or_init(|| Regex::new(r"(?i)<img[^>]+>").unwrap());
    let alt_re = ALT_RE.get_or_init(|| Regex::new(r#"(?i)alt\s*=\s*["']([^"']*)["']"#).unwrap());

    img_re
        .find_iter(html)
        .map(|tag| {
            let has_alt = alt_re
                .captures(tag.as_str())
                .and_then(|caps| caps.get(1))
                .map(|alt| !alt.as_str().trim().is_empty())
                .unwrap_or(false);
            ImageTag { has_alt }
        })
        .collect()
}
