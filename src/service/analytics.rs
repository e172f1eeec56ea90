//! Content analytics surfaced next to the editor: word count, estimated
//! reading time, image count and raw character count.

use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

/// Reading speed used for the time estimate, in words per minute.
const WORDS_PER_MINUTE: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContentAnalytics {
    pub word_count: usize,
    /// Estimated reading time in minutes, never below one
    pub reading_time: usize,
    pub image_count: usize,
    /// Characters of the raw HTML, markup included
    pub character_count: usize,
}

/// Compute analytics for a body of editor HTML.
pub fn content_analytics(html: &str) -> ContentAnalytics {
    static TAG_RE: OnceLock<Regex> = OnceLock::new();
    static IMG_RE: OnceLock<Regex> = OnceLock::new();
    let tag_re = TAG_RE.get_or_init(|| Regex::new(r"<[^>]*>").unwrap());
    let img_re = IMG_RE.get_or_init(|| Regex::new(r"(?i)<img").unwrap());

    let text = tag_re.replace_all(html, " ");
    let word_count = text.split_whitespace().count();
    let reading_time = std::cmp::max(1, word_count.div_ceil(WORDS_PER_MINUTE));
    let image_count = img_re.find_iter(html).count();
    let character_count = html.chars().count();

    ContentAnalytics {
        word_count,
        reading_time,
        image_count,
        character_count,
    }
}
