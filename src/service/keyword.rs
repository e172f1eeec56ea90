//! Focus-keyword resolution, occurrence counting and density.

use crate::extractor::text::normalize_vietnamese;

/// Lower bound of the healthy keyword-density range, in percent.
pub const DENSITY_MIN_PERCENT: f64 = 0.5;
/// Upper bound of the healthy keyword-density range, in percent.
pub const DENSITY_MAX_PERCENT: f64 = 2.5;

/// The keyword a report is scored against, plus whether it was inferred
/// rather than user-entered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusKeyword {
    pub keyword: String,
    pub suggested: bool,
}

/// Pick the focus keyword for scoring.
///
/// An explicit keyword (trimmed) wins. Otherwise fall back to the first
/// comma-separated entry of the keyword list, then to the first four words
/// of the title, then to empty. Any fallback marks the keyword as
/// suggested so the UI can label it as inferred.
pub fn resolve_focus_keyword(raw: &str, keywords: &str, h1_title: &str) -> FocusKeyword {
    let trimmed = raw.trim();
    if !trimmed.is_empty() {
        return FocusKeyword {
            keyword: trimmed.to_string(),
            suggested: false,
        };
    }

    let first_entry = keywords.split(',').next().unwrap_or("").trim();
    let keyword = if !first_entry.is_empty() {
        first_entry.to_string()
    } else {
        h1_title
            .split_whitespace()
            .take(4)
            .collect::<Vec<_>>()
            .join(" ")
    };

    FocusKeyword {
        keyword,
        suggested: true,
    }
}

/// Count non-overlapping occurrences of `keyword` in `text`, comparing
/// normalized forms so toned and untoned spellings match. The keyword is
/// always treated as a literal, never as a pattern.
pub fn count_keyword_occurrences(text: &str, keyword: &str) -> usize {
    if keyword.is_empty() {
        return 0;
    }
    let norm_text = normalize_vietnamese(text);
    let norm_keyword = normalize_vietnamese(keyword);
    if norm_keyword.is_empty() {
        return 0;
    }
    norm_text.matches(norm_keyword.as_str()).count()
}

/// Does the keyword appear in the leading 10% of the text?
///
/// The window is `max(1, floor(chars * 0.1))` characters; empty text or
/// keyword yields false.
pub fn keyword_in_first_10_percent(full_text: &str, keyword: &str) -> bool {
    if keyword.is_empty() || full_text.is_empty() {
        return false;
    }
    let total = full_text.chars().count();
    let window = std::cmp::max(1, (total as f64 * 0.1).floor() as usize);
    let first_part: String = full_text.chars().take(window).collect();
    count_keyword_occurrences(&first_part, keyword) > 0
}

/// Keyword density over `text`, in percent.
///
/// Each occurrence is weighted by `max(1, word_count * 5)` characters, so
/// multi-word keywords count more heavily per hit. This multiplier is a
/// fixed heuristic, not a token ratio.
pub fn keyword_density_percent(text: &str, keyword: &str) -> f64 {
    let char_count = text.chars().count();
    if char_count == 0 || keyword.is_empty() {
        return 0.0;
    }
    let occurrences = count_keyword_occurrences(text, keyword);
    let keyword_words = keyword.split_whitespace().count();
    let weight = std::cmp::max(1, keyword_words * 5);
    (occurrences * weight) as f64 / char_count as f64 * 100.0
}
