//! Readability heuristics for Vietnamese prose.

use regex::Regex;
use std::sync::OnceLock;

use crate::extractor::structure::sentences;
use crate::extractor::text::normalize_vietnamese;

/// Connector phrases that mark a sentence as transitional.
pub const TRANSITION_WORDS_VI: [&str; 19] = [
    "tuy nhiên",
    "ngoài ra",
    "mặt khác",
    "do đó",
    "vì vậy",
    "như vậy",
    "đồng thời",
    "trước tiên",
    "tiếp theo",
    "cuối cùng",
    "nói cách khác",
    "cụ thể là",
    "ví dụ",
    "tức là",
    "thêm vào đó",
    "hơn nữa",
    "quan trọng hơn",
    "trên thực tế",
    "nhìn chung",
];

/// Count sentences containing at least one transition phrase.
///
/// Both sentence and phrase are normalized first, so toned and untoned
/// spellings match.
pub fn count_transition_sentences(all_sentences: &[String]) -> usize {
    let normalized_phrases: Vec<String> = TRANSITION_WORDS_VI
        .iter()
        .map(|phrase| normalize_vietnamese(phrase))
        .collect();

    all_sentences
        .iter()
        .filter(|sentence| {
            let normalized = normalize_vietnamese(sentence);
            normalized_phrases
                .iter()
                .any(|phrase| normalized.contains(phrase.as_str()))
        })
        .count()
}

/// Count sentences that open with a Vietnamese passive marker.
///
/// A sentence is passive when it starts with "được" or "bị" followed by at
/// least one more token. A marker heuristic, not a grammatical parse.
pub fn count_passive_sentences(all_sentences: &[String]) -> usize {
    static PASSIVE_RE: OnceLock<Regex> = OnceLock::new();
    let passive_re =
        PASSIVE_RE.get_or_init(|| Regex::new(r"(?i)^\s*(được|bị)\s+\S+").unwrap());

    all_sentences
        .iter()
        .filter(|sentence| passive_re.is_match(sentence.trim()))
        .count()
}

/// Count paragraphs with more than three sentences.
pub fn count_long_paragraphs(paragraphs: &[String]) -> usize {
    paragraphs
        .iter()
        .filter(|paragraph| sentences(paragraph).len() > 3)
        .count()
}
