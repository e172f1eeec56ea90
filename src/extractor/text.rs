//! Text normalization and HTML stripping.
//!
//! Keyword matching must be case- and diacritic-insensitive: Vietnamese
//! input routinely mixes toned and untoned spellings of the same word, so
//! both sides of every comparison go through `normalize_vietnamese` first.

use regex::Regex;
use std::sync::OnceLock;

/// Fold a single lowercase Vietnamese character to its base Latin letter.
///
/// Covers every tonal variant of a/e/i/o/u/y plus đ. Anything outside the
/// table passes through unchanged.
fn fold_vietnamese_char(c: char) -> char {
    match c {
        'à' | 'á' | 'ạ' | 'ả' | 'ã' | 'â' | 'ầ' | 'ấ' | 'ậ' | 'ẩ' | 'ẫ' | 'ă' | 'ằ' | 'ắ'
        | 'ặ' | 'ẳ' | 'ẵ' => 'a',
        'è' | 'é' | 'ẹ' | 'ẻ' | 'ẽ' | 'ê' | 'ề' | 'ế' | 'ệ' | 'ể' | 'ễ' => 'e',
        'ì' | 'í' | 'ị' | 'ỉ' | 'ĩ' => 'i',
        'ò' | 'ó' | 'ọ' | 'ỏ' | 'õ' | 'ô' | 'ồ' | 'ố' | 'ộ' | 'ổ' | 'ỗ' | 'ơ' | 'ờ' | 'ớ'
        | 'ợ' | 'ở' | 'ỡ' => 'o',
        'ù' | 'ú' | 'ụ' | 'ủ' | 'ũ' | 'ư' | 'ừ' | 'ứ' | 'ự' | 'ử' | 'ữ' => 'u',
        'ỳ' | 'ý' | 'ỵ' | 'ỷ' | 'ỹ' => 'y',
        'đ' => 'd',
        _ => c,
    }
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Lowercase, strip Vietnamese diacritics and collapse whitespace.
///
/// Total over all strings, including the empty string.
pub fn normalize_vietnamese(s: &str) -> String {
    let folded: String = s.to_lowercase().chars().map(fold_vietnamese_char).collect();
    collapse_whitespace(&folded)
}

/// Reduce HTML markup to plain text.
///
/// Script and style blocks go first so invisible text is never counted,
/// then remaining tags become spaces, whitespace is collapsed and `&nbsp;`
/// entities turn into literal spaces. Idempotent on already-plain text.
pub fn strip_html(html: &str) -> String {
    if html.is_empty() {
        return String::new();
    }

    static SCRIPT_RE: OnceLock<Regex> = OnceLock::new();
    static STYLE_RE: OnceLock<Regex> = OnceLock::new();
    static TAG_RE: OnceLock<Regex> = OnceLock::new();
    let script_re =
        SCRIPT_RE.get_or_init(|| Regex::new(r"(?is)<script[^>]*>.*?</script>").unwrap());
    let style_re = STYLE_RE.get_or_init(|| Regex::new(r"(?is)<style[^>]*>.*?</style>").unwrap());
    let tag_re = TAG_RE.get_or_init(|| Regex::new(r"<[^>]+>").unwrap());

    let no_script = script_re.replace_all(html, "");
    let no_style = style_re.replace_all(&no_script, "");
    let no_tags = tag_re.replace_all(&no_style, " ");
    // &nbsp; is replaced after collapsing, matching how editors emit it
    let collapsed = collapse_whitespace(&no_tags);
    collapsed.replace("&nbsp;", " ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_diacritics_and_case() {
        assert_eq!(normalize_vietnamese("Xe Máy Điện"), "xe may dien");
        assert_eq!(normalize_vietnamese("TUYỆT VỜI"), "tuyet voi");
        assert_eq!(normalize_vietnamese("được"), "duoc");
    }

    #[test]
    fn test_normalize_collapses_whitespace() {
        assert_eq!(normalize_vietnamese("  xe   máy\tđiện \n"), "xe may dien");
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize_vietnamese(""), "");
        assert_eq!(normalize_vietnamese("   "), "");
    }

    #[test]
    fn test_normalize_passes_through_ascii() {
        assert_eq!(normalize_vietnamese("VinFast Klara S"), "vinfast klara s");
    }

    #[test]
    fn test_strip_html_removes_tags() {
        assert_eq!(
            strip_html("<p>Xe máy <strong>điện</strong></p>"),
            "Xe máy điện"
        );
    }

    #[test]
    fn test_strip_html_drops_script_and_style() {
        let html = "<p>Nội dung</p><script>var x = '<b>bold</b>';</script><style>p { color: red }</style>";
        assert_eq!(strip_html(html), "Nội dung");
    }

    #[test]
    fn test_strip_html_script_spans_lines() {
        let html = "<p>a</p><script type=\"text/javascript\">\nalert(1);\n</script><p>b</p>";
        assert_eq!(strip_html(html), "a b");
    }

    #[test]
    fn test_strip_html_nbsp_becomes_space() {
        assert_eq!(strip_html("a&nbsp;b"), "a b");
    }

    #[test]
    fn test_strip_html_idempotent_on_plain_text() {
        let plain = "Một đoạn văn bình thường.";
        assert_eq!(strip_html(plain), plain);
        assert_eq!(strip_html(&strip_html(plain)), plain);
    }

    #[test]
    fn test_strip_html_empty() {
        assert_eq!(strip_html(""), "");
    }
}
