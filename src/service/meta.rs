//! Meta-field length hints and the search snippet preview.
//!
//! Length limits follow what Google actually displays: titles truncate
//! around 60 characters, descriptions around 160.

use serde::{Deserialize, Serialize};

pub const TITLE_MAX: usize = 60;
pub const TITLE_RECOMMENDED: &str = "50–60";
pub const DESCRIPTION_MAX: usize = 160;
pub const DESCRIPTION_RECOMMENDED: &str = "150–160";

const PLACEHOLDER_TITLE: &str = "Tiêu đề trang";
const PLACEHOLDER_DESCRIPTION: &str = "Mô tả sẽ hiển thị tại đây.";

/// Which meta field a hint describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetaField {
    Title,
    Description,
}

/// Length evaluation of a single meta field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetaLengthHint {
    pub field: MetaField,
    pub length: usize,
    pub max: usize,
    pub recommended: &'static str,
    pub over_limit: bool,
}

/// Evaluate the length of a meta title or description, in characters.
pub fn meta_length_hint(value: &str, field: MetaField) -> MetaLengthHint {
    let (max, recommended) = match field {
        MetaField::Title => (TITLE_MAX, TITLE_RECOMMENDED),
        MetaField::Description => (DESCRIPTION_MAX, DESCRIPTION_RECOMMENDED),
    };
    let length = value.chars().count();
    MetaLengthHint {
        field,
        length,
        max,
        recommended,
        over_limit: length > max,
    }
}

/// How a draft would render as a search result snippet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SnippetPreview {
    pub title: String,
    pub description: String,
    pub url: String,
}

/// Build the snippet preview, falling back to placeholder text for blank
/// fields and joining base URL and path with a single slash.
pub fn snippet_preview(title: &str, description: &str, path: &str, base_url: &str) -> SnippetPreview {
    let title = title.trim();
    let description = description.trim();
    let url = if path.starts_with('/') {
        format!("{}{}", base_url, path)
    } else {
        format!("{}/{}", base_url, path)
    };
    SnippetPreview {
        title: if title.is_empty() {
            PLACEHOLDER_TITLE.to_string()
        } else {
            title.to_string()
        },
        description: if description.is_empty() {
            PLACEHOLDER_DESCRIPTION.to_string()
        } else {
            description.to_string()
        },
        url,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_within_limit() {
        let hint = meta_length_hint("Xe máy điện VinFast Klara S chính hãng", MetaField::Title);
        assert_eq!(hint.length, 38);
        assert!(!hint.over_limit);
        assert_eq!(hint.recommended, "50–60");
    }

    #[test]
    fn test_title_over_limit() {
        let hint = meta_length_hint(&"a".repeat(61), MetaField::Title);
        assert!(hint.over_limit);
        assert_eq!(hint.max, 60);
    }

    #[test]
    fn test_description_boundary() {
        assert!(!meta_length_hint(&"a".repeat(160), MetaField::Description).over_limit);
        assert!(meta_length_hint(&"a".repeat(161), MetaField::Description).over_limit);
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        let hint = meta_length_hint("xe máy điện", MetaField::Title);
        assert_eq!(hint.length, 11);
    }

    #[test]
    fn test_snippet_preview_placeholders() {
        let preview = snippet_preview("  ", "", "/news/ra-mat", "https://example.com");
        assert_eq!(preview.title, "Tiêu đề trang");
        assert_eq!(preview.description, "Mô tả sẽ hiển thị tại đây.");
        assert_eq!(preview.url, "https://example.com/news/ra-mat");
    }

    #[test]
    fn test_snippet_preview_adds_missing_slash() {
        let preview = snippet_preview("T", "D", "products/klara-s", "https://example.com");
        assert_eq!(preview.url, "https://example.com/products/klara-s");
    }
}
