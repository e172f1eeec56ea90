//! Domain entities for content drafts and their SEO reports.

use serde::{Deserialize, Serialize};

// ====== Enums ======

/// Kind of content being scored. Products render their name as an implicit
/// H1 outside the body HTML, so H1 checks and featured-image weighting
/// differ between the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    News,
    Product,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::News => "news",
            ContentType::Product => "product",
        }
    }
}

// ====== Input ======

/// A content draft as the editor form holds it. All fields may be empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeoScoreInput {
    /// Primary heading / product or article name
    pub h1_title: String,
    /// Body content, may contain HTML markup
    pub content_html: String,
    pub meta_title: String,
    pub meta_description: String,
    /// Comma-separated keyword list
    pub keywords: String,
    /// User-specified target keyword; may be empty
    pub focus_keyword: String,
    #[serde(default)]
    pub featured_image_url: Option<String>,
    #[serde(rename = "type")]
    pub content_type: ContentType,
}

// ====== Report ======

/// Keyword and structure checklist for a draft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeoAnalysis {
    pub focus_keyword: String,
    /// True when the keyword was inferred instead of user-entered
    pub focus_keyword_suggested: bool,
    pub title_has_keyword: bool,
    pub meta_title_has_keyword: bool,
    pub meta_description_has_keyword: bool,
    pub keyword_in_first_10_percent: bool,
    pub heading_structure_valid: bool,
    pub has_h1: bool,
    pub heading_hierarchy_ok: bool,
    pub keyword_density_percent: f64,
    pub keyword_density_recommended: String,
    pub images_with_alt: usize,
    pub images_without_alt: usize,
    pub featured_image_present: bool,
}

/// Readability metrics for a draft. Ratios are rounded integer percentages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadabilityResult {
    pub paragraph_length_ok: bool,
    pub long_paragraph_count: usize,
    pub transition_word_ratio: u32,
    pub transition_word_recommendation: String,
    pub passive_voice_ratio: u32,
    pub passive_voice_recommendation: String,
}

/// Full scoring report, derived purely from one draft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeoReport {
    pub overall_score: u32,
    pub seo_analysis: SeoAnalysis,
    pub readability: ReadabilityResult,
    /// Deduplicated improvement hints, capped at five
    pub suggestions: Vec<String>,
}

/// A single named check suitable for frontend display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuditCheck {
    pub key: &'static str,
    pub label: &'static str,
    pub passed: bool,
    pub value: Option<String>,
}

impl SeoReport {
    /// Return a frontend-friendly breakdown of the checklist, the way the
    /// editor panel renders it. Keyword rows pass vacuously when no focus
    /// keyword is in play.
    pub fn breakdown(&self) -> Vec<AuditCheck> {
        let a = &self.seo_analysis;
        let no_keyword = a.focus_keyword.is_empty();
        let total_images = a.images_with_alt + a.images_without_alt;

        vec![
            AuditCheck {
                key: "keyword_in_title",
                label: "Từ khóa trong tiêu đề (H1)",
                passed: a.title_has_keyword || no_keyword,
                value: None,
            },
            AuditCheck {
                key: "keyword_in_meta_title",
                label: "Từ khóa trong Tiêu đề SEO",
                passed: a.meta_title_has_keyword || no_keyword,
                value: None,
            },
            AuditCheck {
                key: "keyword_in_meta_description",
                label: "Từ khóa trong Mô tả SEO",
                passed: a.meta_description_has_keyword || no_keyword,
                value: None,
            },
            AuditCheck {
                key: "keyword_in_first_10_percent",
                label: "Từ khóa trong 10% đầu nội dung",
                passed: a.keyword_in_first_10_percent || no_keyword,
                value: None,
            },
            AuditCheck {
                key: "heading_structure",
                label: "Cấu trúc heading (H2/H3) hợp lệ",
                passed: a.heading_structure_valid,
                value: None,
            },
            AuditCheck {
                key: "keyword_density",
                label: "Mật độ từ khóa",
                passed: no_keyword
                    || (a.keyword_density_percent >= crate::service::keyword::DENSITY_MIN_PERCENT
                        && a.keyword_density_percent
                            <= crate::service::keyword::DENSITY_MAX_PERCENT),
                value: Some(format!(
                    "{}% (khuyến nghị {})",
                    a.keyword_density_percent, a.keyword_density_recommended
                )),
            },
            AuditCheck {
                key: "image_alt",
                label: "Ảnh có alt",
                passed: a.images_without_alt == 0,
                value: Some(if total_images == 0 {
                    "Không có ảnh trong nội dung".to_string()
                } else {
                    format!("{}/{}", a.images_with_alt, total_images)
                }),
            },
            AuditCheck {
                key: "paragraph_length",
                label: "Đoạn ngắn (dưới 3 câu)",
                passed: self.readability.paragraph_length_ok,
                value: Some(format!("{} đoạn dài", self.readability.long_paragraph_count)),
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::engine::seo_score_engine;
    use crate::test_utils::fixtures;

    #[test]
    fn test_content_type_as_str() {
        assert_eq!(ContentType::News.as_str(), "news");
        assert_eq!(ContentType::Product.as_str(), "product");
    }

    #[test]
    fn test_breakdown_keyword_rows_pass_without_keyword() {
        let report = seo_score_engine(&fixtures::empty_draft(ContentType::News));
        let breakdown = report.breakdown();

        let title_row = breakdown
            .iter()
            .find(|c| c.key == "keyword_in_title")
            .unwrap();
        assert!(title_row.passed, "no keyword means the row passes vacuously");
    }

    #[test]
    fn test_breakdown_reports_image_coverage() {
        let mut input = fixtures::news_draft();
        input.content_html.push_str(r#"<img src="x.jpg"><img src="y.jpg" alt="xe">"#);
        let report = seo_score_engine(&input);

        let image_row = report
            .breakdown()
            .into_iter()
            .find(|c| c.key == "image_alt")
            .unwrap();
        assert!(!image_row.passed);
        assert_eq!(image_row.value.as_deref(), Some("1/2"));
    }

    #[test]
    fn test_input_json_uses_type_field() {
        let json = r#"{
            "h1_title": "VinFast Klara S",
            "content_html": "<p>Xe máy điện.</p>",
            "meta_title": "",
            "meta_description": "",
            "keywords": "",
            "focus_keyword": "",
            "type": "product"
        }"#;
        let input: SeoScoreInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.content_type, ContentType::Product);
        assert!(input.featured_image_url.is_none());
    }
}
