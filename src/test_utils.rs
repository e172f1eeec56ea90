//! Shared fixtures and assertion helpers for unit tests.

#[cfg(test)]
pub mod fixtures {
    use crate::domain::models::{ContentType, SeoScoreInput};

    /// A draft with every field empty.
    pub fn empty_draft(content_type: ContentType) -> SeoScoreInput {
        SeoScoreInput {
            h1_title: String::new(),
            content_html: String::new(),
            meta_title: String::new(),
            meta_description: String::new(),
            keywords: String::new(),
            focus_keyword: String::new(),
            featured_image_url: None,
            content_type,
        }
    }

    /// A small but coherent news draft with an explicit focus keyword.
    pub fn news_draft() -> SeoScoreInput {
        SeoScoreInput {
            h1_title: "Xe máy điện VinFast ra mắt".into(),
            content_html: "<h1>Xe máy điện VinFast ra mắt</h1>\
                           <p>Mẫu xe máy điện mới. Tuy nhiên giá chưa công bố.</p>"
                .into(),
            meta_title: "Xe máy điện VinFast".into(),
            meta_description: "Tin tức xe máy điện.".into(),
            keywords: "xe máy điện, VinFast".into(),
            focus_keyword: "xe máy điện".into(),
            featured_image_url: None,
            content_type: ContentType::News,
        }
    }
}
