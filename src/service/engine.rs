//! The scoring engine: one pure pass over a content draft.
//!
//! Takes the editor form state and produces an overall score, the SEO and
//! readability checklists and a capped list of improvement hints. No state
//! carries between calls; identical input always yields an identical
//! report.

use std::collections::HashSet;

use crate::domain::models::{
    ContentType, ReadabilityResult, SeoAnalysis, SeoReport, SeoScoreInput,
};
use crate::extractor::structure::{images_in_html, paragraphs_from_html, parse_headings, sentences};
use crate::extractor::text::strip_html;
use crate::service::keyword::{
    count_keyword_occurrences, keyword_density_percent, keyword_in_first_10_percent,
    resolve_focus_keyword, DENSITY_MAX_PERCENT, DENSITY_MIN_PERCENT,
};
use crate::service::readability::{
    count_long_paragraphs, count_passive_sentences, count_transition_sentences,
};

const WEIGHT_KEYWORD_FIRST_10: f64 = 15.0;
const WEIGHT_HEADING: f64 = 10.0;
const WEIGHT_DENSITY: f64 = 15.0;

pub const SUGGEST_ENTER_FOCUS_KEYWORD: &str =
    "Nhập \"Từ khóa trọng tâm\" để chấm điểm chính xác hơn (hoặc dùng từ khóa đầu tiên).";
pub const SUGGEST_KEYWORD_IN_TITLE: &str = "Thêm từ khóa trọng tâm vào tiêu đề (H1).";
pub const SUGGEST_KEYWORD_IN_META_TITLE: &str = "Đặt từ khóa trọng tâm vào Tiêu đề SEO.";
pub const SUGGEST_KEYWORD_IN_META_DESCRIPTION: &str = "Đặt từ khóa trọng tâm vào Mô tả SEO.";
pub const SUGGEST_KEYWORD_IN_FIRST_10: &str = "Thêm từ khóa trọng tâm vào 10% đầu nội dung.";
pub const SUGGEST_FIX_HEADING_HIERARCHY: &str =
    "Chỉnh cấu trúc heading: không nhảy cấp (ví dụ H2 rồi mới tới H3).";
pub const SUGGEST_ADD_FEATURED_IMAGE: &str = "Nên thêm ảnh đại diện cho bài viết.";
pub const RECOMMEND_TRANSITION_WORDS: &str =
    "Nên dùng thêm từ nối (tuy nhiên, ngoài ra, do đó...)";
pub const RECOMMEND_REDUCE_PASSIVE: &str = "Nên giảm câu bị động (được/bị)";
pub const RECOMMEND_OK: &str = "Đạt";

/// Score a content draft.
pub fn seo_score_engine(input: &SeoScoreInput) -> SeoReport {
    let focus = resolve_focus_keyword(&input.focus_keyword, &input.keywords, &input.h1_title);
    let focus_keyword = focus.keyword;
    let has_focus = !focus_keyword.is_empty();

    let plain_text = strip_html(&input.content_html);
    let full_text_for_density = format!("{} {}", plain_text, input.h1_title)
        .trim()
        .to_string();
    let density_percent = keyword_density_percent(&full_text_for_density, &focus_keyword);

    let title_has_keyword =
        has_focus && count_keyword_occurrences(&input.h1_title, &focus_keyword) > 0;
    let meta_title_has_keyword =
        has_focus && count_keyword_occurrences(&input.meta_title, &focus_keyword) > 0;
    let meta_description_has_keyword =
        has_focus && count_keyword_occurrences(&input.meta_description, &focus_keyword) > 0;
    let in_first_10 = has_focus && keyword_in_first_10_percent(&plain_text, &focus_keyword);

    let headings = parse_headings(&input.content_html);
    let has_h1 = match input.content_type {
        // a product renders its name as the page H1 outside the body
        ContentType::Product => true,
        ContentType::News => {
            headings.iter().any(|h| h.level == 1) || !input.h1_title.is_empty()
        }
    };
    let mut heading_hierarchy_ok = true;
    let mut prev_level = 0u8;
    for heading in &headings {
        if heading.level > prev_level + 1 {
            heading_hierarchy_ok = false;
        }
        prev_level = heading.level;
    }

    let images = images_in_html(&input.content_html);
    let total_images = images.len();
    let images_with_alt = images.iter().filter(|image| image.has_alt).count();
    let images_without_alt = total_images - images_with_alt;
    let featured_image_present = input
        .featured_image_url
        .as_deref()
        .map(|url| !url.is_empty())
        .unwrap_or(false);

    let paragraphs = paragraphs_from_html(&input.content_html);
    let long_paragraph_count = count_long_paragraphs(&paragraphs);
    let paragraph_length_ok = long_paragraph_count == 0;

    let all_sentences = sentences(&plain_text);
    let sentence_count = all_sentences.len();
    let transition_ratio = if sentence_count > 0 {
        count_transition_sentences(&all_sentences) as f64 / sentence_count as f64
    } else {
        0.0
    };
    let passive_ratio = if sentence_count > 0 {
        count_passive_sentences(&all_sentences) as f64 / sentence_count as f64
    } else {
        0.0
    };

    let seo_analysis = SeoAnalysis {
        focus_keyword: focus_keyword.clone(),
        focus_keyword_suggested: focus.suggested,
        title_has_keyword,
        meta_title_has_keyword,
        meta_description_has_keyword,
        keyword_in_first_10_percent: in_first_10,
        heading_structure_valid: has_h1 && heading_hierarchy_ok,
        has_h1,
        heading_hierarchy_ok,
        keyword_density_percent: (density_percent * 10.0).round() / 10.0,
        keyword_density_recommended: format!("{}–{}%", DENSITY_MIN_PERCENT, DENSITY_MAX_PERCENT),
        images_with_alt,
        images_without_alt,
        featured_image_present,
    };

    let readability = ReadabilityResult {
        paragraph_length_ok,
        long_paragraph_count,
        transition_word_ratio: (transition_ratio * 100.0).round() as u32,
        transition_word_recommendation: if transition_ratio < 0.2 {
            RECOMMEND_TRANSITION_WORDS
        } else {
            RECOMMEND_OK
        }
        .to_string(),
        passive_voice_ratio: (passive_ratio * 100.0).round() as u32,
        passive_voice_recommendation: if passive_ratio > 0.25 {
            RECOMMEND_REDUCE_PASSIVE
        } else {
            RECOMMEND_OK
        }
        .to_string(),
    };

    let is_news = input.content_type == ContentType::News;

    let mut raw_suggestions: Vec<String> = Vec::new();
    if focus.suggested && (!input.h1_title.is_empty() || !input.keywords.is_empty()) {
        raw_suggestions.push(SUGGEST_ENTER_FOCUS_KEYWORD.to_string());
    }
    if has_focus && !title_has_keyword {
        raw_suggestions.push(SUGGEST_KEYWORD_IN_TITLE.to_string());
    }
    if has_focus && !meta_title_has_keyword && !input.meta_title.is_empty() {
        raw_suggestions.push(SUGGEST_KEYWORD_IN_META_TITLE.to_string());
    }
    if has_focus && !meta_description_has_keyword && !input.meta_description.is_empty() {
        raw_suggestions.push(SUGGEST_KEYWORD_IN_META_DESCRIPTION.to_string());
    }
    if has_focus && !in_first_10 && plain_text.chars().count() > 50 {
        raw_suggestions.push(SUGGEST_KEYWORD_IN_FIRST_10.to_string());
    }
    if !heading_hierarchy_ok {
        raw_suggestions.push(SUGGEST_FIX_HEADING_HIERARCHY.to_string());
    }
    if has_focus && (density_percent < DENSITY_MIN_PERCENT || density_percent > DENSITY_MAX_PERCENT)
    {
        raw_suggestions.push(format!(
            "Mật độ từ khóa hiện tại {}%. Nên trong khoảng {}.",
            seo_analysis.keyword_density_percent, seo_analysis.keyword_density_recommended
        ));
    }
    if images_without_alt > 0 {
        raw_suggestions.push(format!(
            "Thêm thuộc tính alt cho {} ảnh trong nội dung.",
            images_without_alt
        ));
    }
    if is_news && !featured_image_present {
        raw_suggestions.push(SUGGEST_ADD_FEATURED_IMAGE.to_string());
    }
    if !paragraph_length_ok {
        raw_suggestions.push(format!(
            "Rút ngắn {} đoạn có trên 3 câu (mỗi đoạn nên dưới 3 câu).",
            long_paragraph_count
        ));
    }
    if readability.transition_word_ratio < 20 && sentence_count >= 3 {
        raw_suggestions.push(readability.transition_word_recommendation.clone());
    }
    if readability.passive_voice_ratio > 25 {
        raw_suggestions.push(readability.passive_voice_recommendation.clone());
    }

    let mut seen = HashSet::new();
    let mut suggestions: Vec<String> = raw_suggestions
        .into_iter()
        .filter(|s| seen.insert(s.clone()))
        .collect();
    suggestions.truncate(5);

    let mut score = 0.0f64;
    if has_focus {
        if title_has_keyword {
            score += 10.0;
        }
        if meta_title_has_keyword {
            score += 8.0;
        }
        if meta_description_has_keyword {
            score += 7.0;
        }
        if in_first_10 {
            score += WEIGHT_KEYWORD_FIRST_10;
        }
        if heading_hierarchy_ok && has_h1 {
            score += WEIGHT_HEADING;
        }
        let density_ok =
            density_percent >= DENSITY_MIN_PERCENT && density_percent <= DENSITY_MAX_PERCENT;
        score += if density_ok {
            WEIGHT_DENSITY
        } else if density_percent > 0.0 {
            WEIGHT_DENSITY / 2.0
        } else {
            0.0
        };
    } else {
        // without a keyword every keyword check is false; only heading
        // validity contributes
        if has_h1 && heading_hierarchy_ok {
            score += WEIGHT_HEADING;
        }
    }

    let image_score = if total_images == 0 {
        10.0
    } else {
        images_with_alt as f64 / total_images as f64 * 10.0
    };
    score += if is_news && featured_image_present {
        5.0
    } else {
        image_score * 0.5
    };
    if is_news && !featured_image_present {
        // news without a featured image earns no second image contribution
    } else if total_images > 0 {
        score += image_score;
    }

    score += if paragraph_length_ok { 10.0 } else { 5.0 };
    score += if transition_ratio >= 0.15 { 8.0 } else { 4.0 };
    score += if passive_ratio <= 0.25 { 7.0 } else { 3.0 };

    let overall_score = (score.round() as u32).min(100);

    tracing::debug!(
        score = overall_score,
        focus_keyword = %seo_analysis.focus_keyword,
        density = seo_analysis.keyword_density_percent,
        suggestions = suggestions.len(),
        "draft scored"
    );

    SeoReport {
        overall_score,
        seo_analysis,
        readability,
        suggestions,
    }
}
