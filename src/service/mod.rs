pub mod analytics;
pub mod engine;
pub mod keyword;
pub mod meta;
pub mod readability;

pub use analytics::{content_analytics, ContentAnalytics};
pub use engine::seo_score_engine;
