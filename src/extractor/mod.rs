pub mod structure;
pub mod text;

pub use structure::{images_in_html, paragraphs_from_html, parse_headings, sentences, Heading, ImageTag};
pub use text::{normalize_vietnamese, strip_html};
