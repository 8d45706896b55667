//! Report output: HTML fragment rendering, document wrapping, JSON.

pub mod document;
pub mod html;
pub mod json;

pub use document::render_document;
pub use html::{HtmlFormatter, escape_html};
pub use json::print_json;
