//! Report output for scan verdicts.
//!
//! Terminal rendering lives in `render`; the Markdown and JSON file
//! formats live in `generator`.

pub mod generator;
pub mod render;

pub use generator::{generate_json_report, generate_markdown_report};
pub use render::render_report;
