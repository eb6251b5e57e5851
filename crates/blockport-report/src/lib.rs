//! Aggregate statistics and rendered reports over per-block analysis records.
#![forbid(unsafe_code)]

pub mod console;
pub mod json;
pub mod markdown;
pub mod stats;

pub use console::console_summary;
pub use json::{mappings_json, report_json, AnalysisReport};
pub use markdown::render_markdown;
pub use stats::Summary;
