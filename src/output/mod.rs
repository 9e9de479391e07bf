pub mod formatter;

pub use formatter::{format_assessment, format_category, format_json, should_use_colors};
