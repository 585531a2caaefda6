pub mod formatter;

pub use formatter::{format_json_report, format_line_diff, format_text_report};
