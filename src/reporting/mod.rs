pub mod formatter;
pub mod summary_file;

pub use formatter::{format_summary_line, format_violation_line};
pub use summary_file::{load_summary, write_summary, REPORT_SUMMARY};
