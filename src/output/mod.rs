pub mod formatter;

pub use formatter::{
    format_error, format_fixed2, format_mark, format_report, format_report_json,
    format_subject_line, report_lines, should_use_colors, BREAKDOWN_TITLE, REPORT_TITLE,
};
