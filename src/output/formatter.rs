use std::io::IsTerminal;

use anyhow::{Context, Result};
use owo_colors::OwoColorize;

use crate::form::ValidationError;
use crate::scoring::{Report, SubjectMark};

pub const REPORT_TITLE: &str = "Student Performance Report";
pub const BREAKDOWN_TITLE: &str = "Subject-wise Breakdown:";

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Two-decimal display used for the weighted average and attendance.
pub fn format_fixed2(value: f64) -> String {
    format!("{:.2}", value)
}

/// Marks print as entered: `80`, `72.5`.
pub fn format_mark(mark: f64) -> String {
    format!("{}", mark)
}

/// "subject: mark" line for the breakdown list.
pub fn format_subject_line(entry: &SubjectMark) -> String {
    format!("{}: {}", entry.subject, format_mark(entry.mark))
}

/// Summary lines in display order: (label, value). Rank and performance
/// carry no label.
pub fn report_lines(report: &Report) -> Vec<(&'static str, String)> {
    vec![
        ("Grade Level", report.grade_level.to_string()),
        ("Weighted Average Marks", format_fixed2(report.weighted_average)),
        ("Grade", report.letter_grade.clone()),
        ("Attendance", format!("{}%", format_fixed2(report.attendance))),
        ("", report.rank.clone()),
        ("", report.performance.clone()),
    ]
}

/// Multi-line plain-text report.
pub fn format_report(report: &Report, use_colors: bool) -> String {
    let mut out = Vec::new();

    if use_colors {
        out.push(REPORT_TITLE.bold().to_string());
    } else {
        out.push(REPORT_TITLE.to_string());
    }

    for (label, value) in report_lines(report) {
        let line = match (label.is_empty(), use_colors) {
            (true, true) => value.cyan().to_string(),
            (true, false) => value,
            (false, true) => format!("{}: {}", label, value.bold()),
            (false, false) => format!("{}: {}", label, value),
        };
        out.push(line);
    }

    out.push(String::new());
    if use_colors {
        out.push(BREAKDOWN_TITLE.bold().to_string());
    } else {
        out.push(BREAKDOWN_TITLE.to_string());
    }
    for entry in report.breakdown.iter() {
        out.push(format!("  {}", format_subject_line(entry)));
    }

    out.join("\n")
}

/// Pretty JSON for scripting.
pub fn format_report_json(report: &Report) -> Result<String> {
    serde_json::to_string_pretty(report).context("Failed to serialize report")
}

/// Single error line.
pub fn format_error(error: &ValidationError, use_colors: bool) -> String {
    if use_colors {
        error.to_string().red().to_string()
    } else {
        error.to_string()
    }
}
