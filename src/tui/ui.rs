use ratatui::prelude::*;
use ratatui::widgets::{Block, Clear, Paragraph};

use crate::form::Field;
use crate::output::{format_fixed2, format_subject_line, BREAKDOWN_TITLE, REPORT_TITLE};
use crate::scoring::Report;
use crate::tui::app::{App, Focus, InputMode};

const TITLE: &str = "Student Performance Prediction";
const LABEL_WIDTH: usize = 16;
const SUBMIT_LABEL: &str = "Generate Report";
const SUBMIT_BUSY_LABEL: &str = "Generating...";

pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Handle very small terminal sizes gracefully
    if area.height < 12 || area.width < 40 {
        let msg = Paragraph::new("Terminal too small").alignment(Alignment::Center);
        frame.render_widget(msg, area);
        return;
    }

    // Layout: Title(1) + Body(fill) + Error(1) + Status(1)
    let chunks = Layout::vertical([
        Constraint::Length(1), // Title bar
        Constraint::Fill(1),   // Form + report
        Constraint::Length(1), // Error line
        Constraint::Length(1), // Status bar
    ])
    .split(area);

    let body = Layout::horizontal([Constraint::Length(38), Constraint::Fill(1)]).split(chunks[1]);

    render_title(frame, chunks[0], app);
    render_form(frame, body[0], app);
    render_report(frame, body[1], app);
    render_error(frame, chunks[2], app);
    render_status_bar(frame, chunks[3], app);

    if app.input_mode == InputMode::Help {
        render_help_popup(frame, app);
    }
}

fn render_title(frame: &mut Frame, area: Rect, app: &App) {
    let title = Line::from(Span::styled(
        TITLE,
        Style::default().fg(app.colors.title_color).bold(),
    ));
    frame.render_widget(Paragraph::new(title), area);
}

fn render_form(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::bordered()
        .title(" Student ")
        .border_style(Style::default().fg(app.colors.report_border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = app
        .form
        .visible_fields()
        .into_iter()
        .map(|field| field_line(app, field))
        .collect();

    lines.push(Line::from(""));
    lines.push(submit_line(app));

    frame.render_widget(Paragraph::new(lines), inner);
}

fn field_line(app: &App, field: Field) -> Line<'static> {
    let focused = app.focus == Focus::Field(field);
    let label = format!("{:<width$}", format!("{}:", field.label()), width = LABEL_WIDTH);
    let value = app.form.input().text(field).to_string();

    if focused {
        Line::from(vec![
            Span::styled(label, app.colors.label_focused),
            Span::styled(
                format!("{}|", value),
                Style::default().bg(app.colors.input_focused_bg),
            ),
        ])
    } else {
        Line::from(vec![
            Span::styled(label, Style::default().fg(app.colors.label)),
            Span::raw(value),
        ])
    }
}

fn submit_line(app: &App) -> Line<'static> {
    let (text, style) = if app.form.is_in_progress() {
        (SUBMIT_BUSY_LABEL, app.colors.button_busy)
    } else if app.focus == Focus::Submit {
        (SUBMIT_LABEL, app.colors.button_focused)
    } else {
        (SUBMIT_LABEL, app.colors.button)
    };
    Line::from(Span::styled(format!("[ {} ]", text), style))
}

fn render_report(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::bordered()
        .title(format!(" {} ", REPORT_TITLE))
        .border_style(Style::default().fg(app.colors.report_border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = match app.form.report() {
        Some(report) => report_lines(app, report),
        None => vec![Line::from(Span::styled(
            "Fill in the form and press Enter.",
            Style::default().fg(app.colors.muted),
        ))],
    };

    frame.render_widget(Paragraph::new(lines), inner);
}

fn report_lines(app: &App, report: &Report) -> Vec<Line<'static>> {
    let label = |text: &str| Span::styled(text.to_string(), Style::default().fg(app.colors.muted));
    let value = |text: String| Span::styled(text, app.colors.report_value);
    let grade_color = app.colors.average_color(report.weighted_average);

    let mut lines = vec![
        Line::from(vec![label("Grade Level: "), value(report.grade_level.to_string())]),
        Line::from(vec![
            label("Weighted Average Marks: "),
            value(format_fixed2(report.weighted_average)),
        ]),
        Line::from(vec![
            label("Grade: "),
            Span::styled(report.letter_grade.clone(), Style::default().fg(grade_color).bold()),
        ]),
        Line::from(vec![
            label("Attendance: "),
            value(format!("{}%", format_fixed2(report.attendance))),
        ]),
        Line::from(Span::styled(report.rank.clone(), Style::default().fg(grade_color))),
        Line::from(Span::styled(report.performance.clone(), Style::default().fg(grade_color))),
        Line::from(""),
        Line::from(Span::styled(BREAKDOWN_TITLE, Style::default().bold())),
    ];

    lines.extend(
        report
            .breakdown
            .iter()
            .map(|entry| Line::from(format!("  {}", format_subject_line(entry)))),
    );
    lines
}

fn render_error(frame: &mut Frame, area: Rect, app: &App) {
    if let Some(error) = app.form.error() {
        let line = Line::from(Span::styled(
            error.to_string(),
            Style::default().fg(app.colors.flash_error),
        ));
        frame.render_widget(Paragraph::new(line), area);
    }
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let text = if let Some((ref msg, _)) = app.flash_message {
        Line::from(Span::styled(
            msg.clone(),
            Style::default().fg(app.colors.flash_success),
        ))
    } else {
        let hints = [
            ("Tab", ":next "),
            ("S-Tab", ":prev "),
            ("Enter", ":generate "),
            ("C-u", ":clear "),
            ("?", ":help "),
            ("Esc", ":quit"),
        ];

        let mut spans = Vec::new();
        for (i, (key, label)) in hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled(
                *key,
                Style::default().fg(app.colors.status_key_color),
            ));
            spans.push(Span::raw(*label));
        }
        Line::from(spans)
    };

    frame.render_widget(
        Paragraph::new(text).style(Style::default().bg(app.colors.status_bar_bg)),
        area,
    );
}

/// Create a centered rectangle with fixed width and height
fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    // Clamp dimensions to area bounds
    let width = width.min(area.width);
    let height = height.min(area.height);

    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect {
        x,
        y,
        width,
        height,
    }
}

/// Render the help overlay popup
fn render_help_popup(frame: &mut Frame, app: &App) {
    let popup_area = centered_rect_fixed(52, 13, frame.area());

    frame.render_widget(Clear, popup_area);

    let block = Block::bordered()
        .title(Span::styled(" Keyboard Shortcuts ", app.colors.popup_title))
        .border_style(Style::default().fg(app.colors.popup_border));
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let key_style = Style::default().fg(app.colors.status_key_color).bold();
    let rows = [
        ("Tab / Down     ", "Next field"),
        ("S-Tab / Up     ", "Previous field"),
        ("0-9 . - + e    ", "Edit focused field"),
        ("Backspace      ", "Delete last character"),
        ("Ctrl-u         ", "Clear focused field"),
        ("Enter          ", "Generate report"),
        ("? / F1         ", "Show/hide this help"),
        ("Esc / Ctrl-c   ", "Quit"),
    ];

    let mut help_lines: Vec<Line> = rows
        .iter()
        .map(|(key, desc)| Line::from(vec![Span::styled(*key, key_style), Span::raw(*desc)]))
        .collect();
    help_lines.push(Line::from(""));
    help_lines.push(Line::from(Span::styled(
        "Grades 9-12 show nine subjects, 1-8 show five",
        Style::default().fg(app.colors.muted),
    )));
    help_lines.push(Line::from(Span::styled(
        "Press any key to close",
        Style::default().fg(app.colors.muted),
    )));

    frame.render_widget(Paragraph::new(help_lines), inner);
}
