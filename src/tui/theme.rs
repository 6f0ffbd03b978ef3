//! Centralized theme module for TUI color constants and styles

use ratatui::prelude::*;
use tracing::debug;

use crate::config::ThemePreference;

/// Resolved terminal palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

/// Complete color palette for the TUI
#[derive(Debug, Clone)]
pub struct ThemeColors {
    // General colors
    pub title_color: Color,
    pub muted: Color,

    // Form colors
    pub label: Color,
    pub label_focused: Style,
    pub input_focused_bg: Color,
    pub button: Style,
    pub button_focused: Style,
    pub button_busy: Style,

    // Letter grade colors (traffic light pattern)
    pub grade_high: Color,
    pub grade_mid: Color,
    pub grade_low: Color,

    // Report panel
    pub report_border: Color,
    pub report_value: Style,

    // Status bar colors
    pub status_bar_bg: Color,
    pub status_key_color: Color,
    pub flash_success: Color,
    pub flash_error: Color,

    // Popup overlay colors
    pub popup_border: Color,
    pub popup_title: Style,
}

impl ThemeColors {
    /// Dark theme palette
    pub fn dark() -> Self {
        Self {
            title_color: Color::Cyan,
            muted: Color::Gray,
            label: Color::Gray,
            label_focused: Style::new().fg(Color::Cyan).bold(),
            input_focused_bg: Color::Indexed(236),
            button: Style::new().fg(Color::Cyan),
            button_focused: Style::new().fg(Color::Black).bg(Color::Cyan).bold(),
            button_busy: Style::new().fg(Color::DarkGray),
            grade_high: Color::Green,
            grade_mid: Color::Yellow,
            grade_low: Color::Red,
            report_border: Color::Indexed(238),
            report_value: Style::new().bold(),
            status_bar_bg: Color::Indexed(236),
            status_key_color: Color::Cyan,
            flash_success: Color::Green,
            flash_error: Color::Red,
            popup_border: Color::Cyan,
            popup_title: Style::new().fg(Color::Cyan).bold(),
        }
    }

    /// Light theme palette, darker foregrounds for pale backgrounds
    pub fn light() -> Self {
        Self {
            title_color: Color::Blue,
            muted: Color::DarkGray,
            label: Color::DarkGray,
            label_focused: Style::new().fg(Color::Blue).bold(),
            input_focused_bg: Color::Indexed(254),
            button: Style::new().fg(Color::Blue),
            button_focused: Style::new().fg(Color::White).bg(Color::Blue).bold(),
            button_busy: Style::new().fg(Color::Gray),
            grade_high: Color::Rgb(0, 128, 0),
            grade_mid: Color::Rgb(175, 110, 0),
            grade_low: Color::Rgb(190, 0, 0),
            report_border: Color::Indexed(250),
            report_value: Style::new().bold(),
            status_bar_bg: Color::Indexed(253),
            status_key_color: Color::Blue,
            flash_success: Color::Rgb(0, 128, 0),
            flash_error: Color::Rgb(190, 0, 0),
            popup_border: Color::Blue,
            popup_title: Style::new().fg(Color::Blue).bold(),
        }
    }

    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self::dark(),
            Theme::Light => Self::light(),
        }
    }

    /// Color for a weighted average: green from 70, yellow from 50, red below.
    pub fn average_color(&self, weighted_average: f64) -> Color {
        if weighted_average >= 70.0 {
            self.grade_high
        } else if weighted_average >= 50.0 {
            self.grade_mid
        } else {
            self.grade_low
        }
    }
}

/// Pick the palette from the config preference, probing the terminal
/// background when set to auto. Falls back to dark if the probe fails.
pub fn resolve_theme(preference: ThemePreference) -> Theme {
    match preference {
        ThemePreference::Dark => Theme::Dark,
        ThemePreference::Light => Theme::Light,
        ThemePreference::Auto => match terminal_light::luma() {
            Ok(luma) if luma > 0.6 => Theme::Light,
            Ok(_) => Theme::Dark,
            Err(e) => {
                debug!("Terminal background detection failed: {}", e);
                Theme::Dark
            }
        },
    }
}
