use std::time::Instant;

use crate::form::{Field, FormController};
use crate::scoring::ScoringModel;
use crate::tui::theme::ThemeColors;

const FLASH_SECS: u64 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Help,
}

/// What keyboard input goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(Field),
    Submit,
}

pub struct App {
    pub form: FormController,
    pub focus: Focus,
    pub input_mode: InputMode,
    pub flash_message: Option<(String, Instant)>,
    pub should_quit: bool,
    pub colors: ThemeColors,
}

impl App {
    pub fn new(model: ScoringModel, colors: ThemeColors) -> Self {
        Self {
            form: FormController::new(model),
            focus: Focus::Field(Field::Grade),
            input_mode: InputMode::Normal,
            flash_message: None,
            should_quit: false,
            colors,
        }
    }

    /// Focus targets in tab order: the visible fields, then the submit button.
    pub fn focus_order(&self) -> Vec<Focus> {
        let mut order: Vec<Focus> = self
            .form
            .visible_fields()
            .into_iter()
            .map(Focus::Field)
            .collect();
        order.push(Focus::Submit);
        order
    }

    fn focus_index(&self, order: &[Focus]) -> usize {
        order.iter().position(|f| *f == self.focus).unwrap_or(0)
    }

    pub fn focus_next(&mut self) {
        let order = self.focus_order();
        let i = self.focus_index(&order);
        self.focus = order[(i + 1) % order.len()];
    }

    pub fn focus_previous(&mut self) {
        let order = self.focus_order();
        let i = self.focus_index(&order);
        self.focus = order[(i + order.len() - 1) % order.len()];
    }

    pub fn focused_field(&self) -> Option<Field> {
        match self.focus {
            Focus::Field(field) => Some(field),
            Focus::Submit => None,
        }
    }

    /// Append a character to the focused field. Only characters that can
    /// appear in a number are accepted.
    pub fn type_char(&mut self, c: char) {
        if !(c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E')) {
            return;
        }
        if let Some(field) = self.focused_field() {
            let mut value = self.form.input().text(field).to_string();
            value.push(c);
            self.form.edit(field, value);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(field) = self.focused_field() {
            let mut value = self.form.input().text(field).to_string();
            if value.pop().is_some() {
                self.form.edit(field, value);
            }
        }
    }

    pub fn clear_field(&mut self) {
        if let Some(field) = self.focused_field() {
            self.form.edit(field, String::new());
        }
    }

    /// Submit the form; errors are shown by the error line, not flashed.
    pub fn submit(&mut self) {
        if self.form.is_in_progress() {
            return;
        }
        if let Ok(report) = self.form.submit() {
            let msg = format!(
                "Report generated: {} ({})",
                report.letter_grade, report.performance
            );
            self.show_flash(msg);
        } else {
            self.flash_message = None;
        }
    }

    pub fn update_flash(&mut self) {
        if let Some((_, timestamp)) = self.flash_message {
            if timestamp.elapsed().as_secs() >= FLASH_SECS {
                self.flash_message = None;
            }
        }
    }

    pub fn show_flash(&mut self, msg: String) {
        self.flash_message = Some((msg, Instant::now()));
    }

    /// Show help overlay
    pub fn show_help(&mut self) {
        self.input_mode = InputMode::Help;
    }

    /// Dismiss help overlay
    pub fn dismiss_help(&mut self) {
        self.input_mode = InputMode::Normal;
    }
}
