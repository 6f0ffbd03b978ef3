pub mod app;
pub mod event;
pub mod theme;
pub mod ui;

pub use app::App;
pub use theme::{resolve_theme, Theme, ThemeColors};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use event::{Event, EventHandler};
use tracing::debug;

pub async fn run_tui(mut app: App) -> anyhow::Result<()> {
    // Buffer stderr while TUI is active to prevent output corrupting the display
    crate::stderr_buffer::activate();

    // Init terminal (sets up panic hooks automatically)
    let mut terminal = ratatui::init();
    let mut events = EventHandler::new(250);

    let result = loop {
        if let Err(e) = terminal.draw(|frame| ui::draw(frame, &app)) {
            break Err(anyhow::Error::from(e));
        }

        match events.next().await {
            Some(Event::Key(key)) => handle_key_event(&mut app, key),
            Some(Event::Tick) => app.update_flash(),
            Some(Event::Resize) => {}
            None => {
                debug!("Terminal input closed");
                break Ok(());
            }
        }

        if app.should_quit {
            break Ok(());
        }
    };

    // Restore terminal
    ratatui::restore();

    // Flush buffered stderr messages now that the terminal is restored
    for msg in crate::stderr_buffer::drain() {
        eprintln!("{}", msg);
    }

    result
}

fn handle_key_event(app: &mut App, key: KeyEvent) {
    match app.input_mode {
        app::InputMode::Normal => match key.code {
            // Quit
            KeyCode::Esc => app.should_quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                app.should_quit = true
            }

            // Clear field
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                app.clear_field()
            }

            // Navigation
            KeyCode::Tab | KeyCode::Down => app.focus_next(),
            KeyCode::BackTab | KeyCode::Up => app.focus_previous(),

            // Submit from any field, like a form
            KeyCode::Enter => app.submit(),

            // Help
            KeyCode::Char('?') | KeyCode::F(1) => app.show_help(),

            // Editing
            KeyCode::Backspace => app.backspace(),
            KeyCode::Char(c) => app.type_char(c),

            _ => {}
        },
        app::InputMode::Help => {
            // Any key exits help
            app.dismiss_help();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::Field;
    use crate::scoring::ScoringModel;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn app() -> App {
        App::new(ScoringModel::default(), ThemeColors::dark())
    }

    #[test]
    fn test_keyboard_fill_and_submit() {
        let mut app = app();
        // Grade, Maths, Social, Science, English, Tamil, Attendance
        for value in ["5", "80", "70", "90", "60", "100", "90"] {
            for c in value.chars() {
                handle_key_event(&mut app, key(KeyCode::Char(c)));
            }
            handle_key_event(&mut app, key(KeyCode::Tab));
        }
        handle_key_event(&mut app, key(KeyCode::Enter));

        let report = app.form.report().expect("report generated");
        assert_eq!(report.rank, "Top 50%");
        assert_eq!(report.performance, "Good");
    }

    #[test]
    fn test_ctrl_u_clears_instead_of_typing() {
        let mut app = app();
        handle_key_event(&mut app, key(KeyCode::Char('7')));
        handle_key_event(&mut app, ctrl('u'));
        assert_eq!(app.form.input().text(Field::Grade), "");
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app();
        handle_key_event(&mut app, key(KeyCode::Esc));
        assert!(app.should_quit);

        let mut app = self::app();
        handle_key_event(&mut app, ctrl('c'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_help_swallows_next_key() {
        let mut app = app();
        handle_key_event(&mut app, key(KeyCode::Char('?')));
        assert_eq!(app.input_mode, app::InputMode::Help);
        handle_key_event(&mut app, key(KeyCode::Char('5')));
        assert_eq!(app.input_mode, app::InputMode::Normal);
        assert_eq!(app.form.input().get(Field::Grade), None);
    }
}
