//! Keyboard event handling.

use crate::app::{App, AppState, InputMode};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use reservas_core::Screen;

/// Handle a key event. Returns true if the app should quit.
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    match app.input_mode {
        InputMode::Notice => {
            app.dismiss_notice();
            false
        }
        InputMode::DeletePrompt => handle_prompt_key(app, key),
        InputMode::Normal => match app.screen {
            Screen::Form(_) => handle_form_key(app, key),
            Screen::List(_) => handle_list_key(app, key),
        },
    }
}

fn quit(app: &mut App) -> bool {
    app.state = AppState::Quit;
    true
}

fn handle_form_key(app: &mut App, key: KeyEvent) -> bool {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Char('c') if ctrl => quit(app),
        KeyCode::Char('l') if ctrl => {
            app.show_reservations();
            false
        }
        KeyCode::F(2) => {
            app.show_reservations();
            false
        }
        KeyCode::Esc => quit(app),
        KeyCode::Enter => {
            app.submit_reservation();
            false
        }
        KeyCode::Tab | KeyCode::Down => {
            app.focus = app.focus.next();
            false
        }
        KeyCode::BackTab | KeyCode::Up => {
            app.focus = app.focus.prev();
            false
        }
        KeyCode::Left => {
            app.adjust(false);
            false
        }
        KeyCode::Right => {
            app.adjust(true);
            false
        }
        KeyCode::Backspace => {
            app.backspace();
            false
        }
        KeyCode::Char(c) if app.focus.is_text() => {
            app.type_char(c);
            false
        }
        // Space steps the focused selector
        KeyCode::Char(' ') => {
            app.adjust(true);
            false
        }
        _ => false,
    }
}

fn handle_list_key(app: &mut App, key: KeyEvent) -> bool {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return quit(app);
    }

    match key.code {
        KeyCode::Char('q') => quit(app),
        KeyCode::Char('d') | KeyCode::Delete => {
            app.open_delete_prompt();
            false
        }
        KeyCode::Char('b') | KeyCode::Esc => {
            app.go_back();
            false
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.scroll_up();
            false
        }
        KeyCode::Char('j') | KeyCode::Down => {
            app.scroll_down();
            false
        }
        _ => false,
    }
}

fn handle_prompt_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => {
            app.answer_delete_prompt(false);
            false
        }
        KeyCode::Enter => {
            app.answer_delete_prompt(true);
            false
        }
        KeyCode::Char(c) => {
            app.prompt_input.push(c);
            false
        }
        KeyCode::Backspace => {
            app.prompt_input.pop();
            false
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::FormField;
    use crate::config::Config;
    use ratatui::layout::Rect;
    use reservas_core::{ScreenKind, Vehicle};

    fn press(app: &mut App, code: KeyCode) -> bool {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn app() -> App {
        let mut app = App::new(Config::default());
        app.area = Rect::new(0, 0, 120, 40);
        app
    }

    /// Fill in and submit the form through the keyboard.
    fn register(app: &mut App, client: &str, vehicle_steps: usize, date: &str, hours: usize) {
        if let Screen::Form(form) = &mut app.screen {
            form.input = Default::default();
        }
        app.focus = FormField::Client;
        type_str(app, client);
        press(app, KeyCode::Tab);
        for _ in 0..vehicle_steps {
            press(app, KeyCode::Right);
        }
        press(app, KeyCode::Tab);
        type_str(app, date);
        press(app, KeyCode::Tab);
        for _ in 1..hours {
            press(app, KeyCode::Right);
        }
        press(app, KeyCode::Enter);
    }

    #[test]
    fn test_register_through_keys() {
        let mut app = app();
        register(&mut app, "Bob", 4, "2024-06-10", 5);

        assert_eq!(app.input_mode, InputMode::Normal);
        let store = app.screen.store().borrow();
        let r = &store.as_slice()[0];
        assert_eq!(r.client(), "Bob");
        assert_eq!(r.vehicle(), Vehicle::BmwI4);
        assert_eq!(r.hours(), 5);
        assert_eq!(r.total_price(), 75.0);
    }

    #[test]
    fn test_notice_swallows_next_key() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.input_mode, InputMode::Notice);

        // Dismisses the notice instead of quitting
        assert!(!press(&mut app, KeyCode::Esc));
        assert_eq!(app.input_mode, InputMode::Normal);
        assert!(app.notice.is_none());
    }

    #[test]
    fn test_delete_through_keys() {
        let mut app = app();
        register(&mut app, "Ana", 1, "2024-05-01", 3);
        register(&mut app, "Bob", 4, "2024-06-10", 5);
        press(&mut app, KeyCode::F(2));
        assert_eq!(app.screen.kind(), ScreenKind::List);

        press(&mut app, KeyCode::Char('d'));
        type_str(&mut app, "carol");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.notice.clone().unwrap().title, "Reserva no encontrada");
        press(&mut app, KeyCode::Enter);

        press(&mut app, KeyCode::Char('d'));
        type_str(&mut app, "ana");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.notice.clone().unwrap().message, "Reserva de Ana eliminada.");
        press(&mut app, KeyCode::Enter);

        press(&mut app, KeyCode::Char('b'));
        assert_eq!(app.screen.kind(), ScreenKind::Form);
        let store = app.screen.store().borrow();
        assert_eq!(store.len(), 1);
        assert_eq!(store.as_slice()[0].client(), "Bob");
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app();
        assert!(handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)
        ));
        assert_eq!(app.state, AppState::Quit);

        let mut app = self::app();
        press(&mut app, KeyCode::F(2));
        assert!(press(&mut app, KeyCode::Char('q')));
    }

    #[test]
    fn test_letters_do_not_leak_into_selectors() {
        let mut app = app();
        app.focus = FormField::Hours;
        type_str(&mut app, "9");

        let Screen::Form(form) = &app.screen else {
            panic!("not on the form");
        };
        assert_eq!(form.input.hours, 1);
        assert!(form.input.client.is_empty());
    }
}
