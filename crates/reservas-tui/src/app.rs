//! Application state management.

use crate::config::Config;
use crate::ui;
use ratatui::layout::Rect;
use reservas_core::{FormController, Notice, Screen, ScreenKind, Vehicle, ViewLoader};

/// Application state.
#[derive(Debug, Clone, PartialEq)]
pub enum AppState {
    /// Handling user input.
    Running,
    /// Application should quit.
    Quit,
}

/// Input mode for the application.
#[derive(Debug, Clone, PartialEq)]
pub enum InputMode {
    /// Keys go to the active screen.
    Normal,
    /// Typing the client name to delete.
    DeletePrompt,
    /// A notice is shown and waits to be dismissed.
    Notice,
}

/// Field of the form that receives key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Client,
    Vehicle,
    Date,
    Hours,
    Charge,
}

impl FormField {
    pub const ALL: [FormField; 5] = [
        FormField::Client,
        FormField::Vehicle,
        FormField::Date,
        FormField::Hours,
        FormField::Charge,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FormField::Client => "Nombre del cliente",
            FormField::Vehicle => "Vehículo",
            FormField::Date => "Fecha de reserva",
            FormField::Hours => "Horas de uso",
            FormField::Charge => "Tipo de carga",
        }
    }

    pub fn next(self) -> Self {
        let i = Self::ALL.iter().position(|&f| f == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let i = Self::ALL.iter().position(|&f| f == self).unwrap_or(0);
        Self::ALL[(i + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Whether the field takes typed characters.
    pub fn is_text(self) -> bool {
        matches!(self, FormField::Client | FormField::Date)
    }
}

/// Loads screens into the terminal, refusing when it is too small for them.
pub struct TerminalViewLoader<'a> {
    area: Rect,
    config: &'a Config,
}

impl<'a> TerminalViewLoader<'a> {
    pub fn new(area: Rect, config: &'a Config) -> Self {
        Self { area, config }
    }
}

impl ViewLoader for TerminalViewLoader<'_> {
    fn load(&mut self, screen: ScreenKind) -> anyhow::Result<()> {
        let (width, height) = self.config.min_size(screen);
        if self.area.width < width || self.area.height < height {
            anyhow::bail!(
                "terminal is {}x{}, the {} screen needs at least {}x{}",
                self.area.width,
                self.area.height,
                screen,
                width,
                height
            );
        }
        Ok(())
    }
}

/// Main application model.
pub struct App {
    /// Current application state.
    pub state: AppState,
    /// Current input mode.
    pub input_mode: InputMode,
    /// The active screen and its controller.
    pub screen: Screen,
    /// Focused form field.
    pub focus: FormField,
    /// Notice waiting to be dismissed.
    pub notice: Option<Notice>,
    /// Name typed into the delete prompt.
    pub prompt_input: String,
    /// First visible line of the reservation list.
    pub list_scroll: u16,
    /// Terminal area from the last draw.
    pub area: Rect,
    pub config: Config,
}

impl App {
    /// Create a new application instance on the form screen.
    pub fn new(config: Config) -> Self {
        let mut form = FormController::new();
        apply_defaults(&mut form, &config);

        Self {
            state: AppState::Running,
            input_mode: InputMode::Normal,
            screen: Screen::Form(form),
            focus: FormField::Client,
            notice: None,
            prompt_input: String::new(),
            list_scroll: 0,
            area: Rect::default(),
            config,
        }
    }

    /// Show a notice; keys only dismiss it until then.
    pub fn show_notice(&mut self, notice: Notice) {
        self.notice = Some(notice);
        self.input_mode = InputMode::Notice;
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
        self.input_mode = InputMode::Normal;
    }

    /// Register the reservation currently filled in the form.
    pub fn submit_reservation(&mut self) {
        let Screen::Form(form) = &mut self.screen else {
            return;
        };
        if let Err(e) = form.reserve() {
            self.show_notice(e.notice());
        }
    }

    /// Switch from the form to the reservation list.
    pub fn show_reservations(&mut self) {
        let Screen::Form(form) = &self.screen else {
            return;
        };
        let mut loader = TerminalViewLoader::new(self.area, &self.config);
        match form.view_reservations(&mut loader) {
            Ok(list) => {
                self.screen = Screen::List(list);
                self.list_scroll = 0;
            }
            Err(e) => self.show_notice(e.notice()),
        }
    }

    /// Switch from the list back to a fresh form over the same store.
    pub fn go_back(&mut self) {
        let Screen::List(list) = &self.screen else {
            return;
        };
        let mut loader = TerminalViewLoader::new(self.area, &self.config);
        match list.go_back(&mut loader) {
            Ok(mut form) => {
                apply_defaults(&mut form, &self.config);
                self.screen = Screen::Form(form);
                self.focus = FormField::Client;
            }
            Err(e) => self.show_notice(e.notice()),
        }
    }

    /// Open the "delete by name" prompt.
    pub fn open_delete_prompt(&mut self) {
        if matches!(self.screen, Screen::List(_)) {
            self.prompt_input.clear();
            self.input_mode = InputMode::DeletePrompt;
        }
    }

    /// Close the prompt with the typed name, or `None` if it was cancelled.
    pub fn answer_delete_prompt(&mut self, confirmed: bool) {
        let response = confirmed.then(|| std::mem::take(&mut self.prompt_input));
        self.prompt_input.clear();
        self.input_mode = InputMode::Normal;

        let Screen::List(list) = &mut self.screen else {
            return;
        };
        if let Some(outcome) = list.delete_reservation(response.as_deref()) {
            self.show_notice(outcome.notice());
        }
    }

    /// Type a character into the focused text field.
    pub fn type_char(&mut self, c: char) {
        let focus = self.focus;
        if let Some(form) = self.form_mut() {
            match focus {
                FormField::Client => form.input.client.push(c),
                FormField::Date => form.input.date.push(c),
                _ => {}
            }
        }
    }

    /// Delete the last character of the focused field, or clear the vehicle.
    pub fn backspace(&mut self) {
        let focus = self.focus;
        if let Some(form) = self.form_mut() {
            match focus {
                FormField::Client => {
                    form.input.client.pop();
                }
                FormField::Date => {
                    form.input.date.pop();
                }
                FormField::Vehicle => form.input.vehicle = None,
                _ => {}
            }
        }
    }

    /// Move the focused selector one step.
    pub fn adjust(&mut self, forward: bool) {
        let focus = self.focus;
        if let Some(form) = self.form_mut() {
            match focus {
                FormField::Vehicle => {
                    form.input.vehicle = Vehicle::cycle(form.input.vehicle, forward);
                }
                FormField::Hours => form.input.step_hours(if forward { 1 } else { -1 }),
                FormField::Charge => form.input.charge = form.input.charge.toggled(),
                FormField::Client | FormField::Date => {}
            }
        }
    }

    pub fn scroll_up(&mut self) {
        self.list_scroll = self.list_scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        if let Screen::List(list) = &self.screen {
            let rows = ui::report_rows(list.report(), ui::list_width(self.area)).len();
            let rows = u16::try_from(rows).unwrap_or(u16::MAX);
            if self.list_scroll + 1 < rows {
                self.list_scroll += 1;
            }
        }
    }

    fn form_mut(&mut self) -> Option<&mut FormController> {
        match &mut self.screen {
            Screen::Form(form) => Some(form),
            Screen::List(_) => None,
        }
    }
}

fn apply_defaults(form: &mut FormController, config: &Config) {
    form.input.hours = config.initial_hours();
    form.input.charge = config.default_charge;
}

#[cfg(test)]
mod tests {
    use super::*;
    use reservas_core::{ChargeType, NoticeLevel};
    use std::rc::Rc;

    fn app() -> App {
        let mut app = App::new(Config::default());
        app.area = Rect::new(0, 0, 120, 40);
        app
    }

    fn fill_form(app: &mut App, client: &str) {
        let Screen::Form(form) = &mut app.screen else {
            panic!("not on the form");
        };
        form.input.client = client.to_string();
        form.input.vehicle = Some(Vehicle::NissanLeaf);
        form.input.date = "2024-05-01".to_string();
    }

    #[test]
    fn test_new_app_applies_config_defaults() {
        let config = Config {
            default_hours: 6,
            default_charge: ChargeType::Slow,
            ..Config::default()
        };
        let app = App::new(config);
        let Screen::Form(form) = &app.screen else {
            panic!("not on the form");
        };
        assert_eq!(form.input.hours, 6);
        assert_eq!(form.input.charge, ChargeType::Slow);
    }

    #[test]
    fn test_invalid_form_shows_notice() {
        let mut app = app();
        app.submit_reservation();

        assert_eq!(app.input_mode, InputMode::Notice);
        let notice = app.notice.clone().unwrap();
        assert_eq!(notice.level, NoticeLevel::Error);
        assert_eq!(notice.title, "Error: Nombre requerido.");
        assert!(app.screen.store().borrow().is_empty());
    }

    #[test]
    fn test_round_trip_preserves_store() {
        let mut app = app();
        fill_form(&mut app, "Ana");
        app.submit_reservation();
        let store = Rc::clone(app.screen.store());

        app.show_reservations();
        assert_eq!(app.screen.kind(), ScreenKind::List);
        app.go_back();
        assert_eq!(app.screen.kind(), ScreenKind::Form);

        assert!(Rc::ptr_eq(app.screen.store(), &store));
        assert_eq!(store.borrow().len(), 1);
    }

    #[test]
    fn test_small_terminal_keeps_form_active() {
        let mut app = app();
        app.area = Rect::new(0, 0, 50, 30);

        app.show_reservations();
        assert_eq!(app.screen.kind(), ScreenKind::Form);
        assert_eq!(app.notice.unwrap().message, "No se pudo abrir la lista de reservas.");
    }

    #[test]
    fn test_delete_prompt_flow() {
        let mut app = app();
        fill_form(&mut app, "Ana");
        app.submit_reservation();
        app.show_reservations();

        app.open_delete_prompt();
        assert_eq!(app.input_mode, InputMode::DeletePrompt);
        app.prompt_input = "ANA".to_string();
        app.answer_delete_prompt(true);

        assert_eq!(app.notice.clone().unwrap().title, "Reserva eliminada");
        assert!(app.screen.store().borrow().is_empty());
    }

    #[test]
    fn test_cancelled_prompt_does_nothing() {
        let mut app = app();
        fill_form(&mut app, "Ana");
        app.submit_reservation();
        app.show_reservations();

        app.open_delete_prompt();
        app.prompt_input = "Ana".to_string();
        app.answer_delete_prompt(false);

        assert_eq!(app.input_mode, InputMode::Normal);
        assert!(app.notice.is_none());
        assert_eq!(app.screen.store().borrow().len(), 1);
    }

    #[test]
    fn test_scroll_counts_wrapped_rows() {
        let mut app = app();
        app.area = Rect::new(0, 0, 86, 20);
        fill_form(&mut app, "Ana");
        app.submit_reservation();
        app.show_reservations();

        // At 82 columns the reservation takes two rows plus the separator
        for _ in 0..10 {
            app.scroll_down();
        }
        assert_eq!(app.list_scroll, 2);
        app.scroll_up();
        assert_eq!(app.list_scroll, 1);
    }

    #[test]
    fn test_form_field_cycle() {
        assert_eq!(FormField::Client.next(), FormField::Vehicle);
        assert_eq!(FormField::Charge.next(), FormField::Client);
        assert_eq!(FormField::Client.prev(), FormField::Charge);
    }
}
