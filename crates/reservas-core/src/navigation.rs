//! Switching between the form and list screens.
//!
//! Both screens hold a clone of the same [`SharedStore`]; moving from one to
//! the other hands that handle over instead of copying the reservations.

use crate::controllers::{FormController, ListController};
use crate::store::SharedStore;
use std::fmt;

/// The two screens of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenKind {
    Form,
    List,
}

impl ScreenKind {
    /// Window title for the screen.
    pub fn title(self) -> &'static str {
        match self {
            ScreenKind::Form => "Gestión de vehículos",
            ScreenKind::List => "Listado de reservas",
        }
    }
}

impl fmt::Display for ScreenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScreenKind::Form => f.write_str("form"),
            ScreenKind::List => f.write_str("list"),
        }
    }
}

/// Prepares the view for a screen before its controller takes over.
///
/// Implemented by the presentation layer. An error keeps the caller on its
/// current screen.
pub trait ViewLoader {
    fn load(&mut self, screen: ScreenKind) -> anyhow::Result<()>;
}

/// The active screen and its controller.
#[derive(Debug)]
pub enum Screen {
    Form(FormController),
    List(ListController),
}

impl Screen {
    pub fn kind(&self) -> ScreenKind {
        match self {
            Screen::Form(_) => ScreenKind::Form,
            Screen::List(_) => ScreenKind::List,
        }
    }

    /// The store held by the active controller.
    pub fn store(&self) -> &SharedStore {
        match self {
            Screen::Form(form) => form.store(),
            Screen::List(list) => list.store(),
        }
    }
}
