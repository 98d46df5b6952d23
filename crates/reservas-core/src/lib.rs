//! Core models and screen logic for reservas.
//!
//! This crate holds the reservation model, the in-memory store shared by the
//! two screens, and the controllers that validate input and mutate the store.
//! Frontends only draw the screens and feed user actions into the
//! controllers.

pub mod controllers;
pub mod error;
pub mod models;
pub mod navigation;
pub mod notice;
pub mod store;

pub use controllers::{DeleteOutcome, FormController, FormInput, ListController};
pub use error::{NavigationError, ReservationError};
pub use models::{ChargeType, Reservation, Vehicle};
pub use navigation::{Screen, ScreenKind, ViewLoader};
pub use notice::{Notice, NoticeLevel};
pub use store::{ReservationStore, SharedStore};
