//! Reservation form: validates input and registers reservations.

use crate::controllers::ListController;
use crate::error::{NavigationError, ReservationError};
use crate::models::{format_price, ChargeType, Reservation, Vehicle};
use crate::navigation::{ScreenKind, ViewLoader};
use crate::store::{ReservationStore, SharedStore};
use chrono::NaiveDate;
use std::ops::RangeInclusive;
use std::rc::Rc;

/// Hours a reservation may last.
pub const HOURS_RANGE: RangeInclusive<i64> = 1..=24;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Raw values of the form widgets, before any validation.
#[derive(Debug, Clone, PartialEq)]
pub struct FormInput {
    pub client: String,
    pub vehicle: Option<Vehicle>,
    /// Date as typed, `YYYY-MM-DD`.
    pub date: String,
    pub hours: i64,
    pub charge: ChargeType,
}

impl Default for FormInput {
    fn default() -> Self {
        Self {
            client: String::new(),
            vehicle: None,
            date: String::new(),
            hours: *HOURS_RANGE.start(),
            charge: ChargeType::default(),
        }
    }
}

impl FormInput {
    /// Move the hours selector by `delta`, staying inside [`HOURS_RANGE`].
    pub fn step_hours(&mut self, delta: i64) {
        self.hours = (self.hours + delta).clamp(*HOURS_RANGE.start(), *HOURS_RANGE.end());
    }
}

/// Controller behind the main form screen.
#[derive(Debug)]
pub struct FormController {
    store: SharedStore,
    pub input: FormInput,
    summary: Option<String>,
}

impl Default for FormController {
    fn default() -> Self {
        Self::new()
    }
}

impl FormController {
    /// Form with a fresh, empty store. Used when the application starts.
    pub fn new() -> Self {
        Self::with_store(ReservationStore::shared())
    }

    /// Form adopting an existing store, used when coming back from the list.
    pub fn with_store(store: SharedStore) -> Self {
        Self {
            store,
            input: FormInput::default(),
            summary: None,
        }
    }

    pub fn store(&self) -> &SharedStore {
        &self.store
    }

    /// Summary of the last registered reservation.
    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    /// Validate the form and register the reservation.
    ///
    /// On error nothing is added and the previous summary is kept.
    pub fn reserve(&mut self) -> Result<Reservation, ReservationError> {
        let reservation = match self.build_reservation() {
            Ok(reservation) => reservation,
            Err(e) => {
                tracing::warn!("Reservation rejected: {}", e);
                return Err(e);
            }
        };

        self.store.borrow_mut().add(reservation.clone());
        tracing::info!(
            "Registered reservation for {} ({}, {} h, {})",
            reservation.client(),
            reservation.vehicle(),
            reservation.hours(),
            format_price(reservation.total_price())
        );

        self.summary = Some(format_summary(&reservation));
        Ok(reservation)
    }

    fn build_reservation(&self) -> Result<Reservation, ReservationError> {
        let input = &self.input;

        if input.client.is_empty() {
            return Err(ReservationError::MissingClient);
        }
        let vehicle = input.vehicle.ok_or(ReservationError::MissingVehicle)?;
        let date = parse_date(&input.date)?;
        if !HOURS_RANGE.contains(&input.hours) {
            return Err(ReservationError::InvalidHours(input.hours));
        }
        let hours = u32::try_from(input.hours)
            .map_err(|e| ReservationError::InvalidFormat(e.to_string()))?;

        Ok(Reservation::new(
            input.client.clone(),
            vehicle,
            date,
            hours,
            input.charge,
        ))
    }

    /// Open the reservation list over the same store.
    pub fn view_reservations(
        &self,
        loader: &mut dyn ViewLoader,
    ) -> Result<ListController, NavigationError> {
        if let Err(source) = loader.load(ScreenKind::List) {
            tracing::error!("Could not open the reservation list: {:#}", source);
            return Err(NavigationError::Load {
                screen: ScreenKind::List,
                source,
            });
        }

        tracing::info!("Showing {} reservations", self.store.borrow().len());
        Ok(ListController::new(Rc::clone(&self.store)))
    }
}

fn parse_date(text: &str) -> Result<NaiveDate, ReservationError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ReservationError::MissingDate);
    }
    NaiveDate::parse_from_str(text, DATE_FORMAT)
        .map_err(|e| ReservationError::InvalidFormat(format!("date {text:?}: {e}")))
}

fn format_summary(r: &Reservation) -> String {
    format!(
        "Reserva registrada correctamente\n\
         Cliente: {}\n\
         Vehiculo: {}\n\
         Fecha de reserva: {}\n\
         Horas de duración: {}\n\
         Tipo de carga: {}\n\
         Precio total: {}",
        r.client(),
        r.vehicle(),
        r.date(),
        r.hours(),
        r.charge_type(),
        format_price(r.total_price())
    )
}
