//! In-memory reservation store.

use crate::models::Reservation;
use std::cell::RefCell;
use std::rc::Rc;

/// Store handle shared by the form and list screens.
///
/// Cloning the handle shares the same reservations; both screens see each
/// other's changes.
pub type SharedStore = Rc<RefCell<ReservationStore>>;

/// Insertion-ordered list of reservations. Duplicates are allowed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReservationStore {
    reservations: Vec<Reservation>,
}

impl ReservationStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store behind a shared handle.
    pub fn shared() -> SharedStore {
        Rc::new(RefCell::new(Self::new()))
    }

    /// Append a reservation at the end.
    pub fn add(&mut self, reservation: Reservation) {
        self.reservations.push(reservation);
    }

    pub fn len(&self) -> usize {
        self.reservations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reservations.is_empty()
    }

    pub fn as_slice(&self) -> &[Reservation] {
        &self.reservations
    }

    /// Index of the first reservation whose client matches `name`,
    /// ignoring case.
    fn position_by_client(&self, name: &str) -> Option<usize> {
        let wanted = name.to_lowercase();
        self.reservations
            .iter()
            .position(|r| r.client().to_lowercase() == wanted)
    }

    /// Remove the first reservation whose client matches `name`, ignoring
    /// case. Leaves the store untouched when nothing matches.
    pub fn remove_first_by_client(&mut self, name: &str) -> Option<Reservation> {
        let index = self.position_by_client(name)?;
        Some(self.reservations.remove(index))
    }
}
