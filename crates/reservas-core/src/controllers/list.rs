//! Reservation list: shows every reservation and deletes by client name.

use crate::controllers::FormController;
use crate::error::NavigationError;
use crate::models::{format_price, Reservation};
use crate::navigation::{ScreenKind, ViewLoader};
use crate::notice::Notice;
use crate::store::SharedStore;
use std::rc::Rc;

/// Shown instead of the report when there are no reservations.
pub const EMPTY_REPORT: &str = "No hay reservas registradas actualmente.";

/// Line written after each reservation in the report.
pub const REPORT_SEPARATOR: &str = "----------------------------------------------------------------------------------------------------------------------------------------------------------------";

pub const DELETE_PROMPT_TITLE: &str = "Eliminar reserva";
pub const DELETE_PROMPT_HEADER: &str = "Introduce el nombre del cliente.";
pub const DELETE_PROMPT_LABEL: &str = "Nombre: ";

/// Result of a delete request that was not cancelled.
#[derive(Debug, Clone, PartialEq)]
pub enum DeleteOutcome {
    /// The name was blank; nothing was searched.
    EmptyName,
    /// This reservation was removed.
    Deleted(Reservation),
    /// No reservation for the searched name.
    NotFound(String),
}

impl DeleteOutcome {
    /// The alert shown to the user for this outcome.
    pub fn notice(&self) -> Notice {
        match self {
            DeleteOutcome::EmptyName => {
                Notice::info("Campo vacío", "Debes introducir el nombre del cliente.")
            }
            DeleteOutcome::Deleted(r) => {
                Notice::info("Reserva eliminada", format!("Reserva de {} eliminada.", r.client()))
            }
            DeleteOutcome::NotFound(name) => Notice::info(
                "Reserva no encontrada",
                format!("No hay ninguna reserva para el cliente: {name}."),
            ),
        }
    }
}

/// Controller behind the reservation list screen.
#[derive(Debug)]
pub struct ListController {
    store: SharedStore,
    report: String,
}

impl ListController {
    /// List over `store`, rendered right away.
    pub fn new(store: SharedStore) -> Self {
        let mut list = Self {
            store,
            report: String::new(),
        };
        list.refresh();
        list
    }

    pub fn store(&self) -> &SharedStore {
        &self.store
    }

    /// The rendered report, as last refreshed.
    pub fn report(&self) -> &str {
        &self.report
    }

    /// Re-render the whole report from the store.
    pub fn refresh(&mut self) {
        self.report = render_report(self.store.borrow().as_slice());
    }

    /// Handle the answer of the delete prompt.
    ///
    /// `None` means the prompt was cancelled: nothing happens and no outcome
    /// is returned. Otherwise the first reservation whose client matches the
    /// trimmed name, ignoring case, is removed.
    pub fn delete_reservation(&mut self, response: Option<&str>) -> Option<DeleteOutcome> {
        let name = response?.trim();
        if name.is_empty() {
            return Some(DeleteOutcome::EmptyName);
        }

        let removed = self.store.borrow_mut().remove_first_by_client(name);
        self.refresh();

        let outcome = match removed {
            Some(reservation) => {
                tracing::info!("Deleted reservation for {}", reservation.client());
                DeleteOutcome::Deleted(reservation)
            }
            None => {
                tracing::warn!("No reservation found for {}", name);
                DeleteOutcome::NotFound(name.to_string())
            }
        };
        Some(outcome)
    }

    /// Return to the form, handing it the same store.
    pub fn go_back(&self, loader: &mut dyn ViewLoader) -> Result<FormController, NavigationError> {
        if let Err(source) = loader.load(ScreenKind::Form) {
            tracing::error!("Could not return to the form: {:#}", source);
            return Err(NavigationError::Load {
                screen: ScreenKind::Form,
                source,
            });
        }

        Ok(FormController::with_store(Rc::clone(&self.store)))
    }
}

/// Render reservations as the list screen shows them, one block each.
pub fn render_report(reservations: &[Reservation]) -> String {
    if reservations.is_empty() {
        return EMPTY_REPORT.to_string();
    }

    let mut report = String::new();
    for r in reservations {
        report.push_str(&format!(
            "Cliente: {} | Vehiculo: {} | Fecha de reserva: {} | Horas de duración: {} | Tipo de carga: {} | Precio total: {}\n",
            r.client(),
            r.vehicle(),
            r.date(),
            r.hours(),
            r.charge_type(),
            format_price(r.total_price())
        ));
        report.push_str(REPORT_SEPARATOR);
        report.push('\n');
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::FormInput;
    use crate::models::{ChargeType, Vehicle};
    use crate::store::ReservationStore;
    use chrono::NaiveDate;

    struct AlwaysLoads;

    impl ViewLoader for AlwaysLoads {
        fn load(&mut self, _screen: ScreenKind) -> anyhow::Result<()> {
            Ok(())
        }
    }

    struct NeverLoads;

    impl ViewLoader for NeverLoads {
        fn load(&mut self, _screen: ScreenKind) -> anyhow::Result<()> {
            anyhow::bail!("terminal too small")
        }
    }

    fn store_with(clients: &[(&str, u32)]) -> SharedStore {
        let store = ReservationStore::shared();
        let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        for (client, hours) in clients {
            store
                .borrow_mut()
                .add(Reservation::new(*client, Vehicle::TeslaModel3, date, *hours, ChargeType::Slow));
        }
        store
    }

    #[test]
    fn test_empty_report() {
        let list = ListController::new(ReservationStore::shared());
        assert_eq!(list.report(), EMPTY_REPORT);
    }

    #[test]
    fn test_report_has_one_block_per_reservation_in_order() {
        let list = ListController::new(store_with(&[("Ana", 3), ("Bob", 5)]));
        let lines: Vec<_> = list.report().lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(
            lines[0],
            "Cliente: Ana | Vehiculo: Tesla Model 3 | Fecha de reserva: 2024-05-01 | Horas de duración: 3 | Tipo de carga: Carga lenta | Precio total: 30.0€"
        );
        assert_eq!(lines[1], REPORT_SEPARATOR);
        assert!(lines[2].starts_with("Cliente: Bob |"));
        assert_eq!(lines[3], REPORT_SEPARATOR);
    }

    #[test]
    fn test_delete_case_mismatched_name() {
        let mut list = ListController::new(store_with(&[("Ana", 3), ("Bob", 5)]));

        let outcome = list.delete_reservation(Some("ana")).unwrap();
        assert!(matches!(&outcome, DeleteOutcome::Deleted(r) if r.client() == "Ana"));
        assert_eq!(outcome.notice().message, "Reserva de Ana eliminada.");
        assert_eq!(list.store().borrow().len(), 1);
        assert_eq!(list.store().borrow().as_slice()[0].client(), "Bob");
        assert!(!list.report().contains("Cliente: Ana"));
    }

    #[test]
    fn test_delete_missing_name_changes_nothing() {
        let mut list = ListController::new(store_with(&[("Bob", 5)]));
        let before = list.store().borrow().clone();

        let outcome = list.delete_reservation(Some(" Carol ")).unwrap();
        assert_eq!(outcome, DeleteOutcome::NotFound("Carol".to_string()));
        assert_eq!(outcome.notice().message, "No hay ninguna reserva para el cliente: Carol.");
        assert_eq!(*list.store().borrow(), before);
    }

    #[test]
    fn test_delete_removes_only_first_match() {
        let mut list = ListController::new(store_with(&[("Ana", 1), ("ANA", 2)]));

        list.delete_reservation(Some("ana"));
        let store = list.store().borrow();
        assert_eq!(store.len(), 1);
        assert_eq!(store.as_slice()[0].hours(), 2);
    }

    #[test]
    fn test_delete_blank_or_cancelled() {
        let mut list = ListController::new(store_with(&[("Ana", 1)]));

        assert_eq!(list.delete_reservation(Some("   ")), Some(DeleteOutcome::EmptyName));
        assert_eq!(list.delete_reservation(None), None);
        assert_eq!(list.store().borrow().len(), 1);
    }

    #[test]
    fn test_round_trip_keeps_store() {
        let mut form = FormController::with_store(store_with(&[("Ana", 3), ("Bob", 5)]));
        let original = Rc::clone(form.store());

        let mut list = form.view_reservations(&mut AlwaysLoads).unwrap();
        list.delete_reservation(Some("bob"));
        form = list.go_back(&mut AlwaysLoads).unwrap();

        assert!(Rc::ptr_eq(form.store(), &original));
        assert_eq!(form.store().borrow().len(), 1);
        assert_eq!(form.input, FormInput::default());
    }

    #[test]
    fn test_go_back_failure_keeps_list() {
        let list = ListController::new(store_with(&[("Ana", 3)]));
        let err = list.go_back(&mut NeverLoads).unwrap_err();

        assert_eq!(err.notice().message, "No se pudo volver a la ventana principal.");
        assert_eq!(list.store().borrow().len(), 1);
    }
}
