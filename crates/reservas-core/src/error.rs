//! Error types for reservation handling and screen navigation.

use crate::navigation::ScreenKind;
use crate::notice::Notice;
use thiserror::Error;

/// Reasons a reservation could not be registered.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReservationError {
    #[error("client name is required")]
    MissingClient,

    #[error("a vehicle must be selected")]
    MissingVehicle,

    #[error("a date must be selected")]
    MissingDate,

    #[error("hours must be between 1 and 24, got {0}")]
    InvalidHours(i64),

    #[error("invalid format or data: {0}")]
    InvalidFormat(String),
}

impl ReservationError {
    /// The alert shown to the user for this error.
    pub fn notice(&self) -> Notice {
        match self {
            ReservationError::MissingClient => {
                Notice::error("Error: Nombre requerido.", "Introduce el nombre del cliente.")
            }
            ReservationError::MissingVehicle => {
                Notice::error("Error: Vehículo requerido.", "Selecciona un vehículo.")
            }
            ReservationError::MissingDate => {
                Notice::error("Error: Fecha requerida.", "Selecciona una fecha.")
            }
            ReservationError::InvalidHours(_) => {
                Notice::error("Error. Horas inválidas", "Selecciona entre 1 y 24 horas.")
            }
            ReservationError::InvalidFormat(_) => {
                Notice::error("Error", "Formato incorrecto o dato inválido")
            }
        }
    }
}

/// A screen could not be prepared; the current screen stays active.
#[derive(Debug, Error)]
pub enum NavigationError {
    #[error("failed to load the {screen} screen: {source}")]
    Load {
        screen: ScreenKind,
        #[source]
        source: anyhow::Error,
    },
}

impl NavigationError {
    /// The alert shown to the user for this error.
    pub fn notice(&self) -> Notice {
        match self {
            NavigationError::Load {
                screen: ScreenKind::List,
                ..
            } => Notice::error("Error", "No se pudo abrir la lista de reservas."),
            NavigationError::Load {
                screen: ScreenKind::Form,
                ..
            } => Notice::error("Error", "No se pudo volver a la ventana principal."),
        }
    }
}
