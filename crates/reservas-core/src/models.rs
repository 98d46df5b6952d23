//! Shared data types for the application.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the electric vehicles available for booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vehicle {
    TeslaModel3,
    NissanLeaf,
    RenaultZoe,
    BmwI4,
    HyundaiKonaElectric,
}

impl Vehicle {
    /// All vehicles, in the order the selector offers them.
    pub const ALL: [Vehicle; 5] = [
        Vehicle::TeslaModel3,
        Vehicle::NissanLeaf,
        Vehicle::RenaultZoe,
        Vehicle::BmwI4,
        Vehicle::HyundaiKonaElectric,
    ];

    /// Model name as shown to the user.
    pub fn name(self) -> &'static str {
        match self {
            Vehicle::TeslaModel3 => "Tesla Model 3",
            Vehicle::NissanLeaf => "Nissan Leaf",
            Vehicle::RenaultZoe => "Renault Zoe",
            Vehicle::BmwI4 => "BMW i4",
            Vehicle::HyundaiKonaElectric => "Hyundai Kona Electric",
        }
    }

    /// Step through the selector: unselected, then every model in order, then
    /// back to unselected.
    pub fn cycle(current: Option<Vehicle>, forward: bool) -> Option<Vehicle> {
        let len = Self::ALL.len() + 1;
        let index = match current {
            None => 0,
            Some(v) => Self::ALL.iter().position(|&x| x == v).map_or(0, |i| i + 1),
        };
        let next = if forward {
            (index + 1) % len
        } else {
            (index + len - 1) % len
        };
        next.checked_sub(1).map(|i| Self::ALL[i])
    }
}

impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Charging speed booked with the vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChargeType {
    Slow,
    #[default]
    Fast,
}

impl ChargeType {
    /// Price per hour in euros.
    pub fn rate_per_hour(self) -> f64 {
        match self {
            ChargeType::Slow => 10.0,
            ChargeType::Fast => 15.0,
        }
    }

    /// Label shown in summaries and the reservation list.
    pub fn label(self) -> &'static str {
        match self {
            ChargeType::Slow => "Carga lenta",
            ChargeType::Fast => "Carga rápida",
        }
    }

    /// The other option of the radio pair.
    pub fn toggled(self) -> Self {
        match self {
            ChargeType::Slow => ChargeType::Fast,
            ChargeType::Fast => ChargeType::Slow,
        }
    }
}

impl fmt::Display for ChargeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single booking.
///
/// The total price is computed once in [`Reservation::new`]. None of the
/// setters touch it, so a reservation keeps the price it was booked at.
#[derive(Debug, Clone, PartialEq)]
pub struct Reservation {
    client: String,
    vehicle: Vehicle,
    date: NaiveDate,
    hours: u32,
    charge_type: ChargeType,
    total_price: f64,
}

impl Reservation {
    /// Create a reservation. Range checks are the caller's job.
    pub fn new(
        client: impl Into<String>,
        vehicle: Vehicle,
        date: NaiveDate,
        hours: u32,
        charge_type: ChargeType,
    ) -> Self {
        Self {
            client: client.into(),
            vehicle,
            date,
            hours,
            charge_type,
            total_price: price_for(hours, charge_type),
        }
    }

    pub fn client(&self) -> &str {
        &self.client
    }

    pub fn vehicle(&self) -> Vehicle {
        self.vehicle
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn hours(&self) -> u32 {
        self.hours
    }

    pub fn charge_type(&self) -> ChargeType {
        self.charge_type
    }

    /// Price in euros, fixed at construction.
    pub fn total_price(&self) -> f64 {
        self.total_price
    }

    pub fn set_client(&mut self, client: impl Into<String>) {
        self.client = client.into();
    }

    pub fn set_vehicle(&mut self, vehicle: Vehicle) {
        self.vehicle = vehicle;
    }

    pub fn set_date(&mut self, date: NaiveDate) {
        self.date = date;
    }

    pub fn set_hours(&mut self, hours: u32) {
        self.hours = hours;
    }

    pub fn set_charge_type(&mut self, charge_type: ChargeType) {
        self.charge_type = charge_type;
    }

    pub fn set_total_price(&mut self, total_price: f64) {
        self.total_price = total_price;
    }
}

/// Hours times the hourly rate of the charge type.
pub fn price_for(hours: u32, charge_type: ChargeType) -> f64 {
    f64::from(hours) * charge_type.rate_per_hour()
}

/// Format an amount the way summaries and the list show it, e.g. `30.0€`.
pub fn format_price(amount: f64) -> String {
    format!("{amount:.1}€")
}
