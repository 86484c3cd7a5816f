//! Vehicle entity.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A shared vehicle assignable to transport legs.
///
/// `assigned_events` is the denormalized reverse reference list. It is owned
/// by the backlink synchronizer; nothing else writes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    /// Unique vehicle identifier.
    pub id: String,
    /// Human-readable name ("Blue lorry").
    pub name: String,
    /// Seats including the driver.
    pub seats: u32,
    /// Operating cost per day, if configured.
    pub daily_cost: Option<f64>,
    /// Single-day maintenance window, if scheduled.
    pub maintenance_date: Option<NaiveDate>,
    /// Designated driver, used to default a leg's driver on assignment.
    pub default_driver: Option<String>,
    /// Events currently referencing this vehicle. Derived; synchronizer-owned.
    pub assigned_events: Vec<String>,
}

impl Vehicle {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            seats: 0,
            daily_cost: None,
            maintenance_date: None,
            default_driver: None,
            assigned_events: Vec::new(),
        }
    }

    pub fn with_seats(mut self, seats: u32) -> Self {
        self.seats = seats;
        self
    }

    pub fn with_daily_cost(mut self, cost: f64) -> Self {
        self.daily_cost = Some(cost);
        self
    }

    pub fn with_maintenance(mut self, date: NaiveDate) -> Self {
        self.maintenance_date = Some(date);
        self
    }

    pub fn with_default_driver(mut self, staff_id: impl Into<String>) -> Self {
        self.default_driver = Some(staff_id.into());
        self
    }
}
