//! Staff member entity.

use serde::{Deserialize, Serialize};

/// Employment status, which decides whether day-rate billing applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Employment {
    /// On payroll; never billed per event day.
    #[default]
    Salaried,
    /// Billed per day actually worked.
    Freelance,
}

/// A staff member assignable to event roles and transport legs.
///
/// `assigned_events` is the denormalized reverse reference list, owned by
/// the backlink synchronizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffMember {
    /// Unique staff identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    pub employment: Employment,
    /// Day rate; meaningful only for freelance staff.
    pub daily_rate: Option<f64>,
    /// Events currently referencing this member. Derived; synchronizer-owned.
    pub assigned_events: Vec<String>,
}

impl StaffMember {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            employment: Employment::Salaried,
            daily_rate: None,
            assigned_events: Vec::new(),
        }
    }

    pub fn freelance(id: impl Into<String>, name: impl Into<String>, daily_rate: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            employment: Employment::Freelance,
            daily_rate: Some(daily_rate),
            assigned_events: Vec::new(),
        }
    }

    /// Whether this member generates a derived salary line when occupying legs.
    pub fn bills_by_day(&self) -> bool {
        self.employment == Employment::Freelance
            && self.daily_rate.is_some_and(|rate| rate > 0.0)
    }
}
