//! Budget item entity.
//!
//! Manual items are created and edited by users. Auto-generated items are
//! owned by the budget deriver: it replaces the whole auto set on every
//! recomputation. The distinction is carried by the `ItemOrigin` variant,
//! not by sniffing id prefixes, but auto ids remain deterministic functions
//! of their provenance so recomputation can never mint a new identity for
//! an unchanged item.

use serde::{Deserialize, Serialize};

/// Budget line category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BudgetCategory {
    /// Transport cost of a team vehicle.
    TeamVehicle,
    /// Staff pay.
    Salaries,
    /// Free-form category for manual items.
    Custom(String),
}

impl std::fmt::Display for BudgetCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BudgetCategory::TeamVehicle => write!(f, "team vehicle"),
            BudgetCategory::Salaries => write!(f, "salaries"),
            BudgetCategory::Custom(name) => write!(f, "{name}"),
        }
    }
}

/// Where a budget item came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "origin", rename_all = "lowercase")]
pub enum ItemOrigin {
    /// Created by a user; never touched by derivation.
    Manual,
    /// Derived from a vehicle assignment on one leg.
    Vehicle { vehicle_id: String, leg_id: String },
    /// Derived from a freelance member's leg occupancy.
    Freelance { staff_id: String },
}

impl ItemOrigin {
    /// The provenance pointer: the resource the item was derived from.
    pub fn source_id(&self) -> Option<&str> {
        match self {
            ItemOrigin::Manual => None,
            ItemOrigin::Vehicle { vehicle_id, .. } => Some(vehicle_id),
            ItemOrigin::Freelance { staff_id } => Some(staff_id),
        }
    }
}

/// One budget line of an event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetItem {
    /// Opaque for manual items; deterministic for auto items.
    pub id: String,
    /// Owning event.
    pub event_id: String,
    pub category: BudgetCategory,
    pub description: String,
    pub estimated_cost: f64,
    pub actual_cost: Option<f64>,
    pub origin: ItemOrigin,
}

impl BudgetItem {
    /// Creates a manual item with a caller-supplied opaque id.
    pub fn manual(
        id: impl Into<String>,
        event_id: impl Into<String>,
        category: BudgetCategory,
        description: impl Into<String>,
        estimated_cost: f64,
    ) -> Self {
        Self {
            id: id.into(),
            event_id: event_id.into(),
            category,
            description: description.into(),
            estimated_cost,
            actual_cost: None,
            origin: ItemOrigin::Manual,
        }
    }

    pub fn is_manual(&self) -> bool {
        self.origin == ItemOrigin::Manual
    }

    pub fn is_auto(&self) -> bool {
        !self.is_manual()
    }

    /// Deterministic id for the derived vehicle item of one leg.
    pub fn vehicle_item_id(leg_id: &str) -> String {
        format!("auto-vehicle-{leg_id}")
    }

    /// Deterministic id for the derived salary item of one freelance member.
    pub fn freelance_item_id(event_id: &str, staff_id: &str) -> String {
        format!("auto-vacataire-{event_id}-{staff_id}")
    }
}
