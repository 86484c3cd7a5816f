//! DataStore port - abstraction for the persistence collaborator.
//!
//! The engine reads whole collections once and hands writes back as a single
//! batch. The store must apply a batch atomically: either every upsert and
//! delete lands, or none do. That is what lets the commit pipeline stay a
//! unit instead of a sequence of best-effort writes.

use anyhow::Result;

use crate::domain::entities::{BudgetItem, Event, StaffMember, TransportLeg, Vehicle};

/// Whole-collection read of everything the engine operates on.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub events: Vec<Event>,
    pub legs: Vec<TransportLeg>,
    pub vehicles: Vec<Vehicle>,
    pub staff: Vec<StaffMember>,
    pub budget_items: Vec<BudgetItem>,
}

/// Upserts and deletes from one commit, flushed together.
///
/// Upserts carry whole records (merge-by-replace; there is no partial-field
/// patch). Deletes are by id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WriteBatch {
    pub events: Vec<Event>,
    pub legs: Vec<TransportLeg>,
    pub deleted_legs: Vec<String>,
    pub vehicles: Vec<Vehicle>,
    pub staff: Vec<StaffMember>,
    pub budget_items: Vec<BudgetItem>,
    pub deleted_budget_items: Vec<String>,
}

impl WriteBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
            && self.legs.is_empty()
            && self.deleted_legs.is_empty()
            && self.vehicles.is_empty()
            && self.staff.is_empty()
            && self.budget_items.is_empty()
            && self.deleted_budget_items.is_empty()
    }

    /// Number of writes in the batch, deletes included.
    pub fn len(&self) -> usize {
        self.events.len()
            + self.legs.len()
            + self.deleted_legs.len()
            + self.vehicles.len()
            + self.staff.len()
            + self.budget_items.len()
            + self.deleted_budget_items.len()
    }
}

/// Abstract store for events, legs, resources, and budget items.
///
/// Implemented by the infrastructure layer; the reference implementation is
/// `infrastructure::MemoryStore`.
pub trait DataStore {
    /// Load every collection.
    fn load(&self) -> Result<Snapshot>;

    /// Apply one commit's writes atomically.
    fn apply(&mut self, batch: &WriteBatch) -> Result<()>;
}
