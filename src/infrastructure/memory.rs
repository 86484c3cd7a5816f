//! In-memory data store.
//!
//! Reference implementation of the `DataStore` port. Also the natural store
//! for tests: batches apply in one step, so atomicity holds trivially.

use std::collections::BTreeMap;

use anyhow::Result;
use tracing::debug;

use crate::domain::entities::{BudgetItem, Event, StaffMember, TransportLeg, Vehicle};
use crate::domain::ports::{DataStore, Snapshot, WriteBatch};

/// A `DataStore` backed by in-process maps.
#[derive(Debug, Default)]
pub struct MemoryStore {
    events: BTreeMap<String, Event>,
    legs: BTreeMap<String, TransportLeg>,
    vehicles: BTreeMap<String, Vehicle>,
    staff: BTreeMap<String, StaffMember>,
    budget_items: BTreeMap<String, BudgetItem>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store from a snapshot.
    pub fn with_snapshot(snapshot: Snapshot) -> Self {
        Self {
            events: snapshot.events.into_iter().map(|e| (e.id.clone(), e)).collect(),
            legs: snapshot.legs.into_iter().map(|l| (l.id.clone(), l)).collect(),
            vehicles: snapshot.vehicles.into_iter().map(|v| (v.id.clone(), v)).collect(),
            staff: snapshot.staff.into_iter().map(|s| (s.id.clone(), s)).collect(),
            budget_items: snapshot
                .budget_items
                .into_iter()
                .map(|b| (b.id.clone(), b))
                .collect(),
        }
    }
}

impl DataStore for MemoryStore {
    fn load(&self) -> Result<Snapshot> {
        Ok(Snapshot {
            events: self.events.values().cloned().collect(),
            legs: self.legs.values().cloned().collect(),
            vehicles: self.vehicles.values().cloned().collect(),
            staff: self.staff.values().cloned().collect(),
            budget_items: self.budget_items.values().cloned().collect(),
        })
    }

    fn apply(&mut self, batch: &WriteBatch) -> Result<()> {
        for event in &batch.events {
            self.events.insert(event.id.clone(), event.clone());
        }
        for leg in &batch.legs {
            self.legs.insert(leg.id.clone(), leg.clone());
        }
        for leg_id in &batch.deleted_legs {
            self.legs.remove(leg_id);
        }
        for vehicle in &batch.vehicles {
            self.vehicles.insert(vehicle.id.clone(), vehicle.clone());
        }
        for member in &batch.staff {
            self.staff.insert(member.id.clone(), member.clone());
        }
        for item in &batch.budget_items {
            self.budget_items.insert(item.id.clone(), item.clone());
        }
        for item_id in &batch.deleted_budget_items {
            self.budget_items.remove(item_id);
        }
        debug!(writes = batch.len(), "applied batch");
        Ok(())
    }
}
