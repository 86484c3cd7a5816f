//! Event entity.
//!
//! An event is the unit everything else hangs off: role-keyed staff
//! assignments, the vehicle list, and (via `event_id`) transport legs and
//! budget items. The flattened `staff` list is derived state: always the
//! deduplicated union of the role lists.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::DateRange;

/// Event classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventKind {
    Competition,
    Training,
    Camp,
    /// Domain-specific type.
    Custom(String),
}

/// A time-bound event with role-based staff assignments and a vehicle pool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Unique event identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Where the event takes place.
    pub location: String,
    /// Event classification.
    pub kind: EventKind,
    /// Start/end days of the event (end optional = single day).
    pub range: DateRange,
    /// Role key → ordered staff ids assigned under that role.
    pub roles: BTreeMap<String, Vec<String>>,
    /// Flattened union of all role lists. Derived; do not edit directly.
    pub staff: Vec<String>,
    /// Vehicles assigned to the event's legs. Derived at commit.
    pub vehicles: Vec<String>,
}

impl Event {
    /// Creates an event with no assignments.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            location: String::new(),
            kind: EventKind::Training,
            range: DateRange::default(),
            roles: BTreeMap::new(),
            staff: Vec::new(),
            vehicles: Vec::new(),
        }
    }

    /// Sets the event's day range.
    pub fn with_range(mut self, range: DateRange) -> Self {
        self.range = range;
        self
    }

    /// Sets the location.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Sets the classification.
    pub fn with_kind(mut self, kind: EventKind) -> Self {
        self.kind = kind;
        self
    }

    /// Replaces one role's staff list and recomputes the flattened union.
    ///
    /// An empty list removes the role key entirely.
    pub fn set_role(&mut self, role: impl Into<String>, staff_ids: Vec<String>) {
        let role = role.into();
        if staff_ids.is_empty() {
            self.roles.remove(&role);
        } else {
            self.roles.insert(role, staff_ids);
        }
        self.recompute_staff();
    }

    /// Rebuilds `staff` as the deduplicated union of the role lists.
    ///
    /// An id appearing under two roles contributes a single entry.
    pub fn recompute_staff(&mut self) {
        let mut union: Vec<String> = Vec::new();
        for ids in self.roles.values() {
            for id in ids {
                if !union.iter().any(|existing| existing == id) {
                    union.push(id.clone());
                }
            }
        }
        self.staff = union;
    }

    /// Whether the event references a staff member in any role.
    pub fn references_staff(&self, staff_id: &str) -> bool {
        self.roles.values().any(|ids| ids.iter().any(|id| id == staff_id))
    }

    /// Whether the event has a vehicle in its selected pool.
    pub fn references_vehicle(&self, vehicle_id: &str) -> bool {
        self.vehicles.iter().any(|id| id == vehicle_id)
    }
}
