//! Backlink synchronization.
//!
//! Reverse event-reference lists on vehicles and staff members are owned by
//! this service alone. Synchronization is a full membership pass over every
//! resource, not an incremental diff, so references left over from a
//! resource's state before the edit are corrected too.

use std::collections::BTreeMap;

use crate::domain::entities::{Event, StaffMember, Vehicle};

/// Resources whose reverse lists changed during one pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BacklinkChanges {
    pub vehicles: Vec<String>,
    pub staff: Vec<String>,
}

impl BacklinkChanges {
    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty() && self.staff.is_empty()
    }
}

/// Keeps `assigned_events` consistent with the assignments referencing each
/// resource.
pub struct BacklinkSynchronizer;

impl BacklinkSynchronizer {
    /// Re-derives every resource's reverse reference for one event.
    ///
    /// Postcondition: for every resource,
    /// `resource.assigned_events.contains(event.id)` iff the event references
    /// the resource (role lists for staff, selected-vehicle pool for
    /// vehicles). Returns the resources whose lists changed.
    pub fn sync_event(
        event: &Event,
        vehicles: &mut BTreeMap<String, Vehicle>,
        staff: &mut BTreeMap<String, StaffMember>,
    ) -> BacklinkChanges {
        let mut changes = BacklinkChanges::default();

        for vehicle in vehicles.values_mut() {
            let referenced = event.references_vehicle(&vehicle.id);
            if reconcile(&mut vehicle.assigned_events, &event.id, referenced) {
                changes.vehicles.push(vehicle.id.clone());
            }
        }

        for member in staff.values_mut() {
            let referenced = event.references_staff(&member.id);
            if reconcile(&mut member.assigned_events, &event.id, referenced) {
                changes.staff.push(member.id.clone());
            }
        }

        changes
    }
}

/// Appends or removes one event id; returns whether the list changed.
fn reconcile(list: &mut Vec<String>, event_id: &str, referenced: bool) -> bool {
    let present = list.iter().any(|id| id == event_id);
    match (referenced, present) {
        (true, false) => {
            list.push(event_id.to_string());
            true
        }
        (false, true) => {
            list.retain(|id| id != event_id);
            true
        }
        _ => false,
    }
}
