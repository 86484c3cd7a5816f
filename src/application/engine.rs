//! The assignment engine: registry state, draft commands, and the commit
//! pipeline.
//!
//! One edit moves through four states: Draft (buffered, no shared effect),
//! Validated (availability annotations via the query methods), Committed
//! (registry update, budget derivation, backlink synchronization), and
//! Persisted (a single atomic batch handed to the data store). The three
//! commit stages are computed on cloned state and flushed as one
//! `WriteBatch`, so a store failure leaves the in-memory collections
//! untouched.
//!
//! Single-writer model: one edit is processed start to finish before the
//! next; there is no locking inside the engine.

use std::collections::{BTreeMap, BTreeSet};

use tracing::{debug, info};

use crate::application::draft::EventDraft;
use crate::domain::entities::{
    BudgetCategory, BudgetItem, Event, LegDirection, Occupant, PersonKind, StaffMember, StopUpdate,
    TransportLeg, TransportStop, Vehicle, Waypoint,
};
use crate::domain::ports::{DataStore, IdGenerator, WriteBatch};
use crate::domain::services::{Availability, AvailabilityChecker, BacklinkSynchronizer, BudgetDeriver};
use crate::domain::value_objects::DateRange;
use crate::error::{EngineError, EngineResult};

/// What one commit changed.
#[derive(Debug, Clone, Default)]
pub struct CommitSummary {
    pub event_id: String,
    /// Auto budget items now current for the event.
    pub derived_items: usize,
    /// Stale auto items deleted.
    pub deleted_items: usize,
    /// Resources whose reverse references changed.
    pub backlinks_updated: usize,
    /// Total writes flushed to the store.
    pub writes: usize,
}

/// Fields of a manual budget item that can change after creation.
#[derive(Debug, Clone, Default)]
pub struct ManualItemUpdate {
    pub category: Option<BudgetCategory>,
    pub description: Option<String>,
    pub estimated_cost: Option<f64>,
    pub actual_cost: Option<f64>,
}

/// In-process registry over the data store's collections.
pub struct AssignmentEngine<S: DataStore> {
    store: S,
    ids: Box<dyn IdGenerator>,
    pub(crate) events: BTreeMap<String, Event>,
    pub(crate) legs: BTreeMap<String, TransportLeg>,
    pub(crate) vehicles: BTreeMap<String, Vehicle>,
    pub(crate) staff: BTreeMap<String, StaffMember>,
    pub(crate) budget_items: BTreeMap<String, BudgetItem>,
}

impl<S: DataStore> AssignmentEngine<S> {
    /// Loads every collection from the store.
    pub fn load(store: S, ids: Box<dyn IdGenerator>) -> EngineResult<Self> {
        let snapshot = store.load()?;
        debug!(
            events = snapshot.events.len(),
            legs = snapshot.legs.len(),
            vehicles = snapshot.vehicles.len(),
            staff = snapshot.staff.len(),
            "loaded collections"
        );
        Ok(Self {
            store,
            ids,
            events: snapshot.events.into_iter().map(|e| (e.id.clone(), e)).collect(),
            legs: snapshot.legs.into_iter().map(|l| (l.id.clone(), l)).collect(),
            vehicles: snapshot.vehicles.into_iter().map(|v| (v.id.clone(), v)).collect(),
            staff: snapshot.staff.into_iter().map(|s| (s.id.clone(), s)).collect(),
            budget_items: snapshot
                .budget_items
                .into_iter()
                .map(|b| (b.id.clone(), b))
                .collect(),
        })
    }

    // === Draft lifecycle ===

    /// Starts an edit on one event: clones the event and its legs into a
    /// draft buffer. Abandoning the draft is simply dropping it.
    pub fn begin_edit(&self, event_id: &str) -> EngineResult<EventDraft> {
        let event = self.event(event_id)?.clone();
        let legs = self
            .legs
            .values()
            .filter(|leg| leg.event_id == event_id)
            .cloned()
            .collect();
        Ok(EventDraft::new(event, legs))
    }

    // === Registry commands (draft mutations) ===

    /// Replaces one role's staff list and recomputes the flattened union.
    pub fn set_role_assignment(
        &self,
        draft: &mut EventDraft,
        role: &str,
        staff_ids: Vec<String>,
    ) -> EngineResult<()> {
        for id in &staff_ids {
            self.staff_member(id)?;
        }
        draft.event.set_role(role, staff_ids);
        Ok(())
    }

    /// Adds an empty leg to the draft and returns its generated id.
    pub fn add_leg(&self, draft: &mut EventDraft, direction: LegDirection) -> EngineResult<String> {
        let leg_id = self.ids.generate();
        let leg = TransportLeg::new(leg_id.clone(), draft.event.id.clone(), direction);
        draft.legs.insert(leg_id.clone(), leg);
        Ok(leg_id)
    }

    /// Removes a leg from the draft; the deletion lands at commit.
    pub fn remove_leg(&self, draft: &mut EventDraft, leg_id: &str) -> EngineResult<()> {
        if draft.legs.remove(leg_id).is_none() {
            return Err(EngineError::not_found("transport leg", leg_id));
        }
        draft.removed_legs.push(leg_id.to_string());
        Ok(())
    }

    pub fn set_leg_departure(
        &self,
        draft: &mut EventDraft,
        leg_id: &str,
        departure: Waypoint,
    ) -> EngineResult<()> {
        draft.leg_mut(leg_id)?.departure = departure;
        Ok(())
    }

    pub fn set_leg_arrival(
        &self,
        draft: &mut EventDraft,
        leg_id: &str,
        arrival: Option<Waypoint>,
    ) -> EngineResult<()> {
        draft.leg_mut(leg_id)?.arrival = arrival;
        Ok(())
    }

    /// Assigns or clears a leg's vehicle.
    ///
    /// When the leg has no driver yet, the driver defaults to the vehicle's
    /// designated driver. A driver set through `set_leg_driver` is never
    /// overwritten. Clearing the vehicle leaves the driver as chosen.
    pub fn set_leg_vehicle(
        &self,
        draft: &mut EventDraft,
        leg_id: &str,
        vehicle_id: Option<&str>,
    ) -> EngineResult<()> {
        let default_driver = match vehicle_id {
            Some(id) => self.vehicle(id)?.default_driver.clone(),
            None => None,
        };

        let leg = draft.leg_mut(leg_id)?;
        leg.vehicle = vehicle_id.map(str::to_string);
        if leg.driver.is_none() {
            leg.driver = default_driver;
        }
        Ok(())
    }

    /// Explicitly chooses (or clears) a leg's driver, overriding any default.
    pub fn set_leg_driver(
        &self,
        draft: &mut EventDraft,
        leg_id: &str,
        driver_id: Option<&str>,
    ) -> EngineResult<()> {
        if let Some(id) = driver_id {
            self.staff_member(id)?;
        }
        draft.leg_mut(leg_id)?.driver = driver_id.map(str::to_string);
        Ok(())
    }

    /// Inserts the (person, kind) pair on the leg if absent, removes it if
    /// present. Returns `true` when the pair is on the leg afterwards.
    pub fn toggle_occupant(
        &self,
        draft: &mut EventDraft,
        leg_id: &str,
        person_id: &str,
        kind: PersonKind,
    ) -> EngineResult<bool> {
        Ok(draft.leg_mut(leg_id)?.toggle_occupant(person_id, kind))
    }

    /// Appends an empty stop to the leg's ordered stop sequence.
    pub fn add_stop(&self, draft: &mut EventDraft, leg_id: &str) -> EngineResult<String> {
        let stop_id = self.ids.generate();
        draft
            .leg_mut(leg_id)?
            .stops
            .push(TransportStop::new(stop_id.clone()));
        Ok(stop_id)
    }

    pub fn remove_stop(
        &self,
        draft: &mut EventDraft,
        leg_id: &str,
        stop_id: &str,
    ) -> EngineResult<()> {
        let leg = draft.leg_mut(leg_id)?;
        let before = leg.stops.len();
        leg.stops.retain(|stop| stop.id != stop_id);
        if leg.stops.len() == before {
            return Err(EngineError::not_found("stop", stop_id));
        }
        Ok(())
    }

    /// Applies one field update to a stop.
    pub fn update_stop(
        &self,
        draft: &mut EventDraft,
        leg_id: &str,
        stop_id: &str,
        update: StopUpdate,
    ) -> EngineResult<()> {
        let stop = draft
            .leg_mut(leg_id)?
            .stop_mut(stop_id)
            .ok_or_else(|| EngineError::not_found("stop", stop_id))?;
        match update {
            StopUpdate::Location(location) => stop.location = location,
            StopUpdate::Date(date) => stop.date = date,
            StopUpdate::Time(time) => stop.time = time,
            StopUpdate::Kind(kind) => stop.kind = kind,
        }
        Ok(())
    }

    /// Toggles a person on a stop's boarding/alighting list. Stop lists are
    /// independent of the leg's occupant list but share its semantics.
    pub fn toggle_stop_person(
        &self,
        draft: &mut EventDraft,
        leg_id: &str,
        stop_id: &str,
        person_id: &str,
        kind: PersonKind,
    ) -> EngineResult<bool> {
        let stop = draft
            .leg_mut(leg_id)?
            .stop_mut(stop_id)
            .ok_or_else(|| EngineError::not_found("stop", stop_id))?;
        Ok(crate::domain::entities::toggle(
            &mut stop.persons,
            person_id,
            kind,
        ))
    }

    // === Commit pipeline ===

    /// Validates the draft, recomputes derived data, and flushes everything
    /// as one atomic batch.
    ///
    /// Stages: range validation, conflict enforcement, registry update,
    /// budget derivation, backlink synchronization. Committing an assignment
    /// the availability checker marks unavailable fails with
    /// [`EngineError::Conflict`]; nothing in shared state changes unless the
    /// whole batch lands. The draft stays with the caller, so a failed
    /// commit can simply be retried.
    pub fn commit(&mut self, draft: &EventDraft) -> EngineResult<CommitSummary> {
        self.validate_ranges(draft)?;
        self.enforce_conflicts(draft)?;

        // Registry update: the event's vehicle list is derived from its
        // legs, the same way the staff list is derived from the roles.
        let mut event = draft.event.clone();
        let mut vehicles_in_use: Vec<String> = Vec::new();
        for leg in draft.legs.values() {
            if let Some(vehicle_id) = &leg.vehicle {
                if !vehicles_in_use.contains(vehicle_id) {
                    vehicles_in_use.push(vehicle_id.clone());
                }
            }
        }
        event.vehicles = vehicles_in_use;

        let event_id = event.id.clone();

        // Budget derivation over the draft's registry state.
        let previous: Vec<&BudgetItem> = self
            .budget_items
            .values()
            .filter(|item| item.event_id == event_id)
            .collect();
        let leg_refs: Vec<&TransportLeg> = draft.legs.values().collect();
        let fresh = BudgetDeriver::derive(
            &event,
            &leg_refs,
            &self.vehicles,
            &self.staff,
            &previous,
        );
        let fresh_auto: Vec<BudgetItem> =
            fresh.into_iter().filter(BudgetItem::is_auto).collect();
        let fresh_ids: BTreeSet<&str> = fresh_auto.iter().map(|item| item.id.as_str()).collect();
        let stale: Vec<String> = previous
            .iter()
            .filter(|item| item.is_auto() && !fresh_ids.contains(item.id.as_str()))
            .map(|item| item.id.clone())
            .collect();

        // Backlink synchronization on cloned resource maps.
        let mut vehicles = self.vehicles.clone();
        let mut staff = self.staff.clone();
        let backlinks = BacklinkSynchronizer::sync_event(&event, &mut vehicles, &mut staff);

        let mut batch = WriteBatch::new();
        batch.events.push(event);
        batch.legs.extend(draft.legs.values().cloned());
        batch.deleted_legs.extend(draft.removed_legs.iter().cloned());
        batch.budget_items.extend(fresh_auto.iter().cloned());
        batch.deleted_budget_items.extend(stale.iter().cloned());
        batch
            .vehicles
            .extend(backlinks.vehicles.iter().map(|id| vehicles[id].clone()));
        batch
            .staff
            .extend(backlinks.staff.iter().map(|id| staff[id].clone()));

        let summary = CommitSummary {
            event_id: event_id.clone(),
            derived_items: fresh_auto.len(),
            deleted_items: stale.len(),
            backlinks_updated: backlinks.vehicles.len() + backlinks.staff.len(),
            writes: batch.len(),
        };

        // Single suspension point: the store boundary. In-memory state is
        // only touched once the flush succeeds.
        self.store.apply(&batch)?;
        self.apply_in_memory(&batch);

        info!(
            event = %event_id,
            derived = summary.derived_items,
            deleted = summary.deleted_items,
            backlinks = summary.backlinks_updated,
            writes = summary.writes,
            "committed assignments"
        );
        Ok(summary)
    }

    fn validate_ranges(&self, draft: &EventDraft) -> EngineResult<()> {
        draft.event.range.validate("event", &draft.event.id)?;
        for leg in draft.legs.values() {
            leg.date_range().validate("transport leg", &leg.id)?;
        }
        Ok(())
    }

    /// Conflict-freedom is a hard data invariant, not a UI hint: a draft
    /// whose vehicle or staff assignments are unavailable does not commit.
    fn enforce_conflicts(&self, draft: &EventDraft) -> EngineResult<()> {
        for leg in draft.legs.values() {
            let Some(vehicle_id) = leg.vehicle.as_deref() else {
                continue;
            };
            let vehicle = self.vehicle(vehicle_id)?;
            // Other events' committed legs plus the draft's own other legs.
            let others = self
                .legs
                .values()
                .filter(|l| l.event_id != draft.event.id)
                .chain(draft.legs.values().filter(|l| l.id != leg.id));
            let availability =
                AvailabilityChecker::vehicle(vehicle, &leg.date_range(), others, Some(&leg.id));
            if !availability.is_available() {
                return Err(EngineError::Conflict {
                    entity: "vehicle",
                    id: vehicle_id.to_string(),
                    reason: availability.reason,
                });
            }
        }

        for staff_id in &draft.event.staff {
            let member = self.staff_member(staff_id)?;
            let availability = AvailabilityChecker::staff(
                member,
                &draft.event.range,
                self.events.values(),
                Some(&draft.event.id),
            );
            if !availability.is_available() {
                return Err(EngineError::Conflict {
                    entity: "staff member",
                    id: staff_id.clone(),
                    reason: availability.reason,
                });
            }
        }
        Ok(())
    }

    fn apply_in_memory(&mut self, batch: &WriteBatch) {
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
    }

    // === Manual budget items ===

    /// Creates a manual budget line with a generated opaque id.
    pub fn add_manual_item(
        &mut self,
        event_id: &str,
        category: BudgetCategory,
        description: &str,
        estimated_cost: f64,
    ) -> EngineResult<String> {
        self.event(event_id)?;
        let id = self.ids.generate();
        let item = BudgetItem::manual(id.clone(), event_id, category, description, estimated_cost);

        let mut batch = WriteBatch::new();
        batch.budget_items.push(item);
        self.store.apply(&batch)?;
        self.apply_in_memory(&batch);
        Ok(id)
    }

    /// Edits a manual budget line. Derived items are deriver-owned and
    /// cannot be edited.
    pub fn update_manual_item(
        &mut self,
        item_id: &str,
        update: ManualItemUpdate,
    ) -> EngineResult<()> {
        let mut item = self.manual_item(item_id)?.clone();
        if let Some(category) = update.category {
            item.category = category;
        }
        if let Some(description) = update.description {
            item.description = description;
        }
        if let Some(cost) = update.estimated_cost {
            item.estimated_cost = cost;
        }
        if let Some(cost) = update.actual_cost {
            item.actual_cost = Some(cost);
        }

        let mut batch = WriteBatch::new();
        batch.budget_items.push(item);
        self.store.apply(&batch)?;
        self.apply_in_memory(&batch);
        Ok(())
    }

    /// Deletes a manual budget line.
    pub fn remove_manual_item(&mut self, item_id: &str) -> EngineResult<()> {
        self.manual_item(item_id)?;
        let mut batch = WriteBatch::new();
        batch.deleted_budget_items.push(item_id.to_string());
        self.store.apply(&batch)?;
        self.apply_in_memory(&batch);
        Ok(())
    }

    fn manual_item(&self, item_id: &str) -> EngineResult<&BudgetItem> {
        let item = self
            .budget_items
            .get(item_id)
            .ok_or_else(|| EngineError::not_found("budget item", item_id))?;
        if item.is_auto() {
            return Err(EngineError::Conflict {
                entity: "budget item",
                id: item_id.to_string(),
                reason: "derived items are owned by the budget deriver".to_string(),
            });
        }
        Ok(item)
    }

    // === Entity accessors ===

    pub fn event(&self, event_id: &str) -> EngineResult<&Event> {
        self.events
            .get(event_id)
            .ok_or_else(|| EngineError::not_found("event", event_id))
    }

    pub fn leg(&self, leg_id: &str) -> EngineResult<&TransportLeg> {
        self.legs
            .get(leg_id)
            .ok_or_else(|| EngineError::not_found("transport leg", leg_id))
    }

    pub fn vehicle(&self, vehicle_id: &str) -> EngineResult<&Vehicle> {
        self.vehicles
            .get(vehicle_id)
            .ok_or_else(|| EngineError::not_found("vehicle", vehicle_id))
    }

    pub fn staff_member(&self, staff_id: &str) -> EngineResult<&StaffMember> {
        self.staff
            .get(staff_id)
            .ok_or_else(|| EngineError::not_found("staff member", staff_id))
    }

    /// Availability annotation for drafting: a vehicle under a candidate
    /// range, excluding the leg being edited.
    pub fn vehicle_availability(
        &self,
        vehicle_id: &str,
        candidate: &DateRange,
        exclude_leg: Option<&str>,
    ) -> EngineResult<Availability> {
        let vehicle = self.vehicle(vehicle_id)?;
        Ok(AvailabilityChecker::vehicle(
            vehicle,
            candidate,
            self.legs.values(),
            exclude_leg,
        ))
    }

    /// Availability annotation for drafting: a staff member under a
    /// candidate range, excluding the event being edited.
    pub fn staff_availability(
        &self,
        staff_id: &str,
        candidate: &DateRange,
        exclude_event: Option<&str>,
    ) -> EngineResult<Availability> {
        let member = self.staff_member(staff_id)?;
        Ok(AvailabilityChecker::staff(
            member,
            candidate,
            self.events.values(),
            exclude_event,
        ))
    }

    /// Occupant list of a committed leg, in boarding order.
    pub fn occupants(&self, leg_id: &str) -> EngineResult<&[Occupant]> {
        Ok(&self.leg(leg_id)?.occupants)
    }
}
