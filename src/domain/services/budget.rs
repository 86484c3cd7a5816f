//! Derived budget computation.
//!
//! Recomputation is total, not incremental: every prior auto item of the
//! event is discarded, manual items are kept verbatim, and the auto set is
//! rebuilt from the current assignment state. Running it twice on unchanged
//! input yields an identical item list.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::domain::entities::{
    BudgetCategory, BudgetItem, Event, ItemOrigin, PersonKind, StaffMember, TransportLeg, Vehicle,
};
use crate::domain::value_objects::DateRange;

/// Pure budget deriver over one event's assignment state.
pub struct BudgetDeriver;

impl BudgetDeriver {
    /// Rebuilds the event's full budget item list.
    ///
    /// Order is stable: manual items first (in their previous order), then
    /// vehicle items in leg order, then freelance items in staff id order.
    ///
    /// A resource with no configured cost or rate yields no item; a leg
    /// without a departure date is skipped.
    pub fn derive(
        event: &Event,
        legs: &[&TransportLeg],
        vehicles: &BTreeMap<String, Vehicle>,
        staff: &BTreeMap<String, StaffMember>,
        previous: &[&BudgetItem],
    ) -> Vec<BudgetItem> {
        let mut items: Vec<BudgetItem> = previous
            .iter()
            .filter(|item| item.is_manual())
            .map(|item| (*item).clone())
            .collect();

        items.extend(Self::vehicle_items(event, legs, vehicles));
        items.extend(Self::freelance_items(event, legs, staff));
        items
    }

    /// One item per leg with an assigned vehicle that has a positive daily
    /// cost and a departure date.
    fn vehicle_items(
        event: &Event,
        legs: &[&TransportLeg],
        vehicles: &BTreeMap<String, Vehicle>,
    ) -> Vec<BudgetItem> {
        let mut items = Vec::new();
        for leg in legs {
            let Some(vehicle) = leg.vehicle.as_deref().and_then(|id| vehicles.get(id)) else {
                continue;
            };
            let Some(daily_cost) = vehicle.daily_cost.filter(|cost| *cost > 0.0) else {
                continue;
            };
            let Some(days) = leg.date_range().day_count() else {
                continue;
            };

            items.push(BudgetItem {
                id: BudgetItem::vehicle_item_id(&leg.id),
                event_id: event.id.clone(),
                category: BudgetCategory::TeamVehicle,
                description: format!("{} ({} leg, {days} days)", vehicle.name, leg.direction),
                estimated_cost: daily_cost * days as f64,
                actual_cost: None,
                origin: ItemOrigin::Vehicle {
                    vehicle_id: vehicle.id.clone(),
                    leg_id: leg.id.clone(),
                },
            });
        }
        items
    }

    /// One item per freelance member occupying at least one dated leg.
    ///
    /// The billed span is the bracket from the earliest departure to the
    /// latest arrival across all legs the member occupies, so days between
    /// two separate trips are billed too.
    fn freelance_items(
        event: &Event,
        legs: &[&TransportLeg],
        staff: &BTreeMap<String, StaffMember>,
    ) -> Vec<BudgetItem> {
        let mut items = Vec::new();
        for member in staff.values() {
            if !member.bills_by_day() {
                continue;
            }

            let occupied: Vec<&&TransportLeg> = legs
                .iter()
                .filter(|leg| leg.has_occupant(&member.id, PersonKind::Staff))
                .collect();
            if occupied.is_empty() {
                continue;
            }

            let Some(rate) = member.daily_rate else {
                continue;
            };
            let Some((earliest, latest)) =
                Self::bracket(occupied.iter().map(|leg| leg.date_range()))
            else {
                continue;
            };
            let days = ((latest - earliest).num_days() + 1).max(1);
            let cost = rate * days as f64;

            items.push(BudgetItem {
                id: BudgetItem::freelance_item_id(&event.id, &member.id),
                event_id: event.id.clone(),
                category: BudgetCategory::Salaries,
                description: format!("{} ({days} days at {rate})", member.name),
                estimated_cost: cost,
                actual_cost: Some(cost),
                origin: ItemOrigin::Freelance {
                    staff_id: member.id.clone(),
                },
            });
        }
        items
    }

    /// Earliest start to latest end across the given ranges, skipping
    /// inapplicable ones.
    fn bracket(ranges: impl Iterator<Item = DateRange>) -> Option<(NaiveDate, NaiveDate)> {
        let mut bracket: Option<(NaiveDate, NaiveDate)> = None;
        for range in ranges {
            let (Some(start), Some(end)) = (range.start, range.effective_end()) else {
                continue;
            };
            bracket = Some(match bracket {
                None => (start, end),
                Some((earliest, latest)) => (earliest.min(start), latest.max(end)),
            });
        }
        bracket
    }
}
