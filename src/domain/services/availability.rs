//! Resource availability checking.
//!
//! Pure with respect to the assignment snapshot passed in; never mutates
//! registry state. The assignment currently being edited is excluded from
//! the scan so a leg never conflicts with itself.

use crate::domain::entities::{Event, StaffMember, TransportLeg, Vehicle};
use crate::domain::value_objects::DateRange;

/// Availability classification for a resource under a candidate range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvailabilityStatus {
    Available,
    /// Already assigned elsewhere for an overlapping range.
    Assigned,
    /// Vehicle maintenance window overlaps the candidate range.
    Maintenance,
}

/// A status plus a human-readable reason for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Availability {
    pub status: AvailabilityStatus,
    pub reason: String,
}

impl Availability {
    fn available() -> Self {
        Self {
            status: AvailabilityStatus::Available,
            reason: "available".to_string(),
        }
    }

    fn assigned(reason: String) -> Self {
        Self {
            status: AvailabilityStatus::Assigned,
            reason,
        }
    }

    fn maintenance(reason: String) -> Self {
        Self {
            status: AvailabilityStatus::Maintenance,
            reason,
        }
    }

    pub fn is_available(&self) -> bool {
        self.status == AvailabilityStatus::Available
    }
}

/// Pure availability checker over an assignment snapshot.
pub struct AvailabilityChecker;

impl AvailabilityChecker {
    /// Classifies a vehicle's availability for a candidate range.
    ///
    /// Maintenance wins over other assignments. `exclude_leg` names the leg
    /// under edit, which is skipped to avoid self-conflict.
    ///
    /// A candidate range with no start date reports available: availability
    /// is undefined without dates and must not block unrelated edits.
    pub fn vehicle<'a>(
        vehicle: &Vehicle,
        candidate: &DateRange,
        legs: impl IntoIterator<Item = &'a TransportLeg>,
        exclude_leg: Option<&str>,
    ) -> Availability {
        if !candidate.is_applicable() {
            return Availability::available();
        }

        if let Some(date) = vehicle.maintenance_date {
            if DateRange::single(date).overlaps(candidate) {
                return Availability::maintenance(format!(
                    "'{}' is in maintenance on {date}",
                    vehicle.name
                ));
            }
        }

        for leg in legs {
            if exclude_leg == Some(leg.id.as_str()) {
                continue;
            }
            if leg.vehicle.as_deref() != Some(vehicle.id.as_str()) {
                continue;
            }
            if leg.date_range().overlaps(candidate) {
                return Availability::assigned(format!(
                    "'{}' is already assigned to the {} leg of event '{}'",
                    vehicle.name, leg.direction, leg.event_id
                ));
            }
        }

        Availability::available()
    }

    /// Classifies a staff member's availability for a candidate event range.
    ///
    /// Scans every other event in which the member appears in any role list;
    /// an overlapping range makes the member unavailable. `exclude_event`
    /// names the event under edit.
    pub fn staff<'a>(
        member: &StaffMember,
        candidate: &DateRange,
        events: impl IntoIterator<Item = &'a Event>,
        exclude_event: Option<&str>,
    ) -> Availability {
        if !candidate.is_applicable() {
            return Availability::available();
        }

        for event in events {
            if exclude_event == Some(event.id.as_str()) {
                continue;
            }
            if event.references_staff(&member.id) && event.range.overlaps(candidate) {
                return Availability::assigned(format!(
                    "'{}' is already assigned to '{}'",
                    member.name, event.name
                ));
            }
        }

        Availability::available()
    }
}
