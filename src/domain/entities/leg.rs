//! Transport leg entity.
//!
//! One directional trip segment of an event: departure and optional arrival
//! waypoints, an assigned vehicle and driver, an ordered occupant list, and
//! an ordered sequence of intermediate stops. Occupants are keyed by the
//! (person id, person kind) pair, so the same id may ride once as a rider
//! and once as staff.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::DateRange;

/// Direction of a transport leg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LegDirection {
    Outbound,
    Return,
    DayOf,
}

impl std::fmt::Display for LegDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LegDirection::Outbound => write!(f, "outbound"),
            LegDirection::Return => write!(f, "return"),
            LegDirection::DayOf => write!(f, "day-of"),
        }
    }
}

/// Kind of person travelling on a leg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PersonKind {
    Rider,
    Staff,
}

/// A person on a leg or stop: the uniqueness key is the whole pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occupant {
    pub person_id: String,
    pub kind: PersonKind,
}

impl Occupant {
    pub fn new(person_id: impl Into<String>, kind: PersonKind) -> Self {
        Self {
            person_id: person_id.into(),
            kind,
        }
    }
}

/// A place and moment a leg departs from or arrives at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Waypoint {
    pub location: String,
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
}

impl Waypoint {
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            date: None,
            time: None,
        }
    }

    pub fn on(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn at(mut self, time: NaiveTime) -> Self {
        self.time = Some(time);
        self
    }
}

/// Why an intermediate stop exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StopKind {
    Pickup,
    Dropoff,
    Waypoint,
}

/// An intermediate stop on a leg.
///
/// Stops keep their own boarding/alighting person list, independent of the
/// leg's occupant list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransportStop {
    pub id: String,
    pub location: String,
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
    pub kind: StopKind,
    pub persons: Vec<Occupant>,
}

impl TransportStop {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            location: String::new(),
            date: None,
            time: None,
            kind: StopKind::Pickup,
            persons: Vec::new(),
        }
    }
}

/// A field-typed update to one stop.
#[derive(Debug, Clone, PartialEq)]
pub enum StopUpdate {
    Location(String),
    Date(Option<NaiveDate>),
    Time(Option<NaiveTime>),
    Kind(StopKind),
}

/// One directional trip segment of an event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransportLeg {
    /// Unique leg identifier.
    pub id: String,
    /// Owning event.
    pub event_id: String,
    pub direction: LegDirection,
    pub departure: Waypoint,
    pub arrival: Option<Waypoint>,
    /// Assigned vehicle, if chosen.
    pub vehicle: Option<String>,
    /// Assigned driver; defaulted from the vehicle's designated driver.
    pub driver: Option<String>,
    /// Ordered list of people travelling on this leg.
    pub occupants: Vec<Occupant>,
    /// Ordered intermediate stops.
    pub stops: Vec<TransportStop>,
}

impl TransportLeg {
    pub fn new(
        id: impl Into<String>,
        event_id: impl Into<String>,
        direction: LegDirection,
    ) -> Self {
        Self {
            id: id.into(),
            event_id: event_id.into(),
            direction,
            departure: Waypoint::default(),
            arrival: None,
            vehicle: None,
            driver: None,
            occupants: Vec::new(),
            stops: Vec::new(),
        }
    }

    /// The whole-day range this leg occupies a vehicle for.
    ///
    /// Starts at the departure day; ends at the arrival day when one is set,
    /// otherwise the departure day. Inapplicable when departure has no date.
    pub fn date_range(&self) -> DateRange {
        DateRange {
            start: self.departure.date,
            end: self.arrival.as_ref().and_then(|w| w.date),
        }
    }

    /// Whether a (person, kind) pair is on this leg.
    pub fn has_occupant(&self, person_id: &str, kind: PersonKind) -> bool {
        self.occupants
            .iter()
            .any(|o| o.person_id == person_id && o.kind == kind)
    }

    /// Inserts the pair if absent, removes it if present.
    ///
    /// Returns `true` when the pair is on the leg after the toggle.
    pub fn toggle_occupant(&mut self, person_id: &str, kind: PersonKind) -> bool {
        toggle(&mut self.occupants, person_id, kind)
    }

    pub fn stop(&self, stop_id: &str) -> Option<&TransportStop> {
        self.stops.iter().find(|s| s.id == stop_id)
    }

    pub fn stop_mut(&mut self, stop_id: &str) -> Option<&mut TransportStop> {
        self.stops.iter_mut().find(|s| s.id == stop_id)
    }
}

/// Shared toggle semantics for leg occupants and stop person lists.
pub(crate) fn toggle(list: &mut Vec<Occupant>, person_id: &str, kind: PersonKind) -> bool {
    if let Some(pos) = list
        .iter()
        .position(|o| o.person_id == person_id && o.kind == kind)
    {
        list.remove(pos);
        false
    } else {
        list.push(Occupant::new(person_id, kind));
        true
    }
}
