//! Draft state for one event edit.
//!
//! A draft is an in-memory buffer: it holds clones of the event and its
//! legs, collects edits, and has no effect on shared state until the engine
//! commits it. Dropping an uncommitted draft discards the edit.

use std::collections::BTreeMap;

use crate::domain::entities::{Event, TransportLeg};
use crate::error::{EngineError, EngineResult};

/// The edit buffer for a single event.
///
/// Mutations go through `AssignmentEngine` methods, which validate resource
/// references against the engine's collections before touching the draft.
#[derive(Debug, Clone)]
pub struct EventDraft {
    pub(crate) event: Event,
    pub(crate) legs: BTreeMap<String, TransportLeg>,
    pub(crate) removed_legs: Vec<String>,
}

impl EventDraft {
    pub(crate) fn new(event: Event, legs: Vec<TransportLeg>) -> Self {
        Self {
            event,
            legs: legs.into_iter().map(|leg| (leg.id.clone(), leg)).collect(),
            removed_legs: Vec::new(),
        }
    }

    /// The event as currently edited.
    pub fn event(&self) -> &Event {
        &self.event
    }

    /// A leg as currently edited.
    pub fn leg(&self, leg_id: &str) -> Option<&TransportLeg> {
        self.legs.get(leg_id)
    }

    /// All legs in the draft, in id order.
    pub fn legs(&self) -> impl Iterator<Item = &TransportLeg> {
        self.legs.values()
    }

    pub(crate) fn leg_mut(&mut self, leg_id: &str) -> EngineResult<&mut TransportLeg> {
        self.legs
            .get_mut(leg_id)
            .ok_or_else(|| EngineError::not_found("transport leg", leg_id))
    }
}
