//! Read queries exposed to the presentation layer.
//!
//! Queries never mutate; they read the engine's committed collections.

use crate::application::engine::AssignmentEngine;
use crate::domain::entities::{BudgetItem, LegDirection, TransportLeg};
use crate::domain::ports::DataStore;
use crate::error::EngineResult;

/// An event's legs grouped by direction, each group in leg id order.
#[derive(Debug, Clone, Default)]
pub struct LegsByDirection<'a> {
    pub outbound: Vec<&'a TransportLeg>,
    pub returns: Vec<&'a TransportLeg>,
    pub day_of: Vec<&'a TransportLeg>,
}

impl<'a> LegsByDirection<'a> {
    pub fn is_empty(&self) -> bool {
        self.outbound.is_empty() && self.returns.is_empty() && self.day_of.is_empty()
    }

    pub fn len(&self) -> usize {
        self.outbound.len() + self.returns.len() + self.day_of.len()
    }
}

impl<S: DataStore> AssignmentEngine<S> {
    /// All budget items of an event, manual and derived, in id order.
    pub fn budget_items_for_event(&self, event_id: &str) -> EngineResult<Vec<&BudgetItem>> {
        self.event(event_id)?;
        Ok(self
            .budget_items
            .values()
            .filter(|item| item.event_id == event_id)
            .collect())
    }

    /// An event's legs grouped by direction.
    pub fn legs_for_event(&self, event_id: &str) -> EngineResult<LegsByDirection<'_>> {
        self.event(event_id)?;
        let mut grouped = LegsByDirection::default();
        for leg in self.legs.values().filter(|leg| leg.event_id == event_id) {
            match leg.direction {
                LegDirection::Outbound => grouped.outbound.push(leg),
                LegDirection::Return => grouped.returns.push(leg),
                LegDirection::DayOf => grouped.day_of.push(leg),
            }
        }
        Ok(grouped)
    }
}
