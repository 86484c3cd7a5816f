//! Core domain entities.
//!
//! - `Event` - time-bound event with role assignments and a vehicle pool
//! - `TransportLeg` - one trip segment with occupants and stops
//! - `Vehicle` / `StaffMember` - shared resources with reverse references
//! - `BudgetItem` - manual or derived budget line

mod budget;
mod event;
mod leg;
mod staff;
mod vehicle;

pub use budget::{BudgetCategory, BudgetItem, ItemOrigin};
pub use event::{Event, EventKind};
pub use leg::{
    LegDirection, Occupant, PersonKind, StopKind, StopUpdate, TransportLeg, TransportStop,
    Waypoint,
};
pub use staff::{Employment, StaffMember};
pub use vehicle::Vehicle;

pub(crate) use leg::toggle;
