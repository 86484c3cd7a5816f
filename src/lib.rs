//! Cavalcade - assignment and consistency engine for event logistics
//!
//! Cavalcade manages shared resources (vehicles, staff) assigned to
//! time-bound events and their transport legs. It detects scheduling
//! conflicts across overlapping day ranges, derives automatic budget line
//! items from assignments, and keeps reverse event-references on resources
//! consistent with the assignments that reference them.
//!
//! The crate is an in-process computation and consistency layer: storage is
//! a collaborator behind the [`DataStore`] port, and every commit flushes as
//! one atomic batch.

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{AssignmentEngine, CommitSummary, EventDraft, LegsByDirection, ManualItemUpdate};
pub use domain::entities::{
    BudgetCategory, BudgetItem, Employment, Event, EventKind, ItemOrigin, LegDirection, Occupant,
    PersonKind, StaffMember, StopKind, StopUpdate, TransportLeg, TransportStop, Vehicle, Waypoint,
};
pub use domain::ports::{DataStore, IdGenerator, Snapshot, WriteBatch};
pub use domain::services::{
    Availability, AvailabilityChecker, AvailabilityStatus, BacklinkChanges, BacklinkSynchronizer,
    BudgetDeriver,
};
pub use domain::value_objects::DateRange;
pub use error::{EngineError, EngineResult};
pub use infrastructure::{MemoryStore, SequentialIds, UuidIds};
