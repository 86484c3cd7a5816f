//! Application layer.
//!
//! Coordinates the domain services behind command/query boundaries: no
//! caller mutates shared structures directly. `AssignmentEngine` holds the
//! registry collections and runs the commit pipeline; `EventDraft` buffers
//! one edit; `queries` exposes the read side.

mod draft;
mod engine;
mod queries;

pub use draft::EventDraft;
pub use engine::{AssignmentEngine, CommitSummary, ManualItemUpdate};
pub use queries::LegsByDirection;
