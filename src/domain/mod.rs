//! Domain layer.
//!
//! Pure business logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - core domain entities (Event, TransportLeg, Vehicle,
//!   StaffMember, BudgetItem)
//! - `value_objects/` - immutable value types (DateRange)
//! - `services/` - stateless domain services (availability, budget
//!   derivation, backlink synchronization)
//! - `ports/` - interface definitions for infrastructure (DataStore,
//!   IdGenerator)
//!
//! ## Design principles
//!
//! 1. **No I/O** - this layer never touches storage directly
//! 2. **Pure functions** - services compute over snapshots and never mutate
//!    registry state
//! 3. **Ports & adapters** - persistence and id generation go through
//!    trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
