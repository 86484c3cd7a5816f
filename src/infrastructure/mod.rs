//! Infrastructure layer: reference implementations of the domain ports.

mod ids;
mod memory;

pub use ids::{SequentialIds, UuidIds};
pub use memory::MemoryStore;
