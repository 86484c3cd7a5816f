//! Interface definitions for infrastructure collaborators.

mod data_store;
mod id_generator;

pub use data_store::{DataStore, Snapshot, WriteBatch};
pub use id_generator::IdGenerator;
