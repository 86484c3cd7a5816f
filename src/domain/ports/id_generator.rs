//! IdGenerator port - opaque ids for manually created entities.
//!
//! Generated ids must never collide with the deterministic auto-generated
//! budget item ids, which are pure functions of other ids under fixed
//! `auto-` prefixes. The reference implementation
//! (`infrastructure::UuidIds`) satisfies this by construction.

/// Abstract source of opaque unique ids.
pub trait IdGenerator {
    fn generate(&self) -> String;
}
