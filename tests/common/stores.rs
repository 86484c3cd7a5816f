//! Store doubles for failure-path tests.

use std::cell::Cell;
use std::rc::Rc;

use anyhow::{bail, Result};
use cavalcade::{DataStore, MemoryStore, Snapshot, WriteBatch};

/// Wraps `MemoryStore` and fails the next `apply` when armed.
pub struct FlakyStore {
    inner: MemoryStore,
    fail_next: Rc<Cell<bool>>,
}

impl FlakyStore {
    /// Returns the store and the shared switch that arms one failure.
    pub fn new(snapshot: Snapshot) -> (Self, Rc<Cell<bool>>) {
        let fail_next = Rc::new(Cell::new(false));
        (
            Self {
                inner: MemoryStore::with_snapshot(snapshot),
                fail_next: Rc::clone(&fail_next),
            },
            fail_next,
        )
    }
}

impl DataStore for FlakyStore {
    fn load(&self) -> Result<Snapshot> {
        self.inner.load()
    }

    fn apply(&mut self, batch: &WriteBatch) -> Result<()> {
        if self.fail_next.replace(false) {
            bail!("injected store failure");
        }
        self.inner.apply(batch)
    }
}
