//! Single-slot atomic publication of the animation state.
//!
//! One [`StateSlot`] is shared between the producer side (status logic
//! calling [`BeaconHandle`](crate::BeaconHandle)) and the consumer side (the
//! [`Renderer`](crate::Renderer)). Publication replaces the whole
//! [`Snapshot`] inside a critical section that covers only the copy, never
//! any rendering or color math, so neither side ever waits on the other's
//! work and a reader can never observe fields from two different writes.

use crate::snapshot::Snapshot;
use crate::time::TimeInstant;
use core::cell::Cell;
use core::sync::atomic::{AtomicBool, Ordering};
use critical_section::Mutex;

/// Shared slot holding the active snapshot and the shutdown flag.
pub struct StateSlot<I: TimeInstant> {
    snapshot: Mutex<Cell<Snapshot<I>>>,
    shutdown: AtomicBool,
}

impl<I: TimeInstant> StateSlot<I> {
    /// Creates a slot seeded with an initial snapshot.
    pub fn new(initial: Snapshot<I>) -> Self {
        Self {
            snapshot: Mutex::new(Cell::new(initial)),
            shutdown: AtomicBool::new(false),
        }
    }

    /// Copies out the active snapshot.
    ///
    /// The renderer calls this once per tick and computes entirely from the
    /// returned copy; a publish landing mid-tick affects the next tick only.
    pub fn load(&self) -> Snapshot<I> {
        critical_section::with(|cs| self.snapshot.borrow(cs).get())
    }

    /// Replaces the active snapshot.
    pub fn publish(&self, snapshot: Snapshot<I>) {
        critical_section::with(|cs| self.snapshot.borrow(cs).set(snapshot));
    }

    /// Read-modify-write of the active snapshot in one critical section.
    ///
    /// Both producer retargets and renderer blink toggles go through here, so
    /// two concurrent updates can never interleave between reading the old
    /// snapshot and writing its successor. Returns the published snapshot.
    pub fn update(&self, f: impl FnOnce(Snapshot<I>) -> Snapshot<I>) -> Snapshot<I> {
        critical_section::with(|cs| {
            let cell = self.snapshot.borrow(cs);
            let next = f(cell.get());
            cell.set(next);
            next
        })
    }

    /// Signals the render loop to terminate. Write-once, idempotent.
    pub fn request_shutdown(&self) {
        self.shutdown.store(true, Ordering::Release);
    }

    /// Returns true once shutdown has been requested.
    pub fn shutdown_requested(&self) -> bool {
        self.shutdown.load(Ordering::Acquire)
    }
}
