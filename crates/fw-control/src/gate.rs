//! Per-direction head-of-line admission gate.
//!
//! Each direction has one binary token.  A vehicle takes its direction's
//! token before negotiating flow ownership and returns it only after exiting,
//! so at most one vehicle per direction is ever mid-protocol — the rest queue
//! behind it at the stop line.  Vehicles from *different* directions never
//! block each other here.
//!
//! The token is a mutex-guarded flag plus a condvar: acquire blocks while the
//! flag is set, release clears it and wakes one waiter.  Which of several
//! same-direction waiters wins is left to the scheduler; no FIFO order among
//! them is promised.

use std::sync::{Condvar, Mutex};

use fw_core::Direction;

#[derive(Default)]
struct Gate {
    held:  Mutex<bool>,
    freed: Condvar,
}

// ── HeadOfLine ────────────────────────────────────────────────────────────────

/// The four per-direction admission tokens.
pub struct HeadOfLine {
    gates: [Gate; 4],
}

impl HeadOfLine {
    pub fn new() -> Self {
        HeadOfLine {
            gates: std::array::from_fn(|_| Gate::default()),
        }
    }

    /// Block until `direction`'s token is free, then take it.
    ///
    /// The returned permit gives the token back when dropped.
    pub fn acquire(&self, direction: Direction) -> HeadOfLinePermit<'_> {
        let gate = &self.gates[direction.index()];
        let mut held = gate
            .held
            .lock()
            .expect("head-of-line gate poisoned by a crashed vehicle thread");
        held = gate
            .freed
            .wait_while(held, |h| *h)
            .expect("head-of-line gate poisoned by a crashed vehicle thread");
        *held = true;
        HeadOfLinePermit { gate, direction }
    }

    /// Whether `direction`'s token is currently taken.  Observational only.
    pub fn is_held(&self, direction: Direction) -> bool {
        *self.gates[direction.index()]
            .held
            .lock()
            .expect("head-of-line gate poisoned by a crashed vehicle thread")
    }
}

impl Default for HeadOfLine {
    fn default() -> Self {
        Self::new()
    }
}

// ── HeadOfLinePermit ──────────────────────────────────────────────────────────

/// RAII hold on one direction's head-of-line token.
///
/// Held from the start of the flow negotiation until the vehicle has fully
/// exited; dropping it lets the next vehicle of the same direction move up to
/// the stop line.
pub struct HeadOfLinePermit<'a> {
    gate:      &'a Gate,
    direction: Direction,
}

impl HeadOfLinePermit<'_> {
    pub fn direction(&self) -> Direction {
        self.direction
    }
}

impl Drop for HeadOfLinePermit<'_> {
    fn drop(&mut self) {
        let mut held = self
            .gate
            .held
            .lock()
            .expect("head-of-line gate poisoned by a crashed vehicle thread");
        debug_assert!(*held, "permit dropped for a token that was not taken");
        *held = false;
        self.gate.freed.notify_one();
    }
}
