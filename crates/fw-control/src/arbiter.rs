//! Direction flow arbiter — readers-writers keyed by direction.
//!
//! # Protocol
//!
//! At any instant the intersection is either free or owned by exactly one
//! direction.  Vehicles of the owning direction join the flow and cross
//! together (the readers-like half); vehicles of every other direction block
//! until the owner's last active vehicle leaves (the writer-like half, keyed
//! by direction instead of read/write mode).
//!
//! Ownership release is broadcast: every waiting direction is woken and the
//! scheduler decides which one's vehicle re-checks the predicate first and
//! becomes the new owner.  No cross-direction fairness is promised — a
//! direction can in principle wait arbitrarily long under adversarial
//! scheduling.
//!
//! The owner/count pair lives behind one mutex and is re-validated after
//! every mutation; a violation means the protocol itself is broken and the
//! run must not continue.

use std::sync::{Condvar, Mutex};

use fw_core::Direction;

// ── FlowState ─────────────────────────────────────────────────────────────────

/// The guarded state: current owning direction and per-direction active
/// vehicle counts.  Never exposed to callers; mutated only under the
/// arbiter's lock.
#[derive(Default)]
struct FlowState {
    owner:  Option<Direction>,
    active: [u32; 4],
}

impl FlowState {
    /// Owner/count coherence: a free intersection has no active vehicles,
    /// an owned one has active vehicles for the owner and nobody else.
    fn assert_coherent(&self) {
        match self.owner {
            None => assert!(
                self.active.iter().all(|&n| n == 0),
                "intersection free but active counts are {:?}",
                self.active
            ),
            Some(owner) => {
                assert!(
                    self.active[owner.index()] > 0,
                    "direction {owner} owns the intersection with no active vehicles"
                );
                for d in Direction::ALL {
                    assert!(
                        d == owner || self.active[d.index()] == 0,
                        "direction {d} has active vehicles while {owner} owns the intersection"
                    );
                }
            }
        }
    }
}

// ── FlowArbiter ───────────────────────────────────────────────────────────────

/// Arbitrates which direction's vehicles may currently be crossing.
pub struct FlowArbiter {
    state: Mutex<FlowState>,
    freed: Condvar,
}

impl FlowArbiter {
    pub fn new() -> Self {
        FlowArbiter {
            state: Mutex::new(FlowState::default()),
            freed: Condvar::new(),
        }
    }

    /// Join `direction`'s flow, blocking while another direction owns the
    /// intersection.
    ///
    /// On return the caller's direction owns the intersection and the
    /// caller is counted as an active vehicle; every `join` must be paired
    /// with exactly one [`leave`][FlowArbiter::leave].
    pub fn join(&self, direction: Direction) {
        let mut state = self
            .state
            .lock()
            .expect("flow state poisoned by a crashed vehicle thread");
        // Re-checked on every wake: proceed only when free or already ours.
        state = self
            .freed
            .wait_while(state, |s| s.owner.is_some_and(|o| o != direction))
            .expect("flow state poisoned by a crashed vehicle thread");

        match state.owner {
            None => {
                state.owner = Some(direction);
                state.active[direction.index()] = 1;
            }
            Some(_) => state.active[direction.index()] += 1,
        }
        state.assert_coherent();
    }

    /// Leave `direction`'s flow.  The last vehicle out frees the intersection
    /// and wakes every waiting direction to race for ownership.
    pub fn leave(&self, direction: Direction) {
        let mut state = self
            .state
            .lock()
            .expect("flow state poisoned by a crashed vehicle thread");
        assert_eq!(
            state.owner,
            Some(direction),
            "leave from direction {direction} which does not own the intersection"
        );

        let count = &mut state.active[direction.index()];
        assert!(*count > 0, "leave from direction {direction} with no active vehicles");
        *count -= 1;
        if *count == 0 {
            state.owner = None;
            self.freed.notify_all();
        }
        state.assert_coherent();
    }

    /// Snapshot of the current owning direction.  Observational only.
    pub fn owner(&self) -> Option<Direction> {
        self.state
            .lock()
            .expect("flow state poisoned by a crashed vehicle thread")
            .owner
    }

    /// Snapshot of `direction`'s active vehicle count.  Observational only.
    pub fn active(&self, direction: Direction) -> u32 {
        self.state
            .lock()
            .expect("flow state poisoned by a crashed vehicle thread")
            .active[direction.index()]
    }
}

impl Default for FlowArbiter {
    fn default() -> Self {
        Self::new()
    }
}
