//! Quadrant occupancy locks.
//!
//! # Deadlock freedom
//!
//! A crossing vehicle needs one, two, or three of the four quadrant locks at
//! once.  [`QuadrantLocks::acquire`] therefore sorts every request into
//! ascending [`Quadrant`] order before locking.  With a single global
//! acquisition order the wait-for graph between vehicles can never contain a
//! cycle, so deadlock is structurally impossible no matter how many vehicles
//! contend.  Any alternative order reintroduces circular wait; the sort is
//! load-bearing, not cosmetic.
//!
//! Locks are held only for the simulated crossing duration — never across a
//! wait that depends on another vehicle.

use std::sync::{Mutex, MutexGuard};

use fw_core::Quadrant;

// ── QuadrantLocks ─────────────────────────────────────────────────────────────

/// Exclusive locks over the four intersection quadrants.
pub struct QuadrantLocks {
    locks: [Mutex<()>; 4],
}

impl QuadrantLocks {
    pub fn new() -> Self {
        QuadrantLocks {
            locks: std::array::from_fn(|_| Mutex::new(())),
        }
    }

    /// Lock every quadrant in `quadrants`, blocking as needed.
    ///
    /// Acquisition happens in ascending quadrant order regardless of the
    /// order requested.  The returned claim releases in descending order when
    /// dropped.
    ///
    /// # Panics
    ///
    /// Panics if `quadrants` contains a duplicate (the claim would deadlock
    /// against itself) or if a lock was poisoned by a crashed vehicle thread.
    /// Both are programming defects, not runtime conditions.
    pub fn acquire(&self, quadrants: &[Quadrant]) -> QuadrantClaim<'_> {
        let mut order: Vec<Quadrant> = quadrants.to_vec();
        order.sort_unstable();
        assert!(
            order.windows(2).all(|w| w[0] < w[1]),
            "duplicate quadrant in claim request {quadrants:?}"
        );

        let held = order
            .into_iter()
            .map(|q| {
                let guard = self.locks[q.index()]
                    .lock()
                    .expect("quadrant lock poisoned by a crashed vehicle thread");
                (q, guard)
            })
            .collect();

        QuadrantClaim { held }
    }
}

impl Default for QuadrantLocks {
    fn default() -> Self {
        Self::new()
    }
}

// ── QuadrantClaim ─────────────────────────────────────────────────────────────

/// RAII claim over a set of quadrants, held for the duration of one crossing.
///
/// Dropping the claim releases the quadrants in descending order — the mirror
/// image of acquisition.
pub struct QuadrantClaim<'a> {
    /// Held guards in ascending quadrant order.
    held: Vec<(Quadrant, MutexGuard<'a, ()>)>,
}

impl QuadrantClaim<'_> {
    /// The claimed quadrants, in ascending (acquisition) order.
    pub fn quadrants(&self) -> impl Iterator<Item = Quadrant> + '_ {
        self.held.iter().map(|(q, _)| *q)
    }

    pub fn len(&self) -> usize {
        self.held.len()
    }

    pub fn is_empty(&self) -> bool {
        self.held.is_empty()
    }
}

impl Drop for QuadrantClaim<'_> {
    fn drop(&mut self) {
        // Pop from the back: descending release order.
        while self.held.pop().is_some() {}
    }
}
