//! Timing policy for one simulation run.
//!
//! All delays in the system — the mandatory stop-sign dwell and the per-turn
//! crossing durations — are policy, not algorithm.  They live in one struct
//! handed to the simulation so demos can run the classic multi-second pacing
//! while tests run the same protocol at millisecond scale.

use std::time::Duration;

use crate::direction::TurnKind;

/// Wall-clock delay configuration.
///
/// `Default` reproduces the classic pacing: a 2 s stop, then 5/4/3 s to clear
/// the intersection for left/straight/right — a left turn sweeps three
/// quadrants, a right turn clips one.
#[derive(Copy, Clone, Debug)]
pub struct SimTiming {
    /// Mandatory dwell at the stop line after arriving.
    pub stop_dwell: Duration,
    /// Time spent inside the intersection for a left turn (longest path).
    pub crossing_left: Duration,
    /// Time spent inside the intersection going straight.
    pub crossing_straight: Duration,
    /// Time spent inside the intersection for a right turn (shortest path).
    pub crossing_right: Duration,
}

impl SimTiming {
    /// The crossing duration for a given turn kind.
    #[inline]
    pub fn crossing_time(&self, turn: TurnKind) -> Duration {
        match turn {
            TurnKind::Left     => self.crossing_left,
            TurnKind::Straight => self.crossing_straight,
            TurnKind::Right    => self.crossing_right,
        }
    }

    /// Millisecond-scale pacing with the same left > straight > right shape.
    /// Keeps multi-vehicle tests causally identical to the real pacing while
    /// finishing in well under a second per vehicle.
    pub fn millis(stop_dwell: u64, left: u64, straight: u64, right: u64) -> SimTiming {
        SimTiming {
            stop_dwell:        Duration::from_millis(stop_dwell),
            crossing_left:     Duration::from_millis(left),
            crossing_straight: Duration::from_millis(straight),
            crossing_right:    Duration::from_millis(right),
        }
    }
}

impl Default for SimTiming {
    fn default() -> Self {
        SimTiming {
            stop_dwell:        Duration::from_secs(2),
            crossing_left:     Duration::from_secs(5),
            crossing_straight: Duration::from_secs(4),
            crossing_right:    Duration::from_secs(3),
        }
    }
}
