//! Vehicle identity and itinerary.

use std::fmt;
use std::time::Duration;

use crate::direction::{Direction, TurnKind};
use crate::quadrant::{self, Quadrant};
use crate::FwResult;

// ── VehicleId ─────────────────────────────────────────────────────────────────

/// Identifier of a vehicle, unique within one manifest.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct VehicleId(pub u32);

impl fmt::Display for VehicleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ── Vehicle ───────────────────────────────────────────────────────────────────

/// One entry of the vehicle manifest: identity, scripted arrival offset, and
/// the heading pair.
///
/// Immutable after construction.  The turn kind and quadrant sweep are
/// derived through [`Vehicle::turn`] and [`Vehicle::sweep`] rather than
/// stored, so the itinerary has a single source of truth.  Construction goes
/// through [`Vehicle::new`], which validates the heading pair once; a
/// `Vehicle` in hand always has a legal turn.
#[derive(Clone, Debug)]
pub struct Vehicle {
    id:             VehicleId,
    arrival_offset: Duration,
    origin:         Direction,
    destination:    Direction,
}

impl Vehicle {
    /// Validate the heading pair and build a vehicle.
    ///
    /// Fails on the one illegal pair (opposite headings, a U-turn); this is a
    /// manifest error surfaced before the simulation starts.
    pub fn new(
        id:             VehicleId,
        arrival_offset: Duration,
        origin:         Direction,
        destination:    Direction,
    ) -> FwResult<Vehicle> {
        TurnKind::classify(origin, destination)?;
        Ok(Vehicle { id, arrival_offset, origin, destination })
    }

    #[inline]
    pub fn id(&self) -> VehicleId {
        self.id
    }

    /// Delay from simulation start until this vehicle reaches the stop line.
    #[inline]
    pub fn arrival_offset(&self) -> Duration {
        self.arrival_offset
    }

    #[inline]
    pub fn origin(&self) -> Direction {
        self.origin
    }

    #[inline]
    pub fn destination(&self) -> Direction {
        self.destination
    }

    /// The kind of turn this vehicle makes, recomputed from the heading pair.
    pub fn turn(&self) -> TurnKind {
        match TurnKind::classify(self.origin, self.destination) {
            Ok(turn) => turn,
            // The pair was validated in `new`.
            Err(_) => unreachable!("vehicle constructed with an illegal heading pair"),
        }
    }

    /// The quadrants this vehicle occupies while crossing, in traversal order.
    pub fn sweep(&self) -> &'static [Quadrant] {
        quadrant::sweep(self.origin, self.turn())
    }
}
