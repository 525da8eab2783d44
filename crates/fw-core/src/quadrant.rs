//! Intersection quadrants and the per-turn sweep table.
//!
//! # Design
//!
//! The intersection interior is divided into four quadrants, numbered
//! counter-clockwise starting at NW.  The numbering doubles as a global total
//! order: every vehicle locks its quadrants in ascending order, which is what
//! makes circular wait — and therefore deadlock — structurally impossible no
//! matter how many vehicles contend (see `fw-control`).
//!
//! [`sweep`] is the fixed 4 origins × 3 turn kinds table of which quadrants a
//! vehicle occupies while crossing, listed in traversal order.  A right turn
//! clips one quadrant, going straight crosses two, a left turn sweeps three;
//! the traversal always proceeds counter-clockwise around the intersection
//! center starting at the quadrant adjacent to the origin.

use std::fmt;

use crate::direction::{Direction, TurnKind};

// ── Quadrant ──────────────────────────────────────────────────────────────────

/// One of the four interior regions of the intersection.
///
/// The derived `Ord` (NW < NE < SE < SW) is the lock-acquisition order; do
/// not reorder the variants.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub enum Quadrant {
    Nw = 0,
    Ne = 1,
    Se = 2,
    Sw = 3,
}

impl Quadrant {
    /// All four quadrants in lock order.
    pub const ALL: [Quadrant; 4] = [Quadrant::Nw, Quadrant::Ne, Quadrant::Se, Quadrant::Sw];

    /// Cast to `usize` for direct use as an array index.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Quadrant::Nw => "NW",
            Quadrant::Ne => "NE",
            Quadrant::Se => "SE",
            Quadrant::Sw => "SW",
        }
    }
}

impl fmt::Display for Quadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Sweep table ───────────────────────────────────────────────────────────────

/// The quadrants a vehicle occupies while crossing, in traversal order.
///
/// This table determines which locks a vehicle contends for and must be kept
/// exact; each row is the counter-clockwise sweep starting at the quadrant
/// adjacent to the origin heading.
pub fn sweep(origin: Direction, turn: TurnKind) -> &'static [Quadrant] {
    use Direction::*;
    use Quadrant::*;
    use TurnKind::*;

    match (origin, turn) {
        (North, Right)    => &[Ne],
        (North, Straight) => &[Ne, Se],
        (North, Left)     => &[Ne, Se, Sw],

        (East, Right)     => &[Se],
        (East, Straight)  => &[Se, Sw],
        (East, Left)      => &[Se, Sw, Nw],

        (South, Right)    => &[Sw],
        (South, Straight) => &[Sw, Nw],
        (South, Left)     => &[Sw, Nw, Ne],

        (West, Right)     => &[Nw],
        (West, Straight)  => &[Nw, Ne],
        (West, Left)      => &[Nw, Ne, Se],
    }
}
