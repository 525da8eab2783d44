//! Compass directions and turn classification.
//!
//! # Design
//!
//! A vehicle is described by the direction it is heading on approach and the
//! direction it is heading after the intersection.  Everything else about its
//! path — the kind of turn it makes and the quadrants it sweeps through — is
//! derived from that pair and never stored, so the two can't fall out of sync.
//!
//! Classification is pure: for a four-way intersection the destination is
//! either the same heading (straight), the unique clockwise neighbour
//! (right), or the unique counter-clockwise neighbour (left).  The remaining
//! pair — the opposite heading — would be a U-turn, which the intersection
//! does not support; it is rejected as a configuration error rather than
//! guessed at.

use std::fmt;

use crate::{FwError, FwResult};

// ── Direction ─────────────────────────────────────────────────────────────────

/// One of the four headings through the intersection, in fixed index order.
///
/// The single-character symbols (`^ > v <`) are the wire and log
/// representation: a vehicle heading north is drawn `^`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub enum Direction {
    North = 0,
    East  = 1,
    South = 2,
    West  = 3,
}

impl Direction {
    /// All four directions in index order.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Cast to `usize` for direct use as an array index.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// The arrow symbol used in manifests and log lines.
    pub fn symbol(self) -> char {
        match self {
            Direction::North => '^',
            Direction::East  => '>',
            Direction::South => 'v',
            Direction::West  => '<',
        }
    }

    /// Parse an arrow symbol back into a direction.
    pub fn from_symbol(c: char) -> FwResult<Direction> {
        match c {
            '^' => Ok(Direction::North),
            '>' => Ok(Direction::East),
            'v' => Ok(Direction::South),
            '<' => Ok(Direction::West),
            _   => Err(FwError::UnknownDirection(c)),
        }
    }

    /// The heading 90° clockwise from `self` (north → east → south → west).
    #[inline]
    pub fn clockwise(self) -> Direction {
        match self {
            Direction::North => Direction::East,
            Direction::East  => Direction::South,
            Direction::South => Direction::West,
            Direction::West  => Direction::North,
        }
    }

    /// The heading 90° counter-clockwise from `self`.
    #[inline]
    pub fn counter_clockwise(self) -> Direction {
        match self {
            Direction::North => Direction::West,
            Direction::West  => Direction::South,
            Direction::South => Direction::East,
            Direction::East  => Direction::North,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

// ── TurnKind ──────────────────────────────────────────────────────────────────

/// The kind of turn a vehicle makes, derived from its direction pair.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum TurnKind {
    Straight,
    Left,
    Right,
}

impl TurnKind {
    /// Classify an (origin, destination) heading pair.
    ///
    /// Returns an error for the one pair with no legal interpretation: the
    /// opposite heading (a U-turn).  Callers validate manifests with this at
    /// startup, before any vehicle thread exists.
    pub fn classify(origin: Direction, destination: Direction) -> FwResult<TurnKind> {
        if destination == origin {
            Ok(TurnKind::Straight)
        } else if destination == origin.clockwise() {
            Ok(TurnKind::Right)
        } else if destination == origin.counter_clockwise() {
            Ok(TurnKind::Left)
        } else {
            Err(FwError::NoLegalTurn { origin, destination })
        }
    }

    /// Human-readable label, useful for summaries and assertions.
    pub fn as_str(self) -> &'static str {
        match self {
            TurnKind::Straight => "straight",
            TurnKind::Left     => "left",
            TurnKind::Right    => "right",
        }
    }
}

impl fmt::Display for TurnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
