//! `fw-core` — foundational types for the fourway intersection simulator.
//!
//! This crate is a dependency of every other `fw-*` crate.  It intentionally
//! has no `fw-*` dependencies and a single external one (`thiserror`).
//!
//! # What lives here
//!
//! | Module        | Contents                                             |
//! |---------------|------------------------------------------------------|
//! | [`direction`] | `Direction`, `TurnKind` and turn classification      |
//! | [`quadrant`]  | `Quadrant` and the per-turn quadrant sweep table     |
//! | [`vehicle`]   | `VehicleId`, `Vehicle`                               |
//! | [`timing`]    | `SimTiming` — stop-dwell and crossing durations      |
//! | [`error`]     | `FwError`, `FwResult`                                |

pub mod direction;
pub mod error;
pub mod quadrant;
pub mod timing;
pub mod vehicle;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use direction::{Direction, TurnKind};
pub use error::{FwError, FwResult};
pub use quadrant::{sweep, Quadrant};
pub use timing::SimTiming;
pub use vehicle::{Vehicle, VehicleId};
