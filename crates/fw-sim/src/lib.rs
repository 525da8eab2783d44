//! `fw-sim` — vehicle agents and the simulation runner.
//!
//! # Three-phase run
//!
//! ```text
//! for each vehicle (own thread, fully parallel):
//!   ① Sleep    — until the vehicle's scripted arrival offset.
//!   ② Arrive   — log "arriving", dwell at the stop sign, take this
//!                direction's head-of-line token, join the direction flow
//!                (blocks while another direction owns the intersection).
//!   ③ Cross    — lock the swept quadrants in ascending order, log
//!                "crossing", hold for the turn-dependent duration, release
//!                descending.
//!   ④ Exit     — log "exiting", leave the flow (last one out frees the
//!                intersection and wakes all waiting directions), return the
//!                head-of-line token.
//! ```
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use fw_manifest::load_manifest_csv;
//! use fw_sim::SimBuilder;
//!
//! let vehicles = load_manifest_csv(path)?;
//! let report = SimBuilder::new(vehicles).build()?.run();
//! println!("{} vehicles crossed in {:.1} s", report.completed, report.elapsed.as_secs_f64());
//! ```

pub mod builder;
pub mod error;
pub mod log;
pub mod sim;

mod agent;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use log::{Event, EventKind, EventSink, LineLog, MemoryLog, NoopLog};
pub use sim::{SimReport, Simulation};
