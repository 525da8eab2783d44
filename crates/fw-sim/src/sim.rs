//! The `Simulation` runner.

use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use fw_core::{SimTiming, Vehicle};

use crate::agent::{Controllers, VehicleAgent};
use crate::log::EventSink;

// ── Simulation ────────────────────────────────────────────────────────────────

/// A ready-to-run simulation: validated manifest, timing policy, event sink.
///
/// Create via [`SimBuilder`][crate::SimBuilder].  [`run`][Simulation::run]
/// spawns one thread per vehicle against a fresh set of shared controllers:
///
/// 1. each vehicle sleeps until its scripted arrival offset;
/// 2. arrive → cross → exit against the head-of-line gate, flow arbiter, and
///    quadrant locks;
/// 3. the run completes when every vehicle has exited.
pub struct Simulation {
    vehicles: Vec<Vehicle>,
    timing:   SimTiming,
    sink:     Arc<dyn EventSink>,
}

impl std::fmt::Debug for Simulation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Simulation")
            .field("vehicles", &self.vehicles)
            .field("timing", &self.timing)
            .field("sink", &"<dyn EventSink>")
            .finish()
    }
}

/// Summary of one completed run.
#[derive(Debug)]
pub struct SimReport {
    /// Vehicles that completed the full protocol (always the manifest size —
    /// a vehicle that cannot finish panics the run instead).
    pub completed: usize,
    /// Wall-clock duration of the whole run.
    pub elapsed: Duration,
}

impl Simulation {
    pub(crate) fn new(vehicles: Vec<Vehicle>, timing: SimTiming, sink: Arc<dyn EventSink>) -> Self {
        Simulation { vehicles, timing, sink }
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    /// Run every vehicle to completion and return the summary.
    ///
    /// The start instant — the zero point of every logged timestamp — is
    /// captured once, before any vehicle thread is spawned.  Scoped threads
    /// mean a panicking vehicle (an invariant violation in the controllers)
    /// propagates out of `run` instead of being lost.
    pub fn run(&self) -> SimReport {
        let controllers = Controllers::new();
        let start = Instant::now();

        thread::scope(|s| {
            for vehicle in &self.vehicles {
                let agent = VehicleAgent::new(
                    vehicle,
                    &controllers,
                    &self.timing,
                    start,
                    self.sink.as_ref(),
                );
                s.spawn(move || agent.run());
            }
        });

        SimReport {
            completed: self.vehicles.len(),
            elapsed:   start.elapsed(),
        }
    }
}
