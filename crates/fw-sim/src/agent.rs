//! Per-vehicle driver — the arrive → cross → exit sequence.
//!
//! Each vehicle is one OS thread walking the state machine
//!
//! ```text
//! Scheduled → Arrived → FlowAcquired → Crossing → Exited
//! ```
//!
//! against the three shared controller layers.  The head-of-line token is
//! held from the flow negotiation in `arrive` until `exit` completes; the
//! quadrant claim only for the crossing itself.  All delays come from
//! [`SimTiming`]; none of the waits has a timeout — a vehicle blocks until
//! the intersection lets it through.

use std::thread;
use std::time::Instant;

use fw_control::{FlowArbiter, HeadOfLine, HeadOfLinePermit, QuadrantLocks};
use fw_core::{SimTiming, Vehicle};

use crate::log::{Event, EventKind, EventSink};

// ── Controllers ───────────────────────────────────────────────────────────────

/// The shared controller state of one intersection.  One instance per
/// simulation, shared by every vehicle agent.
pub(crate) struct Controllers {
    pub head_of_line: HeadOfLine,
    pub flow:         FlowArbiter,
    pub quadrants:    QuadrantLocks,
}

impl Controllers {
    pub fn new() -> Self {
        Controllers {
            head_of_line: HeadOfLine::new(),
            flow:         FlowArbiter::new(),
            quadrants:    QuadrantLocks::new(),
        }
    }
}

// ── VehicleAgent ──────────────────────────────────────────────────────────────

/// Drives one vehicle through the full protocol on the calling thread.
pub(crate) struct VehicleAgent<'a> {
    vehicle:     &'a Vehicle,
    controllers: &'a Controllers,
    timing:      &'a SimTiming,
    start:       Instant,
    sink:        &'a dyn EventSink,
}

impl<'a> VehicleAgent<'a> {
    pub fn new(
        vehicle:     &'a Vehicle,
        controllers: &'a Controllers,
        timing:      &'a SimTiming,
        start:       Instant,
        sink:        &'a dyn EventSink,
    ) -> Self {
        VehicleAgent { vehicle, controllers, timing, start, sink }
    }

    /// Sleep until the scripted arrival, then run the three phases in order.
    pub fn run(self) {
        thread::sleep(self.vehicle.arrival_offset());
        let permit = self.arrive();
        self.cross();
        self.exit(permit);
    }

    /// Arrive: announce, dwell at the stop sign, take the head-of-line token
    /// for this direction, then join the flow (blocks while another direction
    /// owns the intersection).
    fn arrive(&self) -> HeadOfLinePermit<'a> {
        self.record(EventKind::Arriving);
        thread::sleep(self.timing.stop_dwell);

        let permit = self.controllers.head_of_line.acquire(self.vehicle.origin());
        self.controllers.flow.join(self.vehicle.origin());
        permit
    }

    /// Cross: claim the swept quadrants (ascending order), announce, traverse
    /// for the turn-dependent duration, release (descending, on drop).
    fn cross(&self) {
        let claim = self.controllers.quadrants.acquire(self.vehicle.sweep());
        self.record(EventKind::Crossing);
        thread::sleep(self.timing.crossing_time(self.vehicle.turn()));
        drop(claim);
    }

    /// Exit: announce, leave the flow — the last vehicle of a direction out
    /// frees the intersection — then hand the head-of-line token to the next
    /// vehicle queued behind us.
    fn exit(&self, permit: HeadOfLinePermit<'a>) {
        self.record(EventKind::Exiting);
        self.controllers.flow.leave(self.vehicle.origin());
        drop(permit);
    }

    fn record(&self, kind: EventKind) {
        self.sink.record(Event {
            elapsed:     self.start.elapsed(),
            vehicle:     self.vehicle.id(),
            origin:      self.vehicle.origin(),
            destination: self.vehicle.destination(),
            kind,
        });
    }
}
