//! Event log — the simulation's observable output.
//!
//! Every vehicle emits three events (arriving, crossing, exiting), each
//! timestamped against a single start instant captured before any vehicle
//! thread exists.  Events are observational only: recording one never blocks
//! another vehicle's locking decisions, and a sink that drops output must
//! never stall traffic.
//!
//! The line format is fixed:
//!
//! ```text
//! Time 1.1: Car 1 (^ ^) arriving
//! Time 3.1: Car 1 (^ ^) crossing
//! Time 7.1: Car 1 (^ ^) exiting
//! ```

use std::fmt;
use std::io::{self, Write};
use std::sync::Mutex;
use std::time::Duration;

use fw_core::{Direction, VehicleId};

// ── Event ─────────────────────────────────────────────────────────────────────

/// What a vehicle just did.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum EventKind {
    Arriving,
    Crossing,
    Exiting,
}

impl EventKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EventKind::Arriving => "arriving",
            EventKind::Crossing => "crossing",
            EventKind::Exiting  => "exiting",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One timestamped simulation event.
#[derive(Copy, Clone, Debug)]
pub struct Event {
    /// Time since simulation start.
    pub elapsed:     Duration,
    pub vehicle:     VehicleId,
    pub origin:      Direction,
    pub destination: Direction,
    pub kind:        EventKind,
}

impl fmt::Display for Event {
    /// The canonical log line: `Time <secs:.1>: Car <id> (<o> <t>) <event>`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Time {:.1}: Car {} ({} {}) {}",
            self.elapsed.as_secs_f64(),
            self.vehicle,
            self.origin,
            self.destination,
            self.kind,
        )
    }
}

// ── EventSink ─────────────────────────────────────────────────────────────────

/// Where events go.  Implementations must serialize internally; `record` is
/// called concurrently from every vehicle thread.
pub trait EventSink: Send + Sync {
    fn record(&self, event: Event);
}

/// Writes one formatted line per event to `W`, under a single lock so
/// concurrent events never interleave mid-line.
pub struct LineLog<W: Write + Send> {
    out: Mutex<W>,
}

impl<W: Write + Send> LineLog<W> {
    pub fn new(out: W) -> Self {
        LineLog { out: Mutex::new(out) }
    }

    /// Consume the log and hand back the underlying writer.
    pub fn into_inner(self) -> W {
        self.out.into_inner().expect("event log poisoned")
    }
}

impl LineLog<io::Stdout> {
    /// The demo default: log lines to standard output.
    pub fn stdout() -> Self {
        LineLog::new(io::stdout())
    }
}

impl<W: Write + Send> EventSink for LineLog<W> {
    fn record(&self, event: Event) {
        let mut out = self.out.lock().expect("event log poisoned");
        // The log is observational; a failed write must not stall traffic.
        let _ = writeln!(out, "{event}");
        let _ = out.flush();
    }
}

/// Captures events in memory, in arrival order.  Test support and post-run
/// inspection.
#[derive(Default)]
pub struct MemoryLog {
    events: Mutex<Vec<Event>>,
}

impl MemoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far.
    pub fn events(&self) -> Vec<Event> {
        self.events.lock().expect("event log poisoned").clone()
    }
}

impl EventSink for MemoryLog {
    fn record(&self, event: Event) {
        self.events.lock().expect("event log poisoned").push(event);
    }
}

/// An [`EventSink`] that discards everything.  Use for stress runs where only
/// completion matters.
pub struct NoopLog;

impl EventSink for NoopLog {
    fn record(&self, _event: Event) {}
}
