//! Fluent builder for constructing a [`Simulation`].

use std::collections::HashSet;
use std::sync::Arc;

use fw_core::{SimTiming, Vehicle};

use crate::log::{EventSink, LineLog};
use crate::{SimError, SimResult, Simulation};

/// Fluent builder for [`Simulation`].
///
/// # Required input
///
/// - the vehicle manifest (already-validated [`Vehicle`]s, e.g. from
///   `fw-manifest`)
///
/// # Optional inputs (have defaults)
///
/// | Method        | Default                                  |
/// |---------------|------------------------------------------|
/// | `.timing(t)`  | [`SimTiming::default`] (classic pacing)  |
/// | `.sink(s)`    | [`LineLog::stdout`]                      |
///
/// # Example
///
/// ```rust,ignore
/// let vehicles = load_manifest_csv(path)?;
/// let report = SimBuilder::new(vehicles)
///     .timing(SimTiming::default())
///     .build()?
///     .run();
/// ```
pub struct SimBuilder {
    vehicles: Vec<Vehicle>,
    timing:   SimTiming,
    sink:     Option<Arc<dyn EventSink>>,
}

impl SimBuilder {
    pub fn new(vehicles: Vec<Vehicle>) -> Self {
        SimBuilder {
            vehicles,
            timing: SimTiming::default(),
            sink:   None,
        }
    }

    /// Override the timing policy (tests run millisecond-scale pacing).
    pub fn timing(mut self, timing: SimTiming) -> Self {
        self.timing = timing;
        self
    }

    /// Supply the event sink.  If not called, events go to stdout.
    pub fn sink(mut self, sink: Arc<dyn EventSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Validate the manifest and return a ready-to-run [`Simulation`].
    ///
    /// Vehicle ids must be unique — the log output would otherwise be
    /// ambiguous.  Heading pairs were already validated when the `Vehicle`s
    /// were constructed.
    pub fn build(self) -> SimResult<Simulation> {
        let mut seen_ids = HashSet::new();
        for vehicle in &self.vehicles {
            if !seen_ids.insert(vehicle.id()) {
                return Err(SimError::DuplicateVehicleId(vehicle.id().0));
            }
        }

        let sink = self.sink.unwrap_or_else(|| Arc::new(LineLog::stdout()));
        Ok(Simulation::new(self.vehicles, self.timing, sink))
    }
}
