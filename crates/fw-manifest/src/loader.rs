//! CSV manifest loader.
//!
//! # CSV format
//!
//! One row per vehicle.  Headings use the arrow symbols (`^ > v <` for
//! north/east/south/west); offsets are fractional seconds from simulation
//! start.
//!
//! ```csv
//! id,arrival_offset_secs,origin,destination
//! 1,1.1,^,^
//! 2,2.2,^,^
//! 3,3.3,^,<
//! ```
//!
//! Row order is bookkeeping only — scheduling is driven entirely by the
//! arrival offsets.
//!
//! # Validation
//!
//! Every check here is a startup failure: a malformed row aborts the load
//! before any vehicle thread exists, rather than propagating a bad heading
//! into the locking protocol.  Rejected rows: unknown direction symbols,
//! opposite-heading pairs (U-turns), negative or non-finite offsets, and
//! duplicate ids.

use std::collections::HashSet;
use std::io::Read;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use fw_core::{Direction, Vehicle, VehicleId};

use crate::{ManifestError, ManifestResult};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct ManifestRecord {
    id:                  u32,
    arrival_offset_secs: f64,
    origin:              char,
    destination:         char,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a vehicle manifest from a CSV file.
pub fn load_manifest_csv(path: &Path) -> ManifestResult<Vec<Vehicle>> {
    let file = std::fs::File::open(path).map_err(ManifestError::Io)?;
    load_manifest_reader(file)
}

/// Like [`load_manifest_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or embedded manifests.
pub fn load_manifest_reader<R: Read>(reader: R) -> ManifestResult<Vec<Vehicle>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut vehicles = Vec::new();
    let mut seen_ids: HashSet<u32> = HashSet::new();

    for result in csv_reader.deserialize::<ManifestRecord>() {
        let row = result.map_err(|e| ManifestError::Parse(e.to_string()))?;

        if !row.arrival_offset_secs.is_finite() || row.arrival_offset_secs < 0.0 {
            return Err(ManifestError::Parse(format!(
                "vehicle {}: arrival offset must be a non-negative number of seconds, got {}",
                row.id, row.arrival_offset_secs
            )));
        }
        if !seen_ids.insert(row.id) {
            return Err(ManifestError::DuplicateId(row.id));
        }

        let origin = Direction::from_symbol(row.origin)?;
        let destination = Direction::from_symbol(row.destination)?;
        let vehicle = Vehicle::new(
            VehicleId(row.id),
            Duration::from_secs_f64(row.arrival_offset_secs),
            origin,
            destination,
        )?;
        vehicles.push(vehicle);
    }

    Ok(vehicles)
}
