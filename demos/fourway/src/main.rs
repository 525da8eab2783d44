//! fourway — the canonical eight-vehicle run.
//!
//! Eight vehicles arrive 1.1 s apart at a four-way stop: a northbound
//! platoon, a southbound pair, and one vehicle each from east and west.
//! Classic pacing (2 s stop dwell, 5/4/3 s crossings) with the event log on
//! stdout.  Swap the manifest or the timing to explore other scenarios.

use std::io::Cursor;
use std::sync::Arc;

use anyhow::Result;

use fw_core::SimTiming;
use fw_manifest::load_manifest_reader;
use fw_sim::{LineLog, SimBuilder};

// ── Manifest ──────────────────────────────────────────────────────────────────

const MANIFEST_CSV: &str = "\
id,arrival_offset_secs,origin,destination\n\
1,1.1,^,^\n\
2,2.2,^,^\n\
3,3.3,^,<\n\
4,4.4,v,v\n\
5,5.5,v,>\n\
6,6.6,^,^\n\
7,7.7,>,^\n\
8,8.8,<,^\n\
";

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== fourway — stop-sign intersection simulator ===");
    println!();

    // 1. Load the embedded manifest and build the simulation: classic
    //    pacing, event log on stdout.
    let vehicles = load_manifest_reader(Cursor::new(MANIFEST_CSV))?;
    let sim = SimBuilder::new(vehicles)
        .timing(SimTiming::default())
        .sink(Arc::new(LineLog::stdout()))
        .build()?;

    // 2. Itinerary table.
    println!("{:<6} {:<10} {:<10} {}", "Car", "Arrives", "Route", "Turn");
    println!("{}", "-".repeat(36));
    for vehicle in sim.vehicles() {
        println!(
            "{:<6} {:<10} {:<10} {}",
            vehicle.id(),
            format!("{:.1} s", vehicle.arrival_offset().as_secs_f64()),
            format!("{}  {}", vehicle.origin(), vehicle.destination()),
            vehicle.turn(),
        );
    }
    println!();

    // 3. Run — one thread per vehicle; returns once all have exited.
    let report = sim.run();

    // 4. Summary.
    println!();
    println!(
        "All {} vehicles crossed in {:.1} s",
        report.completed,
        report.elapsed.as_secs_f64()
    );

    Ok(())
}
