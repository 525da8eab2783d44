//! Seeded random manifest generation.
//!
//! Stress tests want many vehicles with arbitrary but *reproducible*
//! itineraries: the same seed always yields the same manifest, so a failing
//! interleaving can be re-run.  Destinations are drawn only from the three
//! legal options for each origin (straight, clockwise, counter-clockwise),
//! so generated manifests never need post-hoc validation.

use std::time::Duration;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use fw_core::{Direction, Vehicle, VehicleId};

/// Generate `count` vehicles with ids `1..=count` and arrival offsets drawn
/// uniformly from `[0, spread]`.
pub fn random_manifest(count: usize, seed: u64, spread: Duration) -> Vec<Vehicle> {
    let mut rng = SmallRng::seed_from_u64(seed);

    (0..count)
        .map(|i| {
            let origin = Direction::ALL[rng.gen_range(0..Direction::ALL.len())];
            let destination = match rng.gen_range(0..3) {
                0 => origin,
                1 => origin.clockwise(),
                _ => origin.counter_clockwise(),
            };
            let offset = spread.mul_f64(rng.gen_range(0.0..=1.0));

            Vehicle::new(VehicleId(i as u32 + 1), offset, origin, destination)
                .expect("generated heading pair is always a legal turn")
        })
        .collect()
}
