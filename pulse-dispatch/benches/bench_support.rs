//! Benchmark support utilities for the dispatcher.
//!
//! Provides deterministic fleets and in-flight order books scattered around
//! central Doha so every run measures the same workload.

use geo::Coord;
use pulse_core::{Courier, CourierStatus, Order, lat_lon};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seed for deterministic random number generation in benchmarks.
pub const BENCHMARK_SEED: u64 = 42;

/// South-west corner of the sampling area.
const AREA_ORIGIN: Coord<f64> = lat_lon(25.26, 51.43);

/// Side of the sampling square in degrees, roughly 14 km.
const AREA_SIZE: f64 = 0.13;

/// Statuses cycled through when generating couriers.
const STATUSES: [CourierStatus; 4] = [
    CourierStatus::Available,
    CourierStatus::Busy,
    CourierStatus::FreeSoon,
    CourierStatus::Offline,
];

#[expect(clippy::float_arithmetic, reason = "offsets inside the sampling area")]
fn random_point(rng: &mut ChaCha8Rng) -> Coord<f64> {
    lat_lon(
        AREA_ORIGIN.y + rng.gen_range(0.0..AREA_SIZE),
        AREA_ORIGIN.x + rng.gen_range(0.0..AREA_SIZE),
    )
}

/// Generate `count` couriers with mixed availability and load.
#[must_use]
pub fn generate_fleet(count: usize, seed: u64) -> Vec<Courier> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    STATUSES
        .iter()
        .cycle()
        .take(count)
        .enumerate()
        .map(|(i, status)| {
            let location = random_point(&mut rng);
            let capacity = rng.gen_range(1..=3);
            let current = rng.gen_range(0..=capacity);
            Courier::new(format!("C{i:04}"), location, *status, capacity, current)
        })
        .collect()
}

/// Generate `count` unassigned in-flight orders.
#[must_use]
pub fn generate_orders(count: usize, seed: u64) -> Vec<Order> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|i| {
            let pickup = random_point(&mut rng);
            let drop = random_point(&mut rng);
            Order::new(format!("O{i:04}"), pickup, drop)
        })
        .collect()
}
