//! Criterion benchmarks for the dispatcher.
//!
//! Measures one dispatch decision per tier across fleet and order-book sizes
//! to catch regressions in shortlisting and bundle partner evaluation.
//!
//! Run benchmarks with:
//! ```bash
//! cargo bench --package pulse-dispatch
//! ```

// Criterion macros generate code that triggers missing_docs warnings.
#![allow(missing_docs, reason = "Criterion macros generate undocumented code")]

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use pulse_core::{DispatchRequest, Dispatcher, Order, Tier, lat_lon};
use pulse_dispatch::PulseDispatcher;

mod bench_support;

use bench_support::{BENCHMARK_SEED, generate_fleet, generate_orders};

/// Fleet and order-book sizes to benchmark.
const PROBLEM_SIZES: &[usize] = &[50, 200, 1000];

fn build_request(tier: Tier, size: usize) -> DispatchRequest {
    DispatchRequest {
        tier,
        new_order: Order::new(
            "NEW_ORDER",
            lat_lon(25.2859, 51.4965),
            lat_lon(25.3200, 51.5250),
        ),
        all_orders: generate_orders(size, BENCHMARK_SEED),
        couriers: generate_fleet(size, BENCHMARK_SEED),
    }
}

/// Benchmark a single dispatch decision for each tier and problem size.
fn bench_dispatch(c: &mut Criterion) {
    let dispatcher = PulseDispatcher::new();

    for tier in Tier::ALL {
        let mut group = c.benchmark_group(format!("dispatch_{}", tier.as_str().to_lowercase()));
        for &size in PROBLEM_SIZES {
            let request = build_request(tier, size);
            let throughput_size = u64::try_from(size).unwrap_or(u64::MAX);
            group.throughput(Throughput::Elements(throughput_size));
            group.bench_with_input(
                BenchmarkId::new("orders_and_couriers", size),
                &request,
                |b, req| {
                    b.iter(|| dispatcher.dispatch(black_box(req)));
                },
            );
        }
        group.finish();
    }
}

criterion_group!(benches, bench_dispatch);
criterion_main!(benches);
