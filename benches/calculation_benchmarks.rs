//! Performance benchmarks for the Trip Ledger engine.
//!
//! Covers the pure calculations on their own, a full scenario evaluation
//! with its audit trace, and the HTTP round trip through the router:
//! - Duty-hours estimate across trip lengths
//! - Trip ledger calculation
//! - Scenario evaluation
//! - POST /scenario, single request and a batch of 100
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use trip_ledger::api::{AppState, create_router};
use trip_ledger::calculation::{
    LIFETIME_FALLBACK_MPG, calculate_trip, estimate_hours, evaluate_scenario,
};
use trip_ledger::models::{CostSettings, LifetimeFuelStats, TripInputs};

use axum::{body::Body, http::Request};
use tower::ServiceExt;

fn standard_inputs() -> TripInputs {
    TripInputs {
        deadhead: 50.0,
        loaded: 500.0,
        returning: true,
        return_miles: 120.0,
        gross: 2000.0,
        fuel_price: 4.0,
        wait_hours: 2.0,
    }
}

/// Creates router state with the shipped default settings saved.
fn create_test_state() -> AppState {
    let state = AppState::in_memory();
    state
        .settings()
        .save(&CostSettings::defaults())
        .expect("Failed to save settings");
    state
}

fn scenario_body(i: usize) -> String {
    serde_json::json!({
        "deadhead": (i % 7) * 25,
        "loaded": 200 + i * 15,
        "returning": i % 2 == 0,
        "return_miles": (i % 5) * 40,
        "gross": 800 + i * 30,
        "fuel_price": 3.9,
        "wait_hours": (i % 4) as f64 * 0.5
    })
    .to_string()
}

fn post_scenario(body: String) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/scenario")
        .header("Content-Type", "application/json")
        .body(Body::from(body))
        .unwrap()
}

/// Benchmark: duty-hours estimate for short, regional and long-haul trips.
fn bench_estimate_hours(c: &mut Criterion) {
    let mut group = c.benchmark_group("estimate_hours");

    for miles in [120.0, 550.0, 2350.0] {
        group.bench_with_input(BenchmarkId::new("miles", miles), &miles, |b, &miles| {
            b.iter(|| estimate_hours(black_box(miles), black_box(2.0), black_box(47.0)))
        });
    }

    group.finish();
}

/// Benchmark: the trip ledger on its own.
fn bench_calculate_trip(c: &mut Criterion) {
    let inputs = standard_inputs();
    let settings = CostSettings::defaults();

    c.bench_function("calculate_trip", |b| {
        b.iter(|| {
            calculate_trip(
                black_box(&inputs),
                black_box(&settings),
                black_box(4.0),
                black_box(0.0),
                black_box(24.45),
            )
        })
    });
}

/// Benchmark: full scenario evaluation, including the audit trace.
fn bench_evaluate_scenario(c: &mut Criterion) {
    let inputs = standard_inputs();
    let settings = CostSettings::defaults();
    let lifetime = LifetimeFuelStats {
        lifetime_miles: 68_000.0,
        lifetime_gallons: 10_000.0,
    };

    c.bench_function("evaluate_scenario", |b| {
        b.iter(|| {
            evaluate_scenario(
                black_box(&inputs),
                black_box(&settings),
                black_box(&lifetime),
                LIFETIME_FALLBACK_MPG,
            )
        })
    });
}

/// Benchmark: a single POST /scenario through the router.
fn bench_scenario_request(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(create_test_state());
    let body = scenario_body(3);

    c.bench_function("scenario_request", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router.oneshot(post_scenario(body.clone())).await.unwrap();
            black_box(response)
        })
    });
}

/// Benchmark: a batch of 100 different scenario requests.
fn bench_batch_100(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = create_test_state();
    let requests: Vec<String> = (0..100).map(scenario_body).collect();

    let mut group = c.benchmark_group("batch_processing");
    group.throughput(Throughput::Elements(100));

    group.bench_function("batch_100", |b| {
        b.to_async(&rt).iter(|| async {
            let mut results = Vec::with_capacity(100);
            for body in &requests {
                let router = create_router(state.clone());
                let response = router.oneshot(post_scenario(body.clone())).await.unwrap();
                results.push(response);
            }
            black_box(results)
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_estimate_hours,
    bench_calculate_trip,
    bench_evaluate_scenario,
    bench_scenario_request,
    bench_batch_100,
);
criterion_main!(benches);
