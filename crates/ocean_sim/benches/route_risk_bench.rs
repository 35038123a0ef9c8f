//! Criterion benchmarks for route hazard scoring.
//!
//! Scores a cross-map route against hazard fields of increasing size, then
//! measures one full headless frame in which the route is edited and
//! re-scored.
//!
//! Run with: cargo bench -p ocean_sim --bench route_risk_bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use ocean_sim::hazards::{generate_hazard_field, HazardZone};
use ocean_sim::map_input::MapCommand;
use ocean_sim::ocean_params::OceanParams;
use ocean_sim::plane::MapPoint;
use ocean_sim::ports::find_port;
use ocean_sim::route_plan::EndpointSlot;
use ocean_sim::route_risk::analyze_route;
use ocean_sim::sim_rng::SimRng;

// ---------------------------------------------------------------------------
// Fixture
// ---------------------------------------------------------------------------

fn hazard_fixture(count: usize) -> Vec<HazardZone> {
    let mut rng = SimRng::from_seed_u64(99);
    generate_hazard_field(&mut rng.0, count)
}

const CROSS_START: MapPoint = MapPoint::new(0.0, 0.0);
const CROSS_END: MapPoint = MapPoint::new(100.0, 100.0);

// ---------------------------------------------------------------------------
// Benchmark: analyze_route by hazard count
// ---------------------------------------------------------------------------

fn bench_analyze_route(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze_route");
    group.sample_size(100);

    for count in [6usize, 60, 600] {
        let hazards = hazard_fixture(count);
        assert_eq!(hazards.len(), count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &hazards, |b, h| {
            b.iter(|| black_box(analyze_route(CROSS_START, CROSS_END, h)));
        });
    }

    group.finish();
}

// ---------------------------------------------------------------------------
// Benchmark: one frame that edits and re-scores the route
// ---------------------------------------------------------------------------

fn bench_route_edit_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("route_edit_frame");
    group.sample_size(50);

    let mut app = ocean_sim::headless_app(OceanParams::default());
    assert!(find_port("London").is_some() && find_port("Tokyo").is_some());
    app.world_mut().send_event(MapCommand::SelectPort {
        slot: EndpointSlot::Start,
        port: Some("London".to_string()),
    });
    app.update();

    let mut toggle = false;
    group.bench_function("swap_destination", |b| {
        b.iter(|| {
            toggle = !toggle;
            let port = if toggle { "Tokyo" } else { "Mumbai" };
            app.world_mut().send_event(MapCommand::SelectPort {
                slot: EndpointSlot::End,
                port: Some(port.to_string()),
            });
            app.update();
        });
    });

    group.finish();
}

criterion_group!(benches, bench_analyze_route, bench_route_edit_frame);
criterion_main!(benches);
