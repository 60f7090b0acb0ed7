use airroute_lib::{
    find_route, load_network, plan_route, LoadOptions, Network, NetworkBuilder, Route,
    RouteRequest, UnknownAirportPolicy,
};
use criterion::{criterion_group, criterion_main, Criterion};
use once_cell::sync::Lazy;
use std::hint::black_box;
use std::path::PathBuf;

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures/minimal")
}

static FIXTURE: Lazy<Network> =
    Lazy::new(|| load_network(&fixture_path(), LoadOptions::default()).expect("fixture loads"));
static GRID: Lazy<Network> = Lazy::new(|| grid_network(40));
static REQUEST: Lazy<RouteRequest> = Lazy::new(|| RouteRequest::new("YYZ", "LAX"));

/// Square grid where every airport connects east and south.
fn grid_network(size: usize) -> Network {
    let code = |row: usize, col: usize| format!("G{row:02}{col:02}");
    let mut builder = NetworkBuilder::new(UnknownAirportPolicy::Skip);
    builder
        .push_airline(&["Bench", "BB", "BEN", "Nowhere"])
        .expect("airline row");

    for row in 0..size {
        for col in 0..size {
            let iata = code(row, col);
            let lat = row.to_string();
            let lon = col.to_string();
            builder
                .push_airport(&["Grid", "Grid", "Grid", &iata, &lat, &lon])
                .expect("airport row");
        }
    }

    for row in 0..size {
        for col in 0..size {
            let mut link = |to_row: usize, to_col: usize| {
                builder.insert_route(Route {
                    airline_id: "BB".to_string(),
                    origin: code(row, col),
                    destination: code(to_row, to_col),
                    distance: 1.0 + ((row * 7 + col * 13) % 5) as f64,
                });
            };
            if col + 1 < size {
                link(row, col + 1);
            }
            if row + 1 < size {
                link(row + 1, col);
            }
        }
    }

    builder.build().expect("grid network")
}

fn benchmark_pathfinding(c: &mut Criterion) {
    c.bench_function("fixture_yyz_lax", |b| {
        let network = &*FIXTURE;
        let request = &*REQUEST;
        b.iter(|| {
            let plan = plan_route(network, request).expect("route exists");
            black_box(plan.hop_count())
        });
    });

    c.bench_function("grid_corner_to_corner", |b| {
        let network = &*GRID;
        b.iter(|| {
            let path = find_route(network, "G0000", "G3939").expect("route exists");
            black_box(path.distance)
        });
    });
}

criterion_group!(benches, benchmark_pathfinding);
criterion_main!(benches);
