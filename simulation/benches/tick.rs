use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use quadtree::quadtree::RefreshStrategy;
use simulation::{CollisionPolicy, NullPresenter, Simulation, SimulationConfig};

fn config(refresh: RefreshStrategy) -> SimulationConfig {
    SimulationConfig {
        width: 1600.0,
        height: 1200.0,
        body_count: 2_000,
        radius_min: 2.0,
        radius_max: 6.0,
        speed_max: 200.0,
        refresh,
        policy: CollisionPolicy::Recolor,
        seed: 1,
        ..SimulationConfig::default()
    }
}

fn tick_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("simulation_tick");
    for (name, refresh) in [
        ("full", RefreshStrategy::FullRebuild),
        ("incremental", RefreshStrategy::Incremental),
    ] {
        let mut sim = Simulation::new(config(refresh)).unwrap();
        group.bench_function(BenchmarkId::from_parameter(name), |b| {
            b.iter(|| sim.tick(1.0 / 60.0, &mut NullPresenter).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, tick_benchmark);
criterion_main!(benches);
