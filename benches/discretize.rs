use airspace_geometry::{Circle, Config, Geometry, LatLon, Sector};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn discretize_benchmark(c: &mut Criterion) {
    let config = Config::default();
    let center = LatLon::new(45.0, 10.0);

    let circle = Geometry::from(Circle::new(center, 25.0));
    c.bench_function("discretize_circle", |b| {
        b.iter(|| black_box(&circle).discretize(&config));
    });

    let small_circle = Geometry::from(Circle::new(center, 1.5));
    c.bench_function("discretize_small_circle", |b| {
        b.iter(|| black_box(&small_circle).discretize(&config));
    });

    let sector = Geometry::from(Sector::new(center, 12.0, 300.0, 60.0, true));
    c.bench_function("discretize_sector", |b| {
        b.iter(|| black_box(&sector).discretize(&config));
    });
}

criterion_group!(benches, discretize_benchmark);
criterion_main!(benches);
