use criterion::{criterion_group, criterion_main, Criterion};
use rand::Rng;
use sweep_polygon::{CanvasBounds, PolygonEngine, Point, Sense, SweepConfig, Wall, WallList};

fn random_walls(count: usize, min: f64, max: f64) -> WallList {
    let mut rng = rand::thread_rng();
    let mut walls = Vec::with_capacity(count);
    for _ in 0..count {
        let a = Point::new(rng.gen_range(min..max), rng.gen_range(min..max));
        let dx = rng.gen_range(-40.0..40.0);
        let dy = rng.gen_range(-40.0..40.0);
        walls.push(Wall::new(a, Point::new(a.x + dx, a.y + dy)));
    }
    WallList::new(walls)
}

fn criterion_benchmark(c: &mut Criterion) {
    let bounds = CanvasBounds::single(Point::new(-10., -10.), Point::new(810., 810.));
    let origin = Point::new(400., 400.);
    let config = SweepConfig::new().with_sense(Sense::Sight);

    c.bench_function("compute_100_walls", |b| {
        let walls = random_walls(100, 0., 800.);
        b.iter(|| {
            let _ = PolygonEngine::compute(origin, &config, &walls, &bounds).unwrap();
        })
    });

    c.bench_function("compute_1000_walls", |b| {
        let walls = random_walls(1000, 0., 800.);
        b.iter(|| {
            let _ = PolygonEngine::compute(origin, &config, &walls, &bounds).unwrap();
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
