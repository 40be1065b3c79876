use criterion::{criterion_group, criterion_main, Criterion};
use earclip_rs::{loader::parse_polygon, Builder, Float, Point, Predicate};

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("bench_circle_100", |b| {
        let points = circle(100);
        b.iter(|| {
            let clipper = Builder::new(points.clone()).build();
            let _result = clipper.triangulate();
        })
    });

    c.bench_function("bench_circle_100_robust", |b| {
        let points = circle(100);
        b.iter(|| {
            let clipper = Builder::new(points.clone())
                .predicate(Predicate::Robust)
                .build();
            let _result = clipper.triangulate();
        })
    });

    c.bench_function("bench_comb", |b| {
        let points = parse_polygon(include_str!("../test_data/comb.dat")).unwrap();
        b.iter(|| {
            let _result = earclip_rs::triangulate(&points);
        })
    });

    c.bench_function("bench_spiral", |b| {
        let points = parse_polygon(include_str!("../test_data/spiral.dat")).unwrap();
        b.iter(|| {
            let _result = earclip_rs::triangulate(&points);
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

fn circle(n: usize) -> Vec<Point> {
    (0..n)
        .map(|k| {
            let angle = std::f64::consts::TAU * k as f64 / n as f64;
            Point::new((angle.cos() * 400.) as Float, (angle.sin() * 400.) as Float)
        })
        .collect()
}
