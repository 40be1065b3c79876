use earclip_rs::{signed_area, Builder, Float, Point, Predicate};
use rand::Rng;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    test_forever_rand();
}

fn test_forever_rand() {
    let mut idx = 0;
    loop {
        idx += 1;
        println!("run {idx}");
        test_rand();
    }
}

fn test_rand() {
    let mut rng = rand::thread_rng();
    let n = rng.gen_range(3..500);

    // star shaped, one vertex per sector, so the outline stays simple
    let sector = std::f64::consts::TAU / n as f64;
    let points = (0..n)
        .map(|k| {
            let angle = (k as f64 + rng.gen_range(0.0..0.9)) * sector;
            let radius = rng.gen_range(10.0..400.0);
            Point::new(
                (angle.cos() * radius) as Float,
                (angle.sin() * radius) as Float,
            )
        })
        .collect::<Vec<_>>();

    let expected = signed_area(&points);
    for predicate in [Predicate::Exact, Predicate::Robust] {
        let triangles = match Builder::new(points.clone())
            .predicate(predicate)
            .build()
            .triangulate()
        {
            Ok(triangles) => triangles,
            Err(e) => panic!("{predicate:?} failed on {n} points: {e}\n{points:?}"),
        };
        let area: Float = triangles.map(|t| t.signed_area()).sum();
        assert!(
            (area - expected).abs() <= expected.abs() * 1e-3,
            "{predicate:?} area {area} expected {expected}"
        );
    }
}
