use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use targetface::config::Config;
use targetface::geometry::Rect;
use targetface::layout::FaceLayout;
use targetface::scorer::{score_at, RingScheme};
use targetface::{PreciseScoringInput, TargetFaceScorer};

fn random_points(count: usize, span: f64) -> Vec<(f64, f64)> {
    let mut rng = fastrand::Rng::with_seed(42);
    (0..count)
        .map(|_| (rng.f64() * span, rng.f64() * span))
        .collect()
}

fn criterion_benchmark(c: &mut Criterion) {
    let face = Rect::new(0.0, 0.0, 400.0, 400.0);
    let scheme = RingScheme::standard();
    let points = random_points(10_000, 420.0);

    c.bench_function("score_at (10k points)", |b| {
        b.iter(|| {
            for &(x, y) in &points {
                black_box(score_at(black_box(x), black_box(y), &face, &scheme));
            }
        })
    });

    let mut config = Config::default();
    config.scorer.enforce_precise_limit = false;
    let mut scorer = TargetFaceScorer::without_haptics(&config, |a| {
        black_box(a);
    });
    scorer.set_layout(FaceLayout::stacked(0.0, 0.0, 400.0, 0.0, 1));

    c.bench_function("place_at (single spot)", |b| {
        let mut i = 0;
        b.iter(|| {
            let (x, y) = points[i % points.len()];
            i += 1;
            if scorer.current_arrows().len() >= 1024 {
                scorer.set_current_arrows(&[], 0);
            }
            black_box(scorer.place_at(x, y))
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
