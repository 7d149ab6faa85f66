use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ndarray::Array2;
use one_nearest::OneNearestNeighbor;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_matrix(rng: &mut StdRng, rows: usize, cols: usize) -> Array2<f64> {
    Array2::from_shape_fn((rows, cols), |_| rng.gen_range(-100.0..100.0))
}

fn bench_predict(c: &mut Criterion) {
    let mut group = c.benchmark_group("one_nearest_predict");
    let mut rng = StdRng::seed_from_u64(42);
    let n_features = 8;

    for &n_samples in &[100, 1_000, 5_000] {
        let x = random_matrix(&mut rng, n_samples, n_features);
        let y: Vec<u32> = (0..n_samples).map(|_| rng.gen_range(0..10)).collect();
        let query = random_matrix(&mut rng, 100, n_features);

        let mut clf = OneNearestNeighbor::new();
        clf.fit(&x, &y).unwrap();

        group.bench_with_input(BenchmarkId::new("train_size", n_samples), &query, |b, q| {
            b.iter(|| clf.predict(black_box(q)).unwrap())
        });
    }

    group.finish();
}

fn bench_fit(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(7);
    let x = random_matrix(&mut rng, 10_000, 8);
    let y: Vec<u32> = (0..10_000).map(|_| rng.gen_range(0..50)).collect();

    c.bench_function("one_nearest_fit_10k", |b| {
        b.iter(|| {
            let mut clf = OneNearestNeighbor::new();
            clf.fit(black_box(&x), black_box(&y)).unwrap();
            clf
        })
    });
}

criterion_group!(benches, bench_predict, bench_fit);
criterion_main!(benches);
