use criterion::{criterion_group, criterion_main, Criterion};
use kruskal_mazes::{
    generators,
    shuffle,
    units::Dimension,
};

fn bench_kruskal_maze_16(c: &mut Criterion) {
    c.bench_function("kruskal_maze_16", |b| {
        let mut rng = shuffle::seeded_rng(16);
        b.iter(|| generators::kruskal(Dimension(16), Some(&mut rng)))
    });
}

fn bench_kruskal_maze_32(c: &mut Criterion) {
    c.bench_function("kruskal_maze_32", |b| {
        let mut rng = shuffle::seeded_rng(32);
        b.iter(|| generators::kruskal(Dimension(32), Some(&mut rng)))
    });
}

fn bench_kruskal_maze_50(c: &mut Criterion) {
    c.bench_function("kruskal_maze_50", |b| {
        let mut rng = shuffle::seeded_rng(50);
        b.iter(|| generators::kruskal(Dimension(50), Some(&mut rng)))
    });
}

criterion_group!(
    benches,
    bench_kruskal_maze_16,
    bench_kruskal_maze_32,
    bench_kruskal_maze_50
);
criterion_main!(benches);
