use criterion::criterion_main;

mod benchmarks;

criterion_main! {
    benchmarks::histogram::benches,
    benchmarks::render::benches,
}
