use criterion::{black_box, Criterion};
use scrapemetrics::{linear_buckets, Exporter, MetricConfiguration};

pub fn render(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("render");

    for metric_count in [1, 16, 256] {
        let exporter = Exporter::default();
        for i in 0..metric_count {
            exporter
                .counter(
                    MetricConfiguration::new(format!("counter_{i}"))
                        .description("a counter")
                        .label("index", i as u64),
                )
                .increment_by(i as u64);
            let histogram = exporter.histogram(
                MetricConfiguration::new(format!("histogram_{i}"))
                    .description("a histogram")
                    .label("index", i as u64)
                    .buckets(linear_buckets(0, 10, 16)),
            );
            histogram.measure(i as u64);
        }

        group.throughput(criterion::Throughput::Elements(metric_count as u64 * 2));
        group.bench_function(format!("metrics-{metric_count:03}"), |bencher| {
            bencher.iter(|| black_box(exporter.render()))
        });
    }
}

criterion::criterion_group!(benches, render);
