use std::{
    cmp::{max, min},
    time::Instant,
};

use criterion::Criterion;
use scrapemetrics::{exponential_buckets, Histogram, MetricConfiguration};

pub fn histogram(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("histogram");
    group.throughput(criterion::Throughput::Elements(1));

    for bucket_count in [0, 8, 32] {
        let histogram = Histogram::new(
            MetricConfiguration::new("contention")
                .description("is okay")
                .buckets(exponential_buckets(1, 2, bucket_count)),
        );

        for threads in [1, 2, 4, 8, 16] {
            group.bench_function(
                format!("buckets-{bucket_count:02}-concurrency-{threads:02}"),
                |bencher| {
                    bencher.iter_custom(|iterations| {
                        let thread_count = max(1, min(threads, iterations));
                        let iterations_per_thread = iterations / thread_count;

                        let start = Instant::now();
                        std::thread::scope(|scope| {
                            for _ in 0..thread_count {
                                scope.spawn(|| {
                                    for i in 0..iterations_per_thread {
                                        histogram.measure(i % 1024);
                                    }
                                });
                            }
                        });

                        start.elapsed()
                    });
                },
            );
        }
    }
}

criterion::criterion_group!(benches, histogram);
