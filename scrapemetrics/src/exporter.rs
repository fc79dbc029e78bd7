use std::{
    fmt::{self, Display, Write},
    io,
    sync::{Arc, LazyLock},
};

use arc_swap::ArcSwap;

use crate::{
    configuration::MetricConfiguration, counter::Counter, gauge::Gauge, histogram::Histogram,
    metric::Metric,
};

/// The default exporter. You should use this unless you have some fancy multi-exporter setup.
pub fn default_exporter() -> &'static Exporter {
    static DEFAULT_EXPORTER: LazyLock<Exporter> = LazyLock::new(Exporter::default);

    &DEFAULT_EXPORTER
}

/// An ordered registry of metrics that renders them in the text exposition format.
///
/// Metrics render in the order they were added. Names are not deduplicated and
/// nothing is ever removed.
///
/// Registration swaps in a new list rather than locking the old one, so adding
/// metrics while another thread renders is safe: the render sees the list from
/// before or after the addition, never half of it.
///
/// ```
/// use scrapemetrics::{Exporter, MetricConfiguration};
///
/// let exporter = Exporter::default();
/// let requests = exporter.counter(
///     MetricConfiguration::new("requests").description("Requests served"),
/// );
/// requests.increment_by(3);
///
/// assert_eq!(
///     "# HELP requests Requests served\n# TYPE requests counter\nrequests 3",
///     exporter.render(),
/// );
/// ```
#[derive(Debug)]
pub struct Exporter {
    metrics: ArcSwap<Vec<Metric>>,
}

impl Default for Exporter {
    fn default() -> Self {
        Self {
            metrics: ArcSwap::from_pointee(Vec::new()),
        }
    }
}

impl Exporter {
    /// Append metrics to the registry, in order.
    pub fn add(&self, metrics: impl IntoIterator<Item = impl Into<Metric>>) {
        let additions: Vec<Metric> = metrics.into_iter().map(Into::into).collect();
        for metric in &additions {
            log::debug!("registering {} {}", metric.metric_type(), metric.name());
        }
        self.metrics.rcu(|current| {
            let mut next = Vec::with_capacity(current.len() + additions.len());
            next.extend(current.iter().cloned());
            next.extend(additions.iter().cloned());
            next
        });
    }

    /// Build a counter and register it.
    ///
    /// Keep the returned handle; it shares its value with the registry.
    pub fn counter(&self, configuration: impl Into<MetricConfiguration>) -> Arc<Counter> {
        let counter = Arc::new(Counter::new(configuration));
        self.add([&counter]);
        counter
    }

    /// Build a gauge and register it.
    pub fn gauge(&self, configuration: impl Into<MetricConfiguration>) -> Arc<Gauge> {
        let gauge = Arc::new(Gauge::new(configuration));
        self.add([&gauge]);
        gauge
    }

    /// Build a histogram and register it.
    pub fn histogram(&self, configuration: impl Into<MetricConfiguration>) -> Arc<Histogram> {
        let histogram = Arc::new(Histogram::new(configuration));
        self.add([&histogram]);
        histogram
    }

    /// A snapshot of the registered metrics
    pub fn metrics(&self) -> Arc<Vec<Metric>> {
        self.metrics.load_full()
    }

    /// How many metrics are registered
    pub fn len(&self) -> usize {
        self.metrics.load().len()
    }

    /// True when nothing is registered
    pub fn is_empty(&self) -> bool {
        self.metrics.load().is_empty()
    }

    /// Render every registered metric's current state.
    pub fn render(&self) -> String {
        let metrics = self.metrics.load();
        let mut rendered = String::new();
        // writing into a String cannot fail
        let _ = write_metrics(&mut rendered, &metrics);
        log::debug!("rendered {} metrics into {} bytes", metrics.len(), rendered.len());
        rendered
    }

    /// Render into a sink. Errors from the sink are returned as they are.
    pub fn write_to(&self, mut sink: impl io::Write) -> io::Result<()> {
        sink.write_all(self.render().as_bytes())
    }
}

impl Display for Exporter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_metrics(f, &self.metrics.load())
    }
}

fn write_metrics(out: &mut impl Write, metrics: &[Metric]) -> fmt::Result {
    for (index, metric) in metrics.iter().enumerate() {
        if 0 < index {
            out.write_str("\n\n")?;
        }
        write_metric(out, metric)?;
    }
    Ok(())
}

fn write_metric(out: &mut impl Write, metric: &Metric) -> fmt::Result {
    let descriptor = metric.descriptor();
    let name = descriptor.name();
    write!(
        out,
        "# HELP {name} {}\n# TYPE {name} {}",
        descriptor.help(),
        metric.metric_type()
    )?;
    let labels = descriptor.label_fragment();
    match metric {
        Metric::Counter(counter) => write!(out, "\n{name}{labels} {}", counter.value()),
        Metric::Gauge(gauge) => write!(out, "\n{name}{labels} {}", gauge.value()),
        Metric::Histogram(histogram) => {
            let trailing = descriptor.trailing_label_fragment();
            for (threshold, count) in histogram.bucket_counts() {
                write!(
                    out,
                    "\n{name}_bucket{{ le=\"{threshold}\"{trailing} }} {count}"
                )?;
            }
            // +Inf and _count share one load so they always agree
            let count = histogram.count();
            write!(
                out,
                "\n{name}_bucket{{ le=\"+Inf\"{trailing} }} {count}\n{name}_sum{labels} {}\n{name}_count{labels} {count}",
                histogram.sum()
            )
        }
    }
}

#[cfg(test)]
mod test {
    use std::{io, sync::Arc};

    use super::{default_exporter, Exporter};
    use crate::{Counter, Gauge, Histogram, Metric, MetricConfiguration};

    #[test_log::test]
    fn counter_scenario() {
        let exporter = Exporter::default();
        let counter = exporter.counter(MetricConfiguration::new("c").description("d"));
        counter.increment();
        counter.increment_by(2);

        assert_eq!("# HELP c d\n# TYPE c counter\nc 3", exporter.render());
    }

    #[test_log::test]
    fn gauge_scenario() {
        let exporter = Exporter::default();
        let gauge = exporter.gauge(MetricConfiguration::new("g").description("d"));
        gauge.increment();
        gauge.increment_by(2);
        gauge.measure(4);

        assert_eq!("# HELP g d\n# TYPE g gauge\ng 4", exporter.render());
    }

    #[test_log::test]
    fn histogram_scenario() {
        let exporter = Exporter::default();
        let histogram = exporter.histogram(
            MetricConfiguration::new("h")
                .description("d")
                .buckets([0, 1, 20, 30, 50, 100, 300, 500]),
        );
        for value in [1, 2, 4, 8, 16, 32, 64, 128, 256, 512] {
            histogram.measure(value);
        }

        assert_eq!(
            [
                "# HELP h d",
                "# TYPE h histogram",
                r#"h_bucket{ le="0" } 0"#,
                r#"h_bucket{ le="1" } 1"#,
                r#"h_bucket{ le="20" } 5"#,
                r#"h_bucket{ le="30" } 5"#,
                r#"h_bucket{ le="50" } 6"#,
                r#"h_bucket{ le="100" } 7"#,
                r#"h_bucket{ le="300" } 9"#,
                r#"h_bucket{ le="500" } 9"#,
                r#"h_bucket{ le="+Inf" } 10"#,
                "h_sum 1023",
                "h_count 10",
            ]
            .join("\n"),
            exporter.render()
        );
    }

    #[test_log::test]
    fn histogram_labels_follow_le() {
        let exporter = Exporter::default();
        let histogram = exporter.histogram(
            MetricConfiguration::new("name")
                .description("d")
                .label("k", "v")
                .bucket(10),
        );
        histogram.measure(3);

        assert_eq!(
            [
                "# HELP name d",
                "# TYPE name histogram",
                r#"name_bucket{ le="10", k="v" } 1"#,
                r#"name_bucket{ le="+Inf", k="v" } 1"#,
                r#"name_sum{ k="v" } 3"#,
                r#"name_count{ k="v" } 1"#,
            ]
            .join("\n"),
            exporter.render()
        );
    }

    #[test_log::test]
    fn histogram_without_buckets() {
        let exporter = Exporter::default();
        let histogram = exporter.histogram(MetricConfiguration::new("h").description("d"));
        histogram.measure(5);

        assert_eq!(
            "# HELP h d\n# TYPE h histogram\nh_bucket{ le=\"+Inf\" } 1\nh_sum 5\nh_count 1",
            exporter.render()
        );
    }

    #[test_log::test]
    fn blocks_render_in_registration_order() {
        let exporter = Exporter::default();
        let gauge = Arc::new(Gauge::new(
            MetricConfiguration::new("temperature")
                .description("Current temperature")
                .label("room", "kitchen")
                .label("floor", 1_u32),
        ));
        let counter = Arc::new(Counter::new(
            MetricConfiguration::new("visits").description("Visits"),
        ));
        exporter.add([Metric::from(&gauge), Metric::from(&counter)]);
        // no deduplication by name
        exporter.add([&counter]);
        gauge.measure(-3);
        counter.increment();

        assert_eq!(3, exporter.len());
        assert_eq!(
            [
                "# HELP temperature Current temperature",
                "# TYPE temperature gauge",
                r#"temperature{ room="kitchen", floor="1" } -3"#,
                "",
                "# HELP visits Visits",
                "# TYPE visits counter",
                "visits 1",
                "",
                "# HELP visits Visits",
                "# TYPE visits counter",
                "visits 1",
            ]
            .join("\n"),
            exporter.render()
        );
    }

    #[test_log::test]
    fn rendering_is_idempotent() {
        let exporter = Exporter::default();
        exporter.add([Metric::from(Histogram::new(
            MetricConfiguration::new("h").label("b", "2").label("a", "1").bucket(1),
        ))]);
        exporter.counter("c").increment();

        let first = exporter.render();
        let second = exporter.render();
        assert_eq!(first, second);
        assert_eq!(first, exporter.to_string());
    }

    #[test_log::test]
    fn multi_line_description_stays_on_the_help_line() {
        let exporter = Exporter::default();
        let counter = exporter.counter(
            MetricConfiguration::new("c").description("line one\nc 999 \\ \"quoted\""),
        );

        let rendered = exporter.render();
        assert_eq!(
            [
                r#"# HELP c line one\nc 999 \\ "quoted""#,
                "# TYPE c counter",
                "c 0",
            ]
            .join("\n"),
            rendered
        );
        assert_eq!(3, rendered.lines().count());
        // the accessor keeps the text as configured
        assert_eq!("line one\nc 999 \\ \"quoted\"", counter.descriptor().description());
    }

    #[test_log::test]
    fn render_matches_display() {
        let exporter = Exporter::default();
        exporter.gauge(MetricConfiguration::new("g").description("d")).measure(2);
        exporter.counter(MetricConfiguration::new("c").description("d"));

        assert_eq!(exporter.to_string(), exporter.render());
        assert_eq!(
            "# HELP g d\n# TYPE g gauge\ng 2\n\n# HELP c d\n# TYPE c counter\nc 0",
            exporter.render()
        );
    }

    #[test_log::test]
    fn empty_exporter_renders_nothing() {
        let exporter = Exporter::default();
        assert!(exporter.is_empty());
        assert_eq!("", exporter.render());
    }

    #[test_log::test]
    fn write_to_sink() {
        let exporter = Exporter::default();
        exporter.counter(MetricConfiguration::new("c").description("d"));

        let mut sink = Vec::new();
        exporter.write_to(&mut sink).expect("vec sink accepts writes");
        assert_eq!(b"# HELP c d\n# TYPE c counter\nc 0".as_slice(), sink.as_slice());
    }

    #[test_log::test]
    fn sink_errors_pass_through() {
        struct HungUp;
        impl io::Write for HungUp {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "scraper hung up"))
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let exporter = Exporter::default();
        exporter.counter("c");

        let error = exporter
            .write_to(HungUp)
            .expect_err("a broken sink should fail the write");
        assert_eq!(io::ErrorKind::BrokenPipe, error.kind());
        assert_eq!("scraper hung up", error.to_string());
    }

    #[test_log::test]
    fn add_while_rendering() {
        let exporter = Exporter::default();
        std::thread::scope(|scope| {
            scope.spawn(|| {
                for i in 0..100 {
                    exporter.counter(format!("counter_{i}"));
                }
            });

            let mut previous = 0;
            for _ in 0..100 {
                let rendered = exporter.render();
                let blocks = rendered.matches("# TYPE ").count();
                assert!(previous <= blocks);
                previous = blocks;
            }
        });

        assert_eq!(100, exporter.len());
        let rendered = exporter.render();
        assert!(rendered.starts_with("# HELP counter_0 \n"));
        assert!(rendered.ends_with("counter_99 0"));
    }

    #[test_log::test]
    fn default_exporter_is_shared() {
        assert!(std::ptr::eq(default_exporter(), default_exporter()));

        default_exporter().gauge("default_exporter_gauge").measure(9);
        assert!(default_exporter()
            .render()
            .contains("\ndefault_exporter_gauge 9"));
    }
}
