use std::sync::Arc;

use crate::{
    counter::Counter,
    descriptor::Descriptor,
    gauge::Gauge,
    histogram::Histogram,
    labels::Labels,
    types::{MetricType, Name},
};

/// A shared reference to any kind of metric, as held by an [`crate::Exporter`].
#[derive(Debug, Clone)]
pub enum Metric {
    /// A counter
    Counter(Arc<Counter>),
    /// A gauge
    Gauge(Arc<Gauge>),
    /// A histogram
    Histogram(Arc<Histogram>),
}

impl Metric {
    /// Which kind of metric this is
    pub fn metric_type(&self) -> MetricType {
        match self {
            Metric::Counter(counter) => counter.metric_type(),
            Metric::Gauge(gauge) => gauge.metric_type(),
            Metric::Histogram(histogram) => histogram.metric_type(),
        }
    }

    /// Name, description and labels
    pub fn descriptor(&self) -> &Descriptor {
        match self {
            Metric::Counter(counter) => counter.descriptor(),
            Metric::Gauge(gauge) => gauge.descriptor(),
            Metric::Histogram(histogram) => histogram.descriptor(),
        }
    }

    /// The metric name
    pub fn name(&self) -> &Name {
        self.descriptor().name()
    }

    /// The human description
    pub fn description(&self) -> &str {
        self.descriptor().description()
    }

    /// The metric's labels
    pub fn labels(&self) -> &Labels {
        self.descriptor().labels()
    }
}

impl From<Arc<Counter>> for Metric {
    fn from(counter: Arc<Counter>) -> Self {
        Metric::Counter(counter)
    }
}

impl From<&Arc<Counter>> for Metric {
    fn from(counter: &Arc<Counter>) -> Self {
        Metric::Counter(counter.clone())
    }
}

impl From<Counter> for Metric {
    fn from(counter: Counter) -> Self {
        Metric::Counter(Arc::new(counter))
    }
}

impl From<Arc<Gauge>> for Metric {
    fn from(gauge: Arc<Gauge>) -> Self {
        Metric::Gauge(gauge)
    }
}

impl From<&Arc<Gauge>> for Metric {
    fn from(gauge: &Arc<Gauge>) -> Self {
        Metric::Gauge(gauge.clone())
    }
}

impl From<Gauge> for Metric {
    fn from(gauge: Gauge) -> Self {
        Metric::Gauge(Arc::new(gauge))
    }
}

impl From<Arc<Histogram>> for Metric {
    fn from(histogram: Arc<Histogram>) -> Self {
        Metric::Histogram(histogram)
    }
}

impl From<&Arc<Histogram>> for Metric {
    fn from(histogram: &Arc<Histogram>) -> Self {
        Metric::Histogram(histogram.clone())
    }
}

impl From<Histogram> for Metric {
    fn from(histogram: Histogram) -> Self {
        Metric::Histogram(Arc::new(histogram))
    }
}
