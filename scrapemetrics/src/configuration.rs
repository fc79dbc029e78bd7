use crate::{
    labels::Labels,
    types::{LabelValue, Name},
};

/// Metadata for a metric, assembled before the metric is constructed.
///
/// Adjustments apply in the order you call them. `description` and `name`
/// overwrite, `label` accumulates and `bucket` appends. Nothing is validated:
/// an empty name or descending buckets are accepted as given.
///
/// ```
/// use scrapemetrics::{Histogram, MetricConfiguration};
///
/// let latency = Histogram::new(
///     MetricConfiguration::new("request_latency_ms")
///         .description("Time to serve a request")
///         .label("endpoint", "/health")
///         .bucket(5)
///         .bucket(50)
///         .bucket(500),
/// );
/// assert_eq!(&[5, 50, 500], latency.buckets());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricConfiguration {
    pub(crate) name: Name,
    pub(crate) description: String,
    pub(crate) labels: Labels,
    pub(crate) buckets: Vec<u64>,
}

impl MetricConfiguration {
    /// Start a configuration for a metric with this name
    pub fn new(name: impl Into<Name>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            labels: Labels::default(),
            buckets: Vec::new(),
        }
    }

    /// Replace the name
    pub fn name(mut self, name: impl Into<Name>) -> Self {
        self.name = name.into();
        self
    }

    /// Replace the human description rendered on the `# HELP` line
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Add a label. A key that is already present gets its value replaced.
    pub fn label(mut self, name: impl Into<Name>, value: impl Into<LabelValue>) -> Self {
        self.labels.insert(name, value);
        self
    }

    /// Add every label, in order
    pub fn labels(
        mut self,
        labels: impl IntoIterator<Item = (impl Into<Name>, impl Into<LabelValue>)>,
    ) -> Self {
        for (name, value) in labels {
            self.labels.insert(name, value);
        }
        self
    }

    /// Append a histogram bucket threshold. Supply thresholds in ascending order.
    pub fn bucket(mut self, threshold: u64) -> Self {
        self.buckets.push(threshold);
        self
    }

    /// Append histogram bucket thresholds, in order
    pub fn buckets(mut self, thresholds: impl IntoIterator<Item = u64>) -> Self {
        self.buckets.extend(thresholds);
        self
    }
}

impl From<&'static str> for MetricConfiguration {
    fn from(name: &'static str) -> Self {
        Self::new(name)
    }
}

impl From<String> for MetricConfiguration {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

/// `length` thresholds starting at `start`, each `factor` times the previous.
///
/// Saturates at `u64::MAX` rather than overflowing.
pub fn exponential_buckets(start: u64, factor: u64, length: usize) -> impl Iterator<Item = u64> {
    std::iter::successors(Some(start), move |previous| {
        Some(previous.saturating_mul(factor))
    })
    .take(length)
}

/// `length` thresholds starting at `start`, each `width` more than the previous.
///
/// Saturates at `u64::MAX` rather than overflowing.
pub fn linear_buckets(start: u64, width: u64, length: usize) -> impl Iterator<Item = u64> {
    std::iter::successors(Some(start), move |previous| {
        Some(previous.saturating_add(width))
    })
    .take(length)
}
