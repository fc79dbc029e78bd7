use std::sync::atomic::AtomicI64;

use crate::{configuration::MetricConfiguration, descriptor::Descriptor, types::MetricType};

const ORDERING: std::sync::atomic::Ordering = std::sync::atomic::Ordering::Relaxed;

/// A value that can go up, down, or be set outright.
///
/// Gauges are not transactional. `measure` is a plain store: if it races with
/// an `increment`, whichever lands last wins. If you're using a gauge you
/// probably care more about non-blocking behavior than about perfect
/// happens-befores in your dashboard data.
#[derive(Debug)]
pub struct Gauge {
    descriptor: Descriptor,
    value: AtomicI64,
}

impl Gauge {
    /// Build a gauge starting at 0
    pub fn new(configuration: impl Into<MetricConfiguration>) -> Self {
        let (descriptor, _buckets) = Descriptor::from_configuration(configuration.into());
        Self {
            descriptor,
            value: AtomicI64::new(0),
        }
    }

    /// Add 1
    #[inline]
    pub fn increment(&self) {
        self.value.fetch_add(1, ORDERING);
    }

    /// Subtract 1
    #[inline]
    pub fn decrement(&self) {
        self.value.fetch_sub(1, ORDERING);
    }

    /// Add `delta`, which may be negative
    #[inline]
    pub fn increment_by(&self, delta: i64) {
        self.value.fetch_add(delta, ORDERING);
    }

    /// Overwrite the value
    #[inline]
    pub fn measure(&self, value: i64) {
        self.value.store(value, ORDERING);
    }

    /// The current value
    #[inline]
    pub fn value(&self) -> i64 {
        self.value.load(ORDERING)
    }

    /// Name, description and labels
    pub fn descriptor(&self) -> &Descriptor {
        &self.descriptor
    }

    /// Always [`MetricType::Gauge`]
    pub fn metric_type(&self) -> MetricType {
        MetricType::Gauge
    }
}
