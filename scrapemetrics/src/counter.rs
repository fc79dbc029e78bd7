use std::sync::atomic::AtomicI64;

use crate::{configuration::MetricConfiguration, descriptor::Descriptor, types::MetricType};

const ORDERING: std::sync::atomic::Ordering = std::sync::atomic::Ordering::Relaxed;

/// A count of things that only goes up.
///
/// Increments never block. Internal mutability is achieved via platform atomics,
/// so share the counter with an `Arc` and increment it from as many threads as
/// you like.
///
/// Only increments are offered, but the backing store is a signed 64 bit integer
/// and nothing checks for wraparound. Keeping the value monotonic is up to you.
#[derive(Debug)]
pub struct Counter {
    descriptor: Descriptor,
    value: AtomicI64,
}

impl Counter {
    /// Build a counter starting at 0
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

    /// Add `count`
    #[inline]
    pub fn increment_by(&self, count: u64) {
        self.value.fetch_add(count as i64, ORDERING);
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

    /// Always [`MetricType::Counter`]
    pub fn metric_type(&self) -> MetricType {
        MetricType::Counter
    }
}
