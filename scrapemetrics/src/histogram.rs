use std::sync::atomic::AtomicU64;

use crate::{configuration::MetricConfiguration, descriptor::Descriptor, types::MetricType};

const ORDERING: std::sync::atomic::Ordering = std::sync::atomic::Ordering::Relaxed;

/// A distribution of unsigned integer observations over fixed, cumulative buckets.
///
/// Each observation increments every bucket whose threshold is at or above it,
/// so bucket counts are already cumulative when read. Writes cost one atomic add
/// per matching bucket; reads never allocate or sum.
///
/// Histograms are not transactional. Matching buckets, `sum` and `count` are
/// updated by separate atomics, so a concurrent reader may see a bucket bump
/// before the matching `count` bump. The numbers settle as soon as in-flight
/// `measure` calls return.
#[derive(Debug)]
pub struct Histogram {
    descriptor: Descriptor,
    buckets: Vec<u64>,
    counts: Box<[AtomicU64]>,
    sum: AtomicU64,
    count: AtomicU64,
}

impl Histogram {
    /// Build a histogram from the configuration's bucket thresholds.
    ///
    /// Thresholds should be ascending. They are used as given; descending
    /// thresholds only earn a warning in the log.
    pub fn new(configuration: impl Into<MetricConfiguration>) -> Self {
        let (descriptor, buckets) = Descriptor::from_configuration(configuration.into());
        if buckets.windows(2).any(|pair| pair[1] < pair[0]) {
            log::warn!(
                "histogram {} has non-ascending buckets {buckets:?}; bucket counts will not be cumulative",
                descriptor.name()
            );
        }
        let counts = buckets.iter().map(|_| AtomicU64::new(0)).collect();
        Self {
            descriptor,
            buckets,
            counts,
            sum: AtomicU64::new(0),
            count: AtomicU64::new(0),
        }
    }

    /// Record one observation.
    ///
    /// This never blocks. Internal mutability is achieved via platform atomics.
    #[inline]
    pub fn measure(&self, value: u64) {
        for (threshold, count) in self.buckets.iter().zip(self.counts.iter()) {
            if value <= *threshold {
                count.fetch_add(1, ORDERING);
            }
        }
        self.sum.fetch_add(value, ORDERING);
        self.count.fetch_add(1, ORDERING);
    }

    /// The bucket thresholds, in the order they were configured
    pub fn buckets(&self) -> &[u64] {
        &self.buckets
    }

    /// The cumulative count per bucket, parallel to [`Histogram::buckets`]
    pub fn values(&self) -> Vec<u64> {
        self.bucket_counts().map(|(_, count)| count).collect()
    }

    /// Total of every observed value. Wraps on overflow.
    #[inline]
    pub fn sum(&self) -> u64 {
        self.sum.load(ORDERING)
    }

    /// Number of observations
    #[inline]
    pub fn count(&self) -> u64 {
        self.count.load(ORDERING)
    }

    /// Name, description and labels
    pub fn descriptor(&self) -> &Descriptor {
        &self.descriptor
    }

    /// Always [`MetricType::Histogram`]
    pub fn metric_type(&self) -> MetricType {
        MetricType::Histogram
    }

    /// (threshold, cumulative count) pairs without allocating
    pub(crate) fn bucket_counts(&self) -> impl Iterator<Item = (u64, u64)> + '_ {
        self.buckets
            .iter()
            .zip(self.counts.iter())
            .map(|(threshold, count)| (*threshold, count.load(ORDERING)))
    }
}
