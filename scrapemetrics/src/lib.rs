//! In-process counters, gauges and histograms, rendered on demand in the text
//! exposition format that pull-based scrapers read.
//!
//! [`scrapemetrics`](crate) focuses on your service first - recording a metric is
//! never more than a few relaxed atomic operations, and never takes a lock.
//! Rendering reads those atomics in place and produces byte-for-byte stable
//! output for a given metric state.
//!
//! # Getting Started
//!
//! ```
//! use scrapemetrics::{default_exporter, MetricConfiguration};
//!
//! // Build and register your metrics once, at startup.
//! let requests = default_exporter().counter(
//!     MetricConfiguration::new("requests_total")
//!         .description("Requests served")
//!         .label("service", "example"),
//! );
//! let latency = default_exporter().histogram(
//!     MetricConfiguration::new("latency_ms")
//!         .description("Request latency")
//!         .buckets([1, 5, 25, 100]),
//! );
//!
//! // Record from as many threads as you like.
//! requests.increment();
//! latency.measure(17);
//!
//! // Hand the text to your scraper.
//! let text = default_exporter().render();
//! assert!(text.contains(r#"latency_ms_bucket{ le="25" } 1"#));
//! ```
//!
//! # Feature Flags
//!
//! * `http` - `http::ExpositionService`, a tower service answering scrapes.

mod configuration;
mod counter;
mod descriptor;
mod exporter;
mod gauge;
mod histogram;
mod labels;
mod metric;
mod types;

#[cfg(feature = "http")]
pub mod http;

pub use configuration::{exponential_buckets, linear_buckets, MetricConfiguration};
pub use counter::Counter;
pub use descriptor::Descriptor;
pub use exporter::{default_exporter, Exporter};
pub use gauge::Gauge;
pub use histogram::Histogram;
pub use labels::Labels;
pub use metric::Metric;
pub use types::{LabelValue, MetricType, Name};
