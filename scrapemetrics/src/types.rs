use std::{fmt::Display, sync::Arc};

/// An identifier for various things: metric names and label keys.
#[derive(Debug, Eq, Hash, PartialEq, PartialOrd, Ord, Clone)]
pub enum Name {
    /// A static string Name.
    Str(&'static str),
    /// A String name. Avoid these when you can, because clones can add up.
    String(String),
    /// If you have a rarely-changing identifier you could consider using shared memory
    /// instead of cloning repeatedly.
    Shared(Arc<String>),
}

impl Name {
    /// an &str view of the name
    pub fn as_str(&self) -> &str {
        match self {
            Name::Str(s) => s,
            Name::String(s) => s,
            Name::Shared(s) => s,
        }
    }
}

impl Display for Name {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The value part of a label's key/value pair.
#[derive(Debug, Eq, Hash, PartialEq, Clone)]
pub enum LabelValue {
    /// A static string label value. Feel really good about these.
    Str(&'static str),
    /// An owned string label value.
    String(String),
    /// A label value shared between many metrics.
    Shared(Arc<String>),
    /// A number label value.
    Number(u64),
    /// A boolean label value.
    Boolean(bool),
}

impl Display for LabelValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LabelValue::Str(s) => write!(f, "{s}"),
            LabelValue::String(s) => write!(f, "{s}"),
            LabelValue::Shared(s) => write!(f, "{s}"),
            LabelValue::Number(n) => write!(f, "{n}"),
            LabelValue::Boolean(b) => write!(f, "{b}"),
        }
    }
}

/// The kind tag of a metric, rendered on its `# TYPE` line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricType {
    /// A monotonically increasing value
    Counter,
    /// A value that can go up, down, or be set
    Gauge,
    /// A cumulative bucketed distribution
    Histogram,
}

impl MetricType {
    /// The exposition-format spelling of this type
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricType::Counter => "counter",
            MetricType::Gauge => "gauge",
            MetricType::Histogram => "histogram",
        }
    }
}

impl Display for MetricType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&'static str> for Name {
    #[inline]
    fn from(s: &'static str) -> Self {
        Self::Str(s)
    }
}

impl From<String> for Name {
    #[inline]
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<Arc<String>> for Name {
    #[inline]
    fn from(s: Arc<String>) -> Self {
        Self::Shared(s)
    }
}

impl From<&'static str> for LabelValue {
    #[inline]
    fn from(s: &'static str) -> Self {
        Self::Str(s)
    }
}

impl From<String> for LabelValue {
    #[inline]
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<Arc<String>> for LabelValue {
    #[inline]
    fn from(s: Arc<String>) -> Self {
        Self::Shared(s)
    }
}

impl From<u64> for LabelValue {
    #[inline]
    fn from(n: u64) -> Self {
        LabelValue::Number(n)
    }
}

impl From<u32> for LabelValue {
    #[inline]
    fn from(n: u32) -> Self {
        LabelValue::Number(n as u64)
    }
}

impl From<u16> for LabelValue {
    #[inline]
    fn from(n: u16) -> Self {
        LabelValue::Number(n as u64)
    }
}

impl From<u8> for LabelValue {
    #[inline]
    fn from(n: u8) -> Self {
        LabelValue::Number(n as u64)
    }
}

impl From<bool> for LabelValue {
    #[inline]
    fn from(b: bool) -> Self {
        LabelValue::Boolean(b)
    }
}
