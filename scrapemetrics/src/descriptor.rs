use crate::{
    configuration::MetricConfiguration,
    labels::{escape_help, LabelFragment, Labels},
    types::Name,
};

/// The immutable identity of a metric: name, description and labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Descriptor {
    name: Name,
    description: String,
    help: String,
    labels: Labels,
    fragment: LabelFragment,
}

impl Descriptor {
    /// Split a configuration into its descriptor and its bucket thresholds
    pub(crate) fn from_configuration(configuration: MetricConfiguration) -> (Self, Vec<u64>) {
        let MetricConfiguration {
            name,
            description,
            labels,
            buckets,
        } = configuration;
        let fragment = LabelFragment::new(&labels);
        let help = escape_help(&description);
        (
            Self {
                name,
                description,
                help,
                labels,
                fragment,
            },
            buckets,
        )
    }

    /// The metric name
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// The human description
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The description as written on the `# HELP` line, escaped
    pub(crate) fn help(&self) -> &str {
        &self.help
    }

    /// The labels, in insertion order
    pub fn labels(&self) -> &Labels {
        &self.labels
    }

    /// `{ k="v", ... }` or empty; formatted once when the metric was built.
    pub fn label_fragment(&self) -> &str {
        self.fragment.full()
    }

    pub(crate) fn trailing_label_fragment(&self) -> &str {
        self.fragment.trailing()
    }
}
