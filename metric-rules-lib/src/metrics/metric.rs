use super::MetricValue;
use compact_str::CompactString;
use core::fmt;
use serde::{Deserialize, Serialize};

/// A named measurement of an artifact.
///
/// Two metrics only ever meet in a comparison when their names are equal. Equality
/// and hashing take both the name and the value into account.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Metric<V = MetricValue> {
    name: CompactString,
    value: V,
}

impl<V> Metric<V> {
    #[must_use]
    pub fn new(name: impl Into<CompactString>, value: V) -> Self {
        Self { name: name.into(), value }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn value(&self) -> &V {
        &self.value
    }

    #[must_use]
    pub fn into_parts(self) -> (CompactString, V) {
        (self.name, self.value)
    }
}

impl<V: fmt::Display> fmt::Display for Metric<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.value)
    }
}
