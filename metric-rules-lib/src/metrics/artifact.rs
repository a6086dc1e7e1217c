use super::Metric;
use crate::Result;
use camino::Utf8Path;
use ohno::IntoAppError;
use serde::{Deserialize, Serialize};
use std::fs;

const LOG_TARGET: &str = "   metrics";

/// One measured artifact (a class, a file, a module) together with its metrics.
///
/// A producer may emit `null` in place of a metric. Such entries are kept as absent
/// metrics so that rule evaluation can treat the whole collection as unusable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Artifact {
    pub name: String,

    #[serde(default)]
    pub metrics: Vec<Option<Metric>>,
}

impl Artifact {
    #[must_use]
    pub fn new(name: impl Into<String>, metrics: impl IntoIterator<Item = Metric>) -> Self {
        Self {
            name: name.into(),
            metrics: metrics.into_iter().map(Some).collect(),
        }
    }

    /// Whether any of the artifact's metrics is absent.
    #[must_use]
    pub fn has_absent_metrics(&self) -> bool {
        self.metrics.iter().any(Option::is_none)
    }

    /// The metrics that are present, in input order.
    pub fn present_metrics(&self) -> impl Iterator<Item = &Metric> {
        self.metrics.iter().flatten()
    }
}

/// The content of a metrics file: every artifact measured by the producer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ArtifactSet {
    #[serde(default)]
    pub artifacts: Vec<Artifact>,
}

impl ArtifactSet {
    /// Load a metrics file, as TOML when the extension is `.toml` and as JSON otherwise
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed
    pub fn load(path: &Utf8Path) -> Result<Self> {
        let text = fs::read_to_string(path).into_app_err_with(|| format!("reading metrics file '{path}'"))?;

        let set: Self = if path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("toml")) {
            toml::from_str(&text).into_app_err_with(|| format!("parsing metrics file '{path}'"))?
        } else {
            serde_json::from_str(&text).into_app_err_with(|| format!("parsing metrics file '{path}'"))?
        };

        log::debug!(target: LOG_TARGET, "Loaded {} artifact(s) from '{path}'", set.artifacts.len());
        Ok(set)
    }
}
