//! Named, ordered measurements of software artifacts
//!
//! Metric values are produced outside of this crate (by a code analyzer, a linter,
//! a coverage tool) and handed in either programmatically or through a metrics file.
//! Nothing here computes a metric; this module only gives them a shape.
//!
//! # Implementation Model
//!
//! A [`Metric`] pairs a case-sensitive name with a value. The value type is a
//! parameter so that callers with their own ordered measurement type can evaluate
//! rules against it directly; rule and metric files use [`MetricValue`], which
//! orders integers, decimals, and text in a single total order.
//!
//! An [`Artifact`] groups the metrics measured for one artifact. Absent entries
//! (`null` in JSON) are preserved rather than dropped, since a collection with a
//! missing measurement must never satisfy a constraining rule.

mod artifact;
mod metric;
mod metric_value;

pub use artifact::{Artifact, ArtifactSet};
pub use metric::Metric;
pub use metric_value::MetricValue;
