//! Smell detection over measured artifacts
//!
//! A smell is a named [`Thresholds`](crate::rules::Thresholds) statement loaded from a
//! rule file. Detection evaluates every [`SmellRule`] against the metrics of an
//! [`Artifact`](crate::metrics::Artifact) and records one [`SmellOutcome`] per rule,
//! grouped into a [`Diagnosis`] per artifact.
//!
//! Outcomes are plain data, rendered ahead of time, so that report generators do not
//! need to know anything about rule trees.

mod detector;
mod diagnosis;
mod smell_outcome;
mod smell_rule;

pub use detector::{detect, detect_all};
pub use diagnosis::Diagnosis;
pub use smell_outcome::SmellOutcome;
pub use smell_rule::SmellRule;
