#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core library for metric-rules
//!
//! This library checks code metrics against threshold rules to detect code smells.
//! Metrics are produced elsewhere; rules are trees of thresholds combined with logical
//! connectives and loaded from TOML files.
//!
//! # Module Organization
//!
//! - [`metrics`]: Named metric values and the artifacts that carry them
//! - [`rules`]: Thresholds, relations, connectives, and statement evaluation
//! - [`smells`]: Named smell rules and their detection in artifacts
//! - [`commands`]: Command-line interface and orchestration
//! - [`reports`]: Report generation for detection results
//!
//! # Example
//!
//! ```
//! use metric_rules_lib::metrics::{Metric, MetricValue};
//! use metric_rules_lib::rules::{Connective, Relation, Threshold, Thresholds};
//!
//! let statement: Thresholds = Thresholds::builder()
//!     .connective(Connective::And)
//!     .threshold(Threshold::new(Metric::new("WMC", MetricValue::Integer(47)), Relation::GreaterEquals))
//!     .threshold(Threshold::new(Metric::new("TCC", MetricValue::Decimal(0.33)), Relation::Less))
//!     .build()
//!     .unwrap();
//!
//! let metrics = [
//!     Metric::new("WMC", MetricValue::Integer(60)),
//!     Metric::new("TCC", MetricValue::Decimal(0.1)),
//! ];
//!
//! assert!(statement.matches(&metrics));
//! assert_eq!(statement.to_string(), "(WMC ≥ 47 & TCC < 0.33)");
//! ```

pub type Result<T, E = ohno::AppError> = core::result::Result<T, E>;

pub mod metrics;
pub mod rules;
pub mod smells;

#[cfg(any(debug_assertions, test))]
pub mod commands;
#[cfg(not(any(debug_assertions, test)))]
mod commands;

#[cfg(any(debug_assertions, test))]
pub mod reports;
#[cfg(not(any(debug_assertions, test)))]
mod reports;

pub use crate::commands::{Host, run};
