//! Threshold rules over named metrics
//!
//! This module answers a single question: does a collection of metrics satisfy a
//! statement? It neither computes metrics nor reports results.
//!
//! # Implementation Model
//!
//! Rules form a tree. Leaves are [`Threshold`]s, each pairing a reference metric with
//! a [`Relation`] (`<`, `≤`, `=`, `≥`, `>`). Inner nodes are [`Thresholds`] statements,
//! combining their leaves and nested statements under a [`Connective`]:
//!
//! - **VERUM** is always true, whatever the input, and ignores its operands
//! - **AND** requires every leaf and every nested statement to hold (true when empty)
//! - **OR** requires at least one to hold (false when empty)
//! - **XOR** requires an odd number to hold
//!
//! A leaf holds when *any* metric in the collection shares its name and relates to its
//! bound. Metrics with other names are skipped, so one collection can be evaluated
//! against leaves for many different metrics.
//!
//! [`Thresholds::test`] never fails: for anything but VERUM, an absent collection or
//! an absent element means "not satisfied". [`Connective::is_true`] is the strict
//! counterpart and reports such input as a [`RuleError`].
//!
//! Trees are immutable once built. Their depth is capped at [`MAX_STATEMENT_DEPTH`]
//! when they are constructed, which bounds the recursion during evaluation even for
//! trees loaded from untrusted rule files.

mod connective;
mod relation;
mod rule_error;
mod threshold;
mod thresholds;

pub use connective::Connective;
pub use relation::{Relation, relates_to};
pub use rule_error::RuleError;
pub use threshold::Threshold;
pub use thresholds::{MAX_STATEMENT_DEPTH, Thresholds, ThresholdsBuilder};
