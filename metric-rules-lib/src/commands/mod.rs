//! Command-line interface for metric-rules
//!
//! This module parses the command line, loads rule and metrics files, runs the
//! smell detection, and hands the diagnoses to the report generators.
//!
//! # Implementation Model
//!
//! ## Commands
//!
//! - **check**: Evaluate every artifact of a metrics file against the smell rules
//!   and generate console and/or JSON reports
//! - **explain**: Print every rule with its statement in symbolic form
//! - **init**: Generate a default rules file
//! - **validate**: Check a rules file for syntax errors and inconsistent rules
//!
//! The `run` function parses the arguments with clap and routes to the matching
//! handler. All handlers write through a [`Host`] so they can be tested without a
//! terminal or a real process exit.
//!
//! Rules live in a TOML file of `[[smell]]` tables. When no file is named on the
//! command line, `rules.toml` in the current directory is used if present, otherwise
//! the embedded default rules.

mod check;
mod common;
mod config;
mod explain;
mod host;
mod init;
mod run;
mod validate;

#[cfg(debug_assertions)]
pub use config::Config;

pub use check::{CheckArgs, check_metrics};
pub use explain::{ExplainArgs, explain_rules};
pub use host::Host;
pub use init::{InitArgs, init_rules};
pub use run::run;
pub use validate::{ValidateArgs, validate_rules};
