//! Report generation for smell diagnoses
//!
//! # Implementation Model
//!
//! Two report generators are provided, each accessed through a `generate` function:
//! - **Console**: Terminal output with optional ANSI colors, listing every rule per
//!   artifact along with the thresholds that triggered detected smells
//! - **JSON**: Machine-readable structured data
//!
//! Both operate on the same input, a slice of [`Diagnosis`](crate::smells::Diagnosis)
//! values, and write into any `core::fmt::Write` sink so callers decide where the
//! text ends up.

mod console;
mod json;

pub use console::generate as generate_console;
pub use json::generate as generate_json;
