//! Named smell rules as they appear in rule files

use crate::rules::Thresholds;
use serde::{Deserialize, Serialize};

/// A named statement that flags an artifact when its metrics satisfy it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SmellRule {
    name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,

    #[serde(default)]
    statement: Thresholds,
}

impl SmellRule {
    #[must_use]
    pub const fn new(name: String, description: Option<String>, statement: Thresholds) -> Self {
        Self {
            name,
            description,
            statement,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    #[must_use]
    pub const fn statement(&self) -> &Thresholds {
        &self.statement
    }
}
