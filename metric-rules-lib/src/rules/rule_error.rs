use thiserror::Error;

/// Errors raised while building a rule tree or when a connective is evaluated
/// directly with malformed input.
///
/// These always point at a malformed tree or malformed input, never at a transient
/// condition, so callers should surface them rather than retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleError {
    /// A required argument was absent.
    #[error("missing required argument '{argument}'")]
    MissingArgument { argument: &'static str },

    /// A supplied collection contained an absent element.
    #[error("{message}")]
    Validation { message: String },

    /// A statement would nest deeper than the evaluator accepts.
    #[error("statement depth {depth} exceeds the limit of {limit}")]
    DepthExceeded { depth: usize, limit: usize },
}

impl RuleError {
    pub(crate) fn absent_element(collection: &str, index: usize) -> Self {
        Self::Validation {
            message: format!("{collection} contain an absent element at index {index}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            RuleError::MissingArgument { argument: "metrics" }.to_string(),
            "missing required argument 'metrics'"
        );
        assert_eq!(
            RuleError::absent_element("thresholds", 2).to_string(),
            "thresholds contain an absent element at index 2"
        );
        assert_eq!(
            RuleError::DepthExceeded { depth: 65, limit: 64 }.to_string(),
            "statement depth 65 exceeds the limit of 64"
        );
    }
}
