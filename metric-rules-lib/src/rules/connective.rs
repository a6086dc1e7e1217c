use super::{RuleError, Threshold, Thresholds};
use crate::metrics::Metric;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// How the thresholds and sub-statements of a [`Thresholds`] node are combined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
#[serde(rename_all = "snake_case")]
pub enum Connective {
    /// Always true, whatever the metrics and operands are.
    #[default]
    #[strum(to_string = "T")]
    Verum,

    /// True when every threshold and every sub-statement is fulfilled.
    #[strum(to_string = "&")]
    And,

    /// True when at least one threshold or sub-statement is fulfilled.
    #[strum(to_string = "|")]
    Or,

    /// True when an odd number of thresholds and sub-statements is fulfilled.
    /// Usually given exactly two operands.
    #[strum(to_string = "⊻")]
    Xor,
}

impl Connective {
    /// Apply this connective to `statement`'s operands, validating the input first.
    ///
    /// [`Thresholds::test`] filters its input before getting here and should be preferred.
    /// This entry point is for callers who want malformed input reported rather than
    /// folded into `false`.
    ///
    /// # Errors
    ///
    /// Unless this is [`Connective::Verum`], returns [`RuleError::MissingArgument`] if
    /// `metrics` or `statement` is absent and [`RuleError::Validation`] if `metrics`
    /// contains an absent element.
    pub fn is_true<V: Ord>(self, metrics: Option<&[Option<Metric<V>>]>, statement: Option<&Thresholds<V>>) -> Result<bool, RuleError> {
        if self == Self::Verum {
            return Ok(true);
        }

        let metrics = metrics.ok_or(RuleError::MissingArgument { argument: "metrics" })?;
        let statement = statement.ok_or(RuleError::MissingArgument { argument: "statement" })?;

        if let Some(index) = metrics.iter().position(Option::is_none) {
            return Err(RuleError::absent_element("metrics", index));
        }

        let present: Vec<&Metric<V>> = metrics.iter().flatten().collect();
        Ok(self.combine(&present, statement))
    }

    /// Combine the operands of `statement`, recursing into sub-statements under their
    /// own connectives.
    pub(super) fn combine<V: Ord>(self, metrics: &[&Metric<V>], statement: &Thresholds<V>) -> bool {
        let mut leaves = statement.thresholds().iter().map(|t| any_matches(t, metrics));
        let mut children = statement.sub_statements().iter().map(|s| s.holds(metrics));

        match self {
            Self::Verum => true,
            Self::And => leaves.all(|b| b) && children.all(|b| b),
            Self::Or => leaves.any(|b| b) || children.any(|b| b),
            Self::Xor => (leaves.filter(|&b| b).count() + children.filter(|&b| b).count()) % 2 == 1,
        }
    }
}

/// Whether at least one of `metrics` fulfills `threshold`.
pub(super) fn any_matches<V: Ord>(threshold: &Threshold<V>, metrics: &[&Metric<V>]) -> bool {
    metrics.iter().any(|m| threshold.matches(m))
}
