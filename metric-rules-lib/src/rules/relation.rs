use crate::metrics::Metric;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// How a candidate metric's value must relate to a reference value.
///
/// Only values are compared, never names. Name matching is the job of
/// [`Threshold::test`](super::Threshold::test), which allows callers to layer their own
/// name rules on top of a plain relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
#[serde(rename_all = "snake_case")]
pub enum Relation {
    #[strum(to_string = "<")]
    #[serde(alias = "<")]
    Less,

    #[strum(to_string = "≤")]
    #[serde(alias = "<=", alias = "≤")]
    LessEquals,

    #[strum(to_string = "=")]
    #[serde(alias = "=", alias = "==")]
    Equals,

    #[strum(to_string = "≥")]
    #[serde(alias = ">=", alias = "≥")]
    GreaterEquals,

    #[strum(to_string = ">")]
    #[serde(alias = ">")]
    Greater,
}

impl Relation {
    /// Whether `candidate`'s value relates to `reference`'s value.
    #[must_use]
    pub fn relates_to<V: Ord>(self, candidate: &Metric<V>, reference: &Metric<V>) -> bool {
        let ordering = candidate.value().cmp(reference.value());
        match self {
            Self::Less => ordering.is_lt(),
            Self::LessEquals => ordering.is_le(),
            Self::Equals => ordering.is_eq(),
            Self::GreaterEquals => ordering.is_ge(),
            Self::Greater => ordering.is_gt(),
        }
    }
}

/// Reads as `relates_to(&metric, Relation::Less, &bound)`.
#[must_use]
pub fn relates_to<V: Ord>(candidate: &Metric<V>, relation: Relation, reference: &Metric<V>) -> bool {
    relation.relates_to(candidate, reference)
}
