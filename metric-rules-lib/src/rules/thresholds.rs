use super::connective::any_matches;
use super::{Connective, RuleError, Threshold};
use crate::metrics::{Metric, MetricValue};
use core::fmt;
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The deepest statement tree that can be constructed. A node without sub-statements
/// has depth 1.
pub const MAX_STATEMENT_DEPTH: usize = 64;

/// A statement combining zero or more [`Threshold`] leaves and zero or more nested
/// statements under one [`Connective`].
///
/// For instance:
///
/// ```text
///     A, B, C, D: AND
///        |
///       / \
///      E   F: OR
/// ```
///
/// expresses that A, B, C, and D must be fulfilled, together with a sub-statement
/// requiring E or F.
///
/// Statements are immutable once built, own their sub-statements exclusively, and can
/// be shared across threads for concurrent evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Thresholds<V = MetricValue> {
    thresholds: Vec<Threshold<V>>,
    sub_statements: Vec<Self>,
    connective: Connective,
    depth: usize,
}

impl<V> Thresholds<V> {
    /// Create a statement from its parts.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::DepthExceeded`] if the resulting tree would be deeper than
    /// [`MAX_STATEMENT_DEPTH`].
    pub fn new(thresholds: Vec<Threshold<V>>, sub_statements: Vec<Self>, connective: Connective) -> Result<Self, RuleError> {
        let depth = 1 + sub_statements.iter().map(|s| s.depth).max().unwrap_or(0);
        if depth > MAX_STATEMENT_DEPTH {
            return Err(RuleError::DepthExceeded {
                depth,
                limit: MAX_STATEMENT_DEPTH,
            });
        }

        Ok(Self {
            thresholds,
            sub_statements,
            connective,
            depth,
        })
    }

    /// Create a statement from parts that may contain absent entries, as produced by a
    /// loosely typed rule source.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::Validation`] if either list contains an absent entry, and
    /// [`RuleError::DepthExceeded`] if the tree would be too deep.
    pub fn try_from_parts(
        thresholds: Vec<Option<Threshold<V>>>,
        sub_statements: Vec<Option<Self>>,
        connective: Connective,
    ) -> Result<Self, RuleError> {
        if let Some(index) = thresholds.iter().position(Option::is_none) {
            return Err(RuleError::absent_element("thresholds", index));
        }

        if let Some(index) = sub_statements.iter().position(Option::is_none) {
            return Err(RuleError::absent_element("sub-statements", index));
        }

        Self::new(
            thresholds.into_iter().flatten().collect(),
            sub_statements.into_iter().flatten().collect(),
            connective,
        )
    }

    /// Create a statement without sub-statements.
    #[must_use]
    pub const fn with_thresholds(thresholds: Vec<Threshold<V>>, connective: Connective) -> Self {
        Self {
            thresholds,
            sub_statements: Vec::new(),
            connective,
            depth: 1,
        }
    }

    /// Create a statement that is always fulfilled.
    #[must_use]
    pub const fn verum() -> Self {
        Self::with_thresholds(Vec::new(), Connective::Verum)
    }

    #[must_use]
    pub fn builder() -> ThresholdsBuilder<V> {
        ThresholdsBuilder::new()
    }

    /// The leaf thresholds of this statement. Might be empty.
    #[must_use]
    pub fn thresholds(&self) -> &[Threshold<V>] {
        &self.thresholds
    }

    /// The nested statements of this statement. Might be empty.
    #[must_use]
    pub fn sub_statements(&self) -> &[Self] {
        &self.sub_statements
    }

    #[must_use]
    pub const fn connective(&self) -> Connective {
        self.connective
    }

    /// The height of this tree, 1 for a statement without sub-statements.
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.depth
    }
}

impl<V: Ord> Thresholds<V> {
    /// Whether `metrics` satisfies this statement.
    ///
    /// A [`Connective::Verum`] statement is satisfied by anything, including an absent
    /// collection. Any other statement is unsatisfied by an absent collection or by a
    /// collection holding an absent element. This never fails.
    #[must_use]
    pub fn test(&self, metrics: Option<&[Option<Metric<V>>]>) -> bool {
        if self.connective == Connective::Verum {
            return true;
        }

        let Some(metrics) = metrics else {
            return false;
        };

        let Some(present) = metrics.iter().map(Option::as_ref).collect::<Option<Vec<_>>>() else {
            return false;
        };

        self.holds(&present)
    }

    /// Whether a collection of present metrics satisfies this statement.
    #[must_use]
    pub fn matches(&self, metrics: &[Metric<V>]) -> bool {
        if self.connective == Connective::Verum {
            return true;
        }

        let present: Vec<&Metric<V>> = metrics.iter().collect();
        self.holds(&present)
    }

    /// Every leaf threshold, in tree order, that at least one of `metrics` fulfills.
    ///
    /// Sub-trees under [`Connective::Verum`] are skipped, their operands being ignored
    /// during evaluation as well.
    #[must_use]
    pub fn satisfied_thresholds(&self, metrics: &[Metric<V>]) -> Vec<&Threshold<V>> {
        let present: Vec<&Metric<V>> = metrics.iter().collect();
        let mut satisfied = Vec::new();
        self.collect_satisfied(&present, &mut satisfied);
        satisfied
    }

    pub(super) fn holds(&self, metrics: &[&Metric<V>]) -> bool {
        self.connective.combine(metrics, self)
    }

    fn collect_satisfied<'a>(&'a self, metrics: &[&Metric<V>], satisfied: &mut Vec<&'a Threshold<V>>) {
        if self.connective == Connective::Verum {
            return;
        }

        satisfied.extend(self.thresholds.iter().filter(|t| any_matches(t, metrics)));
        for sub in &self.sub_statements {
            sub.collect_satisfied(metrics, satisfied);
        }
    }
}

impl<V> Default for Thresholds<V> {
    fn default() -> Self {
        Self::verum()
    }
}

impl<V: fmt::Display> fmt::Display for Thresholds<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.connective == Connective::Verum {
            return write!(f, "{}", self.connective);
        }

        let operands: Vec<&dyn fmt::Display> = self
            .thresholds
            .iter()
            .map(|t| t as &dyn fmt::Display)
            .chain(self.sub_statements.iter().map(|s| s as &dyn fmt::Display))
            .collect();

        match operands.as_slice() {
            [] => write!(f, "({})", self.connective),
            [single] => write!(f, "{single}"),
            [first, rest @ ..] => {
                write!(f, "({first}")?;
                for operand in rest {
                    write!(f, " {} {operand}", self.connective)?;
                }
                write!(f, ")")
            }
        }
    }
}

impl<V: Serialize> Serialize for Thresholds<V> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("Thresholds", 3)?;
        state.serialize_field("connective", &self.connective)?;
        state.serialize_field("thresholds", &self.thresholds)?;
        state.serialize_field("sub_statements", &self.sub_statements)?;
        state.end()
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for Thresholds<V> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(deny_unknown_fields)]
        struct StatementData<T> {
            #[serde(default)]
            connective: Connective,
            #[serde(default = "Vec::new")]
            thresholds: Vec<Threshold<T>>,
            #[serde(default = "Vec::new")]
            sub_statements: Vec<Thresholds<T>>,
        }

        let data = StatementData::<V>::deserialize(deserializer)?;

        Self::new(data.thresholds, data.sub_statements, data.connective).map_err(D::Error::custom)
    }
}

/// Incremental construction of a [`Thresholds`] statement. The connective defaults to
/// [`Connective::Verum`] when not set.
#[derive(Debug, Clone)]
pub struct ThresholdsBuilder<V = MetricValue> {
    thresholds: Vec<Threshold<V>>,
    sub_statements: Vec<Thresholds<V>>,
    connective: Connective,
}

impl<V> ThresholdsBuilder<V> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            thresholds: Vec::new(),
            sub_statements: Vec::new(),
            connective: Connective::Verum,
        }
    }

    #[must_use]
    pub const fn connective(mut self, connective: Connective) -> Self {
        self.connective = connective;
        self
    }

    #[must_use]
    pub fn threshold(mut self, threshold: Threshold<V>) -> Self {
        self.thresholds.push(threshold);
        self
    }

    #[must_use]
    pub fn thresholds(mut self, thresholds: impl IntoIterator<Item = Threshold<V>>) -> Self {
        self.thresholds.extend(thresholds);
        self
    }

    #[must_use]
    pub fn sub_statement(mut self, statement: Thresholds<V>) -> Self {
        self.sub_statements.push(statement);
        self
    }

    /// # Errors
    ///
    /// Returns [`RuleError::DepthExceeded`] if the tree would be too deep.
    pub fn build(self) -> Result<Thresholds<V>, RuleError> {
        Thresholds::new(self.thresholds, self.sub_statements, self.connective)
    }
}

impl<V> Default for ThresholdsBuilder<V> {
    fn default() -> Self {
        Self::new()
    }
}
