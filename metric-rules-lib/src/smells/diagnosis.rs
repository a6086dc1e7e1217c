use super::SmellOutcome;

/// Every smell rule's outcome for one artifact, in rule order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnosis {
    pub artifact: String,
    pub outcomes: Vec<SmellOutcome>,

    /// Whether the artifact had absent metrics, which makes every constraining rule fail.
    pub incomplete: bool,
}

impl Diagnosis {
    #[must_use]
    pub const fn new(artifact: String, outcomes: Vec<SmellOutcome>, incomplete: bool) -> Self {
        Self {
            artifact,
            outcomes,
            incomplete,
        }
    }

    /// Whether at least one smell was detected.
    #[must_use]
    pub fn smelly(&self) -> bool {
        self.outcomes.iter().any(|o| o.detected)
    }

    pub fn detected(&self) -> impl Iterator<Item = &SmellOutcome> {
        self.outcomes.iter().filter(|o| o.detected)
    }
}
