/// The outcome of evaluating a single smell rule against one artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmellOutcome {
    pub name: String,
    pub description: Option<String>,

    /// The rule's statement, rendered with relation and connective symbols.
    pub statement: String,
    pub detected: bool,

    /// The rendered thresholds that contributed to a detection.
    pub reasons: Vec<String>,
}

impl SmellOutcome {
    #[must_use]
    pub const fn new(name: String, description: Option<String>, statement: String, detected: bool, reasons: Vec<String>) -> Self {
        Self {
            name,
            description,
            statement,
            detected,
            reasons,
        }
    }
}
