//! Detection of smells in measured artifacts

use super::{Diagnosis, SmellOutcome, SmellRule};
use crate::metrics::{Artifact, Metric};

const LOG_TARGET: &str = "    smells";

/// Evaluate every rule against one artifact
///
/// Rules are evaluated in order and each yields one [`SmellOutcome`]. A detected smell
/// carries the thresholds its artifact fulfilled as reasons. Artifacts with absent
/// metrics never trigger a constraining rule and get no reasons.
#[must_use]
pub fn detect(rules: &[SmellRule], artifact: &Artifact) -> Diagnosis {
    let complete: Option<Vec<Metric>> = artifact.metrics.iter().cloned().collect();
    let incomplete = complete.is_none();

    if incomplete {
        log::warn!(target: LOG_TARGET, "Artifact '{}' has absent metrics, constraining rules cannot match", artifact.name);
    }

    let outcomes = rules
        .iter()
        .map(|rule| {
            let statement = rule.statement();
            let detected = statement.test(Some(artifact.metrics.as_slice()));

            let reasons = match (&complete, detected) {
                (Some(metrics), true) => statement.satisfied_thresholds(metrics).iter().map(ToString::to_string).collect(),
                _ => Vec::new(),
            };

            log::debug!(target: LOG_TARGET, "{}: {} -> {detected}", artifact.name, rule.name());

            SmellOutcome::new(
                rule.name().to_string(),
                rule.description().map(ToString::to_string),
                statement.to_string(),
                detected,
                reasons,
            )
        })
        .collect();

    Diagnosis::new(artifact.name.clone(), outcomes, incomplete)
}

/// Evaluate every rule against every artifact, keeping the artifacts' order
#[must_use]
pub fn detect_all(rules: &[SmellRule], artifacts: &[Artifact]) -> Vec<Diagnosis> {
    let diagnoses: Vec<_> = artifacts.iter().map(|artifact| detect(rules, artifact)).collect();

    log::info!(
        target: LOG_TARGET,
        "Evaluated {} rule(s) against {} artifact(s), {} smelly",
        rules.len(),
        artifacts.len(),
        diagnoses.iter().filter(|d| d.smelly()).count()
    );

    diagnoses
}
