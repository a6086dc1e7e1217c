use crate::Result;
use crate::smells::{Diagnosis, SmellOutcome};
use core::fmt::Write;
use serde_json::json;

pub fn generate<W: Write>(diagnoses: &[Diagnosis], writer: &mut W) -> Result<()> {
    let artifacts: Vec<_> = diagnoses
        .iter()
        .map(|diagnosis| {
            json!({
                "name": diagnosis.artifact,
                "smelly": diagnosis.smelly(),
                "incomplete": diagnosis.incomplete,
                "smells": diagnosis.outcomes.iter().map(outcome_to_json).collect::<Vec<_>>(),
            })
        })
        .collect();

    let output = json!({
        "artifacts": artifacts
    });

    write!(writer, "{}", serde_json::to_string_pretty(&output)?)?;
    Ok(())
}

#[expect(unused_results, reason = "Map::insert on a fresh key returns nothing useful")]
fn outcome_to_json(outcome: &SmellOutcome) -> serde_json::Value {
    let mut obj = serde_json::Map::new();
    obj.insert("name".to_string(), json!(outcome.name));
    if let Some(description) = &outcome.description {
        obj.insert("description".to_string(), json!(description));
    }
    obj.insert("statement".to_string(), json!(outcome.statement));
    obj.insert("detected".to_string(), json!(outcome.detected));
    obj.insert("reasons".to_string(), json!(outcome.reasons));
    serde_json::Value::Object(obj)
}
