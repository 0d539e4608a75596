//! The structured scenario contract and its validation.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use super::error::ValidationError;

/// A titled, business-readable scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    pub title: String,
    pub narrative: String,
}

/// Schema sent to the provider alongside the scenario prompt.
pub fn scenario_schema() -> Value {
    json!({
        "type": "array",
        "items": {
            "type": "object",
            "properties": {
                "title": { "type": "string" },
                "narrative": { "type": "string" }
            },
            "required": ["title", "narrative"]
        }
    })
}

/// Parses a raw provider body into scenarios, enforcing the schema.
///
/// Order and count are kept as returned. Unknown fields are ignored, and
/// `gherkin` is accepted in place of `narrative`.
pub fn parse_scenarios(raw: impl AsRef<[u8]>) -> Result<Vec<Scenario>, ValidationError> {
    let value: Value = serde_json::from_slice(raw.as_ref()).map_err(ValidationError::Malformed)?;

    let items = match value {
        Value::Array(items) => items,
        other => return Err(ValidationError::NotAnArray(kind_of(&other))),
    };

    items
        .iter()
        .enumerate()
        .map(|(index, item)| -> Result<Scenario, ValidationError> {
            let obj = item
                .as_object()
                .ok_or(ValidationError::NotAnObject { index })?;
            Ok(Scenario {
                title: string_field(obj, index, "title", None)?,
                narrative: string_field(obj, index, "narrative", Some("gherkin"))?,
            })
        })
        .collect()
}

fn string_field(
    obj: &Map<String, Value>,
    index: usize,
    field: &'static str,
    alias: Option<&str>,
) -> Result<String, ValidationError> {
    let value = obj
        .get(field)
        .or_else(|| alias.and_then(|a| obj.get(a)))
        .ok_or(ValidationError::MissingField { index, field })?;
    value
        .as_str()
        .map(str::to_owned)
        .ok_or(ValidationError::NotAString { index, field })
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
