//! Argument validation against a tool's input schema.
//!
//! Only the subset of JSON Schema the catalog actually emits is checked:
//! `required`, and the `type` / `minimum` of each declared property.

use rmcp::model::Tool;
use serde_json::{Map, Value};

use crate::error::{TodoError, TodoResult};

/// Check `arguments` against the tool's `inputSchema`, collecting every
/// failing field instead of stopping at the first one.
pub fn validate_arguments(tool: &Tool, arguments: &Value) -> TodoResult<()> {
    let empty = Map::new();
    let args = match arguments {
        Value::Object(map) => map,
        Value::Null => &empty,
        other => {
            return Err(TodoError::Validation {
                tool: tool.name.to_string(),
                problems: vec![format!(
                    "arguments: expected object, got {}",
                    json_type_name(other)
                )],
            });
        }
    };

    let schema = tool.input_schema.as_ref();
    let mut problems = Vec::new();

    if let Some(required) = schema.get("required").and_then(Value::as_array) {
        for field in required.iter().filter_map(Value::as_str) {
            if args.get(field).is_none_or(Value::is_null) {
                problems.push(format!("{}: missing required field", field));
            }
        }
    }

    if let Some(properties) = schema.get("properties").and_then(Value::as_object) {
        for (field, value) in args {
            let Some(property) = properties.get(field) else {
                continue;
            };
            if let Some(problem) = check_property(property, value) {
                problems.push(format!("{}: {}", field, problem));
            }
        }
    }

    if problems.is_empty() {
        Ok(())
    } else {
        Err(TodoError::Validation {
            tool: tool.name.to_string(),
            problems,
        })
    }
}

fn check_property(property: &Value, value: &Value) -> Option<String> {
    // Null is reported as missing when the field is required
    if value.is_null() {
        return None;
    }

    let allowed: Vec<&str> = match property.get("type") {
        Some(Value::String(t)) => vec![t.as_str()],
        Some(Value::Array(types)) => types.iter().filter_map(Value::as_str).collect(),
        _ => return None,
    };

    if !allowed.iter().any(|t| matches_type(t, value)) {
        return Some(format!(
            "expected {}, got {}",
            allowed.join(" or "),
            json_type_name(value)
        ));
    }

    if let (Some(minimum), Some(n)) = (
        property.get("minimum").and_then(Value::as_f64),
        value.as_f64(),
    ) && n < minimum
    {
        return Some(format!("must be >= {}", minimum));
    }

    None
}

fn matches_type(expected: &str, value: &Value) -> bool {
    match expected {
        "integer" => value.is_i64() || value.is_u64(),
        "number" => value.is_number(),
        "string" => value.is_string(),
        "boolean" => value.is_boolean(),
        "object" => value.is_object(),
        "array" => value.is_array(),
        "null" => value.is_null(),
        _ => true,
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
