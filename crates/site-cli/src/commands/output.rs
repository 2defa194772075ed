//! Rendering of document values for the terminal

use site_fs::{DocumentFormat, NormalizedPath};
use site_model::Value;

use crate::error::Result;

/// Convert a value to JSON. Tuples and sets become arrays; floats that JSON
/// cannot represent become `null`.
pub fn to_json(value: &Value) -> serde_json::Value {
    match value {
        Value::Null => serde_json::Value::Null,
        Value::Bool(b) => serde_json::Value::Bool(*b),
        Value::Integer(i) => serde_json::Value::from(*i),
        Value::Float(f) => serde_json::Number::from_f64(*f)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null),
        Value::String(s) => serde_json::Value::String(s.clone()),
        Value::Sequence(items) | Value::Tuple(items) | Value::Set(items) => {
            serde_json::Value::Array(items.iter().map(to_json).collect())
        }
        Value::Mapping(map) => serde_json::Value::Object(
            map.iter().map(|(k, v)| (k.clone(), to_json(v))).collect(),
        ),
    }
}

pub fn print_json(value: &Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&to_json(value))?);
    Ok(())
}

/// Print a value as YAML, the way it would be written to a site document.
pub fn print_yaml(value: &Value, origin: &NormalizedPath) -> Result<()> {
    let text = DocumentFormat::Yaml.render(value, origin)?;
    print!("{}", text);
    Ok(())
}
