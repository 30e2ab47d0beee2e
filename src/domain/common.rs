use serde::{Deserialize, Deserializer};
use serde_json::Value;
use uuid::Uuid;

/// Identifies entities that expose a stable unique identifier.
pub trait Identifiable {
    fn id(&self) -> Uuid;
}

/// Provides access to a human-friendly entity name.
pub trait NamedEntity {
    fn name(&self) -> &str;
}

/// Parses a monetary amount, treating anything that is not a finite number as zero.
pub fn parse_amount(raw: &str) -> f64 {
    let trimmed = raw.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => {
            if !trimmed.is_empty() {
                tracing::warn!(raw = trimmed, "unparsable amount treated as zero");
            }
            0.0
        }
    }
}

/// Converts a loosely typed JSON value into an amount.
///
/// Numbers pass through, numeric strings are parsed and every other shape
/// (null, booleans, objects, non-finite values) becomes `0.0`.
pub fn amount_from_value(value: &Value) -> f64 {
    match value {
        Value::Number(number) => number
            .as_f64()
            .filter(|amount| amount.is_finite())
            .unwrap_or(0.0),
        Value::String(raw) => parse_amount(raw),
        Value::Null => 0.0,
        other => {
            tracing::warn!(value = %other, "non-numeric amount treated as zero");
            0.0
        }
    }
}

/// `deserialize_with` adapter for monetary fields coming from the remote store.
///
/// Pair it with `#[serde(default)]` so that a missing field also yields zero.
pub fn lenient_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().map_or(0.0, amount_from_value))
}
