//! Custom deserializers for loosely typed request bodies.

use serde::{
    Deserialize, Deserializer,
    de::{self, Unexpected},
};

// HTML selects submit their values as strings, so IDs and difficulty levels
// may arrive as either `5` or `"5"`.
#[derive(Deserialize)]
#[serde(untagged)]
enum IntegerOrString {
    Integer(i64),
    String(String),
}

/// Deserialize an optional integer that may be encoded as a JSON number or a
/// string holding a number.
///
/// `null` and blank strings are treated as a missing value. Use with
/// `#[serde(default)]` so that an absent field is also `None`.
pub fn deserialize_optional_integer<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<IntegerOrString>::deserialize(deserializer)? {
        None => Ok(None),
        Some(IntegerOrString::Integer(value)) => Ok(Some(value)),
        Some(IntegerOrString::String(value)) if value.trim().is_empty() => Ok(None),
        Some(IntegerOrString::String(value)) => value
            .trim()
            .parse::<i64>()
            .map(Some)
            .map_err(|_| de::Error::invalid_value(Unexpected::Str(&value), &"an integer")),
    }
}
