//! Serde helper functions for request deserialization.
//!
//! Browser forms and some JSON clients send empty strings for cleared
//! optional text fields; these helpers normalise them to `None`.

use serde::{Deserialize, Deserializer};

/// Deserialize an optional string, treating blank strings as None.
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.map(|s| s.trim().to_string()).filter(|s| !s.is_empty()))
}

/// Deserialize an optional boolean that may arrive as a string ("true", "1", "yes").
///
/// Query strings carry everything as text; JSON bodies carry real booleans.
pub fn deserialize_flexible_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flexible {
        Bool(bool),
        Text(String),
    }

    match Option::<Flexible>::deserialize(deserializer)? {
        None => Ok(false),
        Some(Flexible::Bool(b)) => Ok(b),
        Some(Flexible::Text(s)) => match s.trim().to_ascii_lowercase().as_str() {
            "" | "false" | "0" | "no" => Ok(false),
            "true" | "1" | "yes" => Ok(true),
            other => Err(serde::de::Error::custom(format!(
                "invalid boolean value: {other}"
            ))),
        },
    }
}
