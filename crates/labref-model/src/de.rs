//! Lenient field deserializers for form-captured data.
//!
//! Entry forms store numbers as strings, leave blanks as `""`, and older
//! exports write plain JSON numbers. These helpers accept all three.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Loose {
    Text(String),
    Number(f64),
    Flag(bool),
}

/// Deserialize a string-or-number into a `String` (`null` becomes empty).
pub(crate) fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Loose>::deserialize(deserializer)? {
        Some(Loose::Text(text)) => text,
        Some(Loose::Number(number)) => number.to_string(),
        Some(Loose::Flag(flag)) => flag.to_string(),
        None => String::new(),
    })
}

/// Deserialize an optional bound; blank strings and `null` become `None`.
pub(crate) fn optional_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Loose>::deserialize(deserializer)? {
        Some(Loose::Number(number)) => Ok(Some(number)),
        Some(Loose::Text(text)) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            trimmed
                .parse::<f64>()
                .map(Some)
                .map_err(|_| serde::de::Error::custom(format!("invalid number: {trimmed}")))
        }
        Some(Loose::Flag(_)) => Err(serde::de::Error::custom("expected a number")),
        None => Ok(None),
    }
}

/// Deserialize an optional string, treating blank text as absent.
pub(crate) fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.filter(|text| !text.trim().is_empty()))
}
