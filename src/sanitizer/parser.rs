//! Parsing and Sanitization
//!
//! Turns normalized text into a `Bson` tree and walks it to enforce the
//! `SanitizedRecord` invariant.

use super::normalize::normalize_tokens;
use super::types::{NormalizationMode, ParseError, SanitizedRecord};

use mongodb::bson::{Bson, Document};
use serde_json::Value;

/// Parses a raw queue item into a `SanitizedRecord`.
///
/// # Errors
/// * `ParseError::Empty` for empty or whitespace-only input.
/// * `ParseError::Malformed` when the normalized text is not valid JSON.
pub fn parse_record(raw: &str, mode: NormalizationMode) -> Result<SanitizedRecord, ParseError> {
    if raw.trim().is_empty() {
        return Err(ParseError::Empty);
    }

    let normalized = normalize_tokens(raw, mode);
    let value: Value = serde_json::from_str(&normalized)
        .map_err(|source| ParseError::Malformed { source })?;

    Ok(sanitize(json_to_bson(value)))
}

/// Replaces every NaN or infinite number in `value` with `Bson::Null`, at any depth.
///
/// Documents keep their keys and key order, arrays keep their length.
pub fn sanitize(value: Bson) -> SanitizedRecord {
    SanitizedRecord(sanitize_value(value))
}

fn sanitize_value(value: Bson) -> Bson {
    match value {
        Bson::Double(number) if !number.is_finite() => Bson::Null,
        Bson::Array(items) => Bson::Array(items.into_iter().map(sanitize_value).collect()),
        Bson::Document(doc) => Bson::Document(
            doc.into_iter()
                .map(|(key, value)| (key, sanitize_value(value)))
                .collect(),
        ),
        other => other,
    }
}

/// Structural conversion from the JSON tree into the document store's value model.
///
/// Integers that fit in 32 bits become `Int32` (what the store's own drivers pick for small
/// integers), wider ones `Int64`, anything else `Double`. Numbers are kept as their source
/// text while parsing, so a literal such as `1e400` survives until here as `inf`.
fn json_to_bson(value: Value) -> Bson {
    match value {
        Value::Null => Bson::Null,
        Value::Bool(flag) => Bson::Boolean(flag),
        Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                match i32::try_from(int) {
                    Ok(small) => Bson::Int32(small),
                    Err(_) => Bson::Int64(int),
                }
            } else {
                // Literals past the f64 range parse to +/-inf here and are nulled by `sanitize`.
                let float = number
                    .as_f64()
                    .or_else(|| number.to_string().parse::<f64>().ok())
                    .unwrap_or(f64::NAN);
                Bson::Double(float)
            }
        }
        Value::String(text) => Bson::String(text),
        Value::Array(items) => Bson::Array(items.into_iter().map(json_to_bson).collect()),
        Value::Object(map) => {
            let mut doc = Document::new();
            for (key, value) in map {
                doc.insert(key, json_to_bson(value));
            }
            Bson::Document(doc)
        }
    }
}
