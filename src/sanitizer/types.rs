use mongodb::bson::{Bson, Document};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Strategy used to rewrite non-JSON numeric tokens before parsing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NormalizationMode {
    /// Scans the text and rewrites whole `NaN`, `Infinity` and `-Infinity` tokens
    /// outside string literals. Quoted strings are left untouched.
    #[default]
    Grammar,
    /// Replaces every whole-word `NaN` with `null` anywhere in the text, string
    /// literals included. Kept for byte-compatibility with older consumers.
    Textual,
}

impl FromStr for NormalizationMode {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "grammar" => Ok(Self::Grammar),
            "textual" => Ok(Self::Textual),
            other => Err(format!(
                "unknown normalization mode '{}' (expected 'grammar' or 'textual')",
                other
            )),
        }
    }
}

/// Failure to turn a raw item into structured data.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("raw item is empty")]
    Empty,
    #[error("raw item is not valid JSON: {source}")]
    Malformed {
        #[source]
        source: serde_json::Error,
    },
}

/// A structured value guaranteed to contain no NaN or infinite number.
///
/// Only `sanitize` can build one, so holding a `SanitizedRecord` is proof that the
/// tree has been walked.
#[derive(Debug, Clone, PartialEq)]
pub struct SanitizedRecord(pub(crate) Bson);

impl SanitizedRecord {
    /// The record's top-level `id` field, if the record is a document and has one.
    pub fn id(&self) -> Option<&Bson> {
        match &self.0 {
            Bson::Document(doc) => doc.get("id"),
            _ => None,
        }
    }

    pub fn as_bson(&self) -> &Bson {
        &self.0
    }

    pub fn into_inner(self) -> Bson {
        self.0
    }

    /// Unwraps the record as a document, handing the value back when the top level
    /// is something else (array, scalar).
    pub fn into_document(self) -> Result<Document, Bson> {
        match self.0 {
            Bson::Document(doc) => Ok(doc),
            other => Err(other),
        }
    }
}
