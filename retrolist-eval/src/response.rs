//! Typed views of the recorded `response` payloads.
//!
//! The payload shape depends on the record's query type. Decoding happens in
//! two steps: the raw value (an object or a JSON-encoded string) becomes a
//! JSON object, then the object is read into the shape for its query type.
//! Missing and `null` fields fall back to `false`, `0` or empty.

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::record::QueryType;

#[derive(Debug, Error)]
pub enum ResponseError {
    #[error("response is not valid JSON: {0}")]
    Malformed(#[source] serde_json::Error),
    #[error("response must be a JSON object, found {found}")]
    NotAnObject { found: &'static str },
    #[error("response does not match the {query_type} shape: {source}")]
    Shape {
        query_type: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Treat an explicit `null` like a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Search and filter outcome.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ResultsResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub success: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub results_count: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub results: Vec<Value>,
}

/// Per-game outcome inside a batch collection operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub struct GameOutcome {
    #[serde(default, deserialize_with = "null_as_default")]
    pub success: bool,
}

/// Add, remove, batch and persist operations on the owned-games collection.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct CollectionResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub action: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub persistence_supported: bool,
    /// Present only for batch operations.
    #[serde(default)]
    pub games: Option<Vec<GameOutcome>>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub success: bool,
}

/// CSV export of the collection.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct ExportResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub csv_valid: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub games_count: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub success: bool,
}

/// Share code generation or import.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct ShareCodeResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub action: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub share_code_valid: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub games_count: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub games_imported: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub success: bool,
}

/// UI interactions and edge cases only report an action and a success bit.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct InteractionStatus {
    #[serde(default, deserialize_with = "null_as_default")]
    pub action: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub success: bool,
}

/// A decoded response, keyed by the query type that produced it.
#[derive(Debug, Clone, PartialEq)]
pub enum InteractionResponse {
    Search(ResultsResponse),
    Filter(ResultsResponse),
    Collection(CollectionResponse),
    Export(ExportResponse),
    ShareCode(ShareCodeResponse),
    UiInteraction(InteractionStatus),
    EdgeCase(InteractionStatus),
    /// Well-formed object for a query type no rule covers.
    Unrecognized,
}

impl InteractionResponse {
    /// Decode `raw` into the shape `query_type` calls for.
    ///
    /// # Errors
    ///
    /// Returns an error if `raw` is not an object or the JSON encoding of
    /// one, or if a field has the wrong JSON type.
    pub fn decode(query_type: &QueryType, raw: &Value) -> Result<Self, ResponseError> {
        let object = Value::Object(decode_object(raw)?);
        let decoded = match query_type {
            QueryType::Search => Self::Search(read_shape(query_type, object)?),
            QueryType::Filter => Self::Filter(read_shape(query_type, object)?),
            QueryType::Collection => Self::Collection(read_shape(query_type, object)?),
            QueryType::Export => Self::Export(read_shape(query_type, object)?),
            QueryType::ShareCode => Self::ShareCode(read_shape(query_type, object)?),
            QueryType::UiInteraction => Self::UiInteraction(read_shape(query_type, object)?),
            QueryType::EdgeCase => Self::EdgeCase(read_shape(query_type, object)?),
            QueryType::Other(_) => Self::Unrecognized,
        };
        Ok(decoded)
    }
}

/// Accept either a JSON object or a string holding the encoding of one.
///
/// # Errors
///
/// Returns [`ResponseError::Malformed`] for undecodable strings and
/// [`ResponseError::NotAnObject`] for any other JSON type.
pub fn decode_object(raw: &Value) -> Result<Map<String, Value>, ResponseError> {
    match raw {
        Value::Object(map) => Ok(map.clone()),
        Value::String(encoded) => {
            match serde_json::from_str::<Value>(encoded).map_err(ResponseError::Malformed)? {
                Value::Object(map) => Ok(map),
                other => Err(ResponseError::NotAnObject {
                    found: json_type_name(&other),
                }),
            }
        }
        other => Err(ResponseError::NotAnObject {
            found: json_type_name(other),
        }),
    }
}

fn read_shape<T>(query_type: &QueryType, object: Value) -> Result<T, ResponseError>
where
    T: for<'de> Deserialize<'de>,
{
    serde_json::from_value(object).map_err(|source| ResponseError::Shape {
        query_type: query_type.to_string(),
        source,
    })
}

const fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
