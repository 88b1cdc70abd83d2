//! Logged interaction records as they appear in the JSONL dataset.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::constants::UNKNOWN_QUERY_TYPE;
use crate::response::null_as_default;

/// Interaction category a record belongs to.
///
/// Unrecognized categories are preserved verbatim so they still show up in
/// the per-query-type breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum QueryType {
    Search,
    Filter,
    Collection,
    Export,
    ShareCode,
    UiInteraction,
    EdgeCase,
    Other(String),
}

impl QueryType {
    /// Every recognized category, in dataset vocabulary order.
    pub const KNOWN: [Self; 7] = [
        Self::Search,
        Self::Filter,
        Self::Collection,
        Self::Export,
        Self::ShareCode,
        Self::UiInteraction,
        Self::EdgeCase,
    ];

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Search => "search",
            Self::Filter => "filter",
            Self::Collection => "collection",
            Self::Export => "export",
            Self::ShareCode => "sharecode",
            Self::UiInteraction => "ui_interaction",
            Self::EdgeCase => "edge_case",
            Self::Other(raw) => raw,
        }
    }

    #[must_use]
    pub const fn is_recognized(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl Default for QueryType {
    fn default() -> Self {
        Self::Other(UNKNOWN_QUERY_TYPE.to_string())
    }
}

impl From<String> for QueryType {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "search" => Self::Search,
            "filter" => Self::Filter,
            "collection" => Self::Collection,
            "export" => Self::Export,
            "sharecode" => Self::ShareCode,
            "ui_interaction" => Self::UiInteraction,
            "edge_case" => Self::EdgeCase,
            _ => Self::Other(raw),
        }
    }
}

impl From<&str> for QueryType {
    fn from(raw: &str) -> Self {
        Self::from(raw.to_string())
    }
}

impl From<QueryType> for String {
    fn from(query_type: QueryType) -> Self {
        match query_type {
            QueryType::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for QueryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Advisory success flag recorded alongside a response.
///
/// Evaluators re-derive success from the response itself; this flag is kept
/// for reporting only. Captures write it as `"yes"`/`"no"`, older datasets as
/// a plain boolean.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SuccessFlag {
    Yes,
    No,
    #[default]
    Unspecified,
}

impl SuccessFlag {
    #[must_use]
    pub const fn from_bool(value: bool) -> Self {
        if value { Self::Yes } else { Self::No }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "yes" | "true" | "success" | "pass" | "passed" => Self::Yes,
            "no" | "false" | "failure" | "fail" | "failed" => Self::No,
            _ => Self::Unspecified,
        }
    }

    #[must_use]
    pub const fn as_wire(self) -> &'static str {
        match self {
            Self::Yes => "yes",
            Self::No => "no",
            Self::Unspecified => "",
        }
    }
}

impl Serialize for SuccessFlag {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Unspecified => serializer.serialize_none(),
            flag => serializer.serialize_str(flag.as_wire()),
        }
    }
}

impl<'de> Deserialize<'de> for SuccessFlag {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::Bool(value) => Self::from_bool(value),
            Value::String(raw) => Self::parse(&raw),
            _ => Self::Unspecified,
        })
    }
}

/// One logged simulated interaction with the application under evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(default)]
    pub query_id: Value,
    #[serde(default, deserialize_with = "null_as_default")]
    pub query_type: QueryType,
    #[serde(default, deserialize_with = "null_as_default")]
    pub query: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub ground_truth: String,
    /// Either an object or the JSON encoding of one.
    #[serde(default)]
    pub response: Value,
    #[serde(default)]
    pub success: SuccessFlag,
}

impl Record {
    #[must_use]
    pub fn new(query_type: impl Into<QueryType>, response: Value) -> Self {
        Self {
            query_id: Value::Null,
            query_type: query_type.into(),
            query: String::new(),
            ground_truth: String::new(),
            response,
            success: SuccessFlag::Unspecified,
        }
    }

    #[must_use]
    pub fn with_query_id(mut self, query_id: impl Into<Value>) -> Self {
        self.query_id = query_id.into();
        self
    }

    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }
}
