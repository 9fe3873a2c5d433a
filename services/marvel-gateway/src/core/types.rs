//! Domain data structures shared by the store and the HTTP adapter

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A character held in the local store
///
/// `id` and the timestamps are typed. `name` is any truthy JSON
/// value at creation and may be replaced by any value on update.
/// Every other field a caller supplies is kept verbatim in `extra`
/// and flattened back into the record on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    pub id: String,
    pub name: Value,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
    #[serde(with = "iso_millis")]
    pub created_at: DateTime<Utc>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "iso_millis::option"
    )]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Record fields owned by the store; request bodies cannot set them
pub const RESERVED_FIELDS: [&str; 3] = ["id", "createdAt", "updatedAt"];

/// Query string of `GET /characters` and `GET /comics`
///
/// Numeric fields stay textual here and go through
/// [`crate::core::params::parse_or_default`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    /// `local` selects the in-memory store, anything else the upstream
    pub source: Option<String>,
    pub name: Option<String>,
    pub skip: Option<String>,
    pub limit: Option<String>,
}

impl SearchQuery {
    /// Build from raw query pairs
    ///
    /// The first occurrence of a repeated key wins and unknown keys
    /// are ignored, so no query string is ever rejected.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "source" => &mut query.source,
                "name" => &mut query.name,
                "skip" => &mut query.skip,
                "limit" => &mut query.limit,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        query
    }

    /// True when the request targets the local store
    pub fn is_local(&self) -> bool {
        self.source.as_deref() == Some("local")
    }
}

/// JavaScript-style truthiness: everything but `null`, `false`, `0`
/// and `""`
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Response of the local list endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListResponse {
    pub results: Vec<Character>,
    /// Size of the whole collection, not of `results`
    pub total: usize,
}

/// Response of the delete endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeletedResponse {
    pub deleted: Character,
}

/// Error envelope returned by every failing endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Upstream resources reachable through the proxy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Characters,
    Comics,
}

impl Resource {
    pub fn path(&self) -> &'static str {
        match self {
            Resource::Characters => "characters",
            Resource::Comics => "comics",
        }
    }
}

/// ISO-8601 UTC timestamps with millisecond precision
/// (`2026-10-16T09:30:00.123Z`)
mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(ts: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(d)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|ts| ts.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }

    pub mod option {
        use chrono::{DateTime, Utc};
        use serde::{Deserialize, Deserializer, Serializer};

        pub fn serialize<S: Serializer>(
            ts: &Option<DateTime<Utc>>,
            s: S,
        ) -> Result<S::Ok, S::Error> {
            match ts {
                Some(ts) => super::serialize(ts, s),
                None => s.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            d: D,
        ) -> Result<Option<DateTime<Utc>>, D::Error> {
            let raw: Option<String> = Option::deserialize(d)?;
            raw.map(|raw| {
                DateTime::parse_from_rfc3339(&raw)
                    .map(|ts| ts.with_timezone(&Utc))
                    .map_err(serde::de::Error::custom)
            })
            .transpose()
        }
    }
}
