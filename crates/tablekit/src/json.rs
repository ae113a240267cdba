//! Rows from JSON.
//!
//! [`JsonRow`] adapts a JSON object to [`TableRow`], so tables can be fed
//! straight from JSON documents. The object must have an `id` that is a
//! string or a number.
//!
//! ```rust
//! use tablekit::JsonRow;
//! use tablekit_engine::{TableRow, Value};
//!
//! let rows: Vec<JsonRow> = serde_json::from_str(
//!     r#"[{"id": "sig1", "slot": 123456789, "source": "Orca"}]"#,
//! ).unwrap();
//!
//! assert_eq!(rows[0].id(), "sig1");
//! assert_eq!(rows[0].field("source"), Value::from("Orca"));
//! assert_eq!(rows[0].field("missing"), Value::None);
//! ```

use std::borrow::Cow;

use serde::Deserialize;
use serde_json::{Map, Value as Json};
use tablekit_engine::{Number, TableRow, Value};
use thiserror::Error;

/// Errors turning JSON into rows.
#[derive(Debug, Error)]
pub enum JsonRowError {
    #[error("row is not a JSON object")]
    NotAnObject,

    #[error("row has no usable 'id' (string or number)")]
    MissingId,

    #[error("invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A table row backed by a JSON object.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "Map<String, Json>")]
pub struct JsonRow {
    id: String,
    fields: Map<String, Json>,
}

impl JsonRow {
    /// Wraps a JSON value, which must be an object with an id.
    pub fn from_value(value: Json) -> Result<Self, JsonRowError> {
        match value {
            Json::Object(map) => Self::try_from(map),
            _ => Err(JsonRowError::NotAnObject),
        }
    }

    /// Parses a JSON array of row objects.
    pub fn parse_array(json: &str) -> Result<Vec<Self>, JsonRowError> {
        let values: Vec<Json> = serde_json::from_str(json)?;
        values.into_iter().map(Self::from_value).collect()
    }

    /// Raw JSON of a field.
    pub fn get(&self, key: &str) -> Option<&Json> {
        self.fields.get(key)
    }

    pub fn fields(&self) -> &Map<String, Json> {
        &self.fields
    }
}

impl TryFrom<Map<String, Json>> for JsonRow {
    type Error = JsonRowError;

    fn try_from(fields: Map<String, Json>) -> Result<Self, Self::Error> {
        let id = match fields.get("id") {
            Some(Json::String(s)) => s.clone(),
            Some(Json::Number(n)) => n.to_string(),
            _ => return Err(JsonRowError::MissingId),
        };
        Ok(JsonRow { id, fields })
    }
}

impl TableRow for JsonRow {
    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, key: &str) -> Value<'_> {
        match self.fields.get(key) {
            None | Some(Json::Null) => Value::None,
            Some(Json::Bool(b)) => Value::Bool(*b),
            Some(Json::String(s)) => Value::String(Cow::Borrowed(s.as_str())),
            Some(Json::Number(n)) => json_number(n),
            Some(other) => Value::String(Cow::Owned(other.to_string())),
        }
    }
}

fn json_number(n: &serde_json::Number) -> Value<'static> {
    if let Some(i) = n.as_i64() {
        Value::Number(Number::I64(i))
    } else if let Some(u) = n.as_u64() {
        Value::Number(Number::U64(u))
    } else {
        n.as_f64()
            .map(|f| Value::Number(Number::F64(f)))
            .unwrap_or(Value::None)
    }
}
