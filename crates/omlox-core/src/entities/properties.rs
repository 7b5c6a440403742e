use std::borrow::Cow;
use std::fmt;

use schemars::{JsonSchema, Schema, SchemaGenerator, json_schema};
use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;

/// Opaque application payload carried by hub envelopes.
///
/// The JSON text is kept exactly as received, so key order and number
/// precision survive a fetch-modify-store cycle.
#[derive(Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Properties(Box<RawValue>);

impl Properties {
    /// Serialize `value` into a payload.
    ///
    /// # Errors
    ///
    /// Returns the serializer error if `value` cannot be represented as JSON.
    pub fn from_json<T: Serialize + ?Sized>(value: &T) -> Result<Self, serde_json::Error> {
        serde_json::value::to_raw_value(value).map(Self)
    }

    /// Wrap already-validated JSON text.
    ///
    /// # Errors
    ///
    /// Returns the parser error if `json` is not a single JSON value.
    pub fn from_text(json: impl Into<String>) -> Result<Self, serde_json::Error> {
        RawValue::from_string(json.into()).map(Self)
    }

    /// The payload's JSON text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.get()
    }

    /// Parse the payload into a caller-defined shape.
    ///
    /// # Errors
    ///
    /// Returns the decode error if the payload does not match `T`.
    pub fn parse<'a, T: Deserialize<'a>>(&'a self) -> Result<T, serde_json::Error> {
        serde_json::from_str(self.0.get())
    }
}

impl PartialEq for Properties {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl fmt::Debug for Properties {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Properties").field(&self.as_str()).finish()
    }
}

impl fmt::Display for Properties {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl JsonSchema for Properties {
    fn schema_name() -> Cow<'static, str> {
        "Properties".into()
    }

    fn json_schema(_generator: &mut SchemaGenerator) -> Schema {
        json_schema!({})
    }
}
