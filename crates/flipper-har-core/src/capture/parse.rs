//! Shape of one entry of `Network.requests2`.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Number, Value};

/// Status value meaning "response not yet captured".
pub const PENDING_STATUS: &str = "...";

/// One recorded request as Flipper exports it. Every field is optional; the
/// converter applies the defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestRecord {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub method: Option<String>,
    #[serde(default)]
    pub status: Option<Status>,
    /// HTTP status text.
    #[serde(default)]
    pub reason: Option<String>,
    /// Epoch milliseconds.
    #[serde(default)]
    pub request_time: Option<Number>,
    /// Epoch milliseconds.
    #[serde(default)]
    pub response_time: Option<Number>,
    #[serde(default)]
    pub request_headers: Option<Vec<CaptureHeader>>,
    #[serde(default)]
    pub response_headers: Option<Vec<CaptureHeader>>,
    /// `null` counts as absent here: no `postData` is attached.
    #[serde(default)]
    pub request_data: Option<Value>,
    /// Absent becomes `""`; an explicit `null` is kept and serialized as `null`.
    #[serde(default, deserialize_with = "present")]
    pub response_data: Option<Value>,
    #[serde(default)]
    pub response_length: Option<Number>,
}

impl RequestRecord {
    pub fn is_pending(&self) -> bool {
        matches!(&self.status, Some(Status::Text(s)) if s == PENDING_STATUS)
    }
}

/// Header pair as exported by Flipper (`key`/`value`, not `name`/`value`).
/// The value is usually a string but is carried through as whatever JSON
/// the capture holds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CaptureHeader {
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub value: Option<Value>,
}

impl CaptureHeader {
    pub fn new(key: &str, value: &str) -> Self {
        Self {
            key: Some(key.to_string()),
            value: Some(Value::String(value.to_string())),
        }
    }
}

/// HTTP status: a numeric code, or a string such as the pending sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Status {
    Code(Number),
    Text(String),
}

impl Default for Status {
    fn default() -> Self {
        Status::Code(Number::from(0))
    }
}

/// Keeps an explicit `null` as `Some(Value::Null)`; only a missing key
/// (via `#[serde(default)]`) yields `None`.
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}
