//! HAR 1.2 structures, restricted to the fields the converter emits.

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use crate::capture::Status;

pub const HAR_VERSION: &str = "1.2";

/// Top-level HAR wrapper.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HarDocument {
    pub log: HarLog,
}

impl HarDocument {
    pub fn new(creator: Creator, entries: Vec<Entry>) -> Self {
        Self {
            log: HarLog {
                version: HAR_VERSION.to_string(),
                creator,
                entries,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HarLog {
    pub version: String,
    pub creator: Creator,
    pub entries: Vec<Entry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Creator {
    pub name: String,
    pub version: String,
}

impl Default for Creator {
    fn default() -> Self {
        Self {
            name: "Flipper to HAR Converter".to_string(),
            version: "1.0".to_string(),
        }
    }
}

/// Serializes as `{}`. Used for `cache` and for a pending response.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Empty {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub started_date_time: String,
    /// Milliseconds; integer when both capture times were integers.
    pub time: Number,
    pub request: Request,
    pub response: Response,
    pub cache: Empty,
    pub timings: Timings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    pub method: String,
    pub url: String,
    pub headers: Vec<Header>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post_data: Option<PostData>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostData {
    pub mime_type: String,
    pub text: String,
}

/// Missing key or value in the capture is carried through as `null`; a
/// non-string value is kept as is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    pub name: Option<String>,
    pub value: Option<Value>,
}

/// Either a fully populated response or `{}` when the capture never saw one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Response {
    Observed(ObservedResponse),
    Pending(Empty),
}

impl Response {
    pub fn is_pending(&self) -> bool {
        matches!(self, Response::Pending(_))
    }

    pub fn observed(&self) -> Option<&ObservedResponse> {
        match self {
            Response::Observed(r) => Some(r),
            Response::Pending(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObservedResponse {
    pub status: Status,
    pub status_text: String,
    pub headers: Vec<Header>,
    pub content: Content,
    #[serde(rename = "redirectURL")]
    pub redirect_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Content {
    pub size: Number,
    pub mime_type: String,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encoding: Option<String>,
}

/// Only `wait` is known from a Flipper capture; `send`/`receive` stay 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Timings {
    pub send: i64,
    pub wait: Number,
    pub receive: i64,
}

impl Timings {
    pub fn waiting(wait: Number) -> Self {
        Self {
            send: 0,
            wait,
            receive: 0,
        }
    }
}
