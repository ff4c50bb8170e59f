//! Content-Type lookup over captured headers.

use serde_json::Value;

use crate::capture::CaptureHeader;

/// Used when no header key contains `Content-Type`.
pub const DEFAULT_MIME_TYPE: &str = "text/plain";

/// Returns the value of the first header whose key contains `Content-Type`.
///
/// The match is a case-sensitive substring test on the key, so
/// `X-Content-Type-Options` matches as well. A matching header without a
/// string value yields `None`; no match at all yields [`DEFAULT_MIME_TYPE`].
pub fn mime_type(headers: Option<&[CaptureHeader]>) -> Option<&str> {
    for header in headers.unwrap_or_default() {
        let Some(key) = header.key.as_deref() else {
            continue;
        };
        if key.contains("Content-Type") {
            return header.value.as_ref().and_then(Value::as_str);
        }
    }
    Some(DEFAULT_MIME_TYPE)
}
