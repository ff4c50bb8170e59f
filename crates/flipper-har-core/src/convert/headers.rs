//! Flipper `{key, value}` header pairs to HAR `{name, value}`.

use crate::capture::CaptureHeader;
use crate::har::Header;

/// Order-preserving copy; no dedup, no case folding.
pub fn format_headers(headers: Option<&[CaptureHeader]>) -> Vec<Header> {
    headers
        .unwrap_or_default()
        .iter()
        .map(|h| Header {
            name: h.key.clone(),
            value: h.value.clone(),
        })
        .collect()
}
