//! Capture -> HAR mapping.
//!
//! One pass over `Network.requests2`; each accepted record becomes one
//! [`Entry`], in input order. Records are independent of each other.

mod body;
mod headers;
mod mime;
mod timing;

pub use body::{body_text, format_json_text, strip_list_wrapper};
pub use headers::format_headers;
pub use mime::{mime_type, DEFAULT_MIME_TYPE};
pub use timing::{elapsed, started_date_time};

use serde::Deserialize;
use serde_json::Value;

use crate::capture::{request_list, RequestRecord};
use crate::error::{ConvertError, Result};
use crate::har::{
    Content, Creator, Empty, Entry, HarDocument, ObservedResponse, PostData, Request, Response,
    Timings,
};

const JSON_MIME: &str = "application/json";
const IMAGE_MIME_PREFIX: &str = "image/";
const MSGPACK_MIME: &str = "application/msgpack";
const BASE64_ENCODING: &str = "base64";

/// Counters for one conversion run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConversionStats {
    /// Raw items in `requests2`.
    pub records: usize,
    /// Entries emitted.
    pub entries: usize,
    /// Items dropped: not an object, malformed fields, or no URL.
    pub skipped: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    pub har: HarDocument,
    pub stats: ConversionStats,
}

/// Converts capture documents into HAR documents.
#[derive(Debug, Clone, Default)]
pub struct Converter {
    creator: Creator,
}

impl Converter {
    pub fn new(creator: Creator) -> Self {
        Self { creator }
    }

    /// Maps a whole capture document.
    ///
    /// Fails if the document does not have the expected nesting or if an
    /// accepted record has no usable `requestTime`; nothing is produced in
    /// that case.
    pub fn convert(&self, doc: &Value) -> Result<Conversion> {
        let requests = request_list(doc)?;
        let mut stats = ConversionStats {
            records: requests.len(),
            ..Default::default()
        };
        let mut entries = Vec::with_capacity(requests.len());

        for (index, raw) in requests.iter().enumerate() {
            if !raw.is_object() {
                tracing::debug!("skipping request #{index}: not an object");
                stats.skipped += 1;
                continue;
            }
            let record = match RequestRecord::deserialize(raw) {
                Ok(record) => record,
                Err(err) => {
                    tracing::warn!("skipping request #{index}: malformed record: {err}");
                    stats.skipped += 1;
                    continue;
                }
            };
            let Some(url) = record.url.as_deref().filter(|u| !u.is_empty()) else {
                tracing::debug!("skipping request #{index}: no url");
                stats.skipped += 1;
                continue;
            };
            entries.push(convert_record(index, url, &record)?);
        }

        stats.entries = entries.len();
        tracing::info!(
            "converted {} of {} requests ({} skipped)",
            stats.entries,
            stats.records,
            stats.skipped
        );
        Ok(Conversion {
            har: HarDocument::new(self.creator.clone(), entries),
            stats,
        })
    }
}

/// Converts with the default creator; returns only the document.
pub fn convert_capture(doc: &Value) -> Result<HarDocument> {
    Converter::default().convert(doc).map(|c| c.har)
}

fn convert_record(index: usize, url: &str, record: &RequestRecord) -> Result<Entry> {
    let request_time = record
        .request_time
        .as_ref()
        .ok_or(ConvertError::MissingRequestTime { index })?;
    let started = started_date_time(request_time).ok_or_else(|| ConvertError::InvalidRequestTime {
        index,
        value: request_time.as_f64().unwrap_or(f64::NAN),
    })?;
    let time = elapsed(Some(request_time), record.response_time.as_ref());

    let response = if record.is_pending() {
        Response::Pending(Empty {})
    } else {
        Response::Observed(observed_response(record))
    };

    let entry = Entry {
        started_date_time: started,
        time: time.clone(),
        request: request(url, record),
        response,
        cache: Empty {},
        timings: Timings::waiting(time),
    };
    tracing::trace!("request #{index} -> {} {}", entry.request.method, entry.request.url);
    Ok(entry)
}

fn observed_response(record: &RequestRecord) -> ObservedResponse {
    let response_headers = record.response_headers.as_deref();
    let mime = mime_type(response_headers).unwrap_or(DEFAULT_MIME_TYPE);

    let raw = record
        .response_data
        .clone()
        .unwrap_or_else(|| Value::String(String::new()));
    let mut text = body_text(&raw);
    if mime.contains(JSON_MIME) {
        text = format_json_text(&raw);
    }
    let mut encoding = None;
    if mime.starts_with(IMAGE_MIME_PREFIX) {
        text = strip_list_wrapper(&text);
        encoding = Some(BASE64_ENCODING.to_string());
    }

    ObservedResponse {
        status: record.status.clone().unwrap_or_default(),
        status_text: record.reason.clone().unwrap_or_default(),
        headers: format_headers(response_headers),
        content: Content {
            size: record.response_length.clone().unwrap_or_else(|| 0.into()),
            mime_type: mime.to_string(),
            text,
            encoding,
        },
        redirect_url: String::new(),
    }
}

fn request(url: &str, record: &RequestRecord) -> Request {
    let request_headers = record.request_headers.as_deref();
    let post_data = match (&record.request_data, mime_type(request_headers)) {
        (Some(data), Some(mime)) if mime != MSGPACK_MIME => Some(PostData {
            mime_type: mime.to_string(),
            text: format_json_text(data),
        }),
        _ => None,
    };

    Request {
        method: record.method.clone().unwrap_or_default(),
        url: url.to_string(),
        headers: format_headers(request_headers),
        post_data,
    }
}
