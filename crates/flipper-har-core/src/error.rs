//! Error type for loading, converting and writing captures.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can abort a conversion.
///
/// Per-record body formatting never produces one of these; it falls back to
/// the raw text instead. Structural problems with the capture (missing plugin
/// state, missing `Network`, a record without `requestTime`) abort the whole
/// conversion.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("input file '{}' not found", .0.display())]
    InputNotFound(PathBuf),

    #[error("failed to read input file '{}'", .path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("error parsing JSON from input file '{}'", .path.display())]
    ParseInput {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("capture has no plugin states (pluginStates2 missing or empty)")]
    NoPluginStates,

    #[error("expected {what} to be a JSON object")]
    NotAnObject { what: &'static str },

    #[error("first plugin state has no Network section")]
    MissingNetwork,

    #[error("Network.requests2 is not a list")]
    RequestsNotAList,

    #[error("request #{index} has no requestTime")]
    MissingRequestTime { index: usize },

    #[error("request #{index} has an out-of-range requestTime: {value}")]
    InvalidRequestTime { index: usize, value: f64 },

    #[error("failed to serialize HAR document")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write HAR output '{}'", .path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T, E = ConvertError> = std::result::Result<T, E>;
