//! Flipper capture export: loading, locating the request list, and the
//! per-request record shape.
//!
//! The only supported layout is `pluginStates2 -> first plugin state ->
//! Network.requests2`. Key order of the input is preserved so "first" means
//! first in the file.

mod load;
mod locate;
mod parse;

pub use load::{load_capture, parse_capture};
pub use locate::request_list;
pub use parse::{CaptureHeader, RequestRecord, Status, PENDING_STATUS};
