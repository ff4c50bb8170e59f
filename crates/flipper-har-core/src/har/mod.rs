//! HAR 1.2 output: the subset of the schema this tool populates, and the
//! writer that puts it on disk.

mod model;
mod write;

pub use model::{
    Content, Creator, Empty, Entry, HarDocument, HarLog, Header, ObservedResponse, PostData,
    Request, Response, Timings, HAR_VERSION,
};
pub use write::{to_compact_string, to_pretty_string, write_har, WriteOptions};
