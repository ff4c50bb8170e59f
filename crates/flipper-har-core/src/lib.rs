pub mod config;
pub mod logging;

pub mod capture;
pub mod convert;
pub mod error;
pub mod har;
pub mod pipeline;

pub use convert::{convert_capture, Conversion, ConversionStats, Converter};
pub use error::ConvertError;
pub use pipeline::convert_file;
