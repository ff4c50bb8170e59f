//! File-to-file conversion: load capture, map, write archive.

use std::path::Path;

use crate::capture::load_capture;
use crate::config::HarConfig;
use crate::convert::{ConversionStats, Converter};
use crate::error::Result;
use crate::har::write_har;

/// Converts the capture at `input` and writes the archive to `output`.
///
/// `output` is only touched after the whole capture converted successfully.
pub fn convert_file(input: &Path, output: &Path, cfg: &HarConfig) -> Result<ConversionStats> {
    let doc = load_capture(input)?;
    let conversion = Converter::new(cfg.creator.clone()).convert(&doc)?;
    write_har(output, &conversion.har, cfg.write_options())?;
    tracing::info!(
        "wrote {} entries from {} to {}",
        conversion.stats.entries,
        input.display(),
        output.display()
    );
    Ok(conversion.stats)
}
