//! `flipper-har convert <input> <output>` – capture to HAR.

use anyhow::Result;
use flipper_har_core::config::HarConfig;
use flipper_har_core::convert_file;
use std::path::Path;

pub fn run_convert(input: &Path, output: &Path, cfg: &HarConfig) -> Result<()> {
    let stats = convert_file(input, output, cfg)?;
    if stats.skipped > 0 {
        tracing::debug!("{} request records skipped", stats.skipped);
    }
    println!(
        "Conversion successful. HAR data saved to {}",
        output.display()
    );
    Ok(())
}
