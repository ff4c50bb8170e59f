//! CLI for the Flipper to HAR converter.

mod commands;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use flipper_har_core::config::{self, HarConfig};
use flipper_har_core::ConvertError;
use std::io::Write;
use std::path::{Path, PathBuf};

use commands::run_convert;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "flipper-har", version)]
#[command(about = "Convert Flipper network captures to HAR 1.2", long_about = None)]
pub struct Cli {
    /// Config file to use instead of ~/.config/flipper-har/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Convert a Flipper capture export into a HAR file.
    Convert {
        /// Flipper export (JSON) to read.
        input: PathBuf,
        /// HAR file to write.
        output: PathBuf,
    },
}

impl Cli {
    /// Parses process arguments. Help/version exit 0; any other parse error
    /// prints the usage to stdout and exits 1.
    pub fn parse_or_exit() -> Self {
        match Cli::try_parse() {
            Ok(cli) => cli,
            Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
                err.exit()
            }
            Err(err) => {
                let mut stdout = std::io::stdout().lock();
                let _ = write!(stdout, "{}", err.render());
                let _ = stdout.flush();
                std::process::exit(1);
            }
        }
    }

    pub fn run(self) -> Result<()> {
        let cfg = load_config(self.config.as_deref())?;
        tracing::debug!("loaded config: {:?}", cfg);
        self.command.run(&cfg)
    }
}

impl CliCommand {
    pub fn run(self, cfg: &HarConfig) -> Result<()> {
        match self {
            CliCommand::Convert { input, output } => run_convert(&input, &output, cfg)?,
        }
        Ok(())
    }
}

/// An explicit `--config` must load; a broken file at the default location
/// falls back to built-in defaults with a warning.
fn load_config(path: Option<&Path>) -> Result<HarConfig> {
    match path {
        Some(p) => config::load_from(p),
        None => Ok(config::load_or_default().unwrap_or_else(|err| {
            tracing::warn!("using default config: {:#}", err);
            HarConfig::default()
        })),
    }
}

/// The single line printed for a failed run.
pub fn failure_message(err: &anyhow::Error) -> String {
    match err.downcast_ref::<ConvertError>() {
        Some(ConvertError::InputNotFound(path)) => {
            format!("Input file '{}' not found.", path.display())
        }
        Some(ConvertError::ParseInput { path, .. }) => {
            format!("Error parsing JSON from input file '{}'.", path.display())
        }
        _ => format!("An error occurred: {:#}", err),
    }
}

#[cfg(test)]
mod tests;
