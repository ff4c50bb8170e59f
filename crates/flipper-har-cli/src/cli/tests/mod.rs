//! CLI parse and message tests.

use super::{failure_message, Cli, CliCommand};
use clap::Parser;
use flipper_har_core::ConvertError;
use std::path::{Path, PathBuf};

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).unwrap()
}

#[test]
fn cli_parse_convert() {
    let cli = parse(&["flipper-har", "convert", "capture.json", "out.har"]);
    assert!(cli.config.is_none());
    match cli.command {
        CliCommand::Convert { input, output } => {
            assert_eq!(input, PathBuf::from("capture.json"));
            assert_eq!(output, PathBuf::from("out.har"));
        }
    }
}

#[test]
fn cli_parse_global_config() {
    let cli = parse(&[
        "flipper-har",
        "convert",
        "in.json",
        "out.har",
        "--config",
        "/tmp/fh.toml",
    ]);
    assert_eq!(cli.config.as_deref(), Some(Path::new("/tmp/fh.toml")));
}

#[test]
fn cli_parse_missing_output_errs() {
    let err = Cli::try_parse_from(["flipper-har", "convert", "in.json"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
}

#[test]
fn cli_parse_no_subcommand_errs() {
    assert!(Cli::try_parse_from(["flipper-har"]).is_err());
}

#[test]
fn failure_message_not_found() {
    let err = anyhow::Error::from(ConvertError::InputNotFound(PathBuf::from("x.json")));
    assert_eq!(failure_message(&err), "Input file 'x.json' not found.");
}

#[test]
fn failure_message_parse_error() {
    let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err = anyhow::Error::from(ConvertError::ParseInput {
        path: PathBuf::from("x.json"),
        source,
    });
    assert_eq!(
        failure_message(&err),
        "Error parsing JSON from input file 'x.json'."
    );
}

#[test]
fn failure_message_generic() {
    let err = anyhow::Error::from(ConvertError::MissingNetwork);
    assert_eq!(
        failure_message(&err),
        "An error occurred: first plugin state has no Network section"
    );
}
