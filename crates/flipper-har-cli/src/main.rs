use flipper_har_core::logging;

mod cli;

use crate::cli::Cli;

fn main() {
    // Usage errors exit before any file (log, config, input) is touched.
    let cli = Cli::parse_or_exit();

    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    if let Err(err) = cli.run() {
        tracing::debug!("conversion failed: {:#}", err);
        eprintln!("{}", cli::failure_message(&err));
        std::process::exit(1);
    }
}
