use std::process::ExitCode;

use clap::Parser;

use crate::fail;
use crate::libs::errors::ConfigError;

/// Parse argv. Usage errors exit with status 1 (not clap's 2) so every
/// configuration problem shares one exit code; `--help` still exits 0.
pub fn parse_args<T: Parser>() -> T {
    match T::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            std::process::exit(if err.use_stderr() { 1 } else { 0 });
        }
    }
}

/// Report a configuration problem and hand back the failing exit code.
pub fn config_failure(err: &ConfigError) -> ExitCode {
    fail!("Configuration error: {}", err);
    ExitCode::FAILURE
}

/// Report a fatal error with its context chain.
pub fn fatal(err: &anyhow::Error) -> ExitCode {
    fail!("Error in main: {:#}", err);
    ExitCode::FAILURE
}
