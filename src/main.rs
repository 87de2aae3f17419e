//! Sealconf - seal configuration values.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use sealconf::cli::output;
use sealconf::cli::{execute, Cli, CliError};
use sealconf::core::constants::LOG_ENV;
use sealconf::error::Error;

fn main() {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("sealconf=debug")
        } else {
            EnvFilter::new("sealconf=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = execute(cli.command) {
        let suggestion = match &e {
            CliError::NoKey(_) => Some("run: sealconf keygen"),
            CliError::Sealconf(Error::InvalidKey) => Some("check that the key matches the one used to seal"),
            CliError::Sealconf(Error::BadEncoding(_)) => {
                Some("tokens and keys are Base64; wrap plain values as (value)")
            }
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
