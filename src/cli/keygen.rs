//! Keygen command.
//!
//! Prints a fresh key in standard Base64, the form expected in the
//! `KEY<program>` variable and the build-time `SEALCONF_KEY`.

use serde::Serialize;

use crate::cli::{output, CliError};
use crate::core::key::Key;

#[derive(Serialize)]
struct Generated {
    key: String,
}

/// Generate and print a new key.
pub fn execute(json: bool) -> Result<(), CliError> {
    let encoded = Key::generate().to_base64();
    output::data(
        &Generated {
            key: encoded.clone(),
        },
        &encoded,
        json,
    )
}
