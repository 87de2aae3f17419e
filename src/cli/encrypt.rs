//! Encrypt command.
//!
//! Seals a plaintext into a token that can be placed in a `default` tag, a
//! config file, or an environment variable.

use serde::Serialize;
use tracing::debug;

use crate::cli::{output, CliError, KeyArgs};
use crate::core::cipher;
use crate::core::env::EnvSource;

#[derive(Serialize)]
struct Sealed<'a> {
    token: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    key: Option<String>,
}

/// Seal `plaintext` and print the token.
pub fn execute(
    plaintext: &str,
    key_args: &KeyArgs,
    generate_key: bool,
    json: bool,
    env: &dyn EnvSource,
) -> Result<(), CliError> {
    if plaintext.is_empty() {
        return Err(CliError::NoPlaintext);
    }

    let key = if generate_key {
        debug!("generating key");
        crate::core::key::generate_key()
    } else {
        key_args.load(env)?
    };

    let token = cipher::encrypt(key.as_bytes(), plaintext)?;

    let generated = generate_key.then(|| key.to_base64());
    if let Some(encoded) = &generated {
        if !json {
            output::warn("sealed with a new key, keep it:");
            output::kv("key:", encoded);
        }
    }

    output::data(
        &Sealed {
            token: &token,
            key: generated,
        },
        &token,
        json,
    )
}
