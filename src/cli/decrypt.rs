//! Decrypt command.

use serde::Serialize;

use crate::cli::{output, CliError, KeyArgs};
use crate::core::cipher::{self, Token};
use crate::core::env::EnvSource;
use crate::core::key::Key;

#[derive(Serialize)]
struct Opened<'a> {
    plaintext: &'a str,
}

/// Open `token` and print its plaintext.
///
/// Literal `(…)` tokens are printed without loading a key.
pub fn execute(
    token: &str,
    key_args: &KeyArgs,
    json: bool,
    env: &dyn EnvSource,
) -> Result<(), CliError> {
    let key = match Token::parse(token) {
        Token::Literal(_) => Key::zero(),
        Token::Sealed(_) => key_args.load(env)?,
    };

    let plaintext = cipher::decrypt(key.as_bytes(), token)?;

    output::data(
        &Opened {
            plaintext: &plaintext,
        },
        &plaintext,
        json,
    )
}
