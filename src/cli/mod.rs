//! Command-line interface.
//!
//! The `sealconf` binary produces the tokens a resolving program consumes:
//! it seals values, opens them again for inspection, and generates keys.

pub mod completions;
pub mod decrypt;
pub mod encrypt;
pub mod keygen;
pub mod output;

use base64::{engine::general_purpose::URL_SAFE, Engine};
use clap::{Args, Parser, Subcommand};
use thiserror::Error;
use tracing::debug;

use crate::core::constants::CLI_KEY_ENV;
use crate::core::env::EnvSource;
use crate::core::key::Key;

/// Sealconf - seal configuration values.
#[derive(Parser)]
#[command(
    name = "sealconf",
    about = "Seal configuration values with AES-128-GCM",
    version
)]
pub struct Cli {
    /// Show debug output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Seal a plaintext value into a token
    Encrypt {
        /// Value to seal
        plaintext: String,
        #[command(flatten)]
        key: KeyArgs,
        /// Seal with a freshly generated key (printed to stderr)
        #[arg(short, long, conflicts_with = "key")]
        generate_key: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Open a token and print its plaintext
    Decrypt {
        /// Token to open
        token: String,
        #[command(flatten)]
        key: KeyArgs,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate a new key
    Keygen {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Where the CLI takes its key from.
#[derive(Args, Debug, Clone)]
pub struct KeyArgs {
    /// Key as Base64 (standard or URL-safe alphabet)
    #[arg(short, long)]
    pub key: Option<String>,

    /// Environment variable holding the key
    #[arg(long, default_value = CLI_KEY_ENV)]
    pub key_env: String,
}

impl KeyArgs {
    /// Load the key: `--key` first, then the `--key-env` variable.
    ///
    /// # Errors
    ///
    /// Returns `CliError::NoKey` if no key is given or it is all zeroes, and
    /// `CliError::Sealconf` if the key does not decode to 16 bytes.
    pub fn load(&self, env: &dyn EnvSource) -> Result<Key, CliError> {
        let encoded = match &self.key {
            Some(key) => key.clone(),
            None => {
                debug!(var = %self.key_env, "reading key from environment");
                env.get(&self.key_env)
                    .filter(|v| !v.is_empty())
                    .ok_or_else(|| CliError::NoKey(self.key_env.clone()))?
            }
        };

        let key = decode_key(&encoded)?;
        if key.is_zero() {
            return Err(CliError::NoKey(self.key_env.clone()));
        }
        Ok(key)
    }
}

/// Decode a key in either Base64 alphabet.
fn decode_key(encoded: &str) -> crate::error::Result<Key> {
    match Key::from_base64(encoded) {
        Ok(key) => Ok(key),
        Err(standard_err) => match URL_SAFE.decode(encoded.as_bytes()) {
            Ok(bytes) => Key::from_slice(&bytes),
            Err(_) => Err(standard_err),
        },
    }
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Errors specific to the command-line helper.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("no key found: pass --key or set {0}")]
    NoKey(String),

    #[error("no plaintext specified")]
    NoPlaintext,

    #[error(transparent)]
    Sealconf(#[from] crate::error::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Execute a command.
pub fn execute(command: Command) -> Result<(), CliError> {
    use Command::*;

    let env = crate::core::env::StdEnv;

    match command {
        Encrypt {
            plaintext,
            key,
            generate_key,
            json,
        } => encrypt::execute(&plaintext, &key, generate_key, json, &env),
        Decrypt { token, key, json } => decrypt::execute(&token, &key, json, &env),
        Keygen { json } => keygen::execute(json),
        Completions { shell } => completions::execute(shell),
    }
}
