//! Constants used throughout sealconf.
//!
//! Centralizes magic strings and sizes.

/// AES-128 key length in bytes.
pub const KEY_LEN: usize = 16;

/// GCM standard nonce length in bytes.
pub const NONCE_LEN: usize = 12;

/// GCM authentication tag length in bytes.
pub const TAG_LEN: usize = 16;

/// Prefix of the environment variable holding the decryption key.
///
/// The full name is this prefix followed by the sanitized program name,
/// e.g. `KEYmyservice`.
pub const KEY_ENV_PREFIX: &str = "KEY";

/// Compile-time variable consulted for the fallback key.
///
/// Set it while building (`SEALCONF_KEY=... cargo build`) to bake a key into
/// the binary.
pub const BUILD_KEY: Option<&str> = option_env!("SEALCONF_KEY");

/// Tag holding a field's default token.
pub const TAG_DEFAULT: &str = "default";

/// Tag holding the key a field is known by in config files.
pub const TAG_FILE_KEY: &str = "file_key";

/// Tag holding the environment variable that overrides a field.
pub const TAG_ENV_NAME: &str = "env_name";

/// Environment variable the CLI reads its key from unless told otherwise.
pub const CLI_KEY_ENV: &str = "SEALCONF_KEY";

/// Environment variable controlling the CLI log filter.
pub const LOG_ENV: &str = "SEALCONF_LOG";
