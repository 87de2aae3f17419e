//! Decryption key handling.
//!
//! A [`Key`] is 16 bytes of AES-128 key material. The all-zero key means no
//! encryption is configured: only literal `(…)` values can then be resolved.
//!
//! [`KeyResolver`] finds the active key for the running program. It looks up
//! `KEY<program>` in the environment, where `<program>` is the executable's
//! base name with everything outside `[A-Za-z0-9_]` removed, and falls back to
//! a key baked in at build time.

use base64::{engine::general_purpose::STANDARD, Engine};
use rand::rngs::OsRng;
use rand::RngCore;
use tracing::debug;
use zeroize::Zeroize;

use crate::core::constants::{BUILD_KEY, KEY_ENV_PREFIX, KEY_LEN};
use crate::core::env::EnvSource;
use crate::error::{Error, Result};

/// AES-128 key material.
#[derive(Clone, PartialEq, Eq)]
pub struct Key([u8; KEY_LEN]);

impl Key {
    /// The all-zero key ("no encryption configured").
    pub const fn zero() -> Self {
        Self([0u8; KEY_LEN])
    }

    pub const fn from_bytes(bytes: [u8; KEY_LEN]) -> Self {
        Self(bytes)
    }

    /// Build a key from a byte slice.
    ///
    /// # Errors
    ///
    /// Returns `Error::BadEncoding` if the slice is not exactly 16 bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let array: [u8; KEY_LEN] = bytes.try_into().map_err(|_| {
            Error::BadEncoding(format!(
                "key is {} bytes, expected {}",
                bytes.len(),
                KEY_LEN
            ))
        })?;
        Ok(Self(array))
    }

    /// Decode a key from standard-alphabet Base64.
    ///
    /// # Errors
    ///
    /// Returns `Error::BadEncoding` if the string is not valid Base64 or does
    /// not decode to 16 bytes.
    pub fn from_base64(encoded: &str) -> Result<Self> {
        let mut decoded = STANDARD
            .decode(encoded.as_bytes())
            .map_err(|e| Error::BadEncoding(format!("key: {}", e)))?;
        let key = Self::from_slice(&decoded);
        decoded.zeroize();
        key
    }

    /// Generate a fresh random key from the OS RNG.
    pub fn generate() -> Self {
        let mut bytes = [0u8; KEY_LEN];
        OsRng.fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// Standard-alphabet Base64 form, as accepted by [`Key::from_base64`].
    pub fn to_base64(&self) -> String {
        STANDARD.encode(self.0)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Whether this is the all-zero key.
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|b| *b == 0)
    }
}

impl AsRef<[u8]> for Key {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl std::fmt::Debug for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_zero() {
            f.write_str("Key(zero)")
        } else {
            f.write_str("Key(<redacted>)")
        }
    }
}

impl Drop for Key {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

/// Supplies the key used for one resolution call.
pub trait KeyProvider {
    /// Produce the active key.
    ///
    /// # Errors
    ///
    /// Returns an error if key material is present but unusable.
    fn key(&self, env: &dyn EnvSource) -> Result<Key>;
}

/// A fixed key is its own provider.
impl KeyProvider for Key {
    fn key(&self, _env: &dyn EnvSource) -> Result<Key> {
        Ok(self.clone())
    }
}

/// Finds the key from `KEY<program>` or a build-time fallback.
#[derive(Debug, Clone)]
pub struct KeyResolver {
    /// Sanitized program name; discovered from the executable when `None`.
    program: Option<String>,
    fallback: Option<String>,
}

impl Default for KeyResolver {
    fn default() -> Self {
        Self {
            program: None,
            fallback: BUILD_KEY.map(str::to_string),
        }
    }
}

impl KeyResolver {
    /// Resolver for the running executable, with the build-time fallback.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolver for an explicit program name instead of the executable's.
    ///
    /// The name is sanitized the same way a discovered one would be.
    pub fn for_program(name: &str) -> Self {
        Self {
            program: Some(sanitize_program_name(name)),
            ..Self::default()
        }
    }

    /// Replace the build-time fallback key (standard Base64).
    pub fn with_fallback(mut self, fallback: impl Into<String>) -> Self {
        self.fallback = Some(fallback.into());
        self
    }

    /// Drop any fallback key.
    pub fn without_fallback(mut self) -> Self {
        self.fallback = None;
        self
    }

    /// Name of the environment variable consulted for the key.
    ///
    /// # Errors
    ///
    /// Returns `Error::Internal` if the executable name cannot be determined.
    pub fn variable_name(&self) -> Result<String> {
        let program = match &self.program {
            Some(program) => program.clone(),
            None => program_name()?,
        };
        Ok(format!("{}{}", KEY_ENV_PREFIX, program))
    }

    /// Resolve the active key.
    ///
    /// An unset or empty variable falls through to the fallback; when neither
    /// yields anything the zero key is returned.
    ///
    /// # Errors
    ///
    /// Returns `Error::BadEncoding` if the key string found is not standard
    /// Base64 of exactly 16 bytes, and `Error::Internal` if the executable name
    /// cannot be determined.
    pub fn resolve(&self, env: &dyn EnvSource) -> Result<Key> {
        let var = self.variable_name()?;

        let encoded = match env.get(&var).filter(|s| !s.is_empty()) {
            Some(value) => {
                debug!(var = %var, "using key from environment");
                value
            }
            None => match self.fallback.as_deref().filter(|s| !s.is_empty()) {
                Some(value) => {
                    debug!("using fallback key");
                    value.to_string()
                }
                None => {
                    debug!(var = %var, "no key configured, literal values only");
                    return Ok(Key::zero());
                }
            },
        };

        Key::from_base64(&encoded).map_err(|e| match e {
            Error::BadEncoding(reason) => Error::BadEncoding(format!("{} ({})", reason, var)),
            other => other,
        })
    }
}

impl KeyProvider for KeyResolver {
    fn key(&self, env: &dyn EnvSource) -> Result<Key> {
        self.resolve(env)
    }
}

/// Generate a fresh random key.
pub fn generate_key() -> Key {
    Key::generate()
}

/// Strip every character outside `[A-Za-z0-9_]`.
pub fn sanitize_program_name(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect()
}

/// Sanitized base name of the running executable.
///
/// # Errors
///
/// Returns `Error::Internal` if the executable path cannot be determined.
pub fn program_name() -> Result<String> {
    let exe = std::env::current_exe()
        .map_err(|e| Error::Internal(format!("cannot locate executable: {}", e)))?;
    let base = exe
        .file_name()
        .ok_or_else(|| Error::Internal(format!("executable has no file name: {}", exe.display())))?;
    Ok(sanitize_program_name(&base.to_string_lossy()))
}
