//! Value encryption.
//!
//! Configuration values are either literals or sealed tokens:
//!
//! - **literal**: `(text)`, used verbatim with the parentheses stripped. No key
//!   is needed, so literals resolve even when no key is configured.
//! - **sealed**: URL-safe Base64 of `nonce ‖ ciphertext ‖ tag`, produced by
//!   AES-128-GCM with no associated data.
//!
//! ## Adding a New Backend
//!
//! 1. Implement the `Cipher` trait
//! 2. Add the implementation in a new file next to `gcm.rs`
//! 3. Re-export from this module

use crate::error::Result;

mod gcm;

pub use gcm::AesGcm;

/// Symmetric token cipher.
pub trait Cipher {
    /// Seal plaintext into a printable token.
    ///
    /// # Errors
    ///
    /// Returns `Error::Internal` if the key cannot be used.
    fn seal(&self, plaintext: &str, key: &[u8]) -> Result<String>;

    /// Open a token produced by [`Cipher::seal`].
    ///
    /// # Errors
    ///
    /// - `Error::BadEncoding` if the token is not valid Base64
    /// - `Error::Internal` if the key is unusable or the token is truncated
    /// - `Error::InvalidKey` if authentication fails
    fn open(&self, token: &str, key: &[u8]) -> Result<String>;

    /// Backend name for display.
    fn name(&self) -> &'static str;
}

/// The two disjoint forms a configuration value can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// Cleartext, parentheses already stripped.
    Literal(&'a str),
    /// Ciphertext to be opened with a key.
    Sealed(&'a str),
}

impl<'a> Token<'a> {
    /// Classify a raw value.
    pub fn parse(raw: &'a str) -> Self {
        if raw.len() > 1 && raw.starts_with('(') && raw.ends_with(')') {
            Token::Literal(&raw[1..raw.len() - 1])
        } else {
            Token::Sealed(raw)
        }
    }
}

/// Seal plaintext with the default AES-128-GCM backend.
///
/// # Errors
///
/// Returns `Error::Internal` if the key is not 16 bytes.
pub fn encrypt(key: &[u8], plaintext: &str) -> Result<String> {
    AesGcm.seal(plaintext, key)
}

/// Recover the cleartext of a configuration value.
///
/// Literals are returned without touching the key; everything else is opened
/// with the default AES-128-GCM backend.
///
/// # Errors
///
/// See [`Cipher::open`].
pub fn decrypt(key: &[u8], token: &str) -> Result<String> {
    match Token::parse(token) {
        Token::Literal(text) => Ok(text.to_string()),
        Token::Sealed(sealed) => AesGcm.open(sealed, key),
    }
}
