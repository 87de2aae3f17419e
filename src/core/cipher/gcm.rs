//! AES-128-GCM backend.
//!
//! Tokens are URL-safe Base64 (padded) of `nonce ‖ ciphertext ‖ tag`, with a
//! 12-byte random nonce and no associated data.

use aes_gcm::aead::consts::U12;
use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes128Gcm, Nonce};
use base64::{engine::general_purpose::URL_SAFE, Engine};
use rand::rngs::OsRng;
use rand::RngCore;
use tracing::trace;

use super::Cipher;
use crate::core::constants::NONCE_LEN;
use crate::error::{Error, Result};

/// AES-128-GCM token cipher.
pub struct AesGcm;

fn build(key: &[u8]) -> Result<Aes128Gcm> {
    Aes128Gcm::new_from_slice(key).map_err(|_| {
        Error::Internal(format!("cannot build cipher from {}-byte key", key.len()))
    })
}

impl Cipher for AesGcm {
    fn name(&self) -> &'static str {
        "aes-128-gcm"
    }

    fn seal(&self, plaintext: &str, key: &[u8]) -> Result<String> {
        trace!(plaintext_len = plaintext.len(), "sealing");

        let cipher = build(key)?;

        let mut nonce = [0u8; NONCE_LEN];
        OsRng.fill_bytes(&mut nonce);

        let sealed = cipher
            .encrypt(Nonce::<U12>::from_slice(&nonce), plaintext.as_bytes())
            .map_err(|e| Error::Internal(format!("seal failed: {}", e)))?;

        let mut payload = Vec::with_capacity(NONCE_LEN + sealed.len());
        payload.extend_from_slice(&nonce);
        payload.extend_from_slice(&sealed);

        trace!(payload_len = payload.len(), "sealed");

        Ok(URL_SAFE.encode(payload))
    }

    fn open(&self, token: &str, key: &[u8]) -> Result<String> {
        trace!(token_len = token.len(), "opening");

        let payload = URL_SAFE
            .decode(token.as_bytes())
            .map_err(|e| Error::BadEncoding(format!("{}", e)))?;

        let cipher = build(key)?;

        if payload.len() < NONCE_LEN {
            return Err(Error::Internal(format!(
                "token is {} bytes, shorter than the {}-byte nonce",
                payload.len(),
                NONCE_LEN
            )));
        }
        let (nonce, sealed) = payload.split_at(NONCE_LEN);

        let plain = cipher
            .decrypt(Nonce::<U12>::from_slice(nonce), sealed)
            .map_err(|_| Error::InvalidKey)?;

        trace!(plaintext_len = plain.len(), "opened");

        String::from_utf8(plain)
            .map_err(|e| Error::Internal(format!("plaintext is not UTF-8: {}", e)))
    }
}
