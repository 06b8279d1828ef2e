//! HMAC-SHA256 over the caller's data
//!
//! Key and message are the UTF-8 bytes of the ephemeral secret and of the
//! data string.

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::error::PinError;
use crate::otp::secret::EphemeralSecret;

type HmacSha256 = Hmac<Sha256>;

/// Size of an HMAC-SHA256 tag in bytes
pub const DIGEST_LEN: usize = 32;

/// Raw HMAC-SHA256 tag
pub type Digest = [u8; DIGEST_LEN];

/// Compute HMAC-SHA256 of `message` keyed with `key`
///
/// The error never carries key material.
pub fn hmac_sha256(key: &[u8], message: &[u8]) -> Result<Digest, PinError> {
    let mut mac = HmacSha256::new_from_slice(key)
        .map_err(|_| PinError::generator("HMAC-SHA256 key setup failed"))?;
    mac.update(message);

    let mut digest = [0u8; DIGEST_LEN];
    digest.copy_from_slice(&mac.finalize().into_bytes());
    Ok(digest)
}

/// Sign the caller's data with the ephemeral secret
pub fn sign_data(secret: &EphemeralSecret, data: &str) -> Result<Digest, PinError> {
    hmac_sha256(secret.expose().as_bytes(), data.as_bytes())
}
