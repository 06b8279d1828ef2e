//! Ephemeral secret composition

use secrecy::{ExposeSecret, Secret};

use crate::otp::window::TimeBucket;

/// Per-call HMAC key: the seed followed by the time bucket
///
/// Lives only for the duration of one derivation and is zeroized on drop.
#[derive(Debug)]
pub struct EphemeralSecret(Secret<String>);

impl EphemeralSecret {
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

/// Concatenate seed and bucket, seed first
pub fn compose_secret(seed: &str, bucket: &TimeBucket) -> EphemeralSecret {
    let mut secret = String::with_capacity(seed.len() + bucket.as_str().len());
    secret.push_str(seed);
    secret.push_str(bucket.as_str());
    EphemeralSecret(Secret::new(secret))
}
