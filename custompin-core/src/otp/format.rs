//! Output policies
//!
//! The raw tag is always encoded with standard, padded base64 first. A
//! policy then decides how much of that text the caller gets back.

use base64::{engine::general_purpose::STANDARD, Engine};

use crate::error::PinError;
use crate::otp::mac::Digest;

/// Length of the default enforced code
pub const DEFAULT_PIN_LENGTH: usize = 8;

/// Length of a base64-encoded 32-byte tag, padding included
pub const ENCODED_LEN: usize = 44;

/// Appended when the enforced window holds no symbol of its own
pub const FORCED_SPECIAL: char = '!';

// Truncation only applies to lengths above this.
const TRUNCATE_THRESHOLD: usize = 3;

/// How the encoded tag is turned into the final code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputPolicy {
    /// The full base64 string
    Base64,
    /// The first `length` characters, when `length > 3`
    Truncated { length: usize },
    /// `length` characters guaranteed to look like they contain a symbol
    Enforced { length: usize },
}

impl Default for OutputPolicy {
    fn default() -> Self {
        Self::Enforced {
            length: DEFAULT_PIN_LENGTH,
        }
    }
}

impl OutputPolicy {
    /// Policy name, safe to log
    pub fn name(&self) -> &'static str {
        match self {
            Self::Base64 => "base64",
            Self::Truncated { .. } => "truncated",
            Self::Enforced { .. } => "enforced",
        }
    }

    /// Check the policy parameters before any hashing happens
    pub fn validate(&self) -> Result<(), PinError> {
        match *self {
            Self::Enforced { length } if length == 0 || length > ENCODED_LEN => {
                Err(PinError::InvalidInput {
                    field: "length",
                    reason: format!("must be between 1 and {}, got {}", ENCODED_LEN, length),
                })
            }
            _ => Ok(()),
        }
    }

    /// Encode a tag and apply the policy
    pub fn apply(&self, digest: &Digest) -> String {
        self.format_encoded(&encode_digest(digest))
    }

    /// Apply the policy to an already encoded tag
    pub fn format_encoded(&self, encoded: &str) -> String {
        match *self {
            Self::Base64 => encoded.to_string(),
            Self::Truncated { length } => truncate_encoded(encoded, length),
            Self::Enforced { length } => enforce_encoded(encoded, length),
        }
    }
}

/// Standard base64 with padding
pub fn encode_digest(digest: &Digest) -> String {
    STANDARD.encode(digest)
}

fn truncate_encoded(encoded: &str, length: usize) -> String {
    // The guard is on `length` alone, not on the encoded length.
    if length > TRUNCATE_THRESHOLD {
        if let Some(prefix) = encoded.get(..length) {
            return prefix.to_string();
        }
    }
    encoded.to_string()
}

fn enforce_encoded(encoded: &str, length: usize) -> String {
    let window = encoded.get(..length).unwrap_or(encoded);
    let kept = encoded.get(..length.saturating_sub(1)).unwrap_or(window);

    match window.char_indices().find(|(_, c)| !c.is_ascii_alphanumeric()) {
        // Unreachable: the scan never goes past `length`.
        Some((position, special)) if position > length => format!("{}{}", kept, special),
        // A symbol inside the window is left where it is.
        Some(_) => window.to_string(),
        None => format!("{}{}", kept, FORCED_SPECIAL),
    }
}
