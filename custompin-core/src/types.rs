//! Type definitions and wrappers for secure data handling
//!
//! Seeds and derived PIN codes are wrapped with the secrecy crate so they
//! never show up in logs or debug output.

use secrecy::{ExposeSecret, Secret};

use crate::error::PinError;

/// Long-lived seed a host service derives its PIN codes from
#[derive(Clone, Debug)]
pub struct PinSeed(Secret<String>);

impl PinSeed {
    /// Create a new seed
    ///
    /// # Errors
    ///
    /// Returns `PinError::InvalidInput` if the seed is empty
    pub fn new(seed: String) -> Result<Self, PinError> {
        if seed.is_empty() {
            return Err(PinError::required("seed"));
        }
        Ok(Self(Secret::new(seed)))
    }

    /// Expose the seed value (use with caution!)
    ///
    /// Only the derivation engine should need this.
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

/// Derived PIN code
///
/// A code is valid for a whole time window, so it is treated as a
/// credential and never logged.
#[derive(Clone, Debug)]
pub struct PinCode(Secret<String>);

impl PinCode {
    /// Create a new PinCode from a formatted code string
    pub fn new(code: String) -> Self {
        Self(Secret::new(code))
    }

    /// Expose the code value (use with caution!)
    ///
    /// This should only be called when handing the code to the caller
    /// that requested it.
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }

    /// Number of characters in the code
    pub fn len(&self) -> usize {
        self.expose().chars().count()
    }

    /// Whether the code is empty
    pub fn is_empty(&self) -> bool {
        self.expose().is_empty()
    }
}

impl From<String> for PinCode {
    fn from(code: String) -> Self {
        Self::new(code)
    }
}
