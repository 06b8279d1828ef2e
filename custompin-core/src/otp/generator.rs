//! PIN generator
//!
//! Ties the quantizer, secret compositor, MAC and output policies together
//! behind the operations host services call.

use tracing::{debug, warn};

use crate::config::GeneratorConfig;
use crate::error::{ConfigError, PinError};
use crate::otp::clock::{Clock, SystemClock};
use crate::otp::format::OutputPolicy;
use crate::otp::mac::sign_data;
use crate::otp::secret::compose_secret;
use crate::otp::window::quantize;
use crate::types::PinCode;

/// Anything able to derive the default PIN for a seed and a piece of data
pub trait PinGenerator {
    /// Derive the default (enforced, 8 character) PIN
    ///
    /// # Errors
    ///
    /// Returns `PinError::InvalidInput` for an empty seed or data and
    /// `PinError::Generator` if the derivation itself fails.
    fn generate(&self, seed: &str, data: &str) -> Result<PinCode, PinError>;
}

/// Time-windowed PIN generator
///
/// Stateless apart from the clock read: calls that land in the same time
/// bucket with the same seed and data return the same code.
#[derive(Debug, Clone)]
pub struct WindowedPinGenerator<C = SystemClock> {
    config: GeneratorConfig,
    clock: C,
}

impl WindowedPinGenerator<SystemClock> {
    /// Create a generator reading the system's local time
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValidationError` if the configuration is invalid
    pub fn new(config: GeneratorConfig) -> Result<Self, ConfigError> {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: Clock> WindowedPinGenerator<C> {
    /// Create a generator reading time from `clock`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValidationError` if the configuration is invalid
    pub fn with_clock(config: GeneratorConfig, clock: C) -> Result<Self, ConfigError> {
        config
            .validate()
            .map_err(|message| ConfigError::ValidationError { message })?;
        Ok(Self { config, clock })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Enforced policy with the default length of 8
    pub fn generate(&self, seed: &str, data: &str) -> Result<PinCode, PinError> {
        self.derive(seed, data, OutputPolicy::default())
    }

    /// Full base64 encoding of the tag
    pub fn generate_raw(&self, seed: &str, data: &str) -> Result<PinCode, PinError> {
        self.derive(seed, data, OutputPolicy::Base64)
    }

    /// Truncated policy
    pub fn truncate(&self, seed: &str, data: &str, length: usize) -> Result<PinCode, PinError> {
        self.derive(seed, data, OutputPolicy::Truncated { length })
    }

    /// Enforced policy with a caller-chosen length
    pub fn enforce(&self, seed: &str, data: &str, length: usize) -> Result<PinCode, PinError> {
        self.derive(seed, data, OutputPolicy::Enforced { length })
    }

    /// Derive a code with an explicit policy
    ///
    /// # Errors
    ///
    /// Returns `PinError::InvalidInput` for an empty seed or data, or policy
    /// parameters out of range, before any hashing happens. Returns
    /// `PinError::Generator` if the bucket or the tag cannot be computed.
    pub fn derive(
        &self,
        seed: &str,
        data: &str,
        policy: OutputPolicy,
    ) -> Result<PinCode, PinError> {
        let result = self.derive_inner(seed, data, policy);

        match &result {
            Ok(_) => debug!("Derived PIN with {} policy", policy.name()),
            Err(e) if e.is_invalid_input() => {
                debug!("Rejected PIN request for {} policy: {}", policy.name(), e)
            }
            Err(e) => warn!("PIN derivation with {} policy failed: {}", policy.name(), e),
        }

        result
    }

    fn derive_inner(
        &self,
        seed: &str,
        data: &str,
        policy: OutputPolicy,
    ) -> Result<PinCode, PinError> {
        if seed.is_empty() {
            return Err(PinError::required("seed"));
        }
        if data.is_empty() {
            return Err(PinError::required("data"));
        }
        policy.validate()?;

        let bucket = quantize(self.clock.now(), &self.config)?;
        let secret = compose_secret(seed, &bucket);
        let digest = sign_data(&secret, data)?;

        Ok(PinCode::new(policy.apply(&digest)))
    }
}

impl<C: Clock> PinGenerator for WindowedPinGenerator<C> {
    fn generate(&self, seed: &str, data: &str) -> Result<PinCode, PinError> {
        self.derive(seed, data, OutputPolicy::default())
    }
}
