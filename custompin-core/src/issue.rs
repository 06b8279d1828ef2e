//! PIN issuing for host services
//!
//! The part of a PIN endpoint that does not depend on any transport: it
//! checks the username, derives the PIN from the service seed and reports
//! it together with the realm it was issued in.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::RealmConfig;
use crate::error::{CustomPinError, PinError};
use crate::otp::PinGenerator;
use crate::types::PinSeed;

/// Response handed back to the caller, serialized with upper-case keys
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PinResponse {
    #[serde(rename = "REALM")]
    pub realm: String,

    #[serde(rename = "REQUESTED_PIN")]
    pub requested_pin: String,
}

impl PinResponse {
    pub fn to_json(&self) -> Result<String, CustomPinError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Issues PINs for the users of one realm
pub struct PinIssuer<G> {
    generator: G,
    seed: PinSeed,
    realm: RealmConfig,
}

impl<G: PinGenerator> PinIssuer<G> {
    pub fn new(generator: G, seed: PinSeed, realm: RealmConfig) -> Self {
        Self {
            generator,
            seed,
            realm,
        }
    }

    /// Issue a PIN for `username`
    ///
    /// # Errors
    ///
    /// Returns `PinError::InvalidInput` if the username is blank. Generator
    /// failures are returned as-is; no response is built without a PIN.
    pub fn issue(&self, username: &str) -> Result<PinResponse, PinError> {
        if username.trim().is_empty() {
            return Err(PinError::InvalidInput {
                field: "username",
                reason: "cannot be blank".to_string(),
            });
        }

        let pin = self.generator.generate(self.seed.expose(), username)?;
        info!("Issued PIN in realm {}", self.realm.label());

        Ok(PinResponse {
            realm: self.realm.label().to_string(),
            requested_pin: pin.expose().to_string(),
        })
    }
}
