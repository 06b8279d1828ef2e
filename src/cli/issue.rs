//! Issue command implementation

use custompin_core::config::toml_config::load_config_or_default;
use custompin_core::error::CustomPinError;
use custompin_core::issue::PinIssuer;
use custompin_core::otp::WindowedPinGenerator;
use custompin_core::types::PinSeed;

/// Run the issue command
///
/// Prints the `{"REALM": .., "REQUESTED_PIN": ..}` response as one line of JSON.
pub fn run_issue(seed: String, username: &str) -> Result<(), CustomPinError> {
    let config = load_config_or_default()?;
    let generator = WindowedPinGenerator::new(config.generator)?;
    let seed = PinSeed::new(seed)?;

    let issuer = PinIssuer::new(generator, seed, config.realm);
    let response = issuer.issue(username)?;
    println!("{}", response.to_json()?);

    Ok(())
}
