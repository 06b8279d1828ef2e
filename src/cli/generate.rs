//! Generate command implementation
//!
//! Prints only the derived code to stdout so it can be piped. Errors go
//! to stderr.

use custompin_core::config::toml_config::load_config_or_default;
use custompin_core::error::CustomPinError;
use custompin_core::otp::{OutputPolicy, WindowedPinGenerator};

/// Run the generate command
pub fn run_generate(seed: &str, data: &str, policy: OutputPolicy) -> Result<(), CustomPinError> {
    let config = load_config_or_default()?;
    let generator = WindowedPinGenerator::new(config.generator)?;

    let code = generator.derive(seed, data, policy)?;
    println!("{}", code.expose());

    Ok(())
}
