//! Init command implementation
//!
//! Writes the generator and realm settings to the configuration file.
//! The seed is never written; it is passed per invocation.

use custompin_core::config::toml_config::{get_config_path, save_config, TomlConfig};
use custompin_core::config::{GeneratorConfig, RealmConfig, TimeUnit};
use custompin_core::error::{ConfigError, CustomPinError};
use tracing::info;

/// Settings collected from the command line
pub struct InitOptions {
    pub time_format: String,
    pub time_unit: TimeUnit,
    pub window_ratio: u32,
    pub grace_divisor: u32,
    pub realm: String,
    pub realm_display_name: Option<String>,
}

impl InitOptions {
    fn into_config(self) -> TomlConfig {
        let generator = GeneratorConfig::new(self.time_format, self.time_unit)
            .with_window_ratio(self.window_ratio)
            .with_grace_divisor(self.grace_divisor);
        let realm = RealmConfig {
            name: self.realm,
            display_name: self.realm_display_name,
        };
        TomlConfig::new(generator, realm)
    }
}

/// Run the init command
pub fn run_init(options: InitOptions, force: bool) -> Result<(), CustomPinError> {
    let config_path = get_config_path()?;

    if config_path.exists() && !force {
        return Err(ConfigError::AlreadyExists {
            path: config_path.to_string_lossy().to_string(),
        }
        .into());
    }

    let config = options.into_config();
    info!(
        "Writing generator settings: time_format={}, time_unit={}",
        config.generator.time_format,
        config.generator.time_unit.as_str()
    );
    save_config(&config)?;

    println!("Configuration saved to {}", config_path.display());
    Ok(())
}
