//! TOML configuration file I/O
//!
//! Handles loading and saving the generator and realm configuration
//! to/from TOML files in the user's configuration directory.

use crate::config::{GeneratorConfig, RealmConfig};
use crate::error::{ConfigError, CustomPinError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Default configuration file name
const CONFIG_FILE_NAME: &str = "config.toml";

/// Environment variable overriding the configuration directory
pub const CONFIG_DIR_ENV: &str = "CUSTOMPIN_CONFIG_DIR";

/// Complete TOML configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TomlConfig {
    /// PIN generator settings
    #[serde(default)]
    pub generator: GeneratorConfig,

    /// Realm reported alongside issued PINs
    #[serde(default)]
    pub realm: RealmConfig,
}

impl TomlConfig {
    /// Create a new TOML configuration
    pub fn new(generator: GeneratorConfig, realm: RealmConfig) -> Self {
        Self { generator, realm }
    }

    /// Validate every section
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.generator
            .validate()
            .map_err(|message| ConfigError::ValidationError {
                message: format!("Invalid generator settings: {}", message),
            })?;
        self.realm
            .validate()
            .map_err(|message| ConfigError::ValidationError {
                message: format!("Invalid realm settings: {}", message),
            })?;
        Ok(())
    }
}

/// Get the default configuration directory
///
/// Returns ~/.config/custompin, or the CUSTOMPIN_CONFIG_DIR environment
/// variable if set
pub fn get_config_dir() -> Result<PathBuf, CustomPinError> {
    if let Ok(config_dir) = std::env::var(CONFIG_DIR_ENV) {
        return Ok(PathBuf::from(config_dir));
    }

    let home = std::env::var("HOME").map_err(|_| {
        CustomPinError::Config(ConfigError::IoError {
            message: "HOME environment variable not set".to_string(),
        })
    })?;

    Ok(PathBuf::from(home).join(".config").join("custompin"))
}

/// Get the default configuration file path
pub fn get_config_path() -> Result<PathBuf, CustomPinError> {
    let config_dir = get_config_dir()?;
    Ok(config_dir.join(CONFIG_FILE_NAME))
}

/// Check if a configuration file exists
pub fn config_exists() -> Result<bool, CustomPinError> {
    let config_path = get_config_path()?;
    Ok(config_path.exists())
}

/// Load configuration from the default TOML file
pub fn load_config() -> Result<TomlConfig, CustomPinError> {
    let config_path = get_config_path()?;
    load_config_from_path(&config_path)
}

/// Load configuration from the default file, or defaults if there is none
pub fn load_config_or_default() -> Result<TomlConfig, CustomPinError> {
    if config_exists()? {
        load_config()
    } else {
        debug!("No configuration file found, using defaults");
        Ok(TomlConfig::default())
    }
}

/// Load configuration from a specific TOML file
pub fn load_config_from_path<P: AsRef<Path>>(path: P) -> Result<TomlConfig, CustomPinError> {
    let contents = std::fs::read_to_string(&path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => CustomPinError::Config(ConfigError::LoadFailed {
            path: path.as_ref().to_string_lossy().to_string(),
        }),
        _ => CustomPinError::Config(ConfigError::IoError {
            message: format!("Failed to read config file: {}", e),
        }),
    })?;

    let config: TomlConfig = toml::from_str(&contents)?;
    config.validate()?;

    debug!(
        "Loaded generator settings: time_format={}, time_unit={}, window_ratio={}, grace_divisor={}",
        config.generator.time_format,
        config.generator.time_unit.as_str(),
        config.generator.window_ratio,
        config.generator.grace_divisor
    );

    Ok(config)
}

/// Save configuration to the default TOML file
pub fn save_config(config: &TomlConfig) -> Result<(), CustomPinError> {
    let config_path = get_config_path()?;
    save_config_to_path(config, &config_path)
}

/// Save configuration to a specific TOML file
pub fn save_config_to_path<P: AsRef<Path>>(
    config: &TomlConfig,
    path: P,
) -> Result<(), CustomPinError> {
    config.validate()?;

    if let Some(parent) = path.as_ref().parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            CustomPinError::Config(ConfigError::IoError {
                message: format!("Failed to create config directory: {}", e),
            })
        })?;
    }

    let toml_string = toml::to_string_pretty(config)?;

    std::fs::write(&path, toml_string).map_err(|_e| {
        CustomPinError::Config(ConfigError::SaveFailed {
            path: path.as_ref().to_string_lossy().to_string(),
        })
    })?;

    info!("Saved configuration to {:?}", path.as_ref());
    Ok(())
}
