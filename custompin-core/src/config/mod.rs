//! Configuration module
//!
//! Generator and realm settings, loaded from and saved to TOML files.
//! The PIN seed is deliberately not part of the configuration.

use chrono::format::{Item, Numeric, StrftimeItems};
use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::otp::window::format_instant;

pub mod toml_config;

/// Default time format: hour and minute
pub const DEFAULT_TIME_FORMAT: &str = "%H:%M";

/// Granularity added to "now" before the time is formatted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    #[default]
    Minutes,
    Seconds,
}

impl TimeUnit {
    /// Duration covered by `count` units
    pub fn span(self, count: u32) -> Duration {
        match self {
            Self::Minutes => Duration::minutes(i64::from(count)),
            Self::Seconds => Duration::seconds(i64::from(count)),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Minutes => "minutes",
            Self::Seconds => "seconds",
        }
    }

    // Coarser units rank lower.
    fn rank(self) -> u8 {
        match self {
            Self::Minutes => 0,
            Self::Seconds => 1,
        }
    }
}

/// PIN generator configuration
///
/// Owned by value by the generator; it cannot change once a generator
/// has been built from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// strftime pattern selecting which time fields make up the bucket
    pub time_format: String,

    /// Unit used for the look-ahead added to the current time
    pub time_unit: TimeUnit,

    /// Number of time units in one window (at least 1)
    pub window_ratio: u32,

    /// Widens the bucket by integer division; 0 disables widening
    pub grace_divisor: u32,
}

impl GeneratorConfig {
    /// Create a configuration with the given pattern and unit
    pub fn new(time_format: impl Into<String>, time_unit: TimeUnit) -> Self {
        Self {
            time_format: time_format.into(),
            time_unit,
            ..Self::default()
        }
    }

    /// Sets the window ratio
    #[must_use]
    pub fn with_window_ratio(mut self, window_ratio: u32) -> Self {
        self.window_ratio = window_ratio;
        self
    }

    /// Sets the grace divisor
    #[must_use]
    pub fn with_grace_divisor(mut self, grace_divisor: u32) -> Self {
        self.grace_divisor = grace_divisor;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.time_format.is_empty() {
            return Err("Time format cannot be empty".to_string());
        }

        if self.window_ratio == 0 {
            return Err("Window ratio must be at least 1".to_string());
        }

        let resolution = pattern_resolution(&self.time_format)?;
        match resolution {
            Some(unit) if unit.rank() >= self.time_unit.rank() => {}
            _ => {
                return Err(format!(
                    "Time format '{}' does not resolve {} (windowing would be ineffective)",
                    self.time_format,
                    self.time_unit.as_str()
                ))
            }
        }

        // Catch fields that parse but cannot be rendered from a local time,
        // such as time zone offsets.
        let probe = chrono::NaiveDate::from_ymd_opt(2020, 8, 7)
            .and_then(|date| date.and_hms_opt(14, 7, 30))
            .ok_or_else(|| "Failed to build probe instant".to_string())?;
        format_instant(probe, &self.time_format)
            .map_err(|_| format!("Time format '{}' cannot be rendered", self.time_format))?;

        Ok(())
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            time_format: DEFAULT_TIME_FORMAT.to_string(),
            time_unit: TimeUnit::Minutes,
            window_ratio: 1,
            grace_divisor: 0,
        }
    }
}

/// Finest time unit a strftime pattern resolves, if any
fn pattern_resolution(pattern: &str) -> Result<Option<TimeUnit>, String> {
    let mut finest: Option<TimeUnit> = None;

    for item in StrftimeItems::new(pattern) {
        let unit = match item {
            Item::Error => return Err(format!("Invalid time format pattern: '{}'", pattern)),
            Item::Numeric(Numeric::Second | Numeric::Timestamp, _) => TimeUnit::Seconds,
            Item::Numeric(Numeric::Minute, _) => TimeUnit::Minutes,
            _ => continue,
        };

        if finest.map_or(true, |current| unit.rank() > current.rank()) {
            finest = Some(unit);
        }
    }

    Ok(finest)
}

/// Realm the issued PINs are reported against
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RealmConfig {
    /// Realm name
    pub name: String,

    /// Human-friendly realm name, preferred over `name` when set
    pub display_name: Option<String>,
}

impl RealmConfig {
    /// Create a realm configuration without a display name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            display_name: None,
        }
    }

    /// Label reported to callers: the display name, or the name if unset
    pub fn label(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.name)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Realm name cannot be empty".to_string());
        }
        Ok(())
    }
}

impl Default for RealmConfig {
    fn default() -> Self {
        Self::new("master")
    }
}
