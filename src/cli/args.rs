//! Argument enums mapped onto core types

use clap::ValueEnum;
use custompin_core::config::TimeUnit;
use custompin_core::otp::{OutputPolicy, DEFAULT_PIN_LENGTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TimeUnitArg {
    Minutes,
    Seconds,
}

impl From<TimeUnitArg> for TimeUnit {
    fn from(arg: TimeUnitArg) -> Self {
        match arg {
            TimeUnitArg::Minutes => TimeUnit::Minutes,
            TimeUnitArg::Seconds => TimeUnit::Seconds,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PolicyArg {
    /// Fixed length, always showing a symbol (default)
    Enforced,
    /// First N characters of the encoded tag
    Truncated,
    /// The whole base64 encoded tag
    Base64,
}

impl PolicyArg {
    /// Build the output policy, defaulting the length to 8
    pub fn with_length(self, length: Option<usize>) -> OutputPolicy {
        let length = length.unwrap_or(DEFAULT_PIN_LENGTH);
        match self {
            Self::Enforced => OutputPolicy::Enforced { length },
            Self::Truncated => OutputPolicy::Truncated { length },
            Self::Base64 => OutputPolicy::Base64,
        }
    }
}
