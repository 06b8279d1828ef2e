//! Time-window quantizer
//!
//! Collapses an instant into a coarse textual bucket. The instant is first
//! moved one window ahead, so a code computed at T matches the window of
//! T plus one window.

use std::fmt::Write;

use chrono::NaiveDateTime;

use crate::config::GeneratorConfig;
use crate::error::PinError;

/// Quantized time value shared by every instant of one window
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeBucket(String);

impl TimeBucket {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Render an instant with a strftime pattern
///
/// Unlike `to_string()` on chrono's delayed format, an unsupported
/// field is reported instead of panicking.
pub(crate) fn format_instant(at: NaiveDateTime, pattern: &str) -> Result<String, std::fmt::Error> {
    let mut rendered = String::new();
    write!(rendered, "{}", at.format(pattern))?;
    Ok(rendered)
}

/// Compute the time bucket for `now`
///
/// With a non-zero grace divisor the digits of the formatted time are read
/// as one integer and divided by `grace_divisor + 1`, so that many adjacent
/// raw values land on the same quotient.
pub fn quantize(now: NaiveDateTime, config: &GeneratorConfig) -> Result<TimeBucket, PinError> {
    let ahead = now
        .checked_add_signed(config.time_unit.span(config.window_ratio))
        .ok_or_else(|| PinError::generator("time look-ahead is out of range"))?;

    let formatted = format_instant(ahead, &config.time_format).map_err(|_| {
        PinError::generator(format!(
            "time format '{}' cannot be rendered",
            config.time_format
        ))
    })?;

    if config.grace_divisor == 0 {
        return Ok(TimeBucket(formatted));
    }

    let digits: String = formatted.chars().filter(char::is_ascii_digit).collect();
    let value: u64 = digits
        .parse()
        .map_err(|_| PinError::generator("formatted time has no usable numeric value"))?;

    let widened = value / (u64::from(config.grace_divisor) + 1);
    Ok(TimeBucket(widened.to_string()))
}
