//! Behavioural tests for the time-windowed PIN generator
//!
//! Most tests pin the clock; the last one uses the real clock to confirm
//! that codes roll over as time passes.

use std::collections::HashSet;
use std::thread;
use std::time::Duration;

use chrono::{NaiveDate, NaiveDateTime};
use custompin_core::config::{GeneratorConfig, TimeUnit};
use custompin_core::error::PinError;
use custompin_core::otp::{FixedClock, WindowedPinGenerator, ENCODED_LEN};

const SEED: &str = "123";
const DATA: &str = "abc";

fn instant(h: u32, m: u32, s: u32, milli: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2020, 8, 7)
        .unwrap()
        .and_hms_milli_opt(h, m, s, milli)
        .unwrap()
}

fn seconds_config() -> GeneratorConfig {
    GeneratorConfig::new("%H:%M:%S", TimeUnit::Seconds)
}

fn generator(config: GeneratorConfig, at: NaiveDateTime) -> WindowedPinGenerator<FixedClock> {
    WindowedPinGenerator::with_clock(config, FixedClock::new(at)).unwrap()
}

/// 11-digit identifier: nine base digits plus two check digits
fn user_id(index: u64) -> String {
    let base = format!("{:09}", (index * 7919) % 1_000_000_000);
    let digits: Vec<u32> = base.chars().filter_map(|c| c.to_digit(10)).collect();

    let mut d1: u32 = digits.iter().zip((2..=10).rev()).map(|(d, f)| d * f).sum();
    let mut d2: u32 = digits.iter().zip((3..=11).rev()).map(|(d, f)| d * f).sum();
    d2 += d1 * 2;

    d1 = 11 - (d1 % 11);
    if d1 >= 10 {
        d1 = 0;
    }
    d2 = 11 - (d2 % 11);
    if d2 >= 10 {
        d2 = 0;
    }

    format!("{}{}{}", base, d1, d2)
}

#[test]
fn test_same_second_bucket_gives_same_code() {
    let early = generator(seconds_config(), instant(14, 7, 30, 100));
    let late = generator(seconds_config(), instant(14, 7, 30, 900));

    let first = early.generate(SEED, DATA).unwrap();
    let second = late.generate(SEED, DATA).unwrap();

    assert_eq!(first.expose(), second.expose());
}

#[test]
fn test_repeated_calls_in_window_are_stable() {
    let generator = generator(seconds_config(), instant(14, 7, 30, 0));
    let first = generator.generate(SEED, DATA).unwrap();

    for _ in 0..10 {
        assert_eq!(generator.generate(SEED, DATA).unwrap().expose(), first.expose());
    }
}

#[test]
fn test_codes_two_seconds_apart_differ() {
    let mut previous: Option<String> = None;

    for step in 0..10 {
        let at = instant(14, 7, 0, 0) + chrono::Duration::seconds(2 * step);
        let code = generator(seconds_config(), at).generate(SEED, DATA).unwrap();

        if let Some(previous) = &previous {
            assert_ne!(previous, code.expose());
        }
        previous = Some(code.expose().to_string());
    }
}

#[test]
fn test_grace_period_shares_code_across_minutes() {
    let config = GeneratorConfig::default().with_grace_divisor(1);

    let a = generator(config.clone(), instant(14, 5, 10, 0)).generate(SEED, DATA).unwrap();
    let b = generator(config.clone(), instant(14, 6, 50, 0)).generate(SEED, DATA).unwrap();
    let c = generator(config, instant(14, 7, 10, 0)).generate(SEED, DATA).unwrap();

    assert_eq!(a.expose(), b.expose());
    assert_ne!(b.expose(), c.expose());
}

#[test]
fn test_grace_bucket_known_answer() {
    // 14:06 + 1 minute -> "1407" / 2 -> "703"
    let config = GeneratorConfig::default().with_grace_divisor(1);
    let generator = generator(config, instant(14, 6, 0, 0));

    let raw = generator.generate_raw(SEED, DATA).unwrap();
    assert_eq!(raw.expose(), "NisNbB6WmeMTRLtRuHQ47FeTwLGix6Ll/5VqrSWFEbQ=");
}

#[test]
fn test_window_ratio_moves_look_ahead() {
    // 14:07:30 + 2 seconds lands on the 14:07:32 bucket
    let config = seconds_config().with_window_ratio(2);
    let generator = generator(config, instant(14, 7, 30, 0));

    let raw = generator.generate_raw(SEED, DATA).unwrap();
    assert_eq!(raw.expose(), "JuMnn7eCssmWIi4YHUzhgq9wuZS+tF0PmJcnJvQ7wGI=");
}

#[test]
fn test_empty_seed_is_invalid_input() {
    let generator = generator(GeneratorConfig::default(), instant(14, 7, 30, 0));

    for data in ["abc", ""] {
        let result = generator.generate("", data);
        assert!(matches!(
            result,
            Err(PinError::InvalidInput { field: "seed", .. })
        ));
    }
}

#[test]
fn test_empty_data_is_invalid_input() {
    let generator = generator(GeneratorConfig::default(), instant(14, 7, 30, 0));

    let result = generator.generate(SEED, "");
    assert!(matches!(
        result,
        Err(PinError::InvalidInput { field: "data", .. })
    ));
}

#[test]
fn test_every_operation_validates_input() {
    let generator = generator(GeneratorConfig::default(), instant(14, 7, 30, 0));

    assert!(generator.generate_raw("", DATA).unwrap_err().is_invalid_input());
    assert!(generator.truncate(SEED, "", 6).unwrap_err().is_invalid_input());
    assert!(generator.enforce("", DATA, 8).unwrap_err().is_invalid_input());
}

#[test]
fn test_enforce_length_is_exact() {
    let generator = generator(seconds_config(), instant(14, 7, 30, 0));

    for index in 0..200 {
        let code = generator.enforce(SEED, &user_id(index), 8).unwrap();
        assert_eq!(code.len(), 8);
    }
}

#[test]
fn test_enforce_rejects_out_of_range_length() {
    let generator = generator(GeneratorConfig::default(), instant(14, 7, 30, 0));

    for length in [0, ENCODED_LEN + 1] {
        let result = generator.enforce(SEED, DATA, length);
        assert!(matches!(
            result,
            Err(PinError::InvalidInput { field: "length", .. })
        ));
    }
}

#[test]
fn test_enforce_leaves_symbol_in_place() {
    // The tag for this window encodes as "mA+xYjDn..."; the '+' is kept
    // at index 2 and no '!' is appended.
    let generator = generator(GeneratorConfig::default(), instant(14, 7, 30, 0));

    let code = generator.generate(SEED, DATA).unwrap();
    assert_eq!(code.expose(), "mA+xYjDn");
}

#[test]
fn test_truncate_lengths() {
    let generator = generator(GeneratorConfig::default(), instant(14, 7, 30, 0));
    let raw = generator.generate_raw(SEED, DATA).unwrap();
    assert_eq!(raw.len(), ENCODED_LEN);

    for length in 4..=ENCODED_LEN {
        let code = generator.truncate(SEED, DATA, length).unwrap();
        assert_eq!(code.len(), length);
        assert!(raw.expose().starts_with(code.expose()));
    }
}

#[test]
fn test_truncate_three_or_less_returns_full_encoding() {
    // The threshold is the literal 3, whatever the encoded length
    let generator = generator(GeneratorConfig::default(), instant(14, 7, 30, 0));
    let raw = generator.generate_raw(SEED, DATA).unwrap();

    for length in [0, 1, 2, 3] {
        let code = generator.truncate(SEED, DATA, length).unwrap();
        assert_eq!(code.expose(), raw.expose());
    }
}

#[test]
fn test_user_id_generation() {
    let id = user_id(1);
    assert_eq!(id.len(), 11);
    assert!(id.chars().all(|c| c.is_ascii_digit()));
    assert_eq!(user_id(0), "00000000000");
    assert_eq!(id, "00000791976");
}

#[test]
fn test_100k_distinct_users_without_collision() {
    let generator = generator(GeneratorConfig::default(), instant(14, 7, 30, 0));

    let mut users = HashSet::new();
    let mut pins = HashSet::new();

    for index in 0..100_000 {
        let user = user_id(index);
        let pin = generator.generate(SEED, &user).unwrap();
        users.insert(user);
        pins.insert(pin.expose().to_string());
    }

    assert_eq!(users.len(), 100_000);
    assert_eq!(pins.len(), 100_000);
}

#[test]
fn test_system_clock_codes_roll_over() {
    let generator = WindowedPinGenerator::new(seconds_config()).unwrap();

    let first = generator.generate(SEED, DATA).unwrap();
    thread::sleep(Duration::from_secs(2));
    let second = generator.generate(SEED, DATA).unwrap();

    assert_ne!(first.expose(), second.expose());
}
