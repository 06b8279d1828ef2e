//! Time-windowed PIN derivation
//!
//! The pipeline runs in four steps: quantize the clock into a time bucket,
//! append the bucket to the seed, HMAC-SHA256 the caller's data with that
//! ephemeral secret, then format the digest with an output policy.

pub mod clock;
pub mod format;
pub mod generator;
pub mod mac;
pub mod secret;
pub mod window;

pub use clock::{Clock, FixedClock, SystemClock};
pub use format::{OutputPolicy, DEFAULT_PIN_LENGTH, ENCODED_LEN};
pub use generator::{PinGenerator, WindowedPinGenerator};
