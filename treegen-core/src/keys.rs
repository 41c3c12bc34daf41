//! Random string and key generation.

use crate::error::*;
use rand::{CryptoRng, Rng};
use tracing::{trace, warn};

/// Length of every generated string and key.
pub const KEY_LENGTH: usize = 10;

/// Upper bound on resampling when a key collides with an existing one.
pub const MAX_KEY_ATTEMPTS: usize = 64;

const BASE36_DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Generate a random base-36 string of [`KEY_LENGTH`] characters.
///
/// Ten 32-bit values are drawn from the RNG, each written in base 36, and the
/// concatenation is cut down to length.
pub fn random_string<R>(rng: &mut R) -> String
where
    R: Rng + CryptoRng + ?Sized,
{
    let mut buffer = String::with_capacity(KEY_LENGTH * 7);
    for _ in 0..KEY_LENGTH {
        push_base36(&mut buffer, rng.gen::<u32>());
    }
    buffer.truncate(KEY_LENGTH);
    buffer
}

/// Generate a key for which `is_taken` returns false.
///
/// Collisions are resolved by resampling, at most [`MAX_KEY_ATTEMPTS`] times.
pub fn unique_key<R, F>(rng: &mut R, is_taken: F) -> Result<String>
where
    R: Rng + CryptoRng + ?Sized,
    F: Fn(&str) -> bool,
{
    for attempt in 1..=MAX_KEY_ATTEMPTS {
        let key = random_string(rng);
        if !is_taken(&key) {
            return Ok(key);
        }
        trace!(attempt, key = %key, "key collision, resampling");
    }

    warn!(attempts = MAX_KEY_ATTEMPTS, "key generation exhausted");
    Err(TreeGenError::KeyGenerationExhausted {
        attempts: MAX_KEY_ATTEMPTS,
    })
}

fn push_base36(out: &mut String, mut value: u32) {
    // u32::MAX is "1z141z3"
    let mut digits = [0u8; 7];
    let mut len = 0;
    loop {
        digits[len] = BASE36_DIGITS[(value % 36) as usize];
        len += 1;
        value /= 36;
        if value == 0 {
            break;
        }
    }
    out.extend(digits[..len].iter().rev().map(|&d| d as char));
}
