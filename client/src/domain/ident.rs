//! Pure identifier and nonce generation.
//!
//! Entropy sources: nanosecond timestamp and independent `RandomState`
//! hashes. Not cryptographic — these tag requests and temp resources for
//! correlation, nothing more.

use std::collections::hash_map::RandomState;
use std::hash::{BuildHasher, Hasher};
use std::time::{SystemTime, UNIX_EPOCH};

fn entropy64() -> u64 {
    RandomState::new().build_hasher().finish()
}

/// Short time-ordered tag: unix millis plus entropy, base36.
#[must_use]
pub fn short_uid() -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);
    to_base36(millis.wrapping_add(u128::from(entropy64() % 999_999)))
}

/// 16 lowercase hex characters of hasher entropy.
#[must_use]
pub fn rand_uid() -> String {
    format!("{:016x}", entropy64())
}

/// 32 lowercase hex characters, for request nonces.
#[must_use]
pub fn nonce() -> String {
    format!("{:016x}{:016x}", entropy64(), entropy64())
}

fn to_base36(mut n: u128) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if n == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while n > 0 {
        out.push(DIGITS[(n % 36) as usize]);
        n /= 36;
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}
