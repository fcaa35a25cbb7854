//! Stack body fingerprints.
//!
//! A fingerprint is a 32-bit FNV-1a hash of the body bytes. It is the lookup
//! key for snapshots and the first equality test in the diff engine. The
//! count never takes part in the hash.

use serde::{Deserialize, Serialize};
use std::fmt;

const FNV_OFFSET: u32 = 0x811c_9dc5;
const FNV_PRIME: u32 = 0x0100_0193;

/// Fixed-width key derived from a stack body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Fingerprint(u32);

impl Fingerprint {
    /// Fingerprint a stack body
    pub fn of(body: &str) -> Self {
        Self(fnv1a_32(body.as_bytes()))
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08x}", self.0)
    }
}

/// 32-bit FNV-1a over raw bytes
#[inline]
pub fn fnv1a_32(bytes: &[u8]) -> u32 {
    let mut hash = FNV_OFFSET;
    for byte in bytes {
        hash ^= u32::from(*byte);
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}
