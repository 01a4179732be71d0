//! Deterministic salt derivation.
//!
//! The KDF requires a caller-supplied salt to stay reproducible across
//! invocations, so the salt is a SHA3-256 digest of the passphrase itself
//! rather than a random value. Hashing with a primitive distinct from the
//! KDF avoids salt reuse patterns that would leak passphrase similarity.

use sha3::{Digest, Sha3_256};

/// Salt length in bytes (SHA3-256 digest size).
pub const SALT_LEN: usize = 32;

/// Derive the deterministic salt for a passphrase.
///
/// Pure and total: defined for every byte sequence, including the empty
/// passphrase. Identical input always yields the identical salt.
pub fn derive_salt(passphrase: &[u8]) -> [u8; SALT_LEN] {
    Sha3_256::digest(passphrase).into()
}
