//! Key derivation using Argon2id.
//!
//! This module derives the raw key from passphrase and salt using Argon2id,
//! which is memory-hard and resistant to GPU-based attacks. The cost
//! parameters are fixed constants ([`DerivationParams::V1`]): the memory and
//! time cost are the primary defense against offline brute-force guessing,
//! and lowering them on a constrained host would silently change the derived
//! password. A host that cannot satisfy the memory requirement gets a
//! `ResourceExhausted` error instead.

use argon2::{Argon2, Block};
use zeroize::ZeroizeOnDrop;

use crate::error::{PphashError, Result};
use crate::params::{DerivationParams, HASH_LEN};
use crate::salt::SALT_LEN;

/// A raw key derived from a passphrase.
///
/// This type ensures that key material is securely zeroized from memory
/// when dropped. It is never exposed to the caller directly; it only feeds
/// the output encoding.
#[derive(Clone, ZeroizeOnDrop)]
pub struct DerivedKey {
    /// The raw key bytes (zeroized on drop)
    key: [u8; HASH_LEN],
}

impl DerivedKey {
    pub(crate) fn from_bytes(bytes: [u8; HASH_LEN]) -> Self {
        Self { key: bytes }
    }

    /// Get a reference to the raw key bytes.
    ///
    /// # Security
    ///
    /// Avoid storing or logging this value. Use only for immediate encoding.
    pub fn as_bytes(&self) -> &[u8; HASH_LEN] {
        &self.key
    }
}

impl std::fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DerivedKey")
            .field("key", &"[REDACTED]")
            .finish()
    }
}

/// Derive the raw key for a passphrase with the fixed version 1 parameters.
///
/// Resource-intensive by design: the configured memory cost (4 GiB) is
/// allocated for the duration of the call and the computation takes multiple
/// CPU-seconds. The 4-lane parallelism is internal to the algorithm; it
/// shapes the output and is not an external concurrency contract.
///
/// # Errors
///
/// Returns `PphashError::ResourceExhausted` when the working memory cannot
/// be allocated, `PphashError::Kdf` on parameter marshaling or hashing
/// failure. Both are fatal for the invocation; there is no fallback to
/// reduced parameters.
pub fn derive_key(passphrase: &[u8], salt: &[u8; SALT_LEN]) -> Result<DerivedKey> {
    derive_key_with(passphrase, salt, &DerivationParams::V1)
}

/// Derive with an explicit parameter set.
///
/// External callers always go through the fixed version constant; tests use
/// reduced costs to exercise the pipeline cheaply.
pub(crate) fn derive_key_with(
    passphrase: &[u8],
    salt: &[u8; SALT_LEN],
    params: &DerivationParams,
) -> Result<DerivedKey> {
    let argon_params = params.argon2_params()?;
    let block_count = argon_params.block_count();
    let argon2 = Argon2::new(params.algorithm, params.version, argon_params);

    // Allocate the working memory explicitly so an allocation failure maps
    // to ResourceExhausted instead of aborting the process.
    let mut blocks: Vec<Block> = Vec::new();
    blocks.try_reserve_exact(block_count).map_err(|_| {
        PphashError::ResourceExhausted(format!(
            "cannot allocate {} KiB of Argon2 working memory",
            params.memory_cost_kib
        ))
    })?;
    blocks.resize(block_count, Block::new());

    let mut key_bytes = [0u8; HASH_LEN];
    argon2
        .hash_password_into_with_memory(passphrase, salt, &mut key_bytes, &mut blocks)
        .map_err(|e| PphashError::Kdf(e.to_string()))?;

    Ok(DerivedKey::from_bytes(key_bytes))
}
