//! Fixed Argon2id derivation parameters.
//!
//! The parameter set is part of the algorithm's identity: a passphrase only
//! reproduces the same password while every field stays fixed. Parameter
//! changes happen by adding a new named version constant, never by editing
//! an existing one - editing would silently change every derived password.

use argon2::{Algorithm, Params, Version};

use crate::error::{PphashError, Result};

/// Length of the raw derived key in bytes.
pub const HASH_LEN: usize = 16;

/// A versioned Argon2id parameter set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DerivationParams {
    /// Argon2 algorithm variant
    pub algorithm: Algorithm,
    /// Argon2 version
    pub version: Version,
    /// Raw key length in bytes
    pub hash_len: usize,
    /// Memory cost in KiB
    pub memory_cost_kib: u32,
    /// Iteration count
    pub time_cost: u32,
    /// Internal lane count
    pub parallelism: u32,
}

impl DerivationParams {
    /// Version 1 parameter set: Argon2id, 4 GiB memory, 8 iterations,
    /// 4 lanes, 16-byte output.
    pub const V1: Self = Self {
        algorithm: Algorithm::Argon2id,
        version: Version::V0x13,
        hash_len: HASH_LEN,
        memory_cost_kib: 4 * 1024 * 1024,
        time_cost: 8,
        parallelism: 4,
    };

    /// Marshal into the argon2 crate's parameter type.
    pub(crate) fn argon2_params(&self) -> Result<Params> {
        Params::new(
            self.memory_cost_kib,
            self.time_cost,
            self.parallelism,
            Some(self.hash_len),
        )
        .map_err(|e| PphashError::Kdf(format!("Invalid Argon2 parameters: {}", e)))
    }
}
