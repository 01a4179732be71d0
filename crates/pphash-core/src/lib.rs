//! # Pphash Core
//!
//! Core library for Pphash - deterministic derivation of strong,
//! policy-compliant passwords from human-memorable passphrases.
//!
//! The same passphrase always yields the same password: the salt is a
//! cryptographic hash of the passphrase itself, the Argon2id cost parameters
//! are fixed compiled-in constants, and no state survives an invocation.
//! Nothing is cached, persisted, or logged.
//!
//! ## Architecture
//!
//! - **passphrase**: validating Latin-1 conversion of the input
//! - **salt**: deterministic SHA3-256 salt derivation
//! - **params**: versioned Argon2id parameter sets
//! - **kdf**: memory-hard key derivation
//! - **encode**: policy-safe output encoding
//! - **derive**: the three-stage pipeline

pub mod derive;
pub mod encode;
pub mod error;
pub mod kdf;
pub mod params;
pub mod passphrase;
pub mod salt;

pub use derive::derive_password;
pub use error::{PphashError, Result};
pub use params::DerivationParams;

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
