//! Error types for password derivation.
//!
//! This module defines the error hierarchy for the derivation engine.
//! Errors are descriptive at the core level; the CLI layer maps these
//! to diagnostic messages and exit codes. Every error is terminal for
//! the invocation - there is no retry and no partial result.

use thiserror::Error;

/// Result type alias for derivation operations.
pub type Result<T> = std::result::Result<T, PphashError>;

/// Core error type for derivation operations.
#[derive(Debug, Error)]
pub enum PphashError {
    /// Passphrase character outside the single-byte Latin-1 range
    #[error("Passphrase contains non Latin-1 character {ch:?} at position {position}")]
    Encoding {
        /// The offending character
        ch: char,
        /// Zero-based character position within the passphrase
        position: usize,
    },

    /// Key derivation parameter or hashing failure
    #[error("Key derivation failed: {0}")]
    Kdf(String),

    /// Working memory for key derivation could not be allocated
    #[error("Insufficient memory for key derivation: {0}")]
    ResourceExhausted(String),
}
