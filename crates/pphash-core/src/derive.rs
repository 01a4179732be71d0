//! The derivation pipeline.
//!
//! Three stages run strictly in sequence with a data dependency between
//! them: Latin-1 conversion plus salt derivation, Argon2id key derivation,
//! and output encoding. There is no branching, no retry, and no shared
//! mutable state; concurrent invocations are independent.

use crate::encode::encode_password;
use crate::error::Result;
use crate::kdf::derive_key_with;
use crate::params::DerivationParams;
use crate::passphrase::latin1_bytes;
use crate::salt::derive_salt;

/// Derive the password for a passphrase with the fixed version 1 parameters.
///
/// Deterministic: the same passphrase always yields the same password, on
/// any host, in any invocation. The passphrase is taken verbatim - callers
/// must not trim, split, or re-encode it.
///
/// # Errors
///
/// Returns `PphashError::Encoding` when the passphrase contains a character
/// outside the Latin-1 range (checked before any derivation work),
/// `PphashError::ResourceExhausted` when the Argon2 working memory cannot
/// be allocated, and `PphashError::Kdf` on key-derivation failure.
///
/// # Examples
///
/// ```no_run
/// use pphash_core::derive_password;
///
/// let password = derive_password("my memorable phrase").unwrap();
/// assert!(password.starts_with("pP1#"));
/// ```
pub fn derive_password(passphrase: &str) -> Result<String> {
    derive_password_with(passphrase, &DerivationParams::V1)
}

pub(crate) fn derive_password_with(
    passphrase: &str,
    params: &DerivationParams,
) -> Result<String> {
    let passphrase_bytes = latin1_bytes(passphrase)?;
    let salt = derive_salt(&passphrase_bytes);
    let key = derive_key_with(&passphrase_bytes, &salt, params)?;
    Ok(encode_password(&key))
}
