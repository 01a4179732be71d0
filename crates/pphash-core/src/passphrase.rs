//! Passphrase validation and byte conversion.
//!
//! The derivation pipeline consumes the passphrase as Latin-1 bytes: every
//! character must map to a single byte in 0..=255. The conversion validates
//! the whole passphrase up front, so out-of-range input fails before any
//! expensive derivation work begins.

use zeroize::Zeroizing;

use crate::error::{PphashError, Result};

/// Convert a passphrase to its Latin-1 byte representation.
///
/// # Arguments
///
/// * `passphrase` - The passphrase exactly as supplied by the caller,
///   whitespace and symbols preserved verbatim
///
/// # Returns
///
/// The single-byte encoding of the passphrase, zeroized on drop. A character
/// above U+00FF yields `PphashError::Encoding` naming the character and its
/// position; nothing is ever truncated or substituted, since that would
/// derive a different password than the displayed passphrase suggests.
///
/// The empty passphrase is valid and maps to the empty byte sequence.
pub fn latin1_bytes(passphrase: &str) -> Result<Zeroizing<Vec<u8>>> {
    let mut bytes = Zeroizing::new(Vec::with_capacity(passphrase.len()));
    for (position, ch) in passphrase.chars().enumerate() {
        let code = u32::from(ch);
        if code > 0xFF {
            return Err(PphashError::Encoding { ch, position });
        }
        bytes.push(code as u8);
    }
    Ok(bytes)
}
