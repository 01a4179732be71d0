//! Policy-safe output encoding.
//!
//! Converts the raw derived key into a printable string that passes typical
//! password-composition rules. The base64 symbols `+` and `/` are replaced
//! with `!` and `$`, and a fixed prefix supplies one upper-case letter, one
//! lower-case letter, one digit and one symbol.
//!
//! The key is encoded without `=` padding, matching the hash segment of an
//! Argon2 PHC string. Note that some password policies would reject `=`;
//! with this encoding it cannot appear at all.

use base64::engine::general_purpose::STANDARD_NO_PAD;
use base64::Engine;

use crate::kdf::DerivedKey;
use crate::params::HASH_LEN;

/// Fixed compliance prefix prepended to every derived password.
pub const PASSWORD_PREFIX: &str = "pP1#";

/// Final password length: prefix plus unpadded base64 of the raw key.
pub const PASSWORD_LEN: usize = PASSWORD_PREFIX.len() + (HASH_LEN * 4 + 2) / 3;

/// Encode a derived key as the final password string.
///
/// No error conditions: the key is always well-formed fixed-length data and
/// the output length is always [`PASSWORD_LEN`].
pub fn encode_password(key: &DerivedKey) -> String {
    let encoded = STANDARD_NO_PAD.encode(key.as_bytes());
    let substituted: String = encoded
        .chars()
        .map(|ch| match ch {
            '+' => '!',
            '/' => '$',
            other => other,
        })
        .collect();
    format!("{}{}", PASSWORD_PREFIX, substituted)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(bytes: [u8; HASH_LEN]) -> DerivedKey {
        DerivedKey::from_bytes(bytes)
    }

    #[test]
    fn test_zero_key() {
        assert_eq!(encode_password(&key([0u8; 16])), "pP1#AAAAAAAAAAAAAAAAAAAAAA");
    }

    #[test]
    fn test_slash_substituted_with_dollar() {
        // 0xFF bytes encode to runs of '/'
        assert_eq!(encode_password(&key([0xFF; 16])), "pP1#$$$$$$$$$$$$$$$$$$$$$w");
    }

    #[test]
    fn test_plus_substituted_with_bang() {
        // 0xFB bytes encode to alternating '+' and '/'
        assert_eq!(encode_password(&key([0xFB; 16])), "pP1#!$v7!$v7!$v7!$v7!$v7!w");
    }

    #[test]
    fn test_sequential_bytes() {
        let bytes: [u8; 16] = core::array::from_fn(|i| i as u8);
        assert_eq!(encode_password(&key(bytes)), "pP1#AAECAwQFBgcICQoLDA0ODw");
    }

    #[test]
    fn test_password_length_and_prefix() {
        assert_eq!(PASSWORD_LEN, 26);
        let password = encode_password(&key([0xA5; 16]));
        assert_eq!(password.len(), PASSWORD_LEN);
        assert!(password.starts_with(PASSWORD_PREFIX));
    }

    #[test]
    fn test_output_charset() {
        // Exhaustive per-byte sweep: after the prefix, only base64
        // alphanumerics and the two substituted symbols may appear
        for byte in 0..=u8::MAX {
            let password = encode_password(&key([byte; 16]));
            let tail = &password[PASSWORD_PREFIX.len()..];
            assert!(
                tail.chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '!' || c == '$'),
                "unexpected character in {:?}",
                password
            );
        }
    }
}
