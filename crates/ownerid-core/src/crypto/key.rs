//! Key derivation from a passphrase.
//!
//! The key is the SHA-256 digest of the passphrase's UTF-8 bytes, used
//! directly as an AES-256 key. There is no salt and no stretching; the
//! derivation must match payloads sealed by existing tooling bit for bit.

use sha2::{Digest, Sha256};
use zeroize::ZeroizeOnDrop;

/// Length of derived key in bytes (32 bytes = 256 bits for AES-256).
pub const KEY_LENGTH: usize = 32;

/// A symmetric key derived from a passphrase.
///
/// Key material is zeroized when dropped and never printed.
#[derive(Clone, ZeroizeOnDrop)]
pub struct DerivedKey {
    key: [u8; KEY_LENGTH],
}

impl DerivedKey {
    /// Get a reference to the raw key bytes.
    ///
    /// # Security
    ///
    /// Avoid storing or logging this value. Use only for immediate cipher operations.
    pub fn as_bytes(&self) -> &[u8; KEY_LENGTH] {
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

/// Derive the AES-256 key for a passphrase.
///
/// Deterministic: the same passphrase always yields the same key. An empty
/// passphrase is accepted and hashes like any other string.
///
/// # Examples
///
/// ```
/// use ownerid_core::crypto::derive_key;
///
/// let key = derive_key("kingit-release-key");
/// assert_eq!(key.as_bytes().len(), 32);
/// ```
pub fn derive_key(passphrase: &str) -> DerivedKey {
    let digest = Sha256::digest(passphrase.as_bytes());
    DerivedKey { key: digest.into() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_is_sha256_of_passphrase() {
        let key = derive_key("kingit-release-key");
        assert_eq!(
            hex::encode(key.as_bytes()),
            "97b014c5b31c6801a153201eebd0415eff4ad59a2034d2e301b69d4f8402cdaf"
        );
    }

    #[test]
    fn test_empty_passphrase_hashes() {
        let key = derive_key("");
        assert_eq!(
            hex::encode(key.as_bytes()),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_different_passphrase_different_key() {
        let key1 = derive_key("passphrase-one");
        let key2 = derive_key("passphrase-two");
        assert_ne!(key1.as_bytes(), key2.as_bytes());
    }

    #[test]
    fn test_derived_key_debug_redacts() {
        let key = derive_key("test-passphrase");
        let debug_output = format!("{:?}", key);
        assert!(debug_output.contains("REDACTED"));

        let key_hex = hex::encode(&key.as_bytes()[..4]);
        assert!(!debug_output.contains(&key_hex));
    }
}
