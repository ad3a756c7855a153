//! AES-256-CBC over base64 `IV || ciphertext` payloads.
//!
//! Wire format: `base64(iv[16] || aes256cbc_pkcs7(key, iv, plaintext))` with
//! the standard padded base64 alphabet. There is no MAC; a wrong key is only
//! detected through invalid padding or invalid UTF-8.
//!
//! Sealed payloads use a deterministic IV, `md5(passphrase || plaintext)`, so
//! sealing the same name with the same passphrase always yields the same
//! fragments.

use aes::Aes256;
use base64::alphabet;
use base64::engine::general_purpose::STANDARD;
use base64::engine::{GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;
use cbc::cipher::block_padding::Pkcs7;
use cbc::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use md5::{Digest, Md5};

use super::key::derive_key;
use crate::error::{DecryptFailure, OwnerIdError, Result};

type Aes256CbcDec = cbc::Decryptor<Aes256>;
type Aes256CbcEnc = cbc::Encryptor<Aes256>;

/// IV length in bytes (one AES block).
pub const IV_LENGTH: usize = 16;

/// AES block size in bytes.
const BLOCK_SIZE: usize = 16;

/// Standard alphabet that tolerates non-zero trailing bits on decode.
const LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_allow_trailing_bits(true),
);

/// Keep only base64 alphabet and padding characters.
///
/// Stray characters (whitespace, line noise picked up in a fragment) are
/// discarded before decoding rather than rejected.
fn base64_symbols(payload: &str) -> String {
    payload
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '/' | '='))
        .collect()
}

/// Decrypt a base64 payload with a passphrase.
///
/// Characters outside the base64 alphabet are ignored.
///
/// # Errors
///
/// Returns [`OwnerIdError::Decryption`] if the payload is not base64, is too
/// short, is not block aligned, has invalid padding under the derived key, or
/// does not decode to UTF-8.
///
/// # Examples
///
/// ```
/// use ownerid_core::crypto::decrypt_payload;
///
/// let plaintext =
///     decrypt_payload("CBbY0bZW2J+VePNXEonvKv8loHTXFT5Ow3DtAiyHEkw=", "kingit-release-key")
///         .unwrap();
/// assert_eq!(plaintext, "Project Aurora");
/// ```
pub fn decrypt_payload(payload: &str, passphrase: &str) -> Result<String> {
    let key = derive_key(passphrase);
    let combined = LENIENT
        .decode(base64_symbols(payload))
        .map_err(DecryptFailure::from)?;

    if combined.len() <= IV_LENGTH {
        return Err(DecryptFailure::TooShort(combined.len()).into());
    }
    let (iv, ciphertext) = combined.split_at(IV_LENGTH);
    if ciphertext.len() % BLOCK_SIZE != 0 {
        return Err(DecryptFailure::Misaligned(ciphertext.len()).into());
    }

    let mut buffer = ciphertext.to_vec();
    let plaintext = Aes256CbcDec::new(key.as_bytes().into(), iv.into())
        .decrypt_padded_mut::<Pkcs7>(&mut buffer)
        .map_err(|_| DecryptFailure::Padding)?
        .to_vec();

    let text = String::from_utf8(plaintext).map_err(DecryptFailure::from)?;
    tracing::debug!(bytes = text.len(), "payload decrypted");
    Ok(text)
}

/// Encrypt plaintext under a passphrase with a caller-supplied IV.
///
/// Produces the exact payload format [`decrypt_payload`] reads.
pub fn encrypt_with_iv(plaintext: &str, passphrase: &str, iv: &[u8; IV_LENGTH]) -> String {
    let key = derive_key(passphrase);
    let ciphertext = Aes256CbcEnc::new(key.as_bytes().into(), iv.into())
        .encrypt_padded_vec_mut::<Pkcs7>(plaintext.as_bytes());

    let mut combined = Vec::with_capacity(IV_LENGTH + ciphertext.len());
    combined.extend_from_slice(iv);
    combined.extend_from_slice(&ciphertext);
    STANDARD.encode(combined)
}

/// IV for a sealed payload: the first 16 bytes of `md5(passphrase || plaintext)`.
pub fn derive_iv(plaintext: &str, passphrase: &str) -> [u8; IV_LENGTH] {
    let mut hasher = Md5::new();
    hasher.update(passphrase.as_bytes());
    hasher.update(plaintext.as_bytes());
    let digest = hasher.finalize();

    let mut iv = [0u8; IV_LENGTH];
    iv.copy_from_slice(&digest[..IV_LENGTH]);
    iv
}

/// Encrypt plaintext under a passphrase with the deterministic IV from
/// [`derive_iv`].
///
/// # Examples
///
/// ```
/// use ownerid_core::crypto::encrypt_payload;
///
/// assert_eq!(
///     encrypt_payload("Project Aurora", "kingit-release-key"),
///     "CBbY0bZW2J+VePNXEonvKv8loHTXFT5Ow3DtAiyHEkw="
/// );
/// ```
pub fn encrypt_payload(plaintext: &str, passphrase: &str) -> String {
    encrypt_with_iv(plaintext, passphrase, &derive_iv(plaintext, passphrase))
}

/// Encrypt plaintext under a passphrase with a random IV.
///
/// # Errors
///
/// Returns [`OwnerIdError::Crypto`] if the OS random source is unavailable.
pub fn encrypt_payload_random_iv(plaintext: &str, passphrase: &str) -> Result<String> {
    let mut iv = [0u8; IV_LENGTH];
    getrandom::getrandom(&mut iv)
        .map_err(|e| OwnerIdError::Crypto(format!("Failed to generate IV: {}", e)))?;
    Ok(encrypt_with_iv(plaintext, passphrase, &iv))
}
