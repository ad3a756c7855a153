//! Cryptographic operations for ownerid.
//!
//! - **key**: SHA-256 passphrase to AES-256 key derivation
//! - **payload**: AES-256-CBC with PKCS#7 over base64 `IV || ciphertext`,
//!   with the IV derived from MD5 of the passphrase and plaintext
//!
//! ## Security Model
//!
//! The payload format carries no authentication tag. A wrong passphrase is
//! detected only when padding or UTF-8 decoding fails, which happens with
//! overwhelming probability but is not a cryptographic guarantee.

pub mod key;
pub mod payload;

pub use key::{derive_key, DerivedKey};
pub use payload::{
    decrypt_payload, derive_iv, encrypt_payload, encrypt_payload_random_iv, encrypt_with_iv,
    IV_LENGTH,
};
