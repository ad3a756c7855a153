//! Error types for ownerid core operations.
//!
//! Every stage of the recovery pipeline returns one of these variants.
//! Errors are descriptive at the core level; the CLI layer maps them to
//! user-facing messages and never lets them abort the process.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for ownerid operations.
pub type Result<T> = std::result::Result<T, OwnerIdError>;

/// Core error type for ownerid operations.
#[derive(Debug, Error)]
pub enum OwnerIdError {
    /// Target file does not exist
    #[error("File {} does not exist", .0.display())]
    FileNotFound(PathBuf),

    /// Target file could not be read during extraction
    #[error("Error extracting parts from {}: {source}", .path.display())]
    ExtractionIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Fewer fragments than required were found
    #[error("Only found {found} parts, expected {expected}")]
    InsufficientFragments { found: usize, expected: usize },

    /// Any base64, cipher, padding or encoding step failed
    #[error("Error decrypting: {0}")]
    Decryption(#[from] DecryptFailure),

    /// Target file could not be opened or written for annotation
    #[error("Error adding success comment to {}: {source}", .path.display())]
    AnnotationIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid arguments to a library helper
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Encryption error (random IV generation)
    #[error("Encryption error: {0}")]
    Crypto(String),
}

/// Underlying cause of a decryption failure.
///
/// All causes collapse into [`OwnerIdError::Decryption`]; the cause is kept
/// only so it can be logged.
#[derive(Debug, Error)]
pub enum DecryptFailure {
    #[error("payload is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("decoded payload is {0} bytes, too short for an IV and ciphertext")]
    TooShort(usize),

    #[error("ciphertext length {0} is not a multiple of the block size")]
    Misaligned(usize),

    #[error("padding is invalid (wrong key or corrupted payload)")]
    Padding,

    #[error("plaintext is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}
