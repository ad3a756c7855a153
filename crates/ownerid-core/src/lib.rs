//! # ownerid Core
//!
//! Core library for ownerid - recovers a secret split across tagged
//! `OWNER_ID` comments in a source file.
//!
//! This crate provides the extraction and decryption pipeline independent
//! of the CLI interface.
//!
//! ## Architecture
//!
//! - **syntax**: Comment syntax per file extension
//! - **extract**: Tagged fragment extraction
//! - **assemble**: Fragment concatenation
//! - **crypto**: Key derivation and AES-256-CBC payloads
//! - **annotate**: Success marker appended to recovered files
//! - **seal**: Splitting payloads into tagged lines

pub mod annotate;
pub mod assemble;
pub mod crypto;
pub mod error;
pub mod extract;
pub mod seal;
pub mod syntax;

pub use annotate::append_success_annotation;
pub use assemble::{assemble, assemble_exact};
pub use crypto::{decrypt_payload, encrypt_payload};
pub use error::{DecryptFailure, OwnerIdError, Result};
pub use extract::{extract_fragments, Extraction, FragmentWarning, EXPECTED_FRAGMENTS};
pub use syntax::{CommentStyle, CommentSyntax};

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
