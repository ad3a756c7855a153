//! Splitting payloads into tagged fragment lines.
//!
//! The inverse of extraction: a payload is cut into contiguous chunks and
//! each chunk is written as a tagged comment line the extractor recognises.

use crate::error::{OwnerIdError, Result};
use crate::syntax::{CommentSyntax, MARKER_LABEL};

/// Split a payload into `parts` contiguous chunks of `ceil(len / parts)` chars.
///
/// The last chunk may be shorter, and a very short payload yields fewer
/// chunks than requested. An empty payload yields no chunks.
pub fn split_payload(payload: &str, parts: usize) -> Result<Vec<String>> {
    if parts == 0 {
        return Err(OwnerIdError::InvalidInput(
            "Fragment count must be at least 1".to_string(),
        ));
    }
    let chars: Vec<char> = payload.chars().collect();
    let chunk = chars.len().div_ceil(parts).max(1);
    Ok(chars
        .chunks(chunk)
        .map(|piece| piece.iter().collect())
        .collect())
}

/// Render one fragment as a tagged comment line (no trailing newline).
pub fn render_fragment_line(syntax: CommentSyntax, fragment: &str) -> String {
    syntax.wrap(&format!("{}: {}", MARKER_LABEL, fragment))
}
