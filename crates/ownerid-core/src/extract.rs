//! Fragment extraction from tagged comment lines.

use std::fs;
use std::path::Path;

use crate::error::{OwnerIdError, Result};
use crate::syntax::CommentSyntax;

/// Number of fragments a sealed payload is split into.
pub const EXPECTED_FRAGMENTS: usize = 5;

/// Fragments found in a file, in line order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    /// At most [`EXPECTED_FRAGMENTS`] tokens, in file order
    pub fragments: Vec<String>,
    /// Number of tagged lines seen before truncation
    pub found: usize,
}

/// Count policy outcome worth telling the user about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FragmentWarning {
    /// Fewer tagged lines than expected; all were kept
    TooFew { found: usize, expected: usize },
    /// More tagged lines than expected; only the first ones were kept
    Truncated { found: usize, kept: usize },
}

impl std::fmt::Display for FragmentWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FragmentWarning::TooFew { found, expected } => {
                write!(f, "Only found {} parts, expected {}.", found, expected)
            }
            FragmentWarning::Truncated { found, kept } => {
                write!(f, "Found {} parts, using first {}.", found, kept)
            }
        }
    }
}

impl Extraction {
    /// Whether exactly the expected number of fragments is present.
    pub fn is_complete(&self) -> bool {
        self.fragments.len() == EXPECTED_FRAGMENTS
    }

    /// Warning for the count policy, if one applies.
    pub fn warning(&self) -> Option<FragmentWarning> {
        if self.found < EXPECTED_FRAGMENTS {
            Some(FragmentWarning::TooFew {
                found: self.found,
                expected: EXPECTED_FRAGMENTS,
            })
        } else if self.found > EXPECTED_FRAGMENTS {
            Some(FragmentWarning::Truncated {
                found: self.found,
                kept: EXPECTED_FRAGMENTS,
            })
        } else {
            None
        }
    }
}

/// Extract fragments from a file, resolving comment syntax from its extension.
///
/// # Errors
///
/// Returns [`OwnerIdError::ExtractionIo`] if the file cannot be read as text.
pub fn extract_fragments(path: &Path) -> Result<Extraction> {
    let content = fs::read_to_string(path).map_err(|source| OwnerIdError::ExtractionIo {
        path: path.to_path_buf(),
        source,
    })?;
    let syntax = CommentSyntax::for_path(path);
    tracing::debug!(path = %path.display(), style = ?syntax.style, "scanning for fragments");
    Ok(extract_from_str(&content, syntax))
}

/// Extract fragments from in-memory text using the given syntax.
///
/// Lines are scanned in order; the first match on each line contributes one
/// fragment. Extras beyond [`EXPECTED_FRAGMENTS`] are dropped.
pub fn extract_from_str(content: &str, syntax: CommentSyntax) -> Extraction {
    let pattern = syntax.pattern();
    let mut fragments: Vec<String> = split_lines(content)
        .filter_map(|line| pattern.captures(line))
        .filter_map(|caps| caps.get(1).map(|m| m.as_str().trim().to_string()))
        .collect();

    let found = fragments.len();
    fragments.truncate(EXPECTED_FRAGMENTS);
    let extraction = Extraction { fragments, found };

    if let Some(warning) = extraction.warning() {
        tracing::warn!(found, expected = EXPECTED_FRAGMENTS, "{}", warning);
    }
    extraction
}

/// Split on `\n`, `\r\n` and a lone `\r`.
///
/// A `\r\n` pair yields an extra empty piece, which never matches a marker.
fn split_lines(content: &str) -> impl Iterator<Item = &str> {
    content.split(['\n', '\r'])
}
