//! Payload assembly from ordered fragments.

use crate::error::{OwnerIdError, Result};

/// Concatenate fragments in the given order with no separator.
pub fn assemble<S: AsRef<str>>(fragments: &[S]) -> String {
    fragments.iter().map(AsRef::as_ref).collect()
}

/// Concatenate fragments, requiring at least `expected` of them.
///
/// Only the first `expected` fragments are used.
pub fn assemble_exact<S: AsRef<str>>(fragments: &[S], expected: usize) -> Result<String> {
    if fragments.len() < expected {
        return Err(OwnerIdError::InsufficientFragments {
            found: fragments.len(),
            expected,
        });
    }
    Ok(assemble(&fragments[..expected]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assemble_preserves_order() {
        assert_eq!(assemble(&["ab", "cd", "ef"]), "abcdef");
    }

    #[test]
    fn test_assemble_empty() {
        let empty: [&str; 0] = [];
        assert_eq!(assemble(&empty), "");
    }

    #[test]
    fn test_assemble_exact_rejects_short_input() {
        let result = assemble_exact(&["a", "b"], 5);
        assert!(matches!(
            result,
            Err(OwnerIdError::InsufficientFragments {
                found: 2,
                expected: 5
            })
        ));
    }

    #[test]
    fn test_assemble_exact_uses_leading_fragments() {
        let parts = vec!["1".to_string(), "2".into(), "3".into()];
        assert_eq!(assemble_exact(&parts, 2).unwrap(), "12");
    }
}
