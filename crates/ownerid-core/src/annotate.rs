//! Success annotation appended to a recovered file.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use crate::error::{OwnerIdError, Result};
use crate::syntax::CommentSyntax;

/// Text of the success marker line. The spelling matches files already
/// annotated in the field.
pub const SUCCESS_MARKER: &str = "succesfully decrypted.";

/// Text of the ownership notice line.
pub const OWNERSHIP_NOTICE: &str = "This code is property of KingIT";

/// Render the annotation block for a syntax: a blank separator line, then
/// the marker and notice lines, each newline terminated.
pub fn annotation_block(syntax: CommentSyntax) -> String {
    format!(
        "\n{}\n{}\n",
        syntax.wrap(SUCCESS_MARKER),
        syntax.wrap(OWNERSHIP_NOTICE)
    )
}

/// Append the success annotation to the end of a file.
///
/// Not idempotent: each call appends another copy.
///
/// # Errors
///
/// Returns [`OwnerIdError::AnnotationIo`] if the file cannot be opened for
/// appending or the write fails. Nothing is rolled back.
pub fn append_success_annotation(path: &Path) -> Result<()> {
    let syntax = CommentSyntax::for_path(path);
    let io_err = |source| OwnerIdError::AnnotationIo {
        path: path.to_path_buf(),
        source,
    };

    let mut file = OpenOptions::new().append(true).open(path).map_err(io_err)?;
    file.write_all(annotation_block(syntax).as_bytes())
        .map_err(io_err)?;
    tracing::debug!(path = %path.display(), "success annotation appended");
    Ok(())
}
