//! CLI error types for structured error reporting.
//!
//! Every core failure is mapped to a message plus an optional hint and
//! rendered to stderr. Nothing here terminates the process; the tool exits
//! normally in every branch.

use std::fmt;

use ownerid_core::OwnerIdError;

use crate::ui::{badge, hint, Badge, UiContext};

/// CLI-specific errors with user-facing messages.
#[derive(Debug)]
pub enum CliError {
    /// Target file is missing
    NotFound { message: String, hint: String },

    /// Fragments could not be read or were incomplete
    Extraction {
        message: String,
        hint: Option<String>,
    },

    /// Decryption failed (wrong key, damaged fragments)
    DecryptFailed { message: String, cause: String },

    /// Annotation could not be written
    AnnotationFailed(String),

    /// Prompt or stdin failure
    Input(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NotFound { message, .. } => write!(f, "{}", message),
            CliError::Extraction { message, .. } => write!(f, "{}", message),
            CliError::DecryptFailed { message, cause } => write!(f, "{} ({})", message, cause),
            CliError::AnnotationFailed(message) => write!(f, "{}", message),
            CliError::Input(message) => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for CliError {}

impl CliError {
    /// Create an Extraction error for an incomplete fragment set.
    pub fn incomplete(found: usize) -> Self {
        CliError::Extraction {
            message: "Failed to extract all required parts.".to_string(),
            hint: Some(format!(
                "Found {} OWNER_ID comment(s); the comment style must match the file extension",
                found
            )),
        }
    }

    /// Hint shown under the message, if any.
    pub fn hint(&self) -> Option<&str> {
        match self {
            CliError::NotFound { hint, .. } => Some(hint),
            CliError::Extraction { hint, .. } => hint.as_deref(),
            CliError::DecryptFailed { .. } => {
                Some("Check the decryption key and that no fragment was edited")
            }
            CliError::AnnotationFailed(_) | CliError::Input(_) => None,
        }
    }

    /// Print the error (and hint) to stderr.
    pub fn report(&self, ctx: &UiContext) {
        eprintln!("{}", badge(ctx, Badge::Err, &format!("Error: {}", self)));
        if let Some(text) = self.hint() {
            eprintln!("{}", hint(ctx, text));
        }
    }
}

impl From<OwnerIdError> for CliError {
    fn from(err: OwnerIdError) -> Self {
        match err {
            OwnerIdError::FileNotFound(_) => CliError::NotFound {
                message: format!("{}.", err),
                hint: "Enter a path relative to the current directory or an absolute path"
                    .to_string(),
            },
            OwnerIdError::ExtractionIo { .. } => CliError::Extraction {
                message: err.to_string(),
                hint: Some("The file must be readable UTF-8 text".to_string()),
            },
            OwnerIdError::InsufficientFragments { found, .. } => CliError::incomplete(found),
            OwnerIdError::Decryption(cause) => CliError::DecryptFailed {
                message: "Failed to decrypt the project name".to_string(),
                cause: cause.to_string(),
            },
            OwnerIdError::AnnotationIo { .. } => CliError::AnnotationFailed(err.to_string()),
            OwnerIdError::InvalidInput(_) | OwnerIdError::Crypto(_) => {
                CliError::Input(err.to_string())
            }
        }
    }
}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::Input(err.to_string())
    }
}
