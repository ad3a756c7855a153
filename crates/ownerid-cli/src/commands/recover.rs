//! The recover flow: extract, assemble, decrypt, annotate.

use std::path::Path;

use ownerid_core::{
    append_success_annotation, assemble_exact, decrypt_payload, extract_fragments,
    OwnerIdError, EXPECTED_FRAGMENTS,
};

use crate::errors::CliError;
use crate::ui::{badge, kv, receipt, Badge, UiContext};

/// Result of a successful recovery.
#[derive(Debug)]
pub struct Recovered {
    pub payload: String,
    pub plaintext: String,
}

/// Run the recovery pipeline against a file, printing progress as it goes.
///
/// Stops at the first failing stage. The file is annotated only after a
/// successful decryption; the decrypted text is not checked against any
/// expected format first.
pub fn handle_recover(
    ctx: &UiContext,
    file_path: &str,
    passphrase: &str,
) -> Result<Recovered, CliError> {
    let path = Path::new(file_path);
    if !path.exists() {
        return Err(OwnerIdError::FileNotFound(path.to_path_buf()).into());
    }

    let extraction = extract_fragments(path)?;
    if let Some(warning) = extraction.warning() {
        eprintln!("{}", badge(ctx, Badge::Warn, &format!("Warning: {}", warning)));
    }
    if !extraction.is_complete() {
        return Err(CliError::incomplete(extraction.found));
    }

    let payload = assemble_exact(&extraction.fragments, EXPECTED_FRAGMENTS)?;
    println!("{}", kv(ctx, "Reconstructed encrypted string", &payload));

    let plaintext = decrypt_payload(&payload, passphrase).map_err(|err| {
        tracing::debug!(error = %err, "decryption failed");
        CliError::from(err)
    })?;
    println!("{}", kv(ctx, "Decrypted project name", &plaintext));
    println!("{}", badge(ctx, Badge::Ok, "Verification successful!"));

    append_success_annotation(path)?;
    println!(
        "{}",
        receipt(ctx, "Success comment added", &[("File", file_path)])
    );

    Ok(Recovered { payload, plaintext })
}
