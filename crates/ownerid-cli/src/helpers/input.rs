//! Input handling for the file path and decryption key.
//!
//! On a terminal the values are requested with `dialoguer` prompts (the key
//! without echo). With piped stdin they are read as the first two lines.

use std::io::BufRead;

use dialoguer::{Input, Password};
use zeroize::Zeroizing;

use crate::constants::{FILE_PROMPT, KEY_PROMPT};

/// The two values the tool asks for.
pub struct Answers {
    pub file_path: String,
    pub passphrase: Zeroizing<String>,
}

/// Ask for the file path and decryption key.
pub fn prompt_answers(interactive: bool) -> anyhow::Result<Answers> {
    if interactive {
        let file_path: String = Input::new()
            .with_prompt(FILE_PROMPT)
            .interact_text()
            .map_err(|e| anyhow::anyhow!("Failed to read file path: {}", e))?;
        let passphrase = Password::new()
            .with_prompt(KEY_PROMPT)
            .interact()
            .map_err(|e| anyhow::anyhow!("Failed to read decryption key: {}", e))?;
        return Ok(Answers {
            file_path,
            passphrase: Zeroizing::new(passphrase),
        });
    }

    let stdin = std::io::stdin();
    let mut reader = stdin.lock();
    read_answers(&mut reader)
}

/// Read the file path and key as the next two lines of a reader.
pub fn read_answers<R: BufRead>(reader: &mut R) -> anyhow::Result<Answers> {
    let file_path = read_value(reader, FILE_PROMPT)?;
    let passphrase = Zeroizing::new(read_value(reader, KEY_PROMPT)?);
    Ok(Answers {
        file_path,
        passphrase,
    })
}

/// Read one line, stripping only the line terminator.
fn read_value<R: BufRead>(reader: &mut R, label: &str) -> anyhow::Result<String> {
    let mut line = String::new();
    let read = reader
        .read_line(&mut line)
        .map_err(|e| anyhow::anyhow!("Failed to read stdin: {}", e))?;
    if read == 0 {
        return Err(anyhow::anyhow!("No input provided for \"{}\"", label));
    }
    let trimmed = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed);
    Ok(line)
}
