//! Constants used throughout the CLI.

/// Prompt for the target file.
pub const FILE_PROMPT: &str = "Enter file path";

/// Prompt for the decryption key.
pub const KEY_PROMPT: &str = "Enter decryption key";

/// Environment variable holding the log filter (e.g. `debug`, `ownerid_core=debug`).
pub const LOG_ENV: &str = "OWNERID_LOG";

/// Log filter used when `OWNERID_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "error";
