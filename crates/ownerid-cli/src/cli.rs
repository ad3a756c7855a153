use clap::Parser;

use ownerid_core::VERSION;

/// ownerid - Recover the secret sealed in a file's OWNER_ID comments
///
/// Prompts for a file path and a decryption key, reassembles the five tagged
/// fragments, decrypts them and marks the file on success.
#[derive(Parser)]
#[command(name = "ownerid")]
#[command(author, version = VERSION, about, long_about = None)]
pub struct Cli {}
