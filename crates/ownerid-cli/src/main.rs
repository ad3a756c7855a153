//! ownerid CLI - recover the secret sealed in a file's OWNER_ID comments.
//!
//! Asks for a file path and a decryption key, then runs the recovery
//! pipeline from `ownerid-core`. Every outcome is reported as text and the
//! process always exits normally.

use clap::Parser;

mod cli;
mod commands;
mod constants;
mod errors;
mod helpers;
mod logging;
mod ui;

use cli::Cli;
use commands::handle_recover;
use errors::CliError;
use helpers::prompt_answers;
use ui::{header, UiContext};

fn main() -> anyhow::Result<()> {
    let _cli = Cli::parse();
    logging::init();

    let ctx = UiContext::from_env();
    if ctx.mode.is_pretty() {
        println!("{}", header(&ctx, "recover"));
    }

    let answers = match prompt_answers(ctx.interactive) {
        Ok(answers) => answers,
        Err(err) => {
            CliError::from(err).report(&ctx);
            return Ok(());
        }
    };

    match handle_recover(&ctx, &answers.file_path, &answers.passphrase) {
        Ok(recovered) => {
            tracing::debug!(
                payload_len = recovered.payload.len(),
                plaintext_len = recovered.plaintext.len(),
                "recovery complete"
            );
        }
        Err(err) => err.report(&ctx),
    }
    Ok(())
}
