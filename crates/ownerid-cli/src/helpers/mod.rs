//! Helper functions for the CLI.

pub mod input;

pub use input::{prompt_answers, Answers};
