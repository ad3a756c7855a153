//! UI context for environment detection.

use std::io::IsTerminal;

use super::mode::OutputMode;

/// Terminal and environment context for UI decisions.
#[derive(Debug, Clone)]
pub struct UiContext {
    /// Whether stdin is a TTY (prompts are interactive)
    pub interactive: bool,
    /// Whether color output is enabled
    pub color: bool,
    /// Whether unicode symbols are enabled
    pub unicode: bool,
    /// Resolved output mode
    pub mode: OutputMode,
}

impl UiContext {
    /// Create context from the process environment.
    ///
    /// Color is disabled by `NO_COLOR`, `TERM=dumb`, or a non-TTY stdout.
    pub fn from_env() -> Self {
        let is_tty = std::io::stdout().is_terminal();
        let term_is_dumb = std::env::var("TERM").map(|v| v == "dumb").unwrap_or(false);
        let no_color_env = std::env::var_os("NO_COLOR").is_some();
        Self::resolve(
            is_tty,
            std::io::stdin().is_terminal(),
            term_is_dumb,
            no_color_env,
        )
    }

    fn resolve(is_tty: bool, stdin_tty: bool, term_is_dumb: bool, no_color_env: bool) -> Self {
        let mode = OutputMode::resolve(is_tty, term_is_dumb);
        Self {
            interactive: stdin_tty,
            color: is_tty && !no_color_env && !term_is_dumb,
            unicode: mode.is_pretty(),
            mode,
        }
    }

    /// Context for non-terminal output (no color, ASCII badges).
    #[cfg(test)]
    pub fn plain() -> Self {
        Self::resolve(false, false, false, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_color_env_disables_color() {
        let ctx = UiContext::resolve(true, true, false, true);
        assert!(!ctx.color);
        assert!(ctx.mode.is_pretty());
    }

    #[test]
    fn test_dumb_terminal_is_plain_ascii() {
        let ctx = UiContext::resolve(true, true, true, false);
        assert!(!ctx.color);
        assert!(!ctx.unicode);
        assert_eq!(ctx.mode, OutputMode::Plain);
    }

    #[test]
    fn test_piped_stdin_is_not_interactive() {
        let ctx = UiContext::resolve(true, false, false, false);
        assert!(!ctx.interactive);
        assert!(ctx.color);
    }
}
