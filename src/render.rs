//! Output rendering for the chat log.
//!
//! A small renderer trait keeps the session logic independent of how
//! entries reach the screen: the binary uses the ANSI plain-text renderer,
//! tests use a recording implementation.

use crate::types::{MessageEntry, Sender};

/// ANSI escape code for cyan text (used for the bot label).
const ANSI_CYAN: &str = "\x1b[36m";

/// ANSI escape code for red text (used for errors).
const ANSI_RED: &str = "\x1b[31m";

/// ANSI escape code for dim text (used for informational notes).
const ANSI_DIM: &str = "\x1b[2m";

/// ANSI escape code to reset all styling.
const ANSI_RESET: &str = "\x1b[0m";

/// Trait for rendering chat output.
///
/// Implementations decide presentation only; they must not reorder or drop
/// entries handed to them.
pub trait Renderer: Send {
    /// Render one message log entry.
    fn message(&mut self, entry: &MessageEntry);

    /// Render an informational note outside the log.
    fn print_info(&mut self, text: &str);

    /// Render an error outside the log.
    fn print_error(&mut self, text: &str);
}

/// Renderer that writes plain text to stdout, optionally ANSI-styled.
pub struct PlainTextRenderer {
    use_color: bool,
}

impl PlainTextRenderer {
    /// Creates a renderer with color enabled.
    pub fn new() -> Self {
        Self::with_color(true)
    }

    /// Creates a renderer with color explicitly enabled or disabled.
    ///
    /// Disable color when piping or redirecting output.
    pub fn with_color(use_color: bool) -> Self {
        Self { use_color }
    }

    fn styled(&self, code: &str, text: &str) -> String {
        if self.use_color {
            format!("{}{}{}", code, text, ANSI_RESET)
        } else {
            text.to_string()
        }
    }
}

impl Default for PlainTextRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for PlainTextRenderer {
    fn message(&mut self, entry: &MessageEntry) {
        match entry.from {
            Sender::User => println!("You: {}", entry.text),
            Sender::Bot => println!("{} {}", self.styled(ANSI_CYAN, "Finsight:"), entry.text),
        }
    }

    fn print_info(&mut self, text: &str) {
        println!("{}", self.styled(ANSI_DIM, text));
    }

    fn print_error(&mut self, text: &str) {
        eprintln!("{}", self.styled(ANSI_RED, text));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn styling_disabled_passes_text_through() {
        let renderer = PlainTextRenderer::with_color(false);
        assert_eq!(renderer.styled(ANSI_RED, "plain"), "plain");
    }

    #[test]
    fn styling_enabled_wraps_with_reset() {
        let renderer = PlainTextRenderer::new();
        let styled = renderer.styled(ANSI_CYAN, "text");
        assert!(styled.starts_with(ANSI_CYAN));
        assert!(styled.ends_with(ANSI_RESET));
    }
}
