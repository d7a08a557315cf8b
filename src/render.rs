//! Output rendering for the REPLs.
//!
//! This module provides a renderer trait and a plain-text implementation
//! that styles each speaker differently when color is enabled.

use std::io::{self, Stdout, Write};

use crate::types::{Speaker, Turn};

/// ANSI escape code for dim text (used for the pending indicator).
const ANSI_DIM: &str = "\x1b[2m";

/// ANSI escape code for italic text (used for the pending indicator).
const ANSI_ITALIC: &str = "\x1b[3m";

/// ANSI escape code for bold text (used for speaker labels).
const ANSI_BOLD: &str = "\x1b[1m";

/// ANSI escape code to reset all styling.
const ANSI_RESET: &str = "\x1b[0m";

/// ANSI escape code for blue text (used for the assistant).
const ANSI_BLUE: &str = "\x1b[34m";

/// ANSI escape code for cyan text (used for informational output).
const ANSI_CYAN: &str = "\x1b[36m";

/// ANSI escape code for red text (used for errors).
const ANSI_RED: &str = "\x1b[31m";

/// Trait for rendering REPL output.
///
/// This abstraction allows for different rendering strategies:
/// - Plain text with ANSI styling
/// - Plain text without styling (for piping/redirecting)
pub trait Renderer: Send {
    /// Print one transcript turn, labelled with its speaker.
    fn print_turn(&mut self, turn: &Turn);

    /// Show that a reply is on its way.
    fn print_pending(&mut self);

    /// Print an error message.
    fn print_error(&mut self, error: &str);

    /// Print an informational message.
    fn print_info(&mut self, info: &str);
}

/// Plain text renderer with optional ANSI styling.
pub struct PlainTextRenderer<W: Write + Send = Stdout> {
    out: W,
    use_color: bool,
}

impl PlainTextRenderer {
    /// Creates a new PlainTextRenderer with ANSI colors enabled.
    pub fn new() -> Self {
        Self::with_color(true)
    }

    /// Creates a new PlainTextRenderer with specified color setting.
    pub fn with_color(use_color: bool) -> Self {
        Self::with_writer(io::stdout(), use_color)
    }
}

impl<W: Write + Send> PlainTextRenderer<W> {
    /// Creates a renderer over any writer.
    pub fn with_writer(out: W, use_color: bool) -> Self {
        Self { out, use_color }
    }

    /// Consumes the renderer, returning the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_line(&mut self, line: &str) {
        let _ = writeln!(self.out, "{line}");
        let _ = self.out.flush();
    }

    fn styled(&self, style: &str, text: &str) -> String {
        if self.use_color {
            format!("{style}{text}{ANSI_RESET}")
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

impl<W: Write + Send> Renderer for PlainTextRenderer<W> {
    fn print_turn(&mut self, turn: &Turn) {
        let label = format!("{}:", turn.speaker());
        let label = match turn.speaker() {
            Speaker::User => self.styled(ANSI_BOLD, &label),
            Speaker::Assistant => self.styled(&format!("{ANSI_BOLD}{ANSI_BLUE}"), &label),
        };
        self.write_line(&format!("{label} {}", turn.text()));
    }

    fn print_pending(&mut self) {
        let line = self.styled(&format!("{ANSI_DIM}{ANSI_ITALIC}"), "thinking...");
        self.write_line(&line);
    }

    fn print_error(&mut self, error: &str) {
        let line = self.styled(ANSI_RED, &format!("Error: {error}"));
        self.write_line(&line);
    }

    fn print_info(&mut self, info: &str) {
        let line = self.styled(ANSI_CYAN, info);
        self.write_line(&line);
    }
}
