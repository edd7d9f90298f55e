//! Terminal output.

use super::theme::{should_use_colors, Theme};
use super::{OutputMode, UserInterface};

/// Writes results and successes to stdout, warnings and errors to stderr.
pub struct TerminalUI {
    mode: OutputMode,
    theme: Theme,
}

impl TerminalUI {
    /// Create a terminal UI, colored when stdout is a terminal.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            Theme::new()
        } else {
            Theme::plain()
        };
        Self { mode, theme }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        println!("{}", msg);
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", self.theme.format_success(msg));
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            eprintln!("{}", self.theme.format_warning(msg));
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("{}", self.theme.format_error(msg));
    }
}
