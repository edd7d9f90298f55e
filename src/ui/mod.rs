//! Terminal output for the CLI.
//!
//! This module provides:
//! - [`UserInterface`] trait for output abstraction
//! - [`TerminalUI`] for real terminal usage
//! - [`MockUI`] for capturing output in tests
//!
//! # Example
//!
//! ```
//! use passive_browsers::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.success("2 passive browsers");
//! assert_eq!(ui.successes(), &["2 passive browsers".to_string()]);
//! ```

pub mod mock;
pub mod output;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use output::OutputMode;
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, Theme};

/// Trait for user-facing output.
///
/// This trait allows mocking the output in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Show a plain message.
    fn message(&mut self, msg: &str);

    /// Show a success message.
    fn success(&mut self, msg: &str);

    /// Show a warning message.
    fn warning(&mut self, msg: &str);

    /// Show an error message. Errors are shown in every output mode.
    fn error(&mut self, msg: &str);
}
