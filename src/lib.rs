//! Passive browsers - run tests in some browsers only when asked to.
//!
//! A browser is *passive* when the configured matcher selects it. Every
//! test in a passive browser is disabled unless the test, or one of its
//! enclosing suites, declared through the inclusion directive that it
//! should run there.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Option loading, layering, and validation
//! - [`error`] - Error types and result aliases
//! - [`matcher`] - Browser matchers (exact ids, patterns, combinations)
//! - [`plugin`] - Wiring into the host's parse lifecycle
//! - [`registry`] - Inclusion directives collected during parsing
//! - [`selection`] - Passive browser resolution and test disablement
//! - [`tree`] - Test tree abstractions and implementations
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use passive_browsers::matcher::Matcher;
//! use passive_browsers::selection::resolve_passive_browsers;
//!
//! let browsers = vec!["chrome".to_string(), "passive-ie".to_string()];
//! let matcher = Matcher::pattern("passive-.*").unwrap();
//! assert_eq!(resolve_passive_browsers(&browsers, &matcher), vec!["passive-ie"]);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod matcher;
pub mod plugin;
pub mod registry;
pub mod selection;
pub mod tree;
pub mod ui;

pub use error::{PassiveBrowsersError, Result};
