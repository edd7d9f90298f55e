//! Inclusion directives collected while test files are parsed.
//!
//! - [`store`] - The per-browser [`DirectiveRegistry`]
//! - [`controller`] - The [`Controller`] callbacks installed into the parser

pub mod controller;
pub mod store;

pub use controller::{Controller, NoopController, RecordingController, DIRECTIVE_NAME};
pub use store::DirectiveRegistry;
