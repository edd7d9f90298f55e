//! Browser matchers.
//!
//! A [`Matcher`] selects browser identifiers. It is used both for the
//! configured set of passive browsers and for the argument test authors pass
//! to the inclusion directive.
//!
//! - [`pattern`] - The matcher type and its evaluation
//! - [`value`] - Validation from untyped option values and serde support

pub mod pattern;
pub mod value;

pub use pattern::Matcher;
pub use value::{type_name, MATCHER_TYPES};
