//! The host framework's test tree, reduced to the shape selection needs.
//!
//! The host owns its tests and suites. This crate only needs an identity,
//! a parent link and, for tests, a writable `disabled` flag:
//!
//! - [`Runnable`] - Anything that can carry an inclusion directive
//! - [`TestNode`] - A runnable test whose disabled flag can be set
//! - [`TestCollection`] - Per-browser enumeration of tests after parsing
//!
//! [`memory`] provides an in-memory implementation and [`file`] loads one
//! from a YAML description.

pub mod file;
pub mod memory;

pub use file::{SuiteEntry, TestEntry, TreeFile};
pub use memory::{MemoryCollection, Suite, Test};

use std::fmt;

/// Which directive store a runnable's declarations go to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RunnableKind {
    Test,
    Suite,
}

impl fmt::Display for RunnableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Test => write!(f, "test"),
            Self::Suite => write!(f, "suite"),
        }
    }
}

/// A test or suite in the host's tree.
pub trait Runnable {
    /// Stable identity. `None` for nodes the host never assigned one to.
    fn id(&self) -> Option<&str>;

    /// The enclosing suite, if any.
    fn parent(&self) -> Option<&dyn Runnable>;

    /// Whether this is a test or a suite.
    fn kind(&self) -> RunnableKind;
}

/// A test whose disabled status can be set.
pub trait TestNode: Runnable {
    /// Current disabled flag. `None` means never set, which the host treats as enabled.
    fn disabled(&self) -> Option<bool>;

    /// Set the disabled flag.
    fn set_disabled(&mut self, disabled: bool);

    /// View this test as a plain runnable for the ancestor walk.
    fn as_runnable(&self) -> &dyn Runnable;
}

/// Tests read for every browser, available once all files are parsed.
pub trait TestCollection {
    /// All browser identifiers known to the run.
    fn browsers(&self) -> Vec<String>;

    /// Visit every test parsed for `browser_id`.
    fn each_test(&mut self, browser_id: &str, f: &mut dyn FnMut(&mut dyn TestNode));
}
