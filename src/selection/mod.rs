//! Passive browser resolution and test disablement.
//!
//! Runs once after every file has been parsed:
//!
//! 1. [`resolve_passive_browsers`] picks the passive browsers out of all known ones
//! 2. [`apply`] walks every test of each passive browser and sets its disabled flag

pub mod disable;
pub mod passive;

pub use disable::{apply, should_run, BrowserOutcome, DisableReport};
pub use passive::resolve_passive_browsers;
