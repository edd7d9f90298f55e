//! Host lifecycle hooks.
//!
//! The host calls [`Lifecycle::before_file_read`] once per file per
//! browser and [`Lifecycle::after_tests_read`] once after every file has
//! been parsed. Observers run in registration order; [`Lifecycle::prepend_tests_read`]
//! puts an observer ahead of all others.

use std::rc::Rc;

use crate::registry::Controller;
use crate::tree::TestCollection;

/// The host's test parser, as seen while one file is being read.
pub trait TestParser {
    /// Expose `controller` to test files under `name`.
    fn set_controller(&mut self, name: &str, controller: Box<dyn Controller>);
}

/// Observer of the per-file parse signal.
pub trait FileReadObserver {
    fn before_file_read(&self, browser_id: &str, parser: &mut dyn TestParser);
}

/// Observer of the all-files-parsed signal.
pub trait TestsReadObserver {
    fn after_tests_read(&self, collection: &mut dyn TestCollection);
}

/// Ordered observers for both lifecycle signals.
#[derive(Default)]
pub struct Lifecycle {
    file_read: Vec<Rc<dyn FileReadObserver>>,
    tests_read: Vec<Rc<dyn TestsReadObserver>>,
}

impl Lifecycle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a per-file observer after existing ones.
    pub fn on_before_file_read(&mut self, observer: Rc<dyn FileReadObserver>) {
        self.file_read.push(observer);
    }

    /// Add a tests-read observer after existing ones.
    pub fn on_after_tests_read(&mut self, observer: Rc<dyn TestsReadObserver>) {
        self.tests_read.push(observer);
    }

    /// Add a tests-read observer ahead of existing ones.
    pub fn prepend_tests_read(&mut self, observer: Rc<dyn TestsReadObserver>) {
        self.tests_read.insert(0, observer);
    }

    /// Signal that a file is about to be parsed for `browser_id`.
    pub fn before_file_read(&self, browser_id: &str, parser: &mut dyn TestParser) {
        for observer in &self.file_read {
            observer.before_file_read(browser_id, parser);
        }
    }

    /// Signal that every file has been parsed.
    pub fn after_tests_read(&self, collection: &mut dyn TestCollection) {
        for observer in &self.tests_read {
            observer.after_tests_read(collection);
        }
    }

    /// Number of tests-read observers.
    pub fn tests_read_len(&self) -> usize {
        self.tests_read.len()
    }

    /// Number of per-file observers.
    pub fn file_read_len(&self) -> usize {
        self.file_read.len()
    }
}
