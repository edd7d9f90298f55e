//! In-memory test tree.

use std::rc::Rc;

use super::{Runnable, RunnableKind, TestCollection, TestNode};

/// A suite. Shared between its children through `Rc`.
#[derive(Debug, Clone, PartialEq)]
pub struct Suite {
    id: Option<String>,
    parent: Option<Rc<Suite>>,
}

impl Suite {
    /// Create a top-level suite.
    pub fn new(id: impl Into<String>) -> Rc<Self> {
        Rc::new(Self {
            id: Some(id.into()),
            parent: None,
        })
    }

    /// Create a suite nested in `parent`.
    pub fn child(id: impl Into<String>, parent: &Rc<Suite>) -> Rc<Self> {
        Rc::new(Self {
            id: Some(id.into()),
            parent: Some(Rc::clone(parent)),
        })
    }

    /// Create a suite with no identity, such as a host's implicit root.
    pub fn anonymous(parent: Option<&Rc<Suite>>) -> Rc<Self> {
        Rc::new(Self {
            id: None,
            parent: parent.cloned(),
        })
    }
}

impl Runnable for Suite {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn parent(&self) -> Option<&dyn Runnable> {
        self.parent.as_deref().map(|s| s as &dyn Runnable)
    }

    fn kind(&self) -> RunnableKind {
        RunnableKind::Suite
    }
}

/// A test parsed for one browser.
#[derive(Debug, Clone, PartialEq)]
pub struct Test {
    id: String,
    browser_id: String,
    parent: Option<Rc<Suite>>,
    disabled: Option<bool>,
}

impl Test {
    /// Create a test for `browser_id`.
    pub fn new(id: impl Into<String>, browser_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            browser_id: browser_id.into(),
            parent: None,
            disabled: None,
        }
    }

    /// Place this test inside `suite`.
    pub fn in_suite(mut self, suite: &Rc<Suite>) -> Self {
        self.parent = Some(Rc::clone(suite));
        self
    }

    /// Browser this test was parsed for.
    pub fn browser_id(&self) -> &str {
        &self.browser_id
    }

    /// The test identity.
    pub fn test_id(&self) -> &str {
        &self.id
    }
}

impl Runnable for Test {
    fn id(&self) -> Option<&str> {
        Some(&self.id)
    }

    fn parent(&self) -> Option<&dyn Runnable> {
        self.parent.as_deref().map(|s| s as &dyn Runnable)
    }

    fn kind(&self) -> RunnableKind {
        RunnableKind::Test
    }
}

impl TestNode for Test {
    fn disabled(&self) -> Option<bool> {
        self.disabled
    }

    fn set_disabled(&mut self, disabled: bool) {
        self.disabled = Some(disabled);
    }

    fn as_runnable(&self) -> &dyn Runnable {
        self
    }
}

/// Tests for every browser, held in parse order.
#[derive(Debug, Clone, Default)]
pub struct MemoryCollection {
    browsers: Vec<String>,
    tests: Vec<Test>,
}

impl MemoryCollection {
    /// Build a collection whose browsers are those the tests were parsed for.
    ///
    /// # Example
    ///
    /// ```
    /// use passive_browsers::tree::{MemoryCollection, Test, TestCollection};
    ///
    /// let collection = MemoryCollection::new(vec![
    ///     Test::new("t1", "bro"),
    ///     Test::new("t2", "passive-bro"),
    ///     Test::new("t3", "bro"),
    /// ]);
    /// assert_eq!(collection.browsers(), vec!["bro", "passive-bro"]);
    /// ```
    pub fn new(tests: Vec<Test>) -> Self {
        let mut browsers: Vec<String> = Vec::new();
        for test in &tests {
            if !browsers.iter().any(|b| b == test.browser_id()) {
                browsers.push(test.browser_id().to_string());
            }
        }
        Self { browsers, tests }
    }

    /// Build a collection with an explicit browser list.
    ///
    /// Browsers that have no tests are still reported by [`TestCollection::browsers`].
    pub fn with_browsers(browsers: Vec<String>, tests: Vec<Test>) -> Self {
        Self { browsers, tests }
    }

    /// All tests across browsers.
    pub fn tests(&self) -> &[Test] {
        &self.tests
    }

    /// Find the test with `id` parsed for `browser_id`.
    pub fn find(&self, browser_id: &str, id: &str) -> Option<&Test> {
        self.tests
            .iter()
            .find(|t| t.browser_id() == browser_id && t.test_id() == id)
    }
}

impl TestCollection for MemoryCollection {
    fn browsers(&self) -> Vec<String> {
        self.browsers.clone()
    }

    fn each_test(&mut self, browser_id: &str, f: &mut dyn FnMut(&mut dyn TestNode)) {
        for test in self
            .tests
            .iter_mut()
            .filter(|t| t.browser_id == browser_id)
        {
            f(test);
        }
    }
}
