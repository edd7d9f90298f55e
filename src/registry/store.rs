//! Per-browser directive storage.

use std::collections::{HashMap, HashSet};

use crate::tree::{Runnable, RunnableKind};

/// Ids that opted in for one browser, split by runnable kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct BrowserDirectives {
    tests: HashSet<String>,
    suites: HashSet<String>,
}

impl BrowserDirectives {
    fn store(&self, kind: RunnableKind) -> &HashSet<String> {
        match kind {
            RunnableKind::Test => &self.tests,
            RunnableKind::Suite => &self.suites,
        }
    }

    fn store_mut(&mut self, kind: RunnableKind) -> &mut HashSet<String> {
        match kind {
            RunnableKind::Test => &mut self.tests,
            RunnableKind::Suite => &mut self.suites,
        }
    }
}

/// Records which tests and suites opted in for which browser.
///
/// Created once per run, filled while files are parsed and read once when
/// tests are resolved. Registering the same directive twice has no effect.
///
/// # Example
///
/// ```
/// use passive_browsers::registry::DirectiveRegistry;
/// use passive_browsers::tree::RunnableKind;
///
/// let mut registry = DirectiveRegistry::new();
/// registry.register_id("passive-bro", RunnableKind::Suite, "checkout");
///
/// assert!(registry.has_directive("passive-bro", RunnableKind::Suite, "checkout"));
/// assert!(!registry.has_directive("passive-bro", RunnableKind::Test, "checkout"));
/// assert!(!registry.has_directive("bro", RunnableKind::Suite, "checkout"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct DirectiveRegistry {
    browsers: HashMap<String, BrowserDirectives>,
}

impl DirectiveRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `node` opted in for `browser_id`.
    ///
    /// Nodes without an identity cannot be looked up later and are skipped.
    /// Returns whether a directive was recorded.
    pub fn register(&mut self, browser_id: &str, node: &dyn Runnable) -> bool {
        match node.id() {
            Some(id) => {
                self.register_id(browser_id, node.kind(), id);
                true
            }
            None => {
                tracing::debug!(
                    browser = browser_id,
                    kind = %node.kind(),
                    "Skipping directive of anonymous node"
                );
                false
            }
        }
    }

    /// Record a directive by id.
    pub fn register_id(&mut self, browser_id: &str, kind: RunnableKind, id: &str) {
        self.browsers
            .entry(browser_id.to_string())
            .or_default()
            .store_mut(kind)
            .insert(id.to_string());
    }

    /// Whether `id` of the given kind opted in for `browser_id`.
    pub fn has_directive(&self, browser_id: &str, kind: RunnableKind, id: &str) -> bool {
        self.browsers
            .get(browser_id)
            .is_some_and(|d| d.store(kind).contains(id))
    }

    /// Browsers that received at least one directive.
    pub fn browsers(&self) -> impl Iterator<Item = &str> {
        self.browsers.keys().map(String::as_str)
    }

    /// Total number of recorded directives.
    pub fn len(&self) -> usize {
        self.browsers
            .values()
            .map(|d| d.tests.len() + d.suites.len())
            .sum()
    }

    /// Check if no directive was recorded.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
