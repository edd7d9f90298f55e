//! Test tree descriptions loaded from YAML.
//!
//! A tree file lists suites and tests once; every test is parsed for every
//! browser unless it names its own browsers. An `include` entry is the
//! argument the author passed to the inclusion directive in that node.
//!
//! ```yaml
//! browsers: [chrome, passive-ie]
//! suites:
//!   - id: checkout
//!     include: passive-ie
//!   - id: checkout-card
//!     parent: checkout
//! tests:
//!   - id: pays-by-card
//!     suite: checkout-card
//!   - id: renders-logo
//!     include: ['/passive-.*/']
//! ```

use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use super::memory::{MemoryCollection, Suite, Test};
use crate::error::{PassiveBrowsersError, Result};

/// Root of a tree file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TreeFile {
    /// Browsers known to the run. Derived from the tests when empty.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub browsers: Vec<String>,

    /// Suite definitions.
    pub suites: Vec<SuiteEntry>,

    /// Test definitions.
    pub tests: Vec<TestEntry>,

    /// Where this tree was loaded from (for error reporting).
    #[serde(skip)]
    pub source: PathBuf,
}

/// A suite definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuiteEntry {
    pub id: String,

    /// Enclosing suite id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,

    /// Directive argument declared in this suite.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include: Option<Value>,
}

/// A test definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestEntry {
    pub id: String,

    /// Enclosing suite id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suite: Option<String>,

    /// Directive argument declared in this test.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include: Option<Value>,

    /// Browsers this test is parsed for. Empty means all of them.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub browsers: Vec<String>,
}

impl TreeFile {
    /// Load a tree file from disk.
    ///
    /// # Errors
    ///
    /// Returns `ConfigNotFound` if the file doesn't exist and
    /// `TreeParseError` if it is not a valid tree description.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                PassiveBrowsersError::ConfigNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                PassiveBrowsersError::Io(e)
            }
        })?;

        Self::parse(&content, path)
    }

    /// Parse YAML content into a tree description.
    pub fn parse(content: &str, source_path: &Path) -> Result<Self> {
        let mut tree: TreeFile =
            serde_yaml::from_str(content).map_err(|e| PassiveBrowsersError::TreeParseError {
                path: source_path.to_path_buf(),
                message: e.to_string(),
            })?;
        tree.source = source_path.to_path_buf();
        Ok(tree)
    }

    /// Browsers known to the run, in declaration order.
    pub fn browser_ids(&self) -> Vec<String> {
        let mut ids = self.browsers.clone();
        for browser in self.tests.iter().flat_map(|t| &t.browsers) {
            if !ids.contains(browser) {
                ids.push(browser.clone());
            }
        }
        ids
    }

    /// Build every suite, resolving parent links.
    ///
    /// # Errors
    ///
    /// Returns `TreeParseError` for an unknown parent or a parent cycle.
    pub fn build_suites(&self) -> Result<HashMap<String, Rc<Suite>>> {
        let entries: HashMap<&str, &SuiteEntry> =
            self.suites.iter().map(|s| (s.id.as_str(), s)).collect();
        let mut built = HashMap::new();

        for entry in &self.suites {
            let mut visiting = HashSet::new();
            self.build_suite(&entry.id, &entries, &mut built, &mut visiting)?;
        }

        Ok(built)
    }

    fn build_suite(
        &self,
        id: &str,
        entries: &HashMap<&str, &SuiteEntry>,
        built: &mut HashMap<String, Rc<Suite>>,
        visiting: &mut HashSet<String>,
    ) -> Result<Rc<Suite>> {
        if let Some(suite) = built.get(id) {
            return Ok(Rc::clone(suite));
        }
        if !visiting.insert(id.to_string()) {
            return Err(self.error(format!("suite '{}' is its own ancestor", id)));
        }

        let entry = entries
            .get(id)
            .ok_or_else(|| self.error(format!("unknown suite '{}'", id)))?;

        let suite = match &entry.parent {
            Some(parent_id) => {
                let parent = self.build_suite(parent_id, entries, built, visiting)?;
                Suite::child(id, &parent)
            }
            None => Suite::new(id),
        };

        built.insert(id.to_string(), Rc::clone(&suite));
        Ok(suite)
    }

    /// Instantiate the tests of every browser.
    ///
    /// # Errors
    ///
    /// Returns `TreeParseError` if a test names an unknown suite.
    pub fn build_collection(
        &self,
        suites: &HashMap<String, Rc<Suite>>,
    ) -> Result<MemoryCollection> {
        let browsers = self.browser_ids();
        let mut tests = Vec::new();

        for browser in &browsers {
            for entry in self.tests_for(browser) {
                let mut test = Test::new(&entry.id, browser);
                if let Some(suite_id) = &entry.suite {
                    let suite = suites.get(suite_id).ok_or_else(|| {
                        self.error(format!(
                            "test '{}' references unknown suite '{}'",
                            entry.id, suite_id
                        ))
                    })?;
                    test = test.in_suite(suite);
                }
                tests.push(test);
            }
        }

        Ok(MemoryCollection::with_browsers(browsers, tests))
    }

    /// Tests parsed for `browser_id`.
    pub fn tests_for<'a>(&'a self, browser_id: &'a str) -> impl Iterator<Item = &'a TestEntry> {
        self.tests
            .iter()
            .filter(move |t| t.browsers.is_empty() || t.browsers.iter().any(|b| b == browser_id))
    }

    fn error(&self, message: String) -> PassiveBrowsersError {
        PassiveBrowsersError::TreeParseError {
            path: self.source.clone(),
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{Runnable, TestCollection};

    const TREE: &str = r#"
browsers: [bro, passive-bro]
suites:
  - id: outer
    include: passive-bro
  - id: inner
    parent: outer
tests:
  - id: t1
    suite: inner
  - id: t2
    include: ['/passive/']
  - id: only-passive
    browsers: [passive-bro]
"#;

    fn tree() -> TreeFile {
        TreeFile::parse(TREE, Path::new("tree.yml")).unwrap()
    }

    #[test]
    fn parses_entries() {
        let tree = tree();
        assert_eq!(tree.suites.len(), 2);
        assert_eq!(tree.tests.len(), 3);
        assert!(tree.suites[0].include.is_some());
        assert_eq!(tree.source, PathBuf::from("tree.yml"));
    }

    #[test]
    fn suites_link_to_parents() {
        let suites = tree().build_suites().unwrap();
        let inner = &suites["inner"];
        assert_eq!(inner.parent().unwrap().id(), Some("outer"));
    }

    #[test]
    fn tests_are_replicated_per_browser() {
        let tree = tree();
        let suites = tree.build_suites().unwrap();
        let collection = tree.build_collection(&suites).unwrap();

        assert_eq!(collection.browsers(), vec!["bro", "passive-bro"]);
        assert!(collection.find("bro", "t1").is_some());
        assert!(collection.find("passive-bro", "t1").is_some());
        assert!(collection.find("bro", "only-passive").is_none());
        assert!(collection.find("passive-bro", "only-passive").is_some());
    }

    #[test]
    fn unknown_parent_is_an_error() {
        let tree = TreeFile::parse(
            "suites:\n  - id: a\n    parent: missing\n",
            Path::new("t.yml"),
        )
        .unwrap();
        let err = tree.build_suites().unwrap_err();
        assert!(err.to_string().contains("unknown suite 'missing'"));
    }

    #[test]
    fn parent_cycle_is_an_error() {
        let tree = TreeFile::parse(
            "suites:\n  - id: a\n    parent: b\n  - id: b\n    parent: a\n",
            Path::new("t.yml"),
        )
        .unwrap();
        assert!(tree.build_suites().is_err());
    }

    #[test]
    fn unknown_test_suite_is_an_error() {
        let tree = TreeFile::parse(
            "browsers: [bro]\ntests:\n  - id: t\n    suite: nope\n",
            Path::new("t.yml"),
        )
        .unwrap();
        let suites = tree.build_suites().unwrap();
        assert!(tree.build_collection(&suites).is_err());
    }

    #[test]
    fn malformed_yaml_is_a_tree_error() {
        let err = TreeFile::parse("tests: {", Path::new("bad.yml")).unwrap_err();
        assert!(matches!(err, PassiveBrowsersError::TreeParseError { .. }));
    }

    #[test]
    fn browsers_are_derived_from_tests() {
        let tree = TreeFile::parse(
            "tests:\n  - id: t\n    browsers: [x, y]\n",
            Path::new("t.yml"),
        )
        .unwrap();
        assert_eq!(tree.browser_ids(), vec!["x", "y"]);
    }
}
