//! The inclusion directive exposed to test authors.
//!
//! A controller is installed into the host's test parser under the
//! configured command name, once per file per browser. Authors call it from
//! inside a test or suite; the host passes that node explicitly.

use serde_yaml::Value;
use std::cell::RefCell;
use std::rc::Rc;

use super::store::DirectiveRegistry;
use crate::error::Result;
use crate::matcher::Matcher;
use crate::tree::Runnable;

/// Name of the directive method, used in validation errors.
pub const DIRECTIVE_NAME: &str = "in";

/// Callback behind `<commandName>.in(matcher)`.
pub trait Controller {
    /// Declare that `node` should run in the browsers selected by `matcher`.
    fn include(&self, node: &dyn Runnable, matcher: &Matcher);

    /// Validate an untyped directive argument, then declare it.
    ///
    /// # Errors
    ///
    /// Returns `InvalidOptionType` or `InvalidPattern` when the argument is
    /// not a valid matcher.
    fn include_value(&self, node: &dyn Runnable, value: &Value) -> Result<()> {
        let matcher = Matcher::from_value(DIRECTIVE_NAME, value)?;
        self.include(node, &matcher);
        Ok(())
    }
}

/// Records directives for the browser the file is being parsed for.
///
/// Nothing is recorded when the matcher does not select that browser, so a
/// directive never leaks into another browser's resolution.
#[derive(Debug, Clone)]
pub struct RecordingController {
    browser_id: String,
    registry: Rc<RefCell<DirectiveRegistry>>,
}

impl RecordingController {
    pub fn new(browser_id: impl Into<String>, registry: Rc<RefCell<DirectiveRegistry>>) -> Self {
        Self {
            browser_id: browser_id.into(),
            registry,
        }
    }

    /// Browser this controller records for.
    pub fn browser_id(&self) -> &str {
        &self.browser_id
    }
}

impl Controller for RecordingController {
    fn include(&self, node: &dyn Runnable, matcher: &Matcher) {
        if !matcher.matches(&self.browser_id) {
            return;
        }

        if self.registry.borrow_mut().register(&self.browser_id, node) {
            tracing::debug!(
                browser = %self.browser_id,
                kind = %node.kind(),
                id = node.id().unwrap_or_default(),
                %matcher,
                "Registered inclusion directive"
            );
        }
    }
}

/// Accepts directives without recording them.
///
/// Installed in subordinate processes so files that use the directive still parse.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopController;

impl Controller for NoopController {
    fn include(&self, _node: &dyn Runnable, _matcher: &Matcher) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{RunnableKind, Suite, Test};

    fn shared() -> Rc<RefCell<DirectiveRegistry>> {
        Rc::new(RefCell::new(DirectiveRegistry::new()))
    }

    #[test]
    fn records_when_matcher_selects_current_browser() {
        let registry = shared();
        let controller = RecordingController::new("passive-bro", Rc::clone(&registry));
        let test = Test::new("t", "passive-bro");

        controller.include(&test, &Matcher::exact("passive-bro"));

        assert!(registry
            .borrow()
            .has_directive("passive-bro", RunnableKind::Test, "t"));
    }

    #[test]
    fn ignores_matcher_for_other_browser() {
        let registry = shared();
        let controller = RecordingController::new("bassive-bro", Rc::clone(&registry));
        let test = Test::new("t", "bassive-bro");

        controller.include(&test, &Matcher::exact("passive-bro"));

        assert!(registry.borrow().is_empty());
    }

    #[test]
    fn records_suite_in_suite_store() {
        let registry = shared();
        let controller = RecordingController::new("passive-bro", Rc::clone(&registry));
        let suite = Suite::new("s");

        controller.include(&*suite, &Matcher::pattern("passive").unwrap());

        let registry = registry.borrow();
        assert!(registry.has_directive("passive-bro", RunnableKind::Suite, "s"));
        assert!(!registry.has_directive("passive-bro", RunnableKind::Test, "s"));
    }

    #[test]
    fn include_value_validates_argument() {
        let registry = shared();
        let controller = RecordingController::new("bro", Rc::clone(&registry));
        let test = Test::new("t", "bro");

        let err = controller
            .include_value(&test, &Value::from(100500))
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "\"in\" option must be: String or RegExp or Array, but got number"
        );
        assert!(registry.borrow().is_empty());
    }

    #[test]
    fn include_value_accepts_sequences() {
        let registry = shared();
        let controller = RecordingController::new("bro2", Rc::clone(&registry));
        let test = Test::new("t", "bro2");
        let value: Value = serde_yaml::from_str("[bro1, bro2]").unwrap();

        controller.include_value(&test, &value).unwrap();

        assert!(registry.borrow().has_directive("bro2", RunnableKind::Test, "t"));
    }

    #[test]
    fn noop_controller_still_validates() {
        let test = Test::new("t", "bro");

        assert!(NoopController
            .include_value(&test, &Value::from("bro"))
            .is_ok());
        assert!(NoopController
            .include_value(&test, &Value::from(true))
            .is_err());
    }
}
