//! Test disablement for passive browsers.
//!
//! In a passive browser a test is disabled unless it, or one of its
//! ancestor suites, declared an inclusion directive for that browser. The
//! test itself is looked up among test directives; every ancestor among
//! suite directives. The walk continues to the root, so a directive on an
//! outer suite covers tests nested any number of levels below it.

use serde::Serialize;

use crate::registry::DirectiveRegistry;
use crate::tree::{Runnable, RunnableKind, TestCollection};

/// Decide whether `test` should run in passive browser `browser_id`.
///
/// A node without an id cannot carry a directive; the walk moves on to its parent.
pub fn should_run(test: &dyn Runnable, browser_id: &str, registry: &DirectiveRegistry) -> bool {
    let mut current = Some(test);
    let mut kind = RunnableKind::Test;

    while let Some(node) = current {
        if node
            .id()
            .is_some_and(|id| registry.has_directive(browser_id, kind, id))
        {
            return true;
        }
        current = node.parent();
        kind = RunnableKind::Suite;
    }

    false
}

/// Outcome of disablement in one passive browser.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BrowserOutcome {
    pub browser: String,
    pub kept: usize,
    pub disabled: usize,
}

/// Outcome of a whole disablement pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DisableReport {
    pub browsers: Vec<BrowserOutcome>,
}

impl DisableReport {
    /// Total tests disabled across browsers.
    pub fn disabled(&self) -> usize {
        self.browsers.iter().map(|b| b.disabled).sum()
    }

    /// Total tests kept across browsers.
    pub fn kept(&self) -> usize {
        self.browsers.iter().map(|b| b.kept).sum()
    }

    /// Outcome for one browser, if it was passive.
    pub fn browser(&self, browser_id: &str) -> Option<&BrowserOutcome> {
        self.browsers.iter().find(|b| b.browser == browser_id)
    }
}

/// Set the disabled flag of every test in every passive browser.
///
/// Tests in browsers not listed in `passive` are left untouched. Running
/// the pass again with the same inputs assigns the same flags.
pub fn apply(
    passive: &[String],
    collection: &mut dyn TestCollection,
    registry: &DirectiveRegistry,
) -> DisableReport {
    let mut report = DisableReport::default();

    for browser_id in passive {
        let mut outcome = BrowserOutcome {
            browser: browser_id.clone(),
            ..Default::default()
        };

        collection.each_test(browser_id, &mut |test| {
            let keep = should_run(test.as_runnable(), browser_id, registry);
            test.set_disabled(!keep);

            if keep {
                outcome.kept += 1;
            } else {
                outcome.disabled += 1;
            }
            tracing::trace!(
                browser = %browser_id,
                test = test.id().unwrap_or_default(),
                keep,
                "Resolved test"
            );
        });

        tracing::debug!(
            browser = %browser_id,
            kept = outcome.kept,
            disabled = outcome.disabled,
            "Disabled tests in passive browser"
        );
        report.browsers.push(outcome);
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{MemoryCollection, Suite, Test, TestNode};

    fn passive(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_without_any_directive_is_disabled() {
        let registry = DirectiveRegistry::new();
        let mut collection = MemoryCollection::new(vec![Test::new("t", "passive-bro")]);

        let report = apply(&passive(&["passive-bro"]), &mut collection, &registry);

        assert_eq!(
            collection.find("passive-bro", "t").unwrap().disabled(),
            Some(true)
        );
        assert_eq!(report.disabled(), 1);
    }

    #[test]
    fn non_passive_browser_is_untouched() {
        let registry = DirectiveRegistry::new();
        let mut collection =
            MemoryCollection::new(vec![Test::new("t", "bro"), Test::new("t", "passive-bro")]);

        apply(&passive(&["passive-bro"]), &mut collection, &registry);

        assert_eq!(collection.find("bro", "t").unwrap().disabled(), None);
    }

    #[test]
    fn direct_directive_keeps_test() {
        let mut registry = DirectiveRegistry::new();
        registry.register_id("passive-bro", RunnableKind::Test, "kept");
        let mut collection = MemoryCollection::new(vec![
            Test::new("kept", "passive-bro"),
            Test::new("sibling", "passive-bro"),
        ]);

        let report = apply(&passive(&["passive-bro"]), &mut collection, &registry);

        assert_eq!(
            collection.find("passive-bro", "kept").unwrap().disabled(),
            Some(false)
        );
        assert_eq!(
            collection.find("passive-bro", "sibling").unwrap().disabled(),
            Some(true)
        );
        assert_eq!(report.browser("passive-bro").unwrap().kept, 1);
    }

    #[test]
    fn suite_directive_keeps_children() {
        let mut registry = DirectiveRegistry::new();
        registry.register_id("passive-bro", RunnableKind::Suite, "suite");
        let suite = Suite::new("suite");
        let mut collection = MemoryCollection::new(vec![
            Test::new("t1", "passive-bro").in_suite(&suite),
            Test::new("t2", "passive-bro").in_suite(&suite),
        ]);

        apply(&passive(&["passive-bro"]), &mut collection, &registry);

        assert!(collection.tests().iter().all(|t| t.disabled() == Some(false)));
    }

    #[test]
    fn outer_suite_directive_reaches_nested_tests() {
        let mut registry = DirectiveRegistry::new();
        registry.register_id("passive-bro", RunnableKind::Suite, "outer");
        let outer = Suite::new("outer");
        let middle = Suite::child("middle", &outer);
        let inner = Suite::child("inner", &middle);
        let test = Test::new("t", "passive-bro").in_suite(&inner);

        assert!(should_run(&test, "passive-bro", &registry));
    }

    #[test]
    fn suite_directive_for_other_passive_browser_does_not_apply() {
        let mut registry = DirectiveRegistry::new();
        registry.register_id("passive-a", RunnableKind::Suite, "suite");
        let suite = Suite::new("suite");
        let test = Test::new("t", "passive-b").in_suite(&suite);

        assert!(!should_run(&test, "passive-b", &registry));
    }

    #[test]
    fn suite_id_in_test_store_does_not_apply_to_children() {
        let mut registry = DirectiveRegistry::new();
        registry.register_id("passive-bro", RunnableKind::Test, "suite");
        let suite = Suite::new("suite");
        let test = Test::new("t", "passive-bro").in_suite(&suite);

        assert!(!should_run(&test, "passive-bro", &registry));
    }

    #[test]
    fn anonymous_suite_is_walked_past() {
        let mut registry = DirectiveRegistry::new();
        registry.register_id("passive-bro", RunnableKind::Suite, "outer");
        let outer = Suite::new("outer");
        let anonymous = Suite::anonymous(Some(&outer));
        let test = Test::new("t", "passive-bro").in_suite(&anonymous);

        assert!(should_run(&test, "passive-bro", &registry));
    }

    #[test]
    fn direct_directive_wins_regardless_of_ancestors() {
        let mut registry = DirectiveRegistry::new();
        registry.register_id("passive-bro", RunnableKind::Test, "t");
        let suite = Suite::new("suite");
        let test = Test::new("t", "passive-bro").in_suite(&suite);

        assert!(should_run(&test, "passive-bro", &registry));
    }

    #[test]
    fn pass_is_idempotent() {
        let mut registry = DirectiveRegistry::new();
        registry.register_id("p", RunnableKind::Test, "keep");
        let mut collection =
            MemoryCollection::new(vec![Test::new("keep", "p"), Test::new("drop", "p")]);

        let first = apply(&passive(&["p"]), &mut collection, &registry);
        let snapshot: Vec<_> = collection.tests().iter().map(|t| t.disabled()).collect();
        let second = apply(&passive(&["p"]), &mut collection, &registry);
        let again: Vec<_> = collection.tests().iter().map(|t| t.disabled()).collect();

        assert_eq!(first, second);
        assert_eq!(snapshot, again);
    }

    #[test]
    fn report_lists_every_passive_browser() {
        let registry = DirectiveRegistry::new();
        let mut collection = MemoryCollection::new(vec![Test::new("t", "a")]);

        let report = apply(&passive(&["a", "b"]), &mut collection, &registry);

        assert_eq!(report.browsers.len(), 2);
        assert_eq!(report.browser("b").unwrap().disabled, 0);
    }
}
