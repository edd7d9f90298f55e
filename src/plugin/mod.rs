//! Wiring into the host framework.
//!
//! [`PassiveBrowsers`] connects directive collection and test disablement
//! to the host's lifecycle:
//!
//! - while each file is parsed, a controller is installed under the
//!   configured command name
//! - once every file is parsed, passive browsers are resolved and their
//!   tests disabled, before any other observer sees the tests
//!
//! # Example
//!
//! ```
//! use passive_browsers::config::PluginConfig;
//! use passive_browsers::plugin::{Lifecycle, PassiveBrowsers, Role};
//! use passive_browsers::tree::{MemoryCollection, Test, TestNode};
//!
//! let mut lifecycle = Lifecycle::new();
//! let config = PluginConfig::new("only").with_browsers("passive-bro");
//! let plugin = PassiveBrowsers::install(config, Role::Coordinator, &mut lifecycle);
//!
//! let mut collection = MemoryCollection::new(vec![
//!     Test::new("t", "bro"),
//!     Test::new("t", "passive-bro"),
//! ]);
//! lifecycle.after_tests_read(&mut collection);
//!
//! assert_eq!(collection.find("bro", "t").unwrap().disabled(), None);
//! assert_eq!(collection.find("passive-bro", "t").unwrap().disabled(), Some(true));
//! assert_eq!(plugin.last_report().unwrap().disabled(), 1);
//! ```

pub mod lifecycle;

pub use lifecycle::{FileReadObserver, Lifecycle, TestParser, TestsReadObserver};

use std::cell::{Ref, RefCell};
use std::rc::Rc;

use crate::config::PluginConfig;
use crate::registry::{DirectiveRegistry, NoopController, RecordingController};
use crate::selection::{apply, resolve_passive_browsers, DisableReport};
use crate::tree::TestCollection;

/// Which part of a distributed run this process plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Collects directives and decides which tests are disabled.
    Coordinator,
    /// Only parses files for execution; directives are accepted and dropped.
    Subordinate,
}

/// One run of passive browser selection.
///
/// Owns the run's [`DirectiveRegistry`]. Controllers installed into the
/// parser hold a shared handle to it.
#[derive(Debug)]
pub struct PassiveBrowsers {
    config: PluginConfig,
    role: Role,
    registry: Rc<RefCell<DirectiveRegistry>>,
    report: RefCell<Option<DisableReport>>,
}

impl PassiveBrowsers {
    /// Create a run without attaching it to a lifecycle.
    pub fn new(config: PluginConfig, role: Role) -> Self {
        Self {
            config,
            role,
            registry: Rc::new(RefCell::new(DirectiveRegistry::new())),
            report: RefCell::new(None),
        }
    }

    /// Create a run and register it with `lifecycle`.
    ///
    /// Nothing is registered when the configuration is disabled. A
    /// subordinate only installs its controller. A coordinator also
    /// resolves tests, ahead of every other tests-read observer.
    pub fn install(config: PluginConfig, role: Role, lifecycle: &mut Lifecycle) -> Rc<Self> {
        let plugin = Rc::new(Self::new(config, role));

        if !plugin.config.enabled {
            tracing::debug!("Passive browsers disabled");
            return plugin;
        }

        lifecycle.on_before_file_read(plugin.clone());
        if role == Role::Coordinator {
            lifecycle.prepend_tests_read(plugin.clone());
        }

        plugin
    }

    /// The configuration this run uses.
    pub fn config(&self) -> &PluginConfig {
        &self.config
    }

    /// The role this run was created for.
    pub fn role(&self) -> Role {
        self.role
    }

    /// Directives collected so far.
    pub fn registry(&self) -> Ref<'_, DirectiveRegistry> {
        self.registry.borrow()
    }

    /// Outcome of the last resolution pass, if one ran.
    pub fn last_report(&self) -> Option<DisableReport> {
        self.report.borrow().clone()
    }

    /// Install the controller for a file parsed for `browser_id`.
    pub fn install_controller(&self, browser_id: &str, parser: &mut dyn TestParser) {
        if !self.config.enabled {
            return;
        }

        match self.role {
            Role::Coordinator => parser.set_controller(
                &self.config.command_name,
                Box::new(RecordingController::new(
                    browser_id,
                    Rc::clone(&self.registry),
                )),
            ),
            Role::Subordinate => {
                parser.set_controller(&self.config.command_name, Box::new(NoopController))
            }
        }
    }

    /// Resolve passive browsers and disable their tests.
    ///
    /// Returns `None` when disabled or in the subordinate role.
    pub fn resolve(&self, collection: &mut dyn TestCollection) -> Option<DisableReport> {
        if !self.config.enabled || self.role != Role::Coordinator {
            return None;
        }

        let browsers = collection.browsers();
        let passive = resolve_passive_browsers(&browsers, &self.config.browsers);
        let report = apply(&passive, collection, &self.registry.borrow());

        tracing::info!(
            passive = passive.len(),
            browsers = browsers.len(),
            directives = self.registry.borrow().len(),
            kept = report.kept(),
            disabled = report.disabled(),
            "Resolved passive browsers"
        );

        *self.report.borrow_mut() = Some(report.clone());
        Some(report)
    }
}

impl FileReadObserver for PassiveBrowsers {
    fn before_file_read(&self, browser_id: &str, parser: &mut dyn TestParser) {
        self.install_controller(browser_id, parser);
    }
}

impl TestsReadObserver for PassiveBrowsers {
    fn after_tests_read(&self, collection: &mut dyn TestCollection) {
        self.resolve(collection);
    }
}
