//! Plan command implementation.
//!
//! The `passive-browsers plan` command replays a test tree through the
//! plugin lifecycle: every browser parses the tree once, declared
//! directives go through the installed controller, and the final disabled
//! flag of every test is printed.

use serde::Serialize;
use serde_yaml::Value;
use std::collections::HashMap;
use std::rc::Rc;

use crate::cli::args::PlanArgs;
use crate::config::{parse_config, ConfigSources};
use crate::error::Result;
use crate::plugin::{Lifecycle, PassiveBrowsers, TestParser};
use crate::registry::Controller;
use crate::selection::DisableReport;
use crate::tree::{MemoryCollection, Runnable, Suite, TestNode, TreeFile};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Parser for one pass over a tree file, holding installed controllers.
#[derive(Default)]
struct TreeParser {
    controllers: HashMap<String, Box<dyn Controller>>,
}

impl TestParser for TreeParser {
    fn set_controller(&mut self, name: &str, controller: Box<dyn Controller>) {
        self.controllers.insert(name.to_string(), controller);
    }
}

/// Final state of one test.
#[derive(Debug, Serialize)]
struct PlannedTest<'a> {
    browser: &'a str,
    id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    disabled: Option<bool>,
}

#[derive(Debug, Serialize)]
struct Plan<'a> {
    tests: Vec<PlannedTest<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    report: Option<DisableReport>,
}

/// The plan command implementation.
pub struct PlanCommand {
    sources: ConfigSources,
    args: PlanArgs,
}

impl PlanCommand {
    /// Create a new plan command.
    pub fn new(sources: &ConfigSources, args: PlanArgs) -> Self {
        Self {
            sources: sources.clone(),
            args,
        }
    }

    /// Parse every browser's copy of the tree, feeding declared directives to the controller.
    fn read_files(
        &self,
        tree: &TreeFile,
        suites: &HashMap<String, Rc<Suite>>,
        collection: &MemoryCollection,
        lifecycle: &Lifecycle,
        command_name: &str,
        ui: &mut dyn UserInterface,
    ) -> Result<()> {
        let mut warned = false;

        for browser in tree.browser_ids() {
            let mut parser = TreeParser::default();
            lifecycle.before_file_read(&browser, &mut parser);

            let mut declarations: Vec<(&dyn Runnable, &Value)> = Vec::new();
            for entry in &tree.suites {
                if let (Some(value), Some(suite)) = (&entry.include, suites.get(&entry.id)) {
                    declarations.push((&**suite, value));
                }
            }
            for entry in tree.tests_for(&browser) {
                if let (Some(value), Some(test)) =
                    (&entry.include, collection.find(&browser, &entry.id))
                {
                    declarations.push((test, value));
                }
            }

            for (node, value) in declarations {
                match parser.controllers.get(command_name) {
                    Some(controller) => controller.include_value(node, value)?,
                    None if !warned => {
                        ui.warning(&format!(
                            "'{}' is not installed; directives are ignored",
                            command_name
                        ));
                        warned = true;
                    }
                    None => {}
                }
            }
        }

        Ok(())
    }
}

impl Command for PlanCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = parse_config(&self.sources)?;
        let tree = TreeFile::load(&self.args.tree)?;
        let suites = tree.build_suites()?;
        let mut collection = tree.build_collection(&suites)?;

        let command_name = config.command_name.clone();
        let mut lifecycle = Lifecycle::new();
        let plugin = PassiveBrowsers::install(config, self.args.role.into(), &mut lifecycle);

        self.read_files(&tree, &suites, &collection, &lifecycle, &command_name, ui)?;
        lifecycle.after_tests_read(&mut collection);
        let report = plugin.last_report();

        if self.args.json {
            let plan = Plan {
                tests: collection
                    .tests()
                    .iter()
                    .map(|t| PlannedTest {
                        browser: t.browser_id(),
                        id: t.test_id(),
                        disabled: t.disabled(),
                    })
                    .collect(),
                report,
            };
            let json = serde_json::to_string_pretty(&plan).map_err(anyhow::Error::from)?;
            ui.message(&json);
            return Ok(CommandResult::success());
        }

        for test in collection.tests() {
            let state = match test.disabled() {
                Some(true) => "disabled",
                _ => "enabled",
            };
            ui.message(&format!("{} {} {}", test.browser_id(), test.test_id(), state));
        }

        match report {
            Some(report) => ui.success(&format!(
                "{} disabled, {} kept in {} passive browsers",
                report.disabled(),
                report.kept(),
                report.browsers.len()
            )),
            None => ui.warning("No resolution pass ran"),
        }

        Ok(CommandResult::success())
    }
}
