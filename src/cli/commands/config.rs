//! Config command implementation.
//!
//! The `passive-browsers config` command shows the options after every
//! source has been layered and validated.

use crate::cli::args::ConfigArgs;
use crate::config::{validate, ConfigSources, OPTION_NAMES};
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The config command implementation.
pub struct ConfigCommand {
    sources: ConfigSources,
    args: ConfigArgs,
}

impl ConfigCommand {
    /// Create a new config command.
    pub fn new(sources: &ConfigSources, args: ConfigArgs) -> Self {
        Self {
            sources: sources.clone(),
            args,
        }
    }
}

impl Command for ConfigCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let stack = self.sources.layers()?;
        let config = validate(&stack)?;

        if self.args.json {
            let json = serde_json::to_string_pretty(&config).map_err(anyhow::Error::from)?;
            ui.message(&json);
            return Ok(CommandResult::success());
        }

        let yaml = serde_yaml::to_string(&config).map_err(anyhow::Error::from)?;
        ui.message(yaml.trim_end());

        for option in OPTION_NAMES {
            if let Some(source) = stack.source_of(option) {
                ui.success(&format!("{} from {}", option, source));
            }
        }

        Ok(CommandResult::success())
    }
}
