//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use crate::cli::args::{Cli, Commands};
use crate::config::ConfigSources;
use crate::error::Result;
use crate::ui::UserInterface;

/// Trait for command implementations.
pub trait Command {
    /// Execute the command.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Exit code to use (0 for success).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self { exit_code: 0 }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    sources: ConfigSources,
}

impl CommandDispatcher {
    /// Create a dispatcher that reads options from `sources`.
    pub fn new(sources: ConfigSources) -> Self {
        Self { sources }
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Commands::Resolve(args) => {
                let cmd = super::resolve::ResolveCommand::new(&self.sources, args.clone());
                cmd.execute(ui)
            }
            Commands::Plan(args) => {
                let cmd = super::plan::PlanCommand::new(&self.sources, args.clone());
                cmd.execute(ui)
            }
            Commands::Config(args) => {
                let cmd = super::config::ConfigCommand::new(&self.sources, args.clone());
                cmd.execute(ui)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use clap::Parser;

    #[test]
    fn command_result_success() {
        assert_eq!(CommandResult::success().exit_code, 0);
    }

    #[test]
    fn dispatches_resolve() {
        let options = serde_yaml::from_str("browsers: passive-bro\ncommandName: only").unwrap();
        let dispatcher = CommandDispatcher::new(ConfigSources::from_options(options));
        let cli = Cli::parse_from(["passive-browsers", "resolve", "-b", "bro,passive-bro"]);
        let mut ui = MockUI::new();

        let result = dispatcher.dispatch(&cli, &mut ui).unwrap();

        assert_eq!(result.exit_code, 0);
        assert_eq!(ui.messages(), &["passive-bro".to_string()]);
    }

    #[test]
    fn propagates_config_errors() {
        let options = serde_yaml::from_str("commandName: 1").unwrap();
        let dispatcher = CommandDispatcher::new(ConfigSources::from_options(options));
        let cli = Cli::parse_from(["passive-browsers", "config"]);
        let mut ui = MockUI::new();

        assert!(dispatcher.dispatch(&cli, &mut ui).is_err());
    }
}
