//! Resolve command implementation.
//!
//! The `passive-browsers resolve` command lists which of the given
//! browsers the configured matcher marks as passive.

use crate::cli::args::ResolveArgs;
use crate::config::{parse_config, ConfigSources};
use crate::error::Result;
use crate::selection::resolve_passive_browsers;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The resolve command implementation.
pub struct ResolveCommand {
    sources: ConfigSources,
    args: ResolveArgs,
}

impl ResolveCommand {
    /// Create a new resolve command.
    pub fn new(sources: &ConfigSources, args: ResolveArgs) -> Self {
        Self {
            sources: sources.clone(),
            args,
        }
    }
}

impl Command for ResolveCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = parse_config(&self.sources)?;

        let passive = if config.enabled {
            resolve_passive_browsers(&self.args.browsers, &config.browsers)
        } else {
            ui.warning("Passive browsers are disabled; no browser is passive");
            Vec::new()
        };

        if self.args.json {
            let json = serde_json::to_string(&passive).map_err(anyhow::Error::from)?;
            ui.message(&json);
        } else {
            for browser in &passive {
                ui.message(browser);
            }
            ui.success(&format!(
                "{} of {} browsers passive",
                passive.len(),
                self.args.browsers.len()
            ));
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;

    fn sources(yaml: &str) -> ConfigSources {
        ConfigSources::from_options(serde_yaml::from_str(yaml).unwrap())
    }

    fn args(browsers: &[&str], json: bool) -> ResolveArgs {
        ResolveArgs {
            browsers: browsers.iter().map(|s| s.to_string()).collect(),
            json,
        }
    }

    #[test]
    fn lists_passive_browsers() {
        let cmd = ResolveCommand::new(
            &sources("browsers: '/passive-bro\\d/'\ncommandName: only"),
            args(&["bro", "passive-bro1", "passive-bro2"], false),
        );
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        assert_eq!(
            ui.messages(),
            &["passive-bro1".to_string(), "passive-bro2".to_string()]
        );
        assert_eq!(ui.successes(), &["2 of 3 browsers passive".to_string()]);
    }

    #[test]
    fn json_output_is_an_array() {
        let cmd = ResolveCommand::new(
            &sources("browsers: [a, a, b]\ncommandName: only"),
            args(&["a", "b", "c"], true),
        );
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        assert_eq!(ui.messages(), &[r#"["a","b"]"#.to_string()]);
    }

    #[test]
    fn disabled_config_has_no_passive_browsers() {
        let cmd = ResolveCommand::new(
            &sources("enabled: false\nbrowsers: a\ncommandName: only"),
            args(&["a"], true),
        );
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        assert_eq!(ui.messages(), &["[]".to_string()]);
        assert_eq!(ui.warnings().len(), 1);
    }
}
