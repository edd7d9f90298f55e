//! Plugin configuration schema.

use serde::Serialize;

use crate::matcher::Matcher;

/// Option name for the on/off switch.
pub const ENABLED: &str = "enabled";
/// Option name for the passive browser matcher.
pub const BROWSERS: &str = "browsers";
/// Option name for the directive command.
pub const COMMAND_NAME: &str = "commandName";

/// Every option the plugin understands.
pub const OPTION_NAMES: &[&str] = &[ENABLED, BROWSERS, COMMAND_NAME];

/// Validated plugin configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PluginConfig {
    /// Whether passive browser handling is active at all.
    pub enabled: bool,

    /// Browsers whose tests are disabled unless they opt in.
    pub browsers: Matcher,

    /// Name under which the inclusion directive is exposed to test files.
    #[serde(rename = "commandName")]
    pub command_name: String,
}

impl PluginConfig {
    /// Create an enabled configuration with no passive browsers.
    pub fn new(command_name: impl Into<String>) -> Self {
        Self {
            enabled: true,
            browsers: Matcher::none(),
            command_name: command_name.into(),
        }
    }

    /// Set the passive browser matcher.
    pub fn with_browsers(mut self, browsers: impl Into<Matcher>) -> Self {
        self.browsers = browsers.into();
        self
    }

    /// Set the on/off switch.
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

/// Canonical option name for a user-supplied key.
///
/// Matching ignores case, `-` and `_`, so `commandName`, `command_name`
/// and `COMMAND-NAME` are the same option.
pub fn canonical_option(key: &str) -> Option<&'static str> {
    let folded: String = key
        .chars()
        .filter(|c| *c != '_' && *c != '-')
        .map(|c| c.to_ascii_lowercase())
        .collect();

    OPTION_NAMES
        .iter()
        .copied()
        .find(|name| name.to_ascii_lowercase() == folded)
}
