//! Plugin configuration loading and validation.
//!
//! - Schema definitions in [`schema`]
//! - Source layering in [`layer`]
//! - File, environment and command-line loading in [`loader`]
//! - Type validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use passive_browsers::config::{parse_config, ConfigSources};
//!
//! let options = serde_yaml::from_str("browsers: ['/passive-.*/']\ncommandName: only").unwrap();
//! let config = parse_config(&ConfigSources::from_options(options)).unwrap();
//!
//! assert!(config.enabled);
//! assert!(config.browsers.matches("passive-ie"));
//! assert_eq!(config.command_name, "only");
//! ```
//!
//! # Option sources
//!
//! Later sources override earlier ones:
//! 1. Defaults (`enabled: true`, `browsers: []`)
//! 2. Inline options or an options file
//! 3. `PASSIVE_BROWSERS_*` environment variables
//! 4. `--passive-browsers-*` command-line arguments

pub mod layer;
pub mod loader;
pub mod schema;
pub mod validator;

pub use layer::{OptionLayer, OptionLayerStack};
pub use loader::{
    load_config_file, parse_config, parse_config_from_process, partition_cli_args,
    ConfigSources, CLI_PREFIX, ENV_PREFIX,
};
pub use schema::{canonical_option, PluginConfig, BROWSERS, COMMAND_NAME, ENABLED, OPTION_NAMES};
pub use validator::validate;
