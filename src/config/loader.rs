//! Option loading from files, environment variables and command-line arguments.
//!
//! Sources are layered, later overriding earlier:
//! 1. Defaults
//! 2. Inline options (a YAML mapping, usually read from an options file)
//! 3. Environment variables prefixed with [`ENV_PREFIX`]
//! 4. Command-line arguments prefixed with [`CLI_PREFIX`]

use serde_yaml::Value;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::config::layer::{OptionLayer, OptionLayerStack};
use crate::config::schema::{canonical_option, PluginConfig, BROWSERS, ENABLED};
use crate::config::validator::validate;
use crate::error::{PassiveBrowsersError, Result};

/// Prefix of environment variables read as options (case-insensitive).
pub const ENV_PREFIX: &str = "passive_browsers_";

/// Prefix of command-line arguments read as options.
pub const CLI_PREFIX: &str = "--passive-browsers-";

/// Raw option sources before layering.
#[derive(Debug, Clone, Default)]
pub struct ConfigSources {
    /// Inline options mapping.
    pub options: Option<Value>,
    /// Environment variables.
    pub env: HashMap<String, String>,
    /// Command-line arguments.
    pub argv: Vec<String>,
}

impl ConfigSources {
    /// Sources with only inline options.
    pub fn from_options(options: Value) -> Self {
        Self {
            options: Some(options),
            ..Default::default()
        }
    }

    /// Sources with inline options plus the current process's environment and arguments.
    pub fn from_process(options: Option<Value>) -> Self {
        Self {
            options,
            env: std::env::vars().collect(),
            argv: std::env::args().collect(),
        }
    }

    /// Build the layer stack for these sources.
    ///
    /// # Errors
    ///
    /// Returns `ConfigParseError` if inline options are not a mapping and
    /// `InvalidOptionValue` if an environment or command-line value cannot be decoded.
    pub fn layers(&self) -> Result<OptionLayerStack> {
        let mut stack = OptionLayerStack::new();
        stack.push(defaults_layer());

        if let Some(options) = &self.options {
            stack.push(options_layer(options)?);
        }
        stack.push(env_layer(&self.env)?);
        stack.push(cli_layer(&self.argv)?);

        Ok(stack)
    }
}

fn defaults_layer() -> OptionLayer {
    let mut layer = OptionLayer::new("defaults");
    layer.set(ENABLED, Value::Bool(true));
    layer.set(BROWSERS, Value::Sequence(Vec::new()));
    layer
}

fn options_layer(options: &Value) -> Result<OptionLayer> {
    let mut layer = OptionLayer::new("options");

    let map = match options {
        Value::Mapping(map) => map,
        Value::Null => return Ok(layer),
        _ => {
            return Err(PassiveBrowsersError::ConfigParseError {
                path: "<options>".into(),
                message: "options must be a mapping".to_string(),
            })
        }
    };

    for (key, value) in map {
        match key.as_str().and_then(canonical_option) {
            Some(option) => layer.set(option, value.clone()),
            None => tracing::debug!(key = ?key, "Ignoring unknown option"),
        }
    }

    Ok(layer)
}

fn env_layer(env: &HashMap<String, String>) -> Result<OptionLayer> {
    let mut layer = OptionLayer::new("environment");

    let mut keys: Vec<&String> = env.keys().collect();
    keys.sort();

    for key in keys {
        let lower = key.to_ascii_lowercase();
        let Some(option) = lower
            .strip_prefix(ENV_PREFIX)
            .and_then(canonical_option)
        else {
            continue;
        };
        layer.set(option, decode_value(option, &env[key], key)?);
    }

    Ok(layer)
}

fn cli_layer(argv: &[String]) -> Result<OptionLayer> {
    let mut layer = OptionLayer::new("command line");

    let mut args = argv.iter();
    while let Some(arg) = args.next() {
        let Some(rest) = arg.strip_prefix(CLI_PREFIX) else {
            continue;
        };

        let (name, inline) = match rest.split_once('=') {
            Some((name, value)) => (name, Some(value.to_string())),
            None => (rest, None),
        };
        let Some(option) = canonical_option(name) else {
            continue;
        };
        let raw = match inline {
            Some(value) => value,
            None => args
                .next()
                .cloned()
                .ok_or_else(|| PassiveBrowsersError::InvalidOptionValue {
                    option: option.to_string(),
                    origin: arg.clone(),
                    message: "missing value".to_string(),
                })?,
        };

        layer.set(option, decode_value(option, &raw, arg)?);
    }

    Ok(layer)
}

/// Decode a string from the environment or command line.
///
/// `enabled` is parsed as JSON so `false` and `true` become booleans.
/// `browsers` is parsed as YAML so lists and `/expr/` patterns can be
/// written. Scalars that YAML would read as numbers, booleans or null
/// stay the raw string, as does text that is not YAML at all. `commandName` is taken as is.
fn decode_value(option: &str, raw: &str, origin: &str) -> Result<Value> {
    match option {
        ENABLED => serde_json::from_str::<serde_json::Value>(raw)
            .map_err(|e| e.to_string())
            .and_then(|json| serde_yaml::to_value(json).map_err(|e| e.to_string()))
            .map_err(|message| PassiveBrowsersError::InvalidOptionValue {
                option: option.to_string(),
                origin: origin.to_string(),
                message,
            }),
        BROWSERS => match serde_yaml::from_str::<Value>(raw) {
            Ok(value @ (Value::String(_) | Value::Sequence(_) | Value::Mapping(_))) => Ok(value),
            _ => Ok(Value::from(raw)),
        },
        _ => Ok(Value::from(raw)),
    }
}

/// Parse and validate configuration from the given sources.
///
/// # Errors
///
/// Fails on the first malformed or missing option; see [`validate`].
pub fn parse_config(sources: &ConfigSources) -> Result<PluginConfig> {
    let stack = sources.layers()?;

    for option in crate::config::schema::OPTION_NAMES {
        if let Some(source) = stack.source_of(option) {
            tracing::debug!(option, source, "Resolved option");
        }
    }

    validate(&stack)
}

/// Parse and validate inline options, reading the environment and arguments of this process.
pub fn parse_config_from_process(options: Option<Value>) -> Result<PluginConfig> {
    parse_config(&ConfigSources::from_process(options))
}

/// Load an options file as a raw YAML value.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            PassiveBrowsersError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            PassiveBrowsersError::Io(e)
        }
    })?;

    serde_yaml::from_str(&content).map_err(|e| PassiveBrowsersError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Split `argv` into option arguments (with their values) and everything else.
///
/// Lets a CLI parser that does not know about option arguments run on the rest.
pub fn partition_cli_args(argv: &[String]) -> (Vec<String>, Vec<String>) {
    let mut rest = Vec::new();
    let mut options = Vec::new();

    let mut args = argv.iter();
    while let Some(arg) = args.next() {
        if arg.starts_with(CLI_PREFIX) {
            options.push(arg.clone());
            if !arg.contains('=') {
                if let Some(value) = args.next() {
                    options.push(value.clone());
                }
            }
        } else {
            rest.push(arg.clone());
        }
    }

    (rest, options)
}
