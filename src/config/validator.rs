//! Option type validation.
//!
//! Every option is checked before any test file is parsed. A value of the
//! wrong type is fatal, and the error names the option and the accepted
//! types.

use serde_yaml::Value;

use crate::config::layer::OptionLayerStack;
use crate::config::schema::{PluginConfig, BROWSERS, COMMAND_NAME, ENABLED};
use crate::error::{PassiveBrowsersError, Result};
use crate::matcher::{type_name, Matcher};

/// Validate `enabled`.
pub fn validate_enabled(value: &Value) -> Result<bool> {
    match value {
        Value::Bool(b) => Ok(*b),
        other => Err(PassiveBrowsersError::invalid_type(
            ENABLED,
            &["Boolean"],
            type_name(other),
        )),
    }
}

/// Validate `browsers`.
pub fn validate_browsers(value: &Value) -> Result<Matcher> {
    Matcher::from_value(BROWSERS, value)
}

/// Validate `commandName`.
pub fn validate_command_name(value: &Value) -> Result<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        other => Err(PassiveBrowsersError::invalid_type(
            COMMAND_NAME,
            &["String"],
            type_name(other),
        )),
    }
}

/// Validate the resolved options of a layer stack.
///
/// Unset options take their defaults: `enabled` is true and `browsers`
/// matches nothing. `commandName` has no default.
///
/// # Errors
///
/// Returns the first `InvalidOptionType` or `MissingOption` encountered,
/// checking options in declaration order.
pub fn validate(stack: &OptionLayerStack) -> Result<PluginConfig> {
    let enabled = stack
        .get(ENABLED)
        .map(validate_enabled)
        .transpose()?
        .unwrap_or(true);

    let browsers = stack
        .get(BROWSERS)
        .map(validate_browsers)
        .transpose()?
        .unwrap_or_default();

    let command_name = stack
        .get(COMMAND_NAME)
        .ok_or_else(|| PassiveBrowsersError::MissingOption {
            option: COMMAND_NAME.to_string(),
        })
        .and_then(validate_command_name)?;

    Ok(PluginConfig {
        enabled,
        browsers,
        command_name,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::layer::OptionLayer;

    fn stack_of(values: &[(&str, Value)]) -> OptionLayerStack {
        let mut layer = OptionLayer::new("options");
        for (k, v) in values {
            layer.set(*k, v.clone());
        }
        let mut stack = OptionLayerStack::new();
        stack.push(layer);
        stack
    }

    #[test]
    fn enabled_by_default() {
        let config = validate(&stack_of(&[(COMMAND_NAME, Value::from("only"))])).unwrap();
        assert!(config.enabled);
    }

    #[test]
    fn browsers_default_to_none() {
        let config = validate(&stack_of(&[(COMMAND_NAME, Value::from("only"))])).unwrap();
        assert_eq!(config.browsers, Matcher::none());
    }

    #[test]
    fn enabled_must_be_boolean() {
        let err = validate(&stack_of(&[
            (ENABLED, Value::from("string")),
            (COMMAND_NAME, Value::from("only")),
        ]))
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "\"enabled\" option must be: Boolean, but got string"
        );
    }

    #[test]
    fn browsers_must_be_matcher() {
        let err = validate(&stack_of(&[
            (BROWSERS, Value::from(100500)),
            (COMMAND_NAME, Value::from("only")),
        ]))
        .unwrap_err();
        assert!(err
            .to_string()
            .contains("option must be: String or RegExp or Array, but got number"));
    }

    #[test]
    fn command_name_must_be_string() {
        let err = validate(&stack_of(&[(COMMAND_NAME, Value::from(100500))])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "\"commandName\" option must be: String, but got number"
        );
    }

    #[test]
    fn command_name_is_required() {
        let err = validate(&stack_of(&[])).unwrap_err();
        assert!(matches!(err, PassiveBrowsersError::MissingOption { .. }));
    }

    #[test]
    fn invalid_options_fail_even_when_disabled() {
        let err = validate(&stack_of(&[
            (ENABLED, Value::Bool(false)),
            (BROWSERS, Value::Bool(true)),
            (COMMAND_NAME, Value::from("only")),
        ]))
        .unwrap_err();
        assert!(err.to_string().starts_with("\"browsers\""));
    }
}
