//! Option layering.
//!
//! Options can come from several sources. Each source is one
//! [`OptionLayer`]; an [`OptionLayerStack`] resolves an option from the
//! highest priority layer that sets it and remembers which one that was.

use serde_yaml::Value;
use std::collections::HashMap;

/// Options supplied by one source.
///
/// # Example
///
/// ```
/// use passive_browsers::config::OptionLayer;
///
/// let mut layer = OptionLayer::new("options.yml");
/// layer.set("enabled", serde_yaml::Value::Bool(false));
///
/// assert!(layer.contains("enabled"));
/// assert_eq!(layer.source, "options.yml");
/// ```
#[derive(Debug, Clone, Default)]
pub struct OptionLayer {
    /// Option values keyed by canonical option name.
    pub values: HashMap<String, Value>,
    /// Where these options came from (for debugging and errors).
    pub source: String,
}

impl OptionLayer {
    /// Create an empty layer for the given source.
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            values: HashMap::new(),
            source: source.into(),
        }
    }

    /// Set an option in this layer.
    pub fn set(&mut self, option: impl Into<String>, value: Value) {
        self.values.insert(option.into(), value);
    }

    /// Check if this layer sets an option.
    pub fn contains(&self, option: &str) -> bool {
        self.values.contains_key(option)
    }

    /// Get the number of options in this layer.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if this layer is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Layers from lowest to highest priority.
///
/// # Example
///
/// ```
/// use passive_browsers::config::{OptionLayer, OptionLayerStack};
/// use serde_yaml::Value;
///
/// let mut stack = OptionLayerStack::new();
///
/// let mut options = OptionLayer::new("options");
/// options.set("browsers", Value::from("ie"));
/// options.set("commandName", Value::from("only"));
/// stack.push(options);
///
/// let mut env = OptionLayer::new("env");
/// env.set("browsers", Value::from("edge"));
/// stack.push(env);
///
/// assert_eq!(stack.get("browsers"), Some(&Value::from("edge")));
/// assert_eq!(stack.source_of("commandName"), Some("options"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct OptionLayerStack {
    layers: Vec<OptionLayer>,
}

impl OptionLayerStack {
    /// Create a new empty stack.
    pub fn new() -> Self {
        Self { layers: vec![] }
    }

    /// Add a layer above all existing ones.
    pub fn push(&mut self, layer: OptionLayer) {
        self.layers.push(layer);
    }

    /// Get the value from the highest priority layer that sets `option`.
    pub fn get(&self, option: &str) -> Option<&Value> {
        self.layers
            .iter()
            .rev()
            .find_map(|layer| layer.values.get(option))
    }

    /// Get the source of the winning value for `option`.
    pub fn source_of(&self, option: &str) -> Option<&str> {
        self.layers
            .iter()
            .rev()
            .find(|layer| layer.contains(option))
            .map(|layer| layer.source.as_str())
    }

    /// Get all layers for inspection.
    pub fn layers(&self) -> &[OptionLayer] {
        &self.layers
    }
}
