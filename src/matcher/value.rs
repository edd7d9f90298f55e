//! Matcher validation from untyped option values.
//!
//! The same validator runs for the `browsers` option and for the argument
//! passed to the inclusion directive, so an author's mistake surfaces at
//! parse time instead of silently matching nothing.

use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use serde_yaml::Value;

use super::pattern::Matcher;
use crate::error::{PassiveBrowsersError, Result};

/// Type names accepted wherever a matcher is expected.
pub const MATCHER_TYPES: &[&str] = &["String", "RegExp", "Array"];

/// Regex flags understood in `/expr/flags` notation.
const KNOWN_FLAGS: &str = "gimsuy";

impl Matcher {
    /// Validate and convert an option value into a matcher.
    ///
    /// Accepted shapes:
    /// - a string, matched exactly
    /// - a string written as `/expr/` or `/expr/flags`, compiled as a pattern
    /// - a mapping `{ regex: expr }`, compiled as a pattern
    /// - a sequence of any of the above
    ///
    /// # Errors
    ///
    /// Returns `InvalidOptionType` naming `option` for any other shape and
    /// `InvalidPattern` for an expression that does not compile.
    ///
    /// # Example
    ///
    /// ```
    /// use passive_browsers::matcher::Matcher;
    ///
    /// let value: serde_yaml::Value = serde_yaml::from_str("[chrome, '/passive-\\d/']").unwrap();
    /// let matcher = Matcher::from_value("browsers", &value).unwrap();
    ///
    /// assert!(matcher.matches("chrome"));
    /// assert!(matcher.matches("passive-1"));
    /// ```
    pub fn from_value(option: &str, value: &Value) -> Result<Self> {
        match value {
            Value::String(s) => Self::from_literal(s),
            Value::Sequence(items) => items
                .iter()
                .map(|item| Self::from_value(option, item))
                .collect::<Result<Vec<_>>>()
                .map(Self::Combination),
            Value::Mapping(map) => match map.get("regex") {
                Some(Value::String(expr)) if map.len() == 1 => Self::pattern(expr),
                _ => Err(PassiveBrowsersError::invalid_type(
                    option,
                    MATCHER_TYPES,
                    type_name(value),
                )),
            },
            Value::Tagged(tagged) => Self::from_value(option, &tagged.value),
            other => Err(PassiveBrowsersError::invalid_type(
                option,
                MATCHER_TYPES,
                type_name(other),
            )),
        }
    }

    /// Parse a string literal, recognising `/expr/flags` as a pattern.
    pub fn from_literal(s: &str) -> Result<Self> {
        match split_regex_literal(s) {
            Some((expr, flags)) => {
                let inline: String = flags.chars().filter(|c| "ims".contains(*c)).collect();
                if inline.is_empty() {
                    Self::pattern(expr)
                } else {
                    Self::pattern(&format!("(?{}){}", inline, expr))
                }
            }
            None => Ok(Self::exact(s)),
        }
    }
}

fn split_regex_literal(s: &str) -> Option<(&str, &str)> {
    let rest = s.strip_prefix('/')?;
    let end = rest.rfind('/')?;
    let (expr, flags) = (&rest[..end], &rest[end + 1..]);

    if expr.is_empty() || !flags.chars().all(|c| KNOWN_FLAGS.contains(c)) {
        return None;
    }
    Some((expr, flags))
}

/// Name of a value's type as reported in validation errors.
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) | Value::Mapping(_) => "object",
        Value::Tagged(tagged) => type_name(&tagged.value),
    }
}

impl<'de> Deserialize<'de> for Matcher {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Matcher::from_value("browsers", &value).map_err(de::Error::custom)
    }
}

/// Writes the literal form read back by [`Matcher::from_value`].
///
/// An exact id that looks like `/expr/` would read back as a pattern, so it
/// is written as an anchored `{ regex: .. }` mapping selecting only that id.
impl Serialize for Matcher {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Matcher::Exact(id) if split_regex_literal(id).is_some() => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("regex", &format!("^{}$", regex::escape(id)))?;
                map.end()
            }
            Matcher::Exact(id) => serializer.serialize_str(id),
            Matcher::Pattern(_) => serializer.serialize_str(&self.to_string()),
            Matcher::Combination(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
        }
    }
}
