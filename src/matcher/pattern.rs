//! Browser matcher type and evaluation.

use regex::Regex;
use std::fmt;

/// Selects browser identifiers by exact name, regular expression, or a list of either.
///
/// # Example
///
/// ```
/// use passive_browsers::matcher::Matcher;
///
/// let matcher = Matcher::Combination(vec![
///     Matcher::exact("chrome-phone"),
///     Matcher::pattern(r"passive-bro\d").unwrap(),
/// ]);
///
/// assert!(matcher.matches("chrome-phone"));
/// assert!(matcher.matches("passive-bro2"));
/// assert!(!matcher.matches("firefox"));
/// ```
#[derive(Debug, Clone)]
pub enum Matcher {
    /// Matches a browser whose identifier equals this string.
    Exact(String),
    /// Matches a browser whose identifier contains a match of this expression.
    Pattern(Regex),
    /// Matches a browser matched by any element. Empty matches nothing.
    Combination(Vec<Matcher>),
}

impl Matcher {
    /// Create an exact matcher.
    pub fn exact(id: impl Into<String>) -> Self {
        Self::Exact(id.into())
    }

    /// Compile a pattern matcher.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPattern` if the expression does not compile.
    pub fn pattern(expr: &str) -> crate::Result<Self> {
        Regex::new(expr)
            .map(Self::Pattern)
            .map_err(|e| crate::PassiveBrowsersError::InvalidPattern {
                pattern: expr.to_string(),
                message: e.to_string(),
            })
    }

    /// A matcher that matches nothing.
    pub fn none() -> Self {
        Self::Combination(Vec::new())
    }

    /// Check whether a browser identifier is selected by this matcher.
    pub fn matches(&self, browser_id: &str) -> bool {
        match self {
            Self::Exact(id) => id == browser_id,
            Self::Pattern(re) => re.is_match(browser_id),
            Self::Combination(items) => items.iter().any(|m| m.matches(browser_id)),
        }
    }

    /// Top-level elements of this matcher.
    ///
    /// A single exact or pattern matcher is returned as a one-element list.
    pub fn elements(&self) -> &[Matcher] {
        match self {
            Self::Combination(items) => items,
            single => std::slice::from_ref(single),
        }
    }

    /// True when this matcher can never select a browser.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Combination(items) => items.iter().all(Matcher::is_empty),
            _ => false,
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::none()
    }
}

impl PartialEq for Matcher {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Exact(a), Self::Exact(b)) => a == b,
            (Self::Pattern(a), Self::Pattern(b)) => a.as_str() == b.as_str(),
            (Self::Combination(a), Self::Combination(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(id) => write!(f, "{}", id),
            Self::Pattern(re) => write!(f, "/{}/", re.as_str()),
            Self::Combination(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
        }
    }
}

impl From<&str> for Matcher {
    fn from(id: &str) -> Self {
        Self::exact(id)
    }
}

impl From<Regex> for Matcher {
    fn from(re: Regex) -> Self {
        Self::Pattern(re)
    }
}

impl From<Vec<Matcher>> for Matcher {
    fn from(items: Vec<Matcher>) -> Self {
        Self::Combination(items)
    }
}
