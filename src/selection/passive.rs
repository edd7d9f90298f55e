//! Passive browser resolution.

use std::collections::HashSet;

use crate::matcher::Matcher;

/// Resolve which of `browser_ids` are passive under `matcher`.
///
/// Each top-level matcher element filters the known browsers; the results
/// are concatenated and deduplicated, keeping the first occurrence.
///
/// # Example
///
/// ```
/// use passive_browsers::matcher::Matcher;
/// use passive_browsers::selection::resolve_passive_browsers;
///
/// let browsers = vec!["chrome".to_string(), "ie9".to_string(), "ie11".to_string()];
/// let matcher = Matcher::Combination(vec![
///     Matcher::pattern(r"^ie").unwrap(),
///     Matcher::exact("ie9"),
/// ]);
///
/// assert_eq!(resolve_passive_browsers(&browsers, &matcher), vec!["ie9", "ie11"]);
/// ```
pub fn resolve_passive_browsers(browser_ids: &[String], matcher: &Matcher) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut passive = Vec::new();

    for element in matcher.elements() {
        let selected: Vec<&String> = browser_ids.iter().filter(|id| element.matches(id)).collect();
        if selected.is_empty() {
            tracing::warn!(matcher = %element, "Passive browser matcher selects no known browser");
        }

        for id in selected {
            if seen.insert(id.as_str()) {
                passive.push(id.clone());
            }
        }
    }

    passive
}
