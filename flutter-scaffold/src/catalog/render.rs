//! Literal `{{key}}` placeholder substitution

use std::collections::BTreeMap;

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// Named values available to a template
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct Placeholders(BTreeMap<String, String>);

impl Placeholders {
    /// Create an empty set of bindings
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `key` to `value`, replacing any earlier binding
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    /// Look up a binding
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Return a copy of `self` with every binding of `other` laid on top
    #[must_use]
    pub fn overlay(&self, other: &Self) -> Self {
        let mut merged = self.clone();
        merged
            .0
            .extend(other.0.iter().map(|(k, v)| (k.clone(), v.clone())));
        merged
    }

    /// Number of bindings
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no bindings
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Placeholders {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Render `template` against `placeholders`
///
/// Every `{{key}}` whose key is bound is replaced by its value, wherever it
/// occurs, including directly after another `{`. Unbound tokens, unterminated
/// `{{`, and all other text are copied verbatim. Substituted values are never
/// re-scanned, so a value that itself looks like a placeholder is inserted
/// literally.
#[must_use]
pub fn render(template: &str, placeholders: &Placeholders) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find(OPEN) {
        out.push_str(&rest[..start]);
        let after_open = &rest[start + OPEN.len()..];

        if let Some((value, consumed)) = placeholders.token_at(after_open) {
            out.push_str(value);
            rest = &after_open[consumed..];
        } else {
            // not a bound token here; the next `{` may still open one
            out.push('{');
            rest = &rest[start + 1..];
        }
    }

    out.push_str(rest);
    out
}

impl Placeholders {
    /// Bound value whose `key}}` starts `text`, with the length it spans
    fn token_at(&self, text: &str) -> Option<(&str, usize)> {
        self.0.iter().find_map(|(key, value)| {
            text.strip_prefix(key.as_str())
                .filter(|tail| tail.starts_with(CLOSE))
                .map(|_| (value.as_str(), key.len() + CLOSE.len()))
        })
    }
}
