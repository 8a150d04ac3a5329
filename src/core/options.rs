use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Insertion-ordered axis option bag.
///
/// Keys and values are opaque pgfplots fragments copied verbatim into the
/// chart block. Iteration order is a hard output contract: re-inserting an
/// existing key overwrites the value but keeps the key's original position.
pub type AxisOptions = IndexMap<String, String>;

/// One plot-style option value.
///
/// `Flag(true)` renders as the bare key, `Flag(false)` renders nothing, and
/// `Text` renders `key=value` unless the text is empty, which also renders
/// the bare key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    Flag(bool),
    Text(String),
}

impl From<bool> for StyleValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

impl From<&str> for StyleValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for StyleValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Renders a style option bag as a `", "`-joined pgfplots option string,
/// in insertion order.
#[must_use]
pub fn format_style_options(options: &IndexMap<String, StyleValue>) -> String {
    let mut parts = Vec::with_capacity(options.len());
    for (key, value) in options {
        match value {
            StyleValue::Flag(true) => parts.push(key.clone()),
            StyleValue::Flag(false) => {}
            StyleValue::Text(text) if text.is_empty() => parts.push(key.clone()),
            StyleValue::Text(text) => parts.push(format!("{key}={text}")),
        }
    }
    parts.join(", ")
}
