use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::options::StyleValue;

/// One requested plotted line: an x/y column pair, a legend label, an
/// optional comment emitted above the plot command, and insertion-ordered
/// style options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesSpec {
    pub x_column: String,
    pub y_column: String,
    pub legend: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub options: IndexMap<String, StyleValue>,
}

impl SeriesSpec {
    #[must_use]
    pub fn new(
        x_column: impl Into<String>,
        y_column: impl Into<String>,
        legend: impl Into<String>,
    ) -> Self {
        Self {
            x_column: x_column.into(),
            y_column: y_column.into(),
            legend: legend.into(),
            comment: None,
            options: IndexMap::new(),
        }
    }

    /// Sets the human-readable comment line.
    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Adds one style option; later writes to the same key override the
    /// value in place.
    #[must_use]
    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }
}
