use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::error::{PlotError, PlotResult};

/// Columnar table with named, insertion-ordered columns.
///
/// This is the crate's DataFrame analogue: callers that already hold their
/// series column-by-column build one of these instead of transposing by hand.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    columns: IndexMap<String, Vec<f64>>,
}

impl Table {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a named column, replacing any previous column of the same name
    /// while keeping its original position.
    #[must_use]
    pub fn with_column(mut self, name: impl Into<String>, values: Vec<f64>) -> Self {
        self.columns.insert(name.into(), values);
        self
    }

    pub fn insert_column(&mut self, name: impl Into<String>, values: Vec<f64>) {
        self.columns.insert(name.into(), values);
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub(crate) fn into_columns(self) -> IndexMap<String, Vec<f64>> {
        self.columns
    }
}

/// Records unequal source column lengths observed during normalization.
///
/// Permissive rendering ignores this (rows are truncated to the shortest
/// column, matching zip semantics); strict validation reports it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LengthMismatch {
    pub location: String,
    pub expected: usize,
    pub actual: usize,
}

/// Canonical row-oriented dataset.
///
/// Every accepted input shape is resolved exactly once, at construction,
/// into this representation: an ordered header plus row-major values.
/// Render code never sees the source shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    header: Vec<String>,
    rows: Vec<Vec<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    length_mismatch: Option<LengthMismatch>,
}

impl Dataset {
    /// Builds a dataset from a columnar [`Table`].
    #[must_use]
    pub fn from_table(table: Table) -> Self {
        Self::from_columns(table.into_columns())
    }

    /// Builds a dataset from an explicit name-to-sequence mapping.
    ///
    /// Rows are formed by zipping the columns; when lengths differ the row
    /// count is the shortest column's length and the mismatch is recorded
    /// for strict validation.
    #[must_use]
    pub fn from_columns(columns: IndexMap<String, Vec<f64>>) -> Self {
        let header: Vec<String> = columns.keys().cloned().collect();

        let mut length_mismatch = None;
        let expected = columns.values().next().map_or(0, Vec::len);
        for (name, values) in &columns {
            if values.len() != expected {
                warn!(
                    column = %name,
                    expected,
                    actual = values.len(),
                    "unequal column lengths, truncating rows to shortest"
                );
                length_mismatch = Some(LengthMismatch {
                    location: format!("column {name}"),
                    expected,
                    actual: values.len(),
                });
                break;
            }
        }

        let row_count = columns.values().map(Vec::len).min().unwrap_or(0);
        let mut rows = Vec::with_capacity(row_count);
        for i in 0..row_count {
            rows.push(columns.values().map(|values| values[i]).collect());
        }

        Self {
            header,
            rows,
            length_mismatch,
        }
    }

    /// Builds a dataset from row-major rows plus an external header.
    ///
    /// The header is mandatory for row-major input; `None` is a usage error,
    /// never a silent default.
    pub fn from_rows(rows: Vec<Vec<f64>>, header: Option<Vec<String>>) -> PlotResult<Self> {
        let header = header.ok_or(PlotError::MissingHeader)?;
        Ok(Self {
            header,
            rows,
            length_mismatch: None,
        })
    }

    /// Builds a dataset from a flat row-major array with `cols` values per
    /// row, plus an external header.
    pub fn from_array(
        values: Vec<f64>,
        cols: usize,
        header: Option<Vec<String>>,
    ) -> PlotResult<Self> {
        let header = header.ok_or(PlotError::MissingHeader)?;
        if cols == 0 {
            return Err(PlotError::UnsupportedDataShape(
                "row-major array with zero columns".to_owned(),
            ));
        }
        if values.len() % cols != 0 {
            return Err(PlotError::UnsupportedDataShape(format!(
                "flat array of {} values does not divide into rows of {cols}",
                values.len()
            )));
        }
        let rows = values.chunks(cols).map(<[f64]>::to_vec).collect();
        Ok(Self {
            header,
            rows,
            length_mismatch: None,
        })
    }

    /// Resolves a dynamically-shaped JSON value into a dataset.
    ///
    /// A JSON object of name -> number-array is treated as a column mapping
    /// (`header` is ignored). A JSON array of number-arrays is row-major and
    /// requires `header`. Every other value fails with
    /// [`PlotError::UnsupportedDataShape`].
    pub fn from_json(value: &Value, header: Option<Vec<String>>) -> PlotResult<Self> {
        match value {
            Value::Object(map) => {
                let mut columns = IndexMap::with_capacity(map.len());
                for (name, entry) in map {
                    let values = json_number_sequence(entry).ok_or_else(|| {
                        PlotError::UnsupportedDataShape(format!(
                            "column {name} is not a numeric sequence"
                        ))
                    })?;
                    columns.insert(name.clone(), values);
                }
                Ok(Self::from_columns(columns))
            }
            Value::Array(entries) => {
                let mut rows = Vec::with_capacity(entries.len());
                for entry in entries {
                    let row = json_number_sequence(entry).ok_or_else(|| {
                        PlotError::UnsupportedDataShape(
                            "array elements must be numeric sequences".to_owned(),
                        )
                    })?;
                    rows.push(row);
                }
                Self::from_rows(rows, header)
            }
            other => Err(PlotError::UnsupportedDataShape(json_shape_name(other))),
        }
    }

    pub fn header(&self) -> &[String] {
        &self.header
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn column_count(&self) -> usize {
        self.header.len()
    }

    #[must_use]
    pub fn has_column(&self, name: &str) -> bool {
        self.header.iter().any(|column| column == name)
    }

    pub fn length_mismatch(&self) -> Option<&LengthMismatch> {
        self.length_mismatch.as_ref()
    }
}

/// Formats a value with `f64`'s shortest round-trip decimal form.
///
/// Whole numbers print without a fractional part (`40`, not `40.0`), so
/// integral columns stay readable in the emitted listing.
#[must_use]
pub fn format_value(value: f64) -> String {
    value.to_string()
}

fn json_number_sequence(value: &Value) -> Option<Vec<f64>> {
    let entries = value.as_array()?;
    entries.iter().map(Value::as_f64).collect()
}

fn json_shape_name(value: &Value) -> String {
    let shape = match value {
        Value::Null => "null",
        Value::Bool(_) => "a bare boolean",
        Value::Number(_) => "a bare number",
        Value::String(_) => "a bare string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    };
    shape.to_owned()
}
