use std::fmt::Write as _;

use crate::core::dataset::{Dataset, format_value};

/// Renders the `filecontents*` data block.
///
/// The block embeds the dataset as space-delimited text addressable by
/// `data_filename`: one header line of column names followed by one line per
/// row. Values are not quoted or escaped; space is the sole delimiter.
#[must_use]
pub fn render_data_block(dataset: &Dataset, data_filename: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\\begin{{filecontents*}}{{{data_filename}}}");
    out.push_str(&dataset.header().join(" "));
    out.push('\n');
    for row in dataset.rows() {
        let line: Vec<String> = row.iter().copied().map(format_value).collect();
        out.push_str(&line.join(" "));
        out.push('\n');
    }
    out.push_str("\\end{filecontents*}\n");
    out
}
