use std::fmt::Write as _;

use crate::core::options::{AxisOptions, format_style_options};
use crate::core::series::SeriesSpec;

/// Renders the `figure`/`tikzpicture` chart block.
///
/// Axis options are emitted one per line in insertion order with a trailing
/// comma on every line, including the last; downstream tooling expects that
/// exact layout. Each series contributes an optional comment line, one
/// `\addplot` command referencing the shared data filename, and one
/// `\addlegendentry` line, separated from the next series by a blank line.
#[must_use]
pub fn render_chart_block(
    axis_options: &AxisOptions,
    series: &[SeriesSpec],
    data_filename: &str,
) -> String {
    let axis_opts: Vec<String> = axis_options
        .iter()
        .map(|(key, value)| format!("      {key}={value},"))
        .collect();

    let mut out = String::new();
    out.push_str("\\begin{figure}[H]\n");
    out.push_str("\\centering\n");
    out.push_str("\\begin{tikzpicture}\n");
    out.push_str("\\centering\n");
    out.push_str("  \\begin{axis}[\n");
    out.push_str(&axis_opts.join("\n"));
    out.push_str("\n    ]\n");

    for spec in series {
        if let Some(comment) = spec.comment.as_deref() {
            if !comment.is_empty() {
                let _ = writeln!(out, "    % {comment}");
            }
        }
        let opts = format_style_options(&spec.options);
        let _ = writeln!(
            out,
            "    \\addplot[{opts}] table [x={x}, y={y}, col sep=space] {{{data_filename}}};",
            x = spec.x_column,
            y = spec.y_column,
        );
        let _ = writeln!(out, "    \\addlegendentry{{{legend}}};", legend = spec.legend);
        out.push('\n');
    }

    out.push_str("  \\end{axis}\n");
    out.push_str("\\end{tikzpicture}\n");
    out.push_str("\\end{figure}\n");
    out
}
