use std::fs;
use std::path::Path;

use tracing::{debug, info, trace};

use crate::core::dataset::Dataset;
use crate::core::options::AxisOptions;
use crate::core::series::SeriesSpec;
use crate::error::{PlotError, PlotResult};
use crate::render::{render_chart_block, render_data_block};

/// Assembles a complete LaTeX plotting document from a dataset, axis
/// options, and an ordered list of plotted series.
///
/// The builder is a plain mutable record: axis options and series can be
/// added in any order, any number of times, up until [`build`] or [`save`].
/// [`build`] is a pure function of the current configuration and may be
/// called repeatedly.
///
/// By default no cross-checks run between series and dataset, matching the
/// permissive behavior exploratory plotting relies on; opt into
/// [`with_strict_validation`] to fail on unknown column references and
/// ragged data instead of emitting a document LaTeX will choke on.
///
/// [`build`]: TikzPlotBuilder::build
/// [`save`]: TikzPlotBuilder::save
/// [`with_strict_validation`]: TikzPlotBuilder::with_strict_validation
#[derive(Debug, Clone)]
pub struct TikzPlotBuilder {
    dataset: Dataset,
    data_filename: String,
    axis_options: AxisOptions,
    series: Vec<SeriesSpec>,
    strict: bool,
}

impl TikzPlotBuilder {
    /// Creates a builder over an already-normalized dataset.
    ///
    /// `data_filename` is the filename token the chart block uses to
    /// reference the embedded data listing.
    #[must_use]
    pub fn new(dataset: Dataset, data_filename: impl Into<String>) -> Self {
        Self {
            dataset,
            data_filename: data_filename.into(),
            axis_options: AxisOptions::new(),
            series: Vec::new(),
            strict: false,
        }
    }

    /// Enables or disables strict render-time validation.
    #[must_use]
    pub fn with_strict_validation(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Merges entries into the axis option bag.
    ///
    /// Later calls for the same key override earlier values while keeping
    /// the key's original position. Keys and values are never validated.
    pub fn configure_axis<I, K, V>(&mut self, options: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (key, value) in options {
            self.axis_options.insert(key.into(), value.into());
        }
    }

    /// Sets a single axis option.
    pub fn set_axis_option(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.axis_options.insert(key.into(), value.into());
    }

    /// Sets the plot title, brace-wrapped for pgfplots.
    pub fn set_title(&mut self, title: &str) {
        self.set_axis_option("title", format!("{{{title}}}"));
    }

    /// Sets the x and y axis labels, brace-wrapped for pgfplots.
    pub fn set_labels(&mut self, xlabel: &str, ylabel: &str) {
        self.set_axis_option("xlabel", format!("{{{xlabel}}}"));
        self.set_axis_option("ylabel", format!("{{{ylabel}}}"));
    }

    /// Sets the legend position (e.g. `north west`).
    pub fn set_legend_pos(&mut self, legend_pos: &str) {
        self.set_axis_option("legend pos", legend_pos);
    }

    /// Sets a grid option, e.g. `set_grid("grid", "major")`.
    pub fn set_grid(&mut self, option: &str, value: &str) {
        self.set_axis_option(option, value);
    }

    /// Sets the figure width and height.
    pub fn set_figsize(&mut self, width: &str, height: &str) {
        self.set_axis_option("width", width);
        self.set_axis_option("height", height);
    }

    /// Sets the minimum x-value.
    pub fn set_xmin(&mut self, xmin: &str) {
        self.set_axis_option("xmin", xmin);
    }

    /// Sets the maximum x-value.
    pub fn set_xmax(&mut self, xmax: &str) {
        self.set_axis_option("xmax", xmax);
    }

    /// Sets the minimum y-value.
    pub fn set_ymin(&mut self, ymin: &str) {
        self.set_axis_option("ymin", ymin);
    }

    /// Sets the maximum y-value.
    pub fn set_ymax(&mut self, ymax: &str) {
        self.set_axis_option("ymax", ymax);
    }

    /// Appends a plotted series.
    ///
    /// Column references are not checked against the dataset here; strict
    /// mode defers that check to [`build`](TikzPlotBuilder::build).
    pub fn add_series(&mut self, spec: SeriesSpec) {
        trace!(
            x = %spec.x_column,
            y = %spec.y_column,
            legend = %spec.legend,
            count = self.series.len() + 1,
            "add series"
        );
        self.series.push(spec);
    }

    /// Renders the `filecontents*` data block.
    #[must_use]
    pub fn render_data_block(&self) -> String {
        render_data_block(&self.dataset, &self.data_filename)
    }

    /// Renders the `figure`/`tikzpicture` chart block.
    #[must_use]
    pub fn render_chart_block(&self) -> String {
        render_chart_block(&self.axis_options, &self.series, &self.data_filename)
    }

    /// Builds the complete document: data block, blank separator line,
    /// chart block.
    pub fn build(&self) -> PlotResult<String> {
        if self.strict {
            self.validate()?;
        }
        debug!(
            rows = self.dataset.row_count(),
            columns = self.dataset.column_count(),
            series = self.series.len(),
            "build latex document"
        );
        Ok(format!(
            "{}\n{}",
            self.render_data_block(),
            self.render_chart_block()
        ))
    }

    /// Builds the document in memory, then writes it to `destination` in one
    /// scoped operation.
    ///
    /// The destination handle is released on every exit path; a failed write
    /// leaves builder state untouched, so the call may be retried.
    pub fn save(&self, destination: impl AsRef<Path>) -> PlotResult<()> {
        let destination = destination.as_ref();
        let document = self.build()?;
        fs::write(destination, &document).map_err(|source| PlotError::DestinationWrite {
            path: destination.display().to_string(),
            source,
        })?;
        info!(
            path = %destination.display(),
            bytes = document.len(),
            "latex document saved"
        );
        Ok(())
    }

    fn validate(&self) -> PlotResult<()> {
        if let Some(mismatch) = self.dataset.length_mismatch() {
            return Err(PlotError::RowLengthMismatch {
                location: mismatch.location.clone(),
                expected: mismatch.expected,
                actual: mismatch.actual,
            });
        }
        let expected = self.dataset.column_count();
        for (index, row) in self.dataset.rows().iter().enumerate() {
            if row.len() != expected {
                return Err(PlotError::RowLengthMismatch {
                    location: format!("row {index}"),
                    expected,
                    actual: row.len(),
                });
            }
        }
        for spec in &self.series {
            for column in [&spec.x_column, &spec.y_column] {
                if !self.dataset.has_column(column) {
                    return Err(PlotError::UnknownColumn {
                        column: column.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}
