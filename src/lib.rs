//! tikzplot-rs: LaTeX/pgfplots document generator.
//!
//! This crate turns in-memory tabular numeric data into a single `.tex`
//! artifact: a verbatim `filecontents*` data block plus a `tikzpicture`
//! chart block that references the data by column name. Option strings are
//! copied through verbatim; pgfplots semantics are never validated here.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::TikzPlotBuilder;
pub use crate::core::{AxisOptions, Dataset, SeriesSpec, StyleValue, Table};
pub use error::{PlotError, PlotResult};
