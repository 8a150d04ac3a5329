pub mod dataset;
pub mod options;
pub mod series;

pub use dataset::{Dataset, LengthMismatch, Table, format_value};
pub use options::{AxisOptions, StyleValue, format_style_options};
pub use series::SeriesSpec;
