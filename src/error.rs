use thiserror::Error;

pub type PlotResult<T> = Result<T, PlotError>;

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("unsupported data shape: {0}")]
    UnsupportedDataShape(String),

    #[error("a header must be provided for row-major data")]
    MissingHeader,

    #[error("failed to write destination {path}: {source}")]
    DestinationWrite {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("series references unknown column: {column}")]
    UnknownColumn { column: String },

    #[error("length mismatch at {location}: expected {expected} values, found {actual}")]
    RowLengthMismatch {
        location: String,
        expected: usize,
        actual: usize,
    },
}
