//! Error types for gearscope
//!
//! Provides a unified error type for all gearscope crates.

use thiserror::Error;

/// Core error type for loading, aligning and charting sensor data
#[derive(Error, Debug)]
pub enum Error {
    /// The input is not well-formed delimited text
    #[error("Parse error: {context}: {source}")]
    Parse {
        context: String,
        #[source]
        source: polars::error::PolarsError,
    },

    /// A column the analysis needs is absent
    #[error("Schema error: missing required column `{column}`")]
    MissingColumn { column: String },

    /// A required column exists but does not hold numbers
    #[error("Schema error: column `{column}` has type {found}, expected a numeric column")]
    NonNumericColumn { column: String, found: String },

    /// Analysis was requested before anything was uploaded
    #[error("No data: please upload a CSV file first")]
    NoData,

    /// The input holds no usable content
    #[error("Empty dataset: {0}")]
    EmptyDataset(String),

    /// Drawing or encoding a chart failed
    #[error("Render error: {0}")]
    Render(String),

    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// IO error (for file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Polars error outside of parsing
    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Coarse classification of [`Error`] used at the request boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Parse,
    Schema,
    NoData,
    EmptyDataset,
    Render,
    Internal,
}

impl Error {
    /// Wrap a polars failure raised while reading tabular input
    pub fn parse(context: impl Into<String>, source: polars::error::PolarsError) -> Self {
        Self::Parse {
            context: context.into(),
            source,
        }
    }

    /// Create an error for a missing column
    pub fn missing_column(column: &str) -> Self {
        Self::MissingColumn {
            column: column.to_string(),
        }
    }

    /// Create an error for a render backend failure
    pub fn render(err: impl std::fmt::Display) -> Self {
        Self::Render(err.to_string())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Parse { .. } => ErrorKind::Parse,
            Self::MissingColumn { .. } | Self::NonNumericColumn { .. } => ErrorKind::Schema,
            Self::NoData => ErrorKind::NoData,
            Self::EmptyDataset(_) => ErrorKind::EmptyDataset,
            Self::Render(_) => ErrorKind::Render,
            Self::InvalidParameter(_) | Self::Io(_) | Self::Polars(_) => ErrorKind::Internal,
        }
    }

    /// Name of the offending column for schema errors
    pub fn column(&self) -> Option<&str> {
        match self {
            Self::MissingColumn { column } | Self::NonNumericColumn { column, .. } => {
                Some(column.as_str())
            }
            _ => None,
        }
    }
}
