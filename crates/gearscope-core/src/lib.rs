//! Core types for comparing gear sensor recordings
//!
//! This crate holds everything the comparison needs before any drawing
//! happens:
//!
//! - [`Table`]: CSV loading into a Polars-backed table with inferred column types
//! - [`SensorSchema`]: the numeric columns a recording must carry
//! - [`UploadedDataset`]: an uploaded table plus the label taken from its filename
//! - [`SamplePair`] and [`Preview`]: alignment to a common length and head previews
//! - [`rolling_mean`]: the trailing moving average used for smoothing
//!
//! # Example
//!
//! ```rust
//! use gearscope_core::{rolling_mean, SamplePair, SensorSchema, Table};
//!
//! let reference = Table::from_csv_bytes(b"sensor1,sensor2\n1.0,2.0\n1.5,2.5\n3.0,0.5\n")?;
//! let uploaded = Table::from_csv_bytes(b"sensor1,sensor2\n0.5,0.1\n0.7,0.2\n")?;
//! SensorSchema::default().validate(&uploaded)?;
//!
//! let pair = SamplePair::align(&reference, &uploaded, 500);
//! assert_eq!(pair.len(), 2);
//!
//! let smoothed = rolling_mean(&pair.reference().numeric_column("sensor1")?, 2)?;
//! assert_eq!(smoothed, vec![None, Some(1.25)]);
//! # Ok::<(), gearscope_core::Error>(())
//! ```

mod config;
mod dataset;
mod error;
mod rolling;
mod sampling;
mod schema;
mod table;

pub use config::*;
pub use dataset::{label_from_filename, UploadedDataset};
pub use error::{Error, ErrorKind, Result};
pub use rolling::{defined_count, rolling_mean};
pub use sampling::{comparable_length, Preview, SamplePair};
pub use schema::{SensorSchema, SENSOR1, SENSOR2};
pub use table::Table;
