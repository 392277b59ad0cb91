//! Comparison of an uploaded gear recording against the no-fault reference
//!
//! [`AnalysisPipeline`] aligns both recordings, builds the three
//! [`Comparison`] charts (raw `sensor1`, raw `sensor2`, smoothed `sensor1`),
//! renders them through a [`ChartRenderer`](gearscope_viz::ChartRenderer) and
//! assembles an [`AnalysisReport`] with captions and head previews.
//!
//! ```rust
//! use gearscope_analysis::AnalysisPipeline;
//! use gearscope_core::{SensorSchema, Table, UploadedDataset};
//! use gearscope_viz::NullChartRenderer;
//!
//! let reference = Table::from_csv_bytes(b"sensor1,sensor2\n1,2\n3,4\n5,6\n")?;
//! let uploaded = UploadedDataset::from_upload(
//!     "chipped.csv",
//!     b"sensor1,sensor2\n0.1,0.2\n0.3,0.4\n",
//!     &SensorSchema::default(),
//! )?;
//!
//! let report = AnalysisPipeline::new(NullChartRenderer).run(&reference, Some(&uploaded))?;
//! assert_eq!(report.charts.len(), 3);
//! assert_eq!(report.compare_length, 2);
//! assert_eq!(report.fault_label, "chipped gear fault");
//! # Ok::<(), gearscope_core::Error>(())
//! ```

pub mod captions;
mod comparison;
mod pipeline;
mod report;

pub use captions::fault_label;
pub use comparison::Comparison;
pub use pipeline::AnalysisPipeline;
pub use report::{AnalysisReport, ChartArtifact};
