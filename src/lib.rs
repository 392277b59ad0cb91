//! # gearscope
//!
//! Compare an uploaded gear vibration recording against a fixed no-fault
//! baseline: three line charts (raw `sensor1`, raw `sensor2`, rolling mean of
//! `sensor1`) plus head previews of both tables.
//!
//! This crate re-exports the workspace libraries:
//!
//! - [`data`]: CSV loading, schema checks, alignment, rolling statistics
//! - [`viz`]: chart descriptions and the PNG renderer
//! - [`analysis`]: the comparison pipeline and its report
//!
//! The HTTP front end lives in the `gearscope-server` crate.
//!
//! ```rust
//! use gearscope::prelude::*;
//!
//! let reference = Table::from_csv_bytes(b"sensor1,sensor2\n0.1,0.2\n0.2,0.1\n")?;
//! let uploaded = UploadedDataset::from_upload(
//!     "pitting.csv",
//!     b"sensor1,sensor2\n0.4,0.3\n0.5,0.2\n",
//!     &SensorSchema::default(),
//! )?;
//!
//! let report = AnalysisPipeline::new(NullChartRenderer).run(&reference, Some(&uploaded))?;
//! assert_eq!(report.label, "pitting");
//! # Ok::<(), gearscope::data::Error>(())
//! ```

pub use gearscope_analysis as analysis;
pub use gearscope_core as data;
pub use gearscope_viz as viz;

pub mod prelude {
    pub use gearscope_analysis::{AnalysisPipeline, AnalysisReport, ChartArtifact, Comparison};
    pub use gearscope_core::{
        rolling_mean, AnalysisConfig, Error, ErrorKind, Result, SamplePair, SensorSchema, Table,
        UploadedDataset,
    };
    pub use gearscope_viz::{ChartRenderer, NullChartRenderer, PlottersRenderer};
}
