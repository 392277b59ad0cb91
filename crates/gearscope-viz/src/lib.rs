//! Chart rendering for gearscope comparisons
//!
//! A [`ChartSpec`] describes a chart as data: title, axis labels and a list of
//! [`SeriesSpec`] lines sharing one set of axes. A [`ChartRenderer`] turns it
//! into an [`EncodedImage`] that can be embedded as a `data:` URI.
//!
//! # Example
//!
//! ```rust,ignore
//! use gearscope_viz::{ChartRenderer, ChartSpec, PlottersRenderer, SeriesColor, SeriesSpec};
//!
//! let spec = ChartSpec::new("Sensor 1")
//!     .x_label("Time (index)")
//!     .y_label("Vibration (mm)")
//!     .with_series(SeriesSpec::new("No Fault", SeriesColor::Blue, vec![Some(0.1), Some(0.2)]))
//!     .with_series(SeriesSpec::new("root_crack gear fault", SeriesColor::Red, vec![Some(0.4), Some(0.9)]));
//!
//! let image = PlottersRenderer::default().render(&spec)?;
//! let src = image.to_data_uri();
//! ```

pub mod encode;
pub mod renderer;
pub mod types;

pub use encode::{data_uri, encode_png};
pub use renderer::{ChartRenderer, NullChartRenderer, PlottersRenderer, DEFAULT_HEIGHT, DEFAULT_WIDTH};
pub use types::{ChartSpec, EncodedImage, SeriesColor, SeriesSpec};
