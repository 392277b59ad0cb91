//! Chart rendering backends
//!
//! [`ChartRenderer`] is the seam between the comparison pipeline and a drawing
//! library. [`PlottersRenderer`] draws PNG line charts; [`NullChartRenderer`]
//! draws nothing and is used where only the plotted series matter.

use std::sync::Arc;

use gearscope_core::{Error, Result};
use plotters::prelude::*;
use tracing::debug;

use crate::encode::encode_png;
use crate::types::{ChartSpec, EncodedImage, SeriesColor};

/// Default chart width in pixels
pub const DEFAULT_WIDTH: u32 = 600;

/// Default chart height in pixels
pub const DEFAULT_HEIGHT: u32 = 400;

const FONT_FAMILY: &str = "sans-serif";

/// Turns a chart description into an encoded image
pub trait ChartRenderer: Send + Sync {
    /// Render `spec`; empty series are valid and produce an empty chart
    fn render(&self, spec: &ChartSpec) -> Result<EncodedImage>;

    /// Check if this renderer actually produces pixels
    fn is_enabled(&self) -> bool {
        true
    }
}

impl<R: ChartRenderer + ?Sized> ChartRenderer for Box<R> {
    fn render(&self, spec: &ChartSpec) -> Result<EncodedImage> {
        (**self).render(spec)
    }

    fn is_enabled(&self) -> bool {
        (**self).is_enabled()
    }
}

impl<R: ChartRenderer + ?Sized> ChartRenderer for Arc<R> {
    fn render(&self, spec: &ChartSpec) -> Result<EncodedImage> {
        (**self).render(spec)
    }

    fn is_enabled(&self) -> bool {
        (**self).is_enabled()
    }
}

/// Line-chart renderer backed by plotters' bitmap backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlottersRenderer {
    width: u32,
    height: u32,
}

impl Default for PlottersRenderer {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

impl PlottersRenderer {
    /// Create a renderer producing `width` x `height` images
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidParameter(format!(
                "chart size must be non-zero, got {width}x{height}"
            )));
        }
        Ok(Self { width, height })
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Draw into `pixels`; the drawing area borrows the buffer only for the
    /// duration of this call
    fn draw(&self, spec: &ChartSpec, pixels: &mut [u8]) -> Result<()> {
        let root = BitMapBackend::with_buffer(pixels, (self.width, self.height)).into_drawing_area();
        root.fill(&WHITE).map_err(Error::render)?;

        let (y_min, y_max) = spec.y_bounds();
        let x_max = spec.x_extent().saturating_sub(1).max(1) as f64;

        let mut chart = ChartBuilder::on(&root)
            .caption(spec.title.as_str(), (FONT_FAMILY, 18))
            .margin(12)
            .x_label_area_size(40)
            .y_label_area_size(60)
            .build_cartesian_2d(0f64..x_max, y_min..y_max)
            .map_err(Error::render)?;

        chart
            .configure_mesh()
            .x_desc(spec.x_label.as_str())
            .y_desc(spec.y_label.as_str())
            .draw()
            .map_err(Error::render)?;

        for series in &spec.series {
            let color = to_rgb(series.color);
            let mut segments = series.segments().into_iter();

            // The first segment carries the legend entry, even when empty
            let first = segments.next().unwrap_or_default();
            chart
                .draw_series(LineSeries::new(first, color.stroke_width(2)))
                .map_err(Error::render)?
                .label(series.label.as_str())
                .legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
                });

            for segment in segments {
                chart
                    .draw_series(LineSeries::new(segment, color.stroke_width(2)))
                    .map_err(Error::render)?;
            }
        }

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .draw()
            .map_err(Error::render)?;

        root.present().map_err(Error::render)?;
        Ok(())
    }
}

impl ChartRenderer for PlottersRenderer {
    fn render(&self, spec: &ChartSpec) -> Result<EncodedImage> {
        let mut pixels = vec![0u8; self.width as usize * self.height as usize * 3];
        self.draw(spec, &mut pixels)?;

        let bytes = encode_png(self.width, self.height, pixels)?;
        debug!(title = %spec.title, bytes = bytes.len(), "rendered chart");
        Ok(EncodedImage::png(self.width, self.height, bytes))
    }
}

fn to_rgb(color: SeriesColor) -> RGBColor {
    let (r, g, b) = color.rgb();
    RGBColor(r, g, b)
}

/// Renderer that performs no drawing
///
/// Returns an empty PNG payload for every chart. Useful when only the series
/// data of a report is inspected.
#[derive(Default, Clone, Copy, Debug)]
pub struct NullChartRenderer;

impl ChartRenderer for NullChartRenderer {
    #[inline(always)]
    fn render(&self, _: &ChartSpec) -> Result<EncodedImage> {
        Ok(EncodedImage::png(0, 0, Vec::new()))
    }

    #[inline(always)]
    fn is_enabled(&self) -> bool {
        false
    }
}
