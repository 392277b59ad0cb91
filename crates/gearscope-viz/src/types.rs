//! Types describing what a comparison chart shows

use std::fmt;

/// Named colours available to chart series
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesColor {
    Blue,
    Red,
    Green,
    Orange,
    Purple,
    Brown,
}

impl SeriesColor {
    /// RGB components
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            SeriesColor::Blue => (0, 0, 255),
            SeriesColor::Red => (255, 0, 0),
            SeriesColor::Green => (0, 128, 0),
            SeriesColor::Orange => (255, 165, 0),
            SeriesColor::Purple => (128, 0, 128),
            SeriesColor::Brown => (165, 42, 42),
        }
    }
}

impl fmt::Display for SeriesColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeriesColor::Blue => write!(f, "blue"),
            SeriesColor::Red => write!(f, "red"),
            SeriesColor::Green => write!(f, "green"),
            SeriesColor::Orange => write!(f, "orange"),
            SeriesColor::Purple => write!(f, "purple"),
            SeriesColor::Brown => write!(f, "brown"),
        }
    }
}

/// One line on a chart, indexed by sample position
///
/// `None` entries (and non-finite values) are gaps: the line is broken there.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesSpec {
    pub label: String,
    pub color: SeriesColor,
    pub values: Vec<Option<f64>>,
}

impl SeriesSpec {
    pub fn new(label: impl Into<String>, color: SeriesColor, values: Vec<Option<f64>>) -> Self {
        Self {
            label: label.into(),
            color,
            values,
        }
    }

    /// Number of sample positions, defined or not
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Contiguous runs of finite `(index, value)` points
    pub fn segments(&self) -> Vec<Vec<(f64, f64)>> {
        let mut segments = Vec::new();
        let mut current = Vec::new();
        for (i, value) in self.values.iter().enumerate() {
            match value {
                Some(v) if v.is_finite() => current.push((i as f64, *v)),
                _ => {
                    if !current.is_empty() {
                        segments.push(std::mem::take(&mut current));
                    }
                }
            }
        }
        if !current.is_empty() {
            segments.push(current);
        }
        segments
    }

    fn finite_values(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().flatten().copied().filter(|v| v.is_finite())
    }
}

/// Everything needed to draw one comparison chart
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series: Vec<SeriesSpec>,
}

impl ChartSpec {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            x_label: String::new(),
            y_label: String::new(),
            series: Vec::new(),
        }
    }

    pub fn x_label(mut self, label: impl Into<String>) -> Self {
        self.x_label = label.into();
        self
    }

    pub fn y_label(mut self, label: impl Into<String>) -> Self {
        self.y_label = label.into();
        self
    }

    pub fn with_series(mut self, series: SeriesSpec) -> Self {
        self.series.push(series);
        self
    }

    /// Longest series length
    pub fn x_extent(&self) -> usize {
        self.series.iter().map(SeriesSpec::len).max().unwrap_or(0)
    }

    /// Y-axis range covering every finite value with a 5% margin
    ///
    /// Falls back to `[-1, 1]` with no finite values and widens a flat range
    /// by one unit each way.
    pub fn y_bounds(&self) -> (f64, f64) {
        let (min, max) = self
            .series
            .iter()
            .flat_map(SeriesSpec::finite_values)
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(v), hi.max(v))
            });

        if !min.is_finite() || !max.is_finite() {
            return (-1.0, 1.0);
        }
        if max - min <= f64::EPSILON * max.abs().max(1.0) {
            return (min - 1.0, max + 1.0);
        }
        let pad = (max - min) * 0.05;
        (min - pad, max + pad)
    }
}

/// An encoded raster image ready to embed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    pub mime_type: &'static str,
    pub width: u32,
    pub height: u32,
    pub bytes: Vec<u8>,
}

impl EncodedImage {
    pub fn png(width: u32, height: u32, bytes: Vec<u8>) -> Self {
        Self {
            mime_type: "image/png",
            width,
            height,
            bytes,
        }
    }

    /// `data:` URI usable directly as an `<img src>`
    pub fn to_data_uri(&self) -> String {
        crate::encode::data_uri(self.mime_type, &self.bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_segments_split_on_gaps() {
        let series = SeriesSpec::new(
            "s",
            SeriesColor::Blue,
            vec![None, Some(1.0), Some(2.0), None, Some(f64::NAN), Some(3.0)],
        );
        assert_eq!(
            series.segments(),
            vec![vec![(1.0, 1.0), (2.0, 2.0)], vec![(5.0, 3.0)]]
        );
    }

    #[test]
    fn test_segments_of_empty_series() {
        let series = SeriesSpec::new("s", SeriesColor::Red, vec![]);
        assert!(series.segments().is_empty());
        assert!(series.is_empty());
    }

    #[test]
    fn test_y_bounds() {
        let spec = ChartSpec::new("t")
            .with_series(SeriesSpec::new("a", SeriesColor::Blue, vec![Some(0.0), Some(10.0)]))
            .with_series(SeriesSpec::new("b", SeriesColor::Red, vec![Some(-10.0), None]));
        let (lo, hi) = spec.y_bounds();
        assert_relative_eq!(lo, -11.0);
        assert_relative_eq!(hi, 11.0);
        assert_eq!(spec.x_extent(), 2);
    }

    #[test]
    fn test_y_bounds_degenerate() {
        let empty = ChartSpec::new("t");
        assert_eq!(empty.y_bounds(), (-1.0, 1.0));
        assert_eq!(empty.x_extent(), 0);

        let flat = ChartSpec::new("t")
            .with_series(SeriesSpec::new("a", SeriesColor::Blue, vec![Some(2.0); 4]));
        assert_eq!(flat.y_bounds(), (1.0, 3.0));
    }

    #[test]
    fn test_color_names() {
        assert_eq!(SeriesColor::Orange.to_string(), "orange");
        assert_eq!(SeriesColor::Brown.rgb(), (165, 42, 42));
    }
}
