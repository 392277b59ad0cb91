//! The three fixed comparisons shown for every upload

use gearscope_core::{rolling_mean, Result, SamplePair, SENSOR1, SENSOR2};
use gearscope_viz::{ChartSpec, SeriesColor, SeriesSpec};

use crate::captions;

const X_LABEL: &str = "Time (index)";
const RAW_Y_LABEL: &str = "Vibration (mm)";
const SMOOTHED_Y_LABEL: &str = "Rolling Mean (mm)";
const REFERENCE_LABEL: &str = "No Fault";

/// A reference-versus-upload chart, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Comparison {
    /// Raw `sensor1` (x-axis vibration)
    RawSensor1,
    /// Raw `sensor2` (y-axis vibration)
    RawSensor2,
    /// Trailing rolling mean of `sensor1`
    SmoothedSensor1,
}

impl Comparison {
    /// All comparisons in the order they are presented
    pub const ALL: [Comparison; 3] = [
        Comparison::RawSensor1,
        Comparison::RawSensor2,
        Comparison::SmoothedSensor1,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Comparison::RawSensor1 => "Sensor 1 – vibration [mm] along x-axis",
            Comparison::RawSensor2 => "Sensor 2 – vibration [mm] along y-axis",
            Comparison::SmoothedSensor1 => {
                "Sensor 1 – rolling mean (vibration [mm] along x-axis)"
            }
        }
    }

    /// Column the comparison reads from both tables
    pub fn column(self) -> &'static str {
        match self {
            Comparison::RawSensor1 | Comparison::SmoothedSensor1 => SENSOR1,
            Comparison::RawSensor2 => SENSOR2,
        }
    }

    pub fn y_label(self) -> &'static str {
        match self {
            Comparison::SmoothedSensor1 => SMOOTHED_Y_LABEL,
            _ => RAW_Y_LABEL,
        }
    }

    /// `(reference, uploaded)` line colours
    pub fn colors(self) -> (SeriesColor, SeriesColor) {
        match self {
            Comparison::RawSensor1 => (SeriesColor::Blue, SeriesColor::Red),
            Comparison::RawSensor2 => (SeriesColor::Green, SeriesColor::Orange),
            Comparison::SmoothedSensor1 => (SeriesColor::Purple, SeriesColor::Brown),
        }
    }

    pub fn is_smoothed(self) -> bool {
        matches!(self, Comparison::SmoothedSensor1)
    }

    pub fn caption(self, fault_label: &str) -> String {
        match self {
            Comparison::RawSensor1 => captions::raw_sensor1_caption(fault_label),
            Comparison::RawSensor2 => captions::raw_sensor2_caption(fault_label),
            Comparison::SmoothedSensor1 => captions::smoothed_sensor1_caption(fault_label),
        }
    }

    /// Build the chart description for an aligned pair
    ///
    /// # Errors
    /// Fails if either table lacks the numeric column, or if `window` is zero
    /// for the smoothed comparison.
    pub fn chart_spec(self, pair: &SamplePair, fault_label: &str, window: usize) -> Result<ChartSpec> {
        let mut reference = pair.reference().numeric_column(self.column())?;
        let mut uploaded = pair.uploaded().numeric_column(self.column())?;
        if self.is_smoothed() {
            reference = rolling_mean(&reference, window)?;
            uploaded = rolling_mean(&uploaded, window)?;
        }

        let (reference_label, uploaded_label) = if self.is_smoothed() {
            (
                format!("{REFERENCE_LABEL} (rolling mean)"),
                format!("{fault_label} (rolling mean)"),
            )
        } else {
            (REFERENCE_LABEL.to_string(), fault_label.to_string())
        };
        let (reference_color, uploaded_color) = self.colors();

        Ok(ChartSpec::new(self.title())
            .x_label(X_LABEL)
            .y_label(self.y_label())
            .with_series(SeriesSpec::new(reference_label, reference_color, reference))
            .with_series(SeriesSpec::new(uploaded_label, uploaded_color, uploaded)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gearscope_core::Table;

    fn pair() -> SamplePair {
        let reference = Table::from_csv_bytes(b"sensor1,sensor2\n1,10\n2,20\n3,30\n4,40\n").unwrap();
        let uploaded = Table::from_csv_bytes(b"sensor1,sensor2\n5.0,0.5\n6.0,0.6\n7.0,0.7\n").unwrap();
        SamplePair::align(&reference, &uploaded, 500)
    }

    #[test]
    fn test_raw_sensor2_spec() {
        let spec = Comparison::RawSensor2
            .chart_spec(&pair(), "crack gear fault", 2)
            .unwrap();
        assert_eq!(spec.title, "Sensor 2 – vibration [mm] along y-axis");
        assert_eq!(spec.x_label, "Time (index)");
        assert_eq!(spec.y_label, "Vibration (mm)");
        assert_eq!(spec.series.len(), 2);
        assert_eq!(spec.series[0].label, "No Fault");
        assert_eq!(spec.series[0].color, SeriesColor::Green);
        assert_eq!(spec.series[0].values, vec![Some(10.0), Some(20.0), Some(30.0)]);
        assert_eq!(spec.series[1].label, "crack gear fault");
        assert_eq!(spec.series[1].color, SeriesColor::Orange);
    }

    #[test]
    fn test_smoothed_spec() {
        let spec = Comparison::SmoothedSensor1
            .chart_spec(&pair(), "crack gear fault", 2)
            .unwrap();
        assert_eq!(spec.y_label, "Rolling Mean (mm)");
        assert_eq!(spec.series[0].label, "No Fault (rolling mean)");
        assert_eq!(spec.series[1].label, "crack gear fault (rolling mean)");
        assert_eq!(spec.series[0].values, vec![None, Some(1.5), Some(2.5)]);
        assert_eq!(spec.series[1].values, vec![None, Some(5.5), Some(6.5)]);
    }

    #[test]
    fn test_order_and_colors() {
        assert_eq!(Comparison::ALL[0], Comparison::RawSensor1);
        assert_eq!(
            Comparison::RawSensor1.colors(),
            (SeriesColor::Blue, SeriesColor::Red)
        );
        assert_eq!(
            Comparison::SmoothedSensor1.colors(),
            (SeriesColor::Purple, SeriesColor::Brown)
        );
        assert_eq!(Comparison::SmoothedSensor1.column(), "sensor1");
    }
}
