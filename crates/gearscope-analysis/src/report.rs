//! Assembled comparison results

use gearscope_core::Preview;
use gearscope_viz::{ChartSpec, EncodedImage};

use crate::Comparison;

/// One rendered chart with its guidance text
///
/// The plotted series are kept next to the image so that two reports can be
/// compared at the data level without decoding pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartArtifact {
    pub comparison: Comparison,
    pub title: String,
    pub caption: String,
    pub spec: ChartSpec,
    pub image: EncodedImage,
}

impl ChartArtifact {
    /// Image as an `<img src>` value
    pub fn image_uri(&self) -> String {
        self.image.to_data_uri()
    }
}

/// Everything shown on the analysis page
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisReport {
    pub label: String,
    pub fault_label: String,
    pub compare_length: usize,
    pub charts: Vec<ChartArtifact>,
    pub reference_preview: Preview,
    pub uploaded_preview: Preview,
}

impl AnalysisReport {
    pub fn chart(&self, comparison: Comparison) -> Option<&ChartArtifact> {
        self.charts.iter().find(|c| c.comparison == comparison)
    }

    /// Plotted series of every chart, in chart order
    pub fn series_data(&self) -> Vec<Vec<Option<f64>>> {
        self.charts
            .iter()
            .flat_map(|c| c.spec.series.iter().map(|s| s.values.clone()))
            .collect()
    }
}
