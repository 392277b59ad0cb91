//! HTML views

use askama::Template;
use gearscope_analysis::AnalysisReport;
use gearscope_core::Preview;

use crate::session::Notice;

/// Landing page with the upload form
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexView {
    pub notices: Vec<Notice>,
    pub current_label: Option<String>,
}

pub struct ChartView {
    pub title: String,
    pub caption: String,
    pub image_uri: String,
}

/// Three comparison charts followed by both previews
#[derive(Template)]
#[template(path = "analysis.html")]
pub struct AnalysisView {
    pub label: String,
    pub fault_label: String,
    pub compare_length: usize,
    pub charts: Vec<ChartView>,
    pub reference_preview: Preview,
    pub uploaded_preview: Preview,
}

impl From<AnalysisReport> for AnalysisView {
    fn from(report: AnalysisReport) -> Self {
        let charts = report
            .charts
            .iter()
            .map(|chart| ChartView {
                title: chart.title.clone(),
                caption: chart.caption.clone(),
                image_uri: chart.image_uri(),
            })
            .collect();
        Self {
            label: report.label,
            fault_label: report.fault_label,
            compare_length: report.compare_length,
            charts,
            reference_preview: report.reference_preview,
            uploaded_preview: report.uploaded_preview,
        }
    }
}
