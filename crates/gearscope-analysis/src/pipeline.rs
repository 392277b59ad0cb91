//! Reference-versus-upload comparison pipeline

use gearscope_core::{
    AnalysisConfig, Error, Result, SamplePair, SensorSchema, Table, UploadedDataset,
};
use gearscope_viz::{ChartRenderer, ChartSpec};
use tracing::{debug, instrument};

use crate::captions::fault_label;
use crate::report::{AnalysisReport, ChartArtifact};
use crate::Comparison;

/// Runs the fixed set of comparisons against a reference recording
///
/// The pipeline is stateless between runs; the uploaded dataset is passed in
/// by the caller on every call.
#[derive(Debug, Clone)]
pub struct AnalysisPipeline<R: ChartRenderer> {
    config: AnalysisConfig,
    schema: SensorSchema,
    renderer: R,
}

impl<R: ChartRenderer> AnalysisPipeline<R> {
    /// Pipeline with the default configuration and sensor schema
    pub fn new(renderer: R) -> Self {
        Self {
            config: AnalysisConfig::default(),
            schema: SensorSchema::default(),
            renderer,
        }
    }

    /// Pipeline with a custom configuration
    ///
    /// # Errors
    /// Returns [`Error::InvalidParameter`] if the configuration is invalid.
    pub fn with_config(config: AnalysisConfig, renderer: R) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            schema: SensorSchema::default(),
            renderer,
        })
    }

    pub fn with_schema(mut self, schema: SensorSchema) -> Self {
        self.schema = schema;
        self
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub fn schema(&self) -> &SensorSchema {
        &self.schema
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Compare `uploaded` against `reference`
    ///
    /// All chart descriptions are built before any rendering, so schema
    /// failures never leave partial output behind. Previews are taken from the
    /// untruncated tables.
    ///
    /// # Errors
    /// - [`Error::NoData`] when nothing has been uploaded
    /// - [`Error::MissingColumn`] / [`Error::NonNumericColumn`] when either
    ///   table lacks a required numeric column
    /// - [`Error::Render`] if drawing or encoding a chart fails
    #[instrument(skip_all, fields(label = uploaded.map(UploadedDataset::label)))]
    pub fn run(
        &self,
        reference: &Table,
        uploaded: Option<&UploadedDataset>,
    ) -> Result<AnalysisReport> {
        let uploaded = uploaded.ok_or(Error::NoData)?;
        self.schema.validate(reference)?;
        self.schema.validate(uploaded.table())?;

        let pair = SamplePair::align(reference, uploaded.table(), self.config.compare_limit);
        let fault_label = fault_label(uploaded.label());
        let specs = self.chart_specs(&pair, &fault_label)?;

        let mut charts = Vec::with_capacity(specs.len());
        for (comparison, spec) in specs {
            let image = self.renderer.render(&spec)?;
            charts.push(ChartArtifact {
                comparison,
                title: spec.title.clone(),
                caption: comparison.caption(&fault_label),
                spec,
                image,
            });
        }

        let reference_preview = reference.preview(self.config.preview_rows)?;
        let uploaded_preview = uploaded.table().preview(self.config.preview_rows)?;
        debug!(
            compare_length = pair.len(),
            charts = charts.len(),
            rendered = self.renderer.is_enabled(),
            "analysis complete"
        );

        Ok(AnalysisReport {
            label: uploaded.label().to_string(),
            fault_label,
            compare_length: pair.len(),
            charts,
            reference_preview,
            uploaded_preview,
        })
    }

    /// Chart descriptions for an aligned pair, in display order
    pub fn chart_specs(
        &self,
        pair: &SamplePair,
        fault_label: &str,
    ) -> Result<Vec<(Comparison, ChartSpec)>> {
        Comparison::ALL
            .iter()
            .map(|&c| Ok((c, c.chart_spec(pair, fault_label, self.config.rolling_window)?)))
            .collect()
    }
}
