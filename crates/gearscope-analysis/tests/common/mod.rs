//! Common test utilities for gearscope-analysis tests

use std::sync::Mutex;

use gearscope_core::{Result, SensorSchema, Table, UploadedDataset};
use gearscope_viz::{ChartRenderer, ChartSpec, EncodedImage};

/// Renderer that records every chart it is asked to draw
#[derive(Default)]
pub struct RecordingRenderer {
    rendered: Mutex<Vec<ChartSpec>>,
}

impl RecordingRenderer {
    pub fn titles(&self) -> Vec<String> {
        self.rendered
            .lock()
            .unwrap()
            .iter()
            .map(|spec| spec.title.clone())
            .collect()
    }

    pub fn count(&self) -> usize {
        self.rendered.lock().unwrap().len()
    }
}

impl ChartRenderer for RecordingRenderer {
    fn render(&self, spec: &ChartSpec) -> Result<EncodedImage> {
        self.rendered.lock().unwrap().push(spec.clone());
        Ok(EncodedImage::png(1, 1, vec![0x89]))
    }
}

/// Sensor CSV with `rows` rows; `scale` distinguishes reference from upload
pub fn sensor_csv(rows: usize, scale: f64) -> String {
    let mut csv = String::from("sensor1,sensor2\n");
    for i in 0..rows {
        let t = i as f64 / 8.0;
        csv.push_str(&format!("{:.5},{:.5}\n", scale * t.sin(), scale * t.cos()));
    }
    csv
}

pub fn reference_table(rows: usize) -> Table {
    Table::from_csv_bytes(sensor_csv(rows, 1.0).as_bytes()).unwrap()
}

pub fn upload(name: &str, rows: usize) -> UploadedDataset {
    UploadedDataset::from_upload(
        name,
        sensor_csv(rows, 2.5).as_bytes(),
        &SensorSchema::default(),
    )
    .unwrap()
}
