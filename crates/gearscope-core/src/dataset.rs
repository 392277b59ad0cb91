//! Uploaded recordings and their display labels

use std::path::Path;

use tracing::info;

use crate::schema::SensorSchema;
use crate::table::Table;
use crate::{Error, Result};

/// A user-supplied table together with the label derived from its filename
#[derive(Debug, Clone)]
pub struct UploadedDataset {
    label: String,
    table: Table,
}

impl UploadedDataset {
    pub fn new(label: impl Into<String>, table: Table) -> Self {
        Self {
            label: label.into(),
            table,
        }
    }

    /// Parse an uploaded file and check it against `schema`
    ///
    /// The label is the filename without its extension, so `root_crack.csv`
    /// becomes `root_crack`.
    pub fn from_upload(filename: &str, bytes: &[u8], schema: &SensorSchema) -> Result<Self> {
        if filename.trim().is_empty() {
            return Err(Error::InvalidParameter("no file selected".to_string()));
        }
        let table = Table::from_csv_bytes(bytes)?;
        schema.validate(&table)?;

        let label = label_from_filename(filename);
        info!(
            label = %label,
            rows = table.height(),
            columns = table.column_names().len(),
            "accepted upload"
        );
        Ok(Self::new(label, table))
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn table(&self) -> &Table {
        &self.table
    }
}

/// Strip directories and the final extension from a client filename
pub fn label_from_filename(filename: &str) -> String {
    Path::new(filename)
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| filename.to_string())
}
