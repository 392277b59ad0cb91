//! Alignment of reference and uploaded tables, plus head previews

use tracing::debug;

use crate::table::Table;

/// Number of rows both tables are truncated to before charting
///
/// `min(limit, reference_rows, uploaded_rows)`
pub fn comparable_length(limit: usize, reference_rows: usize, uploaded_rows: usize) -> usize {
    limit.min(reference_rows).min(uploaded_rows)
}

/// Reference and uploaded tables cut to a common length
#[derive(Debug, Clone)]
pub struct SamplePair {
    reference: Table,
    uploaded: Table,
}

impl SamplePair {
    /// Truncate both tables to [`comparable_length`] rows
    pub fn align(reference: &Table, uploaded: &Table, limit: usize) -> Self {
        let n = comparable_length(limit, reference.height(), uploaded.height());
        debug!(
            reference_rows = reference.height(),
            uploaded_rows = uploaded.height(),
            aligned = n,
            "aligned sample pair"
        );
        Self {
            reference: reference.head(n),
            uploaded: uploaded.head(n),
        }
    }

    /// Shared row count of both samples
    pub fn len(&self) -> usize {
        self.reference.height()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn reference(&self) -> &Table {
        &self.reference
    }

    pub fn uploaded(&self) -> &Table {
        &self.uploaded
    }
}

/// Row/column grid of literal cell text
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Preview {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Preview {
    /// Number of data rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
