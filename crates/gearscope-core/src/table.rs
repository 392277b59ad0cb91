//! In-memory sensor tables backed by Polars DataFrames

use std::io::{Cursor, Read};
use std::path::Path;

use polars::prelude::*;
use tracing::debug;

use crate::sampling::Preview;
use crate::{Error, Result};

/// An ordered table of named columns; row order is the time index
#[derive(Debug, Clone)]
pub struct Table {
    frame: DataFrame,
}

impl Table {
    /// Wrap an existing DataFrame
    pub fn from_frame(frame: DataFrame) -> Self {
        Self { frame }
    }

    /// Parse CSV text with a header row
    ///
    /// Column types are inferred per column: numeric columns become integer or
    /// float columns, everything else stays text. Types are inferred from every
    /// row, not a leading sample. Blank input is rejected as
    /// [`Error::EmptyDataset`] before parsing.
    pub fn from_csv_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Err(Error::EmptyDataset(
                "no columns to parse from file".to_string(),
            ));
        }

        let frame = CsvReadOptions::default()
            .with_has_header(true)
            .with_infer_schema_length(None)
            .into_reader_with_file_handle(Cursor::new(bytes.to_vec()))
            .finish()
            .map_err(|e| Error::parse("reading CSV", e))?;

        debug!(
            rows = frame.height(),
            columns = frame.width(),
            "parsed CSV table"
        );
        Ok(Self { frame })
    }

    /// Read a whole stream and parse it as CSV
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Self::from_csv_bytes(&bytes)
    }

    /// Load a CSV file from disk
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading CSV table");
        let bytes = std::fs::read(path)?;
        Self::from_csv_bytes(&bytes)
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.frame.height()
    }

    pub fn is_empty(&self) -> bool {
        self.frame.height() == 0
    }

    /// Column names in file order
    pub fn column_names(&self) -> Vec<String> {
        self.frame
            .get_column_names()
            .into_iter()
            .map(|name| name.to_string())
            .collect()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.frame.column(name).is_ok()
    }

    /// The first `n` rows (fewer if the table is shorter)
    pub fn head(&self, n: usize) -> Table {
        Self {
            frame: self.frame.head(Some(n)),
        }
    }

    /// Values of a numeric column as `f64`, nulls as `None`
    ///
    /// Integer columns are widened to `f64`. A missing column or a column
    /// holding text is a schema error.
    pub fn numeric_column(&self, name: &str) -> Result<Vec<Option<f64>>> {
        let column = self
            .frame
            .column(name)
            .map_err(|_| Error::missing_column(name))?;

        check_numeric(name, column)?;

        let values = column
            .as_materialized_series()
            .cast(&DataType::Float64)?;
        Ok(values.f64()?.into_iter().collect())
    }

    /// Render the first `rows` rows as literal cell text
    pub fn preview(&self, rows: usize) -> Result<Preview> {
        let head = self.frame.head(Some(rows));
        let mut cells: Vec<Vec<String>> = vec![Vec::with_capacity(head.width()); head.height()];

        for column in head.get_columns() {
            let text = column.as_materialized_series().cast(&DataType::String)?;
            for (row, value) in text.str()?.into_iter().enumerate() {
                cells[row].push(value.unwrap_or_default().to_string());
            }
        }

        Ok(Preview {
            columns: self.column_names(),
            rows: cells,
        })
    }

    /// Borrow the underlying DataFrame
    pub fn frame(&self) -> &DataFrame {
        &self.frame
    }

    pub fn into_frame(self) -> DataFrame {
        self.frame
    }
}

/// Reject a column that holds text values
///
/// Columns without any non-null value carry no type information (a
/// header-only CSV infers them as text), so they pass.
pub(crate) fn check_numeric(name: &str, column: &Column) -> Result<()> {
    if is_numeric(column.dtype()) || column.len() == column.null_count() {
        return Ok(());
    }
    Err(Error::NonNumericColumn {
        column: name.to_string(),
        found: column.dtype().to_string(),
    })
}

/// Whether a column dtype can be read as `f64` without loss of meaning
fn is_numeric(dtype: &DataType) -> bool {
    dtype.is_primitive_numeric()
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::*;

    const SAMPLE: &str = "sensor1,sensor2,note\n0.5,1,a\n1.5,2,b\n-2.0,3,c\n";

    #[test]
    fn test_parse_infers_types() {
        let table = Table::from_csv_bytes(SAMPLE.as_bytes()).unwrap();
        assert_eq!(table.height(), 3);
        assert_eq!(table.column_names(), vec!["sensor1", "sensor2", "note"]);

        assert_eq!(
            table.numeric_column("sensor1").unwrap(),
            vec![Some(0.5), Some(1.5), Some(-2.0)]
        );
        // Integer column widened to f64
        assert_eq!(
            table.numeric_column("sensor2").unwrap(),
            vec![Some(1.0), Some(2.0), Some(3.0)]
        );
    }

    #[test]
    fn test_text_column_is_not_numeric() {
        let table = Table::from_csv_bytes(SAMPLE.as_bytes()).unwrap();
        let err = table.numeric_column("note").unwrap_err();
        assert!(matches!(err, Error::NonNumericColumn { ref column, .. } if column == "note"));
    }

    #[test]
    fn test_missing_column() {
        let table = Table::from_csv_bytes(SAMPLE.as_bytes()).unwrap();
        let err = table.numeric_column("sensor9").unwrap_err();
        assert_eq!(err.column(), Some("sensor9"));
    }

    #[test]
    fn test_blank_input_is_empty_dataset() {
        assert!(matches!(
            Table::from_csv_bytes(b""),
            Err(Error::EmptyDataset(_))
        ));
        assert!(matches!(
            Table::from_csv_bytes(b"  \n\n"),
            Err(Error::EmptyDataset(_))
        ));
    }

    #[test]
    fn test_header_only_has_zero_rows() {
        let table = Table::from_csv_bytes(b"sensor1,sensor2\n").unwrap();
        assert_eq!(table.height(), 0);
        assert!(table.is_empty());
        assert!(table.numeric_column("sensor1").unwrap().is_empty());
    }

    #[test]
    fn test_head_and_preview() {
        let table = Table::from_csv_bytes(SAMPLE.as_bytes()).unwrap();
        assert_eq!(table.head(2).height(), 2);
        assert_eq!(table.head(10).height(), 3);

        let preview = table.preview(2).unwrap();
        assert_eq!(preview.columns, vec!["sensor1", "sensor2", "note"]);
        assert_eq!(preview.rows.len(), 2);
        assert_eq!(preview.rows[0].len(), 3);
        assert_eq!(preview.rows[1][2], "b");
    }

    #[test]
    fn test_small_integer_frames_are_numeric() {
        let frame = df!(
            "sensor1" => &[1i16, -2, 3],
            "sensor2" => &[4u8, 5, 6],
            "sensor3" => &[7i8, 8, 9],
            "sensor4" => &[10u16, 11, 12]
        )
        .unwrap();
        let table = Table::from_frame(frame);
        assert_eq!(
            table.numeric_column("sensor1").unwrap(),
            vec![Some(1.0), Some(-2.0), Some(3.0)]
        );
        assert_eq!(
            table.numeric_column("sensor2").unwrap(),
            vec![Some(4.0), Some(5.0), Some(6.0)]
        );
        assert!(table.numeric_column("sensor3").is_ok());
        assert!(table.numeric_column("sensor4").is_ok());
    }

    #[test]
    fn test_from_reader() {
        let table = Table::from_reader(SAMPLE.as_bytes()).unwrap();
        assert_eq!(table.height(), 3);
    }
}
