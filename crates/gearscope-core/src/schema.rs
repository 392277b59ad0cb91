//! Declared column requirements for sensor tables

use crate::table::{check_numeric, Table};
use crate::{Error, Result};

/// First monitored column (x-axis vibration)
pub const SENSOR1: &str = "sensor1";

/// Second monitored column (y-axis vibration)
pub const SENSOR2: &str = "sensor2";

/// Numeric columns a table must carry before it can be compared
///
/// Extra columns are tolerated and show up in previews.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SensorSchema {
    required: Vec<String>,
}

impl Default for SensorSchema {
    fn default() -> Self {
        Self::new([SENSOR1, SENSOR2])
    }
}

impl SensorSchema {
    pub fn new<I, S>(required: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            required: required.into_iter().map(Into::into).collect(),
        }
    }

    pub fn required(&self) -> &[String] {
        &self.required
    }

    /// Check every required column, reporting the first violation in
    /// declaration order
    pub fn validate(&self, table: &Table) -> Result<()> {
        for name in &self.required {
            let column = table
                .frame()
                .column(name)
                .map_err(|_| Error::missing_column(name))?;
            check_numeric(name, column)?;
        }
        Ok(())
    }
}
