//! Configuration types for the comparison pipeline

use crate::{Error, Result};

/// Default cap on the number of rows compared per chart
pub const DEFAULT_COMPARE_LIMIT: usize = 500;

/// Default trailing window for the smoothed comparison
pub const DEFAULT_ROLLING_WINDOW: usize = 10;

/// Default number of rows shown in each table preview
pub const DEFAULT_PREVIEW_ROWS: usize = 10;

/// Tunables for one analysis run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisConfig {
    /// Upper bound on the aligned sample length
    pub compare_limit: usize,

    /// Window size of the trailing moving average
    pub rolling_window: usize,

    /// Rows taken from the head of each untruncated table
    pub preview_rows: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            compare_limit: DEFAULT_COMPARE_LIMIT,
            rolling_window: DEFAULT_ROLLING_WINDOW,
            preview_rows: DEFAULT_PREVIEW_ROWS,
        }
    }
}

impl AnalysisConfig {
    /// Set the compare limit
    pub fn with_compare_limit(mut self, compare_limit: usize) -> Self {
        self.compare_limit = compare_limit;
        self
    }

    /// Set the rolling window
    pub fn with_rolling_window(mut self, rolling_window: usize) -> Self {
        self.rolling_window = rolling_window;
        self
    }

    /// Set the preview length
    pub fn with_preview_rows(mut self, preview_rows: usize) -> Self {
        self.preview_rows = preview_rows;
        self
    }

    /// Reject configurations the pipeline cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.compare_limit == 0 {
            return Err(Error::InvalidParameter(
                "compare_limit must be at least 1".to_string(),
            ));
        }
        if self.rolling_window == 0 {
            return Err(Error::InvalidParameter(
                "rolling_window must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AnalysisConfig::default();
        assert_eq!(config.compare_limit, 500);
        assert_eq!(config.rolling_window, 10);
        assert_eq!(config.preview_rows, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero() {
        assert!(AnalysisConfig::default().with_rolling_window(0).validate().is_err());
        assert!(AnalysisConfig::default().with_compare_limit(0).validate().is_err());
        // An empty preview is allowed
        assert!(AnalysisConfig::default().with_preview_rows(0).validate().is_ok());
    }
}
