//! Trailing-window descriptive statistics
//!
//! The moving average here follows the fixed-window convention: the value at
//! index `i` is the mean of samples `[i - window + 1, i]`, and positions with
//! fewer than `window` samples behind them are undefined. No shorter-window
//! average is ever synthesized for the warm-up region.

use crate::{Error, Result};

/// Trailing moving average over `data`
///
/// Returns one entry per input sample. An entry is `None` during warm-up
/// (`i < window - 1`) and whenever its window holds a missing or non-finite
/// sample.
///
/// # Errors
/// Returns [`Error::InvalidParameter`] when `window` is zero.
pub fn rolling_mean(data: &[Option<f64>], window: usize) -> Result<Vec<Option<f64>>> {
    if window == 0 {
        return Err(Error::InvalidParameter(
            "rolling window must be at least 1".to_string(),
        ));
    }

    let mut out = vec![None; data.len()];
    if data.len() < window {
        return Ok(out);
    }

    for (end, slot) in out.iter_mut().enumerate().skip(window - 1) {
        *slot = window_mean(&data[end + 1 - window..=end]);
    }
    Ok(out)
}

/// Count of defined entries in a rolling output
pub fn defined_count(values: &[Option<f64>]) -> usize {
    values.iter().filter(|v| v.is_some()).count()
}

// Summed from scratch per window
fn window_mean(window: &[Option<f64>]) -> Option<f64> {
    let mut sum = 0.0;
    for sample in window {
        match sample {
            Some(x) if x.is_finite() => sum += x,
            _ => return None,
        }
    }
    Some(sum / window.len() as f64)
}
