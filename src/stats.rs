use crate::error::{Error, Result};

/// Arithmetic mean of `values`.
///
/// Uses a running mean so a slice of identical values averages to exactly
/// that value.
///
/// # Errors
///
/// Returns [`Error::EmptyStatistics`] when `values` is empty.
pub fn average(values: &[f64]) -> Result<f64> {
    if values.is_empty() {
        return Err(Error::EmptyStatistics);
    }
    Ok(values
        .iter()
        .enumerate()
        .fold(0.0, |mean, (k, x)| mean + (x - mean) / (k + 1) as f64))
}

/// Population variance of `values` (divides by `n`, not `n - 1`).
///
/// # Errors
///
/// Returns [`Error::EmptyStatistics`] when `values` is empty.
pub fn variance(values: &[f64]) -> Result<f64> {
    let mean = average(values)?;
    let squared: f64 = values.iter().map(|x| (x - mean).powi(2)).sum();
    Ok(squared / values.len() as f64)
}
