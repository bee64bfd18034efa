//! The public entry points of the calculator.
//!
//! Each function validates its input in the same order: an empty sample is
//! reported first, then invalid trim proportions, and finally a sample which
//! is too small to retain any values once trimmed.

use crate::err::{Error, Result};
use crate::math::trimmed::TrimmedMean;
use crate::trim::Trim;

/// Computes the mean of `data` after discarding the proportion `trim` of
/// values from each end of the sorted sample.
///
/// `trim` must lie within `[0, 0.5)`.
///
/// ```
/// let mean = trimmed_mean::trimmed_mean(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0], 0.2)?;
/// assert_eq!(mean, 5.5);
/// # Ok::<(), trimmed_mean::Error>(())
/// ```
pub fn trimmed_mean(data: &[f64], trim: f64) -> Result<f64> {
	trimmed_mean_asym(data, trim, trim)
}

/// Computes the mean of `data` after discarding the proportion `low` of the
/// lowest values and the proportion `high` of the highest values.
///
/// Each proportion must lie within `[0, 0.5]` and their sum must be less than
/// `1`. The number of values discarded from each end is truncated, so a
/// sample of 10 values trimmed by 0.25 loses 2 values from that end.
pub fn trimmed_mean_asym(data: &[f64], low: f64, high: f64) -> Result<f64> {
	mean_of(data, low, high)
}

/// Integer variant of [`trimmed_mean`].
pub fn trimmed_mean_int(data: &[i64], trim: f64) -> Result<f64> {
	trimmed_mean_int_asym(data, trim, trim)
}

/// Integer variant of [`trimmed_mean_asym`]. Values are converted to `f64`
/// before trimming.
pub fn trimmed_mean_int_asym(data: &[i64], low: f64, high: f64) -> Result<f64> {
	mean_of(data, low, high)
}

fn mean_of<T>(data: &[T], low: f64, high: f64) -> Result<f64>
where
	[T]: TrimmedMean,
{
	if data.is_empty() {
		return Err(Error::EmptyInput);
	}
	let trim = Trim::asymmetric(low, high)?;
	data.trimmed_mean(trim)
}
