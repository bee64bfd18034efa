use crate::cnf::TRACE_TARGET;
use crate::err::{Error, Result};
use crate::math::mean::Mean;
use crate::num::{Sort, Sorted, ToFloat};
use crate::trim::Trim;

pub trait Trimmed {
	/// The contiguous run of values left once the tails described by `trim`
	/// have been discarded
	fn retained(&self, trim: Trim) -> Result<&[f64]>;

	/// The values left once `low_cut` values have been discarded from the
	/// start and `high_cut` values from the end
	fn retained_between(&self, low_cut: usize, high_cut: usize) -> Result<&[f64]>;
}

impl Trimmed for Sorted<&Vec<f64>> {
	fn retained(&self, trim: Trim) -> Result<&[f64]> {
		let (low_cut, high_cut) = trim.cuts(self.0.len());
		self.retained_between(low_cut, high_cut)
	}

	fn retained_between(&self, low_cut: usize, high_cut: usize) -> Result<&[f64]> {
		let len = self.0.len();
		let end = len.saturating_sub(high_cut);
		if low_cut >= end {
			return Err(Error::NoElementsRemain {
				len,
				low_cut,
				high_cut,
			});
		}
		trace!(
			target: TRACE_TARGET,
			len,
			low_cut,
			high_cut,
			retained = end - low_cut,
			"Trimming sorted sample"
		);
		Ok(&self.0[low_cut..end])
	}
}

pub trait TrimmedMean {
	/// Mean of the values after discarding the tails described by `trim`.
	/// The values themselves are left untouched. Runs in O(n log n) time.
	fn trimmed_mean(&self, trim: Trim) -> Result<f64>;
}

impl<T> TrimmedMean for [T]
where
	T: ToFloat,
{
	fn trimmed_mean(&self, trim: Trim) -> Result<f64> {
		if self.is_empty() {
			return Err(Error::EmptyInput);
		}
		let mut data: Vec<f64> = self.iter().map(ToFloat::to_float).collect();
		let sorted = data.sorted();
		Ok(sorted.retained(trim)?.mean())
	}
}
