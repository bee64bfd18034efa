use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::cnf::{MAX_TOTAL_TRIM_PROPORTION, MAX_TRIM_PROPORTION, MIN_TRIM_PROPORTION};
use crate::err::{Error, Result};

/// The proportions of a sample to discard from its lower and upper tails.
///
/// A `Trim` can only be built from valid proportions: each one lies within
/// `[0, 0.5]` and together they sum to less than `1`. This also holds for
/// values which are deserialized.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawTrim")]
pub struct Trim {
	low: f64,
	high: f64,
}

#[derive(Deserialize)]
struct RawTrim {
	low: f64,
	high: f64,
}

impl TryFrom<RawTrim> for Trim {
	type Error = Error;
	fn try_from(raw: RawTrim) -> Result<Self> {
		Trim::asymmetric(raw.low, raw.high)
	}
}

impl Default for Trim {
	fn default() -> Self {
		Self::NONE
	}
}

impl Display for Trim {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		if self.is_symmetric() {
			write!(f, "{}", self.low)
		} else {
			write!(f, "{}/{}", self.low, self.high)
		}
	}
}

impl Trim {
	/// Discards nothing, giving the plain arithmetic mean
	pub const NONE: Trim = Trim {
		low: 0.0,
		high: 0.0,
	};

	/// Trims the same proportion from both tails
	pub fn symmetric(trim: f64) -> Result<Self> {
		Self::asymmetric(trim, trim)
	}

	/// Trims independent proportions from the lower and upper tails
	pub fn asymmetric(low: f64, high: f64) -> Result<Self> {
		let range = MIN_TRIM_PROPORTION..=MAX_TRIM_PROPORTION;
		// NaN falls outside of every range
		if !range.contains(&low) || !range.contains(&high) || low + high >= MAX_TOTAL_TRIM_PROPORTION
		{
			return Err(Error::InvalidTrimProportion {
				low,
				high,
			});
		}
		Ok(Self {
			low,
			high,
		})
	}

	pub fn low(&self) -> f64 {
		self.low
	}

	pub fn high(&self) -> f64 {
		self.high
	}

	/// Returns true if the same proportion is trimmed from both tails
	pub fn is_symmetric(&self) -> bool {
		self.low == self.high
	}

	/// Number of values to discard from the low and high end of a sample of
	/// `len` values. Counts are truncated towards zero, never rounded.
	pub fn cuts(&self, len: usize) -> (usize, usize) {
		let n = len as f64;
		((n * self.low) as usize, (n * self.high) as usize)
	}
}
