use thiserror::Error;

/// An error returned when a trimmed mean cannot be computed.
#[derive(Error, Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum Error {
	/// The sample contained no values
	#[error("Unable to compute a trimmed mean of empty data")]
	EmptyInput,

	/// A trim proportion was outside of [0, 0.5], or the pair summed to 1 or more
	#[error(
		"Invalid trim proportions {low}/{high}: each must be between 0 and 0.5, and their sum must be less than 1"
	)]
	InvalidTrimProportion {
		low: f64,
		high: f64,
	},

	/// Trimming discarded every value in the sample
	#[error(
		"No elements remain after trimming {low_cut} low and {high_cut} high values from {len} values"
	)]
	NoElementsRemain {
		len: usize,
		low_cut: usize,
		high_cut: usize,
	},
}

/// A specialized `Result` type
pub type Result<T, E = Error> = std::result::Result<T, E>;
