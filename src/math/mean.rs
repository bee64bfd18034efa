use crate::num::ToFloat;

pub trait Mean {
	/// Arithmetic mean of the values. Runs in O(n) time.
	fn mean(&self) -> f64;
}

impl<T> Mean for [T]
where
	T: ToFloat,
{
	fn mean(&self) -> f64 {
		let len = self.len() as f64;
		let sum = self.iter().map(|n| n.to_float()).sum::<f64>();

		// Will be NaN if len is 0
		sum / len
	}
}
