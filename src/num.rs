use std::cmp::Ordering;

/// Lossy conversion of a sample value into a 64-bit float.
///
/// Integers up to 2^53 in magnitude convert exactly. Wider values round to
/// the nearest representable float.
pub trait ToFloat {
	fn to_float(&self) -> f64;
}

macro_rules! impl_to_float {
	($($ty:ty),*) => {
		$(
			impl ToFloat for $ty {
				#[inline]
				fn to_float(&self) -> f64 {
					*self as f64
				}
			}
		)*
	};
}

impl_to_float!(f32, f64, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

/// A collection which is known to be sorted in ascending order
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sorted<T>(pub T);

pub trait Sort {
	/// Sorts the collection in place and marks it as sorted
	fn sorted(&mut self) -> Sorted<&Self>
	where
		Self: Sized;
}

impl Sort for Vec<f64> {
	fn sorted(&mut self) -> Sorted<&Vec<f64>> {
		self.sort_unstable_by(nan_first_cmp);
		Sorted(self)
	}
}

/// Orders every NaN, whatever its sign, ahead of all other values. The
/// remaining values use total ordering, so signed zeros sit in a fixed place.
#[inline]
fn nan_first_cmp(a: &f64, b: &f64) -> Ordering {
	b.is_nan().cmp(&a.is_nan()).then_with(|| a.total_cmp(b))
}
