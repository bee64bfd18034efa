//! # Trimmed mean
//!
//! Computes the arithmetic mean of a numeric sample after discarding a
//! proportion of its lowest and highest values. The same proportion can be
//! trimmed from both tails, or independent proportions from each.
//!
//! ```
//! use trimmed_mean::{trimmed_mean, trimmed_mean_asym};
//!
//! let data = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
//! // Discards 1 and 2 from the bottom, 9 and 10 from the top
//! assert_eq!(trimmed_mean(&data, 0.2)?, 5.5);
//! // Discards 1 from the bottom, 8, 9 and 10 from the top
//! assert_eq!(trimmed_mean_asym(&data, 0.1, 0.3)?, 4.5);
//! # Ok::<(), trimmed_mean::Error>(())
//! ```
//!
//! The caller's sample is never modified; every call sorts a private copy.

#[macro_use]
extern crate tracing;

mod fnc;

pub mod cnf;
pub mod err;
pub mod math;
pub mod num;
pub mod trim;

pub use crate::err::{Error, Result};
pub use crate::fnc::{trimmed_mean, trimmed_mean_asym, trimmed_mean_int, trimmed_mean_int_asym};
pub use crate::math::mean::Mean;
pub use crate::math::trimmed::{Trimmed, TrimmedMean};
pub use crate::num::{Sort, Sorted, ToFloat};
pub use crate::trim::Trim;
