//! Exact finite simple continued fractions of rational numbers.
//!
//! A [`ContinuedFraction`] wraps a rational value together with its canonical
//! element sequence `[a0; a1, ..., an]` and its convergents. Values can be
//! built from numbers, strings, rationals or `(numerator, denominator)` pairs
//! with [`ContinuedFraction::new`], or directly from elements with
//! [`ContinuedFraction::from_elements`], and the tail can be changed in place
//! with [`extend`](ContinuedFraction::extend) and
//! [`truncate`](ContinuedFraction::truncate).
//!
//! ```
//! use contfrac_core::ContinuedFraction;
//!
//! let mut cf = ContinuedFraction::from_elements([3, 4, 12, 4]).unwrap();
//! assert_eq!(cf.as_rational().to_string(), "649/200");
//! cf.extend([5, 2]).unwrap();
//! assert_eq!(cf.as_rational().to_string(), "7457/2298");
//! cf.truncate([4, 5, 2]).unwrap();
//! assert_eq!(cf.to_string(), "[3; 4, 12]");
//! ```
//!
//! All arithmetic is exact. Nothing limits the length of an element sequence
//! or the size of its integers other than available memory, and the cost of
//! big-integer arithmetic grows with both. The one exception is the exponent
//! of a decimal literal, which is limited to 100000 in either direction so
//! that a short string like `1e4000000000` is rejected instead of expanding
//! into billions of digits.

#![forbid(unsafe_code)]
#![deny(elided_lifetimes_in_paths)]

mod continued_fraction;
mod convergents;
mod elements;
mod error;
mod exact;
mod format;
mod result;
mod validate;

pub use continued_fraction::ContinuedFraction;
pub use convergents::{Convergents, Iter as ConvergentsIter};
pub use error::{ContFracError, ElementsReason};
pub use exact::Exact;
pub use result::CfResult;
pub use validate::{validate, Input, Number};

pub use num_bigint::BigInt;
pub use num_rational::BigRational;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[must_use]
pub fn get_version() -> String {
	VERSION.to_string()
}
