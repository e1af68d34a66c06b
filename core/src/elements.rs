//! Conversion between rational values and the element sequences of their
//! simple continued fractions.
//!
//! An element sequence `(a0, a1, ..., an)` is canonical when every tail element
//! `a1..an` is positive and, for `n >= 1`, the last element is greater than one.
//! Every rational value has exactly one canonical sequence.

use crate::error::ElementsReason;
use num_bigint::BigInt;
use num_integer::Integer;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};
use std::mem;

/// Computes the canonical element sequence of `value` by repeated Euclidean
/// division.
///
/// Division floors toward negative infinity, so a negative value gets a
/// negative leading element followed by positive tail elements.
pub(crate) fn from_rational(value: &BigRational) -> Vec<BigInt> {
	let mut num = value.numer().clone();
	let mut den = value.denom().clone();
	let mut elements = vec![];
	loop {
		let (quotient, remainder) = num.div_mod_floor(&den);
		elements.push(quotient);
		if remainder.is_zero() {
			break;
		}
		num = mem::replace(&mut den, remainder);
	}
	tracing::trace!(order = elements.len() - 1, "extracted elements from {value}");
	elements
}

/// Evaluates an element sequence with the convergent recurrence, without any
/// division.
///
/// The sequence must be non-empty and have a positive tail; the returned
/// value is then already in lowest terms with a positive denominator.
pub(crate) fn to_rational(elements: &[BigInt]) -> BigRational {
	let (p, q) = Recurrence::new(elements)
		.last()
		.unwrap_or_else(|| (BigInt::zero(), BigInt::one()));
	// p_n * q_{n-1} - p_{n-1} * q_n = (-1)^(n-1), so p and q are coprime
	BigRational::new_raw(p, q)
}

/// Iterator over the `(p_k, q_k)` pairs of the recurrence
/// `p_k = a_k p_{k-1} + p_{k-2}`, `q_k = a_k q_{k-1} + q_{k-2}`
/// seeded with `p_{-1} = 1, q_{-1} = 0` and `p_{-2} = 0, q_{-2} = 1`.
pub(crate) struct Recurrence<'a> {
	elements: std::slice::Iter<'a, BigInt>,
	// (p_{k-1}, q_{k-1})
	prev: (BigInt, BigInt),
	// (p_{k-2}, q_{k-2})
	prev2: (BigInt, BigInt),
}

impl<'a> Recurrence<'a> {
	pub(crate) fn new(elements: &'a [BigInt]) -> Self {
		Self {
			elements: elements.iter(),
			prev: (BigInt::one(), BigInt::zero()),
			prev2: (BigInt::zero(), BigInt::one()),
		}
	}
}

impl Iterator for Recurrence<'_> {
	type Item = (BigInt, BigInt);

	fn next(&mut self) -> Option<Self::Item> {
		let a = self.elements.next()?;
		let p = a * &self.prev.0 + &self.prev2.0;
		let q = a * &self.prev.1 + &self.prev2.1;
		self.prev2 = mem::replace(&mut self.prev, (p.clone(), q.clone()));
		Some((p, q))
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		self.elements.size_hint()
	}
}

impl ExactSizeIterator for Recurrence<'_> {}

/// Checks that `elements` is non-empty and that every element after the
/// first is strictly positive.
pub(crate) fn check(elements: &[BigInt]) -> Result<(), ElementsReason> {
	if elements.is_empty() {
		return Err(ElementsReason::Empty);
	}
	check_tail(&elements[1..], 1)
}

/// Checks that every element of `tail` is strictly positive. `offset` is the
/// index of the first tail element within the full sequence and is only used
/// for error reporting.
pub(crate) fn check_tail(tail: &[BigInt], offset: usize) -> Result<(), ElementsReason> {
	for (i, element) in tail.iter().enumerate() {
		if !element.is_positive() {
			return Err(ElementsReason::NonPositiveTail { index: i + offset });
		}
	}
	Ok(())
}

/// Folds a trailing `1` into the preceding element: `[..., x, 1]` becomes
/// `[..., x + 1]`. Returns whether a fold happened.
///
/// Only the final element is inspected; ones in earlier positions are valid.
pub(crate) fn fold_trailing_one(elements: &mut Vec<BigInt>) -> bool {
	if elements.len() < 2 || !elements[elements.len() - 1].is_one() {
		return false;
	}
	elements.pop();
	if let Some(last) = elements.last_mut() {
		*last += 1u32;
	}
	true
}

/// Computes the canonical elements of `-x` directly from the canonical
/// elements of `x`, using
/// `-[a0; a1, a2, ...] = [-(a0 + 1); 1, a1 - 1, a2, ...]` when `a1 >= 2` and
/// `[-(a0 + 1); a2 + 1, a3, ...]` when `a1 = 1`.
pub(crate) fn negate(elements: &[BigInt]) -> Vec<BigInt> {
	let Some((a0, tail)) = elements.split_first() else {
		return vec![];
	};
	let Some((a1, rest)) = tail.split_first() else {
		return vec![-a0];
	};
	let mut result = Vec::with_capacity(elements.len() + 1);
	result.push(-(a0 + 1u32));
	if a1.is_one() {
		// a1 = 1 implies a2 exists, since the last element is never 1
		if let Some((a2, rest)) = rest.split_first() {
			result.push(a2 + 1u32);
			result.extend(rest.iter().cloned());
		}
	} else {
		result.push(BigInt::one());
		result.push(a1 - 1u32);
		result.extend(rest.iter().cloned());
		// -[a0; 2] = [-(a0 + 1); 1, 1] = [-(a0 + 1); 2]
		fold_trailing_one(&mut result);
	}
	result
}

#[cfg(test)]
mod tests {
	use super::*;

	fn ints(v: &[i64]) -> Vec<BigInt> {
		v.iter().map(|&x| BigInt::from(x)).collect()
	}

	fn rat(n: i64, d: i64) -> BigRational {
		BigRational::new(n.into(), d.into())
	}

	#[test]
	fn forward() {
		assert_eq!(from_rational(&rat(649, 200)), ints(&[3, 4, 12, 4]));
		assert_eq!(from_rational(&rat(-415, 93)), ints(&[-5, 1, 1, 6, 7]));
		assert_eq!(from_rational(&rat(2, 3)), ints(&[0, 1, 2]));
		assert_eq!(from_rational(&rat(-2, 3)), ints(&[-1, 3]));
		assert_eq!(from_rational(&rat(7, 1)), ints(&[7]));
		assert_eq!(from_rational(&rat(-7, 1)), ints(&[-7]));
		assert_eq!(from_rational(&rat(0, 1)), ints(&[0]));
		assert_eq!(from_rational(&rat(-1, 2)), ints(&[-1, 2]));
	}

	#[test]
	fn backward() {
		assert_eq!(to_rational(&ints(&[3, 4, 12, 4])), rat(649, 200));
		assert_eq!(to_rational(&ints(&[-5, 1, 1, 6, 7])), rat(-415, 93));
		assert_eq!(to_rational(&ints(&[3, 4, 12, 4, 5, 2])), rat(7457, 2298));
		assert_eq!(to_rational(&ints(&[-3])), rat(-3, 1));
		// non-canonical sequences evaluate to the same value
		assert_eq!(to_rational(&ints(&[3, 4, 12, 3, 1])), rat(649, 200));
	}

	#[test]
	fn recurrence_pairs() {
		let pairs: Vec<_> = Recurrence::new(&ints(&[3, 4, 12, 4])).collect();
		assert_eq!(
			pairs,
			vec![
				(3.into(), 1.into()),
				(13.into(), 4.into()),
				(159.into(), 49.into()),
				(649.into(), 200.into()),
			]
		);
	}

	#[test]
	fn folding() {
		let mut e = ints(&[3, 4, 12, 3, 1]);
		assert!(fold_trailing_one(&mut e));
		assert_eq!(e, ints(&[3, 4, 12, 4]));
		let mut e = ints(&[5, 1]);
		assert!(fold_trailing_one(&mut e));
		assert_eq!(e, ints(&[6]));
		let mut e = ints(&[1]);
		assert!(!fold_trailing_one(&mut e));
		let mut e = ints(&[2, 1, 3]);
		assert!(!fold_trailing_one(&mut e));
	}

	#[test]
	fn checks() {
		assert_eq!(check(&[]), Err(ElementsReason::Empty));
		assert_eq!(check(&ints(&[-4, 1, 2])), Ok(()));
		assert_eq!(check(&ints(&[0])), Ok(()));
		assert_eq!(check(&ints(&[0, 1, 2])), Ok(()));
		assert_eq!(check(&ints(&[-3, 1])), Ok(()));
		assert_eq!(
			check(&ints(&[1, 2, -3])),
			Err(ElementsReason::NonPositiveTail { index: 2 })
		);
		assert_eq!(
			check(&ints(&[-1, 0])),
			Err(ElementsReason::NonPositiveTail { index: 1 })
		);
		assert_eq!(
			check(&ints(&[1, 2, 0, 3])),
			Err(ElementsReason::NonPositiveTail { index: 2 })
		);
		assert_eq!(
			check_tail(&ints(&[2, -1]), 4),
			Err(ElementsReason::NonPositiveTail { index: 5 })
		);
	}

	#[test]
	fn negation_closed_form() {
		assert_eq!(negate(&ints(&[3])), ints(&[-3]));
		assert_eq!(negate(&ints(&[0, 2])), ints(&[-1, 2]));
		assert_eq!(negate(&ints(&[0, 1, 2])), ints(&[-1, 3]));
		assert_eq!(negate(&ints(&[4, 2, 6, 7])), ints(&[-5, 1, 1, 6, 7]));
		assert_eq!(negate(&ints(&[-5, 1, 1, 6, 7])), ints(&[4, 2, 6, 7]));
		assert_eq!(negate(&ints(&[3, 4, 12, 4])), ints(&[-4, 1, 3, 12, 4]));
	}

	#[test]
	fn negation_matches_division() {
		for b in 1..40_i64 {
			for a in -80..80_i64 {
				if a.gcd(&b) != 1 {
					continue;
				}
				let value = rat(a, b);
				assert_eq!(
					negate(&from_rational(&value)),
					from_rational(&-value),
					"{a}/{b}"
				);
			}
		}
	}

	#[test]
	fn round_trip() {
		for b in 1..50_i64 {
			for a in -100..100_i64 {
				if a.gcd(&b) != 1 {
					continue;
				}
				let value = rat(a, b);
				let elements = from_rational(&value);
				if elements.len() > 1 {
					assert!(elements[elements.len() - 1] > BigInt::one());
				}
				assert_eq!(check(&elements), Ok(()));
				assert_eq!(to_rational(&elements), value);
				assert_eq!(from_rational(&to_rational(&elements)), elements);
			}
		}
	}
}
