use crate::elements::Recurrence;
use num_bigint::BigInt;
use num_rational::BigRational;
use std::{fmt, iter, ops, slice};

/// The convergents `p_k / q_k` of a continued fraction, indexed by `k` in
/// `0..=order`.
///
/// Computed in a single forward pass over the elements and never updated
/// partially: a new element sequence always gets a fresh `Convergents`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Convergents {
	values: Vec<BigRational>,
	// (p_k, q_k), always coprime; semiconvergents need them separately
	terms: Vec<(BigInt, BigInt)>,
}

impl Convergents {
	pub(crate) fn from_elements(elements: &[BigInt]) -> Self {
		let terms: Vec<_> = Recurrence::new(elements).collect();
		let values = terms
			.iter()
			.map(|(p, q)| BigRational::new_raw(p.clone(), q.clone()))
			.collect();
		Self { values, terms }
	}

	/// Number of convergents, i.e. `order + 1`.
	pub fn len(&self) -> usize {
		self.values.len()
	}

	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}

	pub fn get(&self, k: usize) -> Option<&BigRational> {
		self.values.get(k)
	}

	/// The final convergent, which equals the value of the continued fraction.
	pub fn last(&self) -> Option<&BigRational> {
		self.values.last()
	}

	pub fn as_slice(&self) -> &[BigRational] {
		&self.values
	}

	/// Iterates over `(k, convergent)` pairs in increasing order of `k`.
	pub fn iter(&self) -> Iter<'_> {
		self.values.iter().enumerate()
	}

	/// The even-indexed convergents `(0, c0), (2, c2), ...`. These increase
	/// strictly towards the value.
	pub fn even(&self) -> impl Iterator<Item = (usize, &BigRational)> + '_ {
		self.iter().step_by(2)
	}

	/// The odd-indexed convergents `(1, c1), (3, c3), ...`. These decrease
	/// strictly towards the value.
	pub fn odd(&self) -> impl Iterator<Item = (usize, &BigRational)> + '_ {
		self.iter().skip(1).step_by(2)
	}

	/// The `m`-th semiconvergent between the convergents `k - 1` and `k`:
	/// `(p_{k-1} + m p_k) / (q_{k-1} + m q_k)`.
	///
	/// Defined for `1 <= k < len()` and `m >= 1`.
	pub fn semiconvergent(&self, k: usize, m: &BigInt) -> Option<BigRational> {
		if k == 0 || m <= &BigInt::from(0) {
			return None;
		}
		let (p, q) = self.terms.get(k)?;
		let (p_prev, q_prev) = self.terms.get(k - 1)?;
		Some(BigRational::new(p_prev + m * p, q_prev + m * q))
	}
}

pub type Iter<'a> = iter::Enumerate<slice::Iter<'a, BigRational>>;

impl ops::Index<usize> for Convergents {
	type Output = BigRational;

	fn index(&self, k: usize) -> &BigRational {
		&self.values[k]
	}
}

impl<'a> IntoIterator for &'a Convergents {
	type Item = (usize, &'a BigRational);
	type IntoIter = Iter<'a>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

impl fmt::Debug for Convergents {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_map().entries(self.iter()).finish()
	}
}

impl fmt::Display for Convergents {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{{")?;
		for (k, c) in self {
			if k == 0 {
				write!(f, "{k}: {c}")?;
			} else {
				write!(f, ", {k}: {c}")?;
			}
		}
		write!(f, "}}")?;
		Ok(())
	}
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
	fn convergents_of_649_200() {
		let c = Convergents::from_elements(&ints(&[3, 4, 12, 4]));
		assert_eq!(c.len(), 4);
		assert_eq!(c[0], rat(3, 1));
		assert_eq!(c[1], rat(13, 4));
		assert_eq!(c[2], rat(159, 49));
		assert_eq!(c[3], rat(649, 200));
		assert_eq!(c.last(), Some(&rat(649, 200)));
		assert_eq!(c.get(4), None);
		assert_eq!(c.to_string(), "{0: 3, 1: 13/4, 2: 159/49, 3: 649/200}");
	}

	#[test]
	fn negative_convergents() {
		let c = Convergents::from_elements(&ints(&[-5, 1, 1, 6, 7]));
		let values: Vec<_> = c.iter().map(|(_, v)| v.clone()).collect();
		assert_eq!(
			values,
			vec![rat(-5, 1), rat(-4, 1), rat(-9, 2), rat(-58, 13), rat(-415, 93)]
		);
	}

	#[test]
	fn even_and_odd() {
		let c = Convergents::from_elements(&ints(&[3, 4, 12, 4, 5, 2]));
		let even: Vec<_> = c.even().map(|(k, _)| k).collect();
		let odd: Vec<_> = c.odd().map(|(k, _)| k).collect();
		assert_eq!(even, vec![0, 2, 4]);
		assert_eq!(odd, vec![1, 3, 5]);
		let even: Vec<_> = c.even().map(|(_, v)| v.clone()).collect();
		assert!(even.windows(2).all(|w| w[0] < w[1]));
		let odd: Vec<_> = c.odd().map(|(_, v)| v.clone()).collect();
		assert!(odd.windows(2).all(|w| w[0] > w[1]));
	}

	#[test]
	fn semiconvergents() {
		let c = Convergents::from_elements(&ints(&[3, 4, 12, 4]));
		// (3 + 13) / (1 + 4)
		assert_eq!(c.semiconvergent(1, &1.into()), Some(rat(16, 5)));
		// (13 + 2 * 159) / (4 + 2 * 49)
		assert_eq!(c.semiconvergent(2, &2.into()), Some(rat(331, 102)));
		assert_eq!(c.semiconvergent(0, &1.into()), None);
		assert_eq!(c.semiconvergent(4, &1.into()), None);
		assert_eq!(c.semiconvergent(1, &0.into()), None);
	}

	#[test]
	fn integer_has_one_convergent() {
		let c = Convergents::from_elements(&ints(&[-8]));
		assert_eq!(c.len(), 1);
		assert_eq!(c[0], rat(-8, 1));
		assert_eq!(c.odd().count(), 0);
	}
}
