use crate::convergents::Convergents;
use crate::elements;
use crate::error::{ContFracError, ElementsReason};
use crate::exact::Exact;
use crate::format;
use crate::result::CfResult;
use crate::validate::{self, Input};
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Signed, ToPrimitive, Zero};
use std::collections::BTreeMap;
use std::hash::{Hash, Hasher};
use std::{cmp, fmt, ops, str};

/// A finite simple continued fraction `[a0; a1, ..., an]` of a rational
/// number.
///
/// The element sequence is always canonical (positive tail, last element
/// greater than one when `n >= 1`), and the convergents are computed as soon
/// as the sequence changes. Only [`extend`](Self::extend) and
/// [`truncate`](Self::truncate) modify an existing value; every arithmetic
/// operation produces a new one.
#[derive(Clone)]
pub struct ContinuedFraction {
	value: BigRational,
	elements: Vec<BigInt>,
	convergents: Convergents,
}

impl ContinuedFraction {
	/// Builds the continued fraction of any accepted input: an integer, a
	/// finite real, a numeric string, a rational, or a `(numerator,
	/// denominator)` pair.
	///
	/// ```
	/// # use contfrac_core::ContinuedFraction;
	/// let cf = ContinuedFraction::new((649, 200)).unwrap();
	/// assert_eq!(cf.to_string(), "[3; 4, 12, 4]");
	/// ```
	pub fn new(input: impl Into<Input>) -> CfResult<Self> {
		let value = validate::validate(input)?;
		let cf = Self::from_rational(value);
		tracing::debug!(order = cf.order(), "constructed {cf} from {}", cf.value);
		Ok(cf)
	}

	fn from_rational(value: BigRational) -> Self {
		let elements = elements::from_rational(&value);
		let convergents = Convergents::from_elements(&elements);
		Self {
			value,
			elements,
			convergents,
		}
	}

	/// `elements` must be canonical.
	fn from_canonical(elements: Vec<BigInt>) -> Self {
		let value = elements::to_rational(&elements);
		let convergents = Convergents::from_elements(&elements);
		Self {
			value,
			elements,
			convergents,
		}
	}

	/// Builds a continued fraction directly from its elements, without any
	/// division.
	///
	/// The first element may be any integer, the others must be positive. A
	/// trailing `1` is folded into the element before it, so
	/// `[3; 4, 12, 3, 1]` becomes `[3; 4, 12, 4]`.
	pub fn from_elements<I, T>(elements: I) -> CfResult<Self>
	where
		I: IntoIterator<Item = T>,
		T: Into<BigInt>,
	{
		let mut elements: Vec<BigInt> = elements.into_iter().map(Into::into).collect();
		elements::check(&elements)?;
		let folded = elements::fold_trailing_one(&mut elements);
		let cf = Self::from_canonical(elements);
		tracing::debug!(order = cf.order(), folded, "constructed {cf} from elements");
		Ok(cf)
	}

	/// Appends `tail` to the elements, changing the value in place.
	///
	/// Every new element must be positive. If the completed sequence ends in
	/// `1`, that element is folded into the one before it. On error the
	/// continued fraction is left unchanged.
	pub fn extend<I, T>(&mut self, tail: I) -> CfResult<()>
	where
		I: IntoIterator<Item = T>,
		T: Into<BigInt>,
	{
		let tail: Vec<BigInt> = tail.into_iter().map(Into::into).collect();
		if tail.is_empty() {
			return Err(ElementsReason::EmptyTail.into());
		}
		elements::check_tail(&tail, self.elements.len())?;
		let old_order = self.order();
		let mut elements = Vec::with_capacity(self.elements.len() + tail.len());
		elements.extend_from_slice(&self.elements);
		elements.extend(tail);
		let folded = elements::fold_trailing_one(&mut elements);
		*self = Self::from_canonical(elements);
		tracing::debug!(old_order, new_order = self.order(), folded, "extended to {self}");
		Ok(())
	}

	/// Removes `tail` from the end of the elements, changing the value in
	/// place.
	///
	/// `tail` must be exactly the last `k` elements, with `1 <= k <= order`.
	/// If the remaining elements end in `1`, it is folded into the element
	/// before it. On error the continued fraction is left unchanged.
	pub fn truncate<I, T>(&mut self, tail: I) -> CfResult<()>
	where
		I: IntoIterator<Item = T>,
		T: Into<BigInt>,
	{
		let tail: Vec<BigInt> = tail.into_iter().map(Into::into).collect();
		let old_order = self.order();
		if tail.is_empty() {
			return Err(ElementsReason::EmptyTail.into());
		}
		if tail.len() > old_order {
			return Err(ElementsReason::TailLongerThanOrder {
				tail: tail.len(),
				order: old_order,
			}
			.into());
		}
		let split = self.elements.len() - tail.len();
		if self.elements[split..] != tail[..] {
			return Err(ElementsReason::TailMismatch.into());
		}
		let mut elements = self.elements[..split].to_vec();
		let folded = elements::fold_trailing_one(&mut elements);
		*self = Self::from_canonical(elements);
		tracing::debug!(old_order, new_order = self.order(), folded, "truncated to {self}");
		Ok(())
	}

	pub fn elements(&self) -> &[BigInt] {
		&self.elements
	}

	/// The number of elements after the first.
	pub fn order(&self) -> usize {
		self.elements.len() - 1
	}

	pub fn convergents(&self) -> &Convergents {
		&self.convergents
	}

	pub fn convergent(&self, k: usize) -> Option<&BigRational> {
		self.convergents.get(k)
	}

	pub fn even_convergents(&self) -> impl Iterator<Item = (usize, &BigRational)> + '_ {
		self.convergents.even()
	}

	pub fn odd_convergents(&self) -> impl Iterator<Item = (usize, &BigRational)> + '_ {
		self.convergents.odd()
	}

	/// See [`Convergents::semiconvergent`].
	pub fn semiconvergent(&self, k: usize, m: impl Into<BigInt>) -> Option<BigRational> {
		self.convergents.semiconvergent(k, &m.into())
	}

	/// The continued fraction of the first `k + 1` elements, for
	/// `k <= order`. Its value is the `k`-th convergent.
	pub fn segment(&self, k: usize) -> Option<Self> {
		let prefix = self.elements.get(..=k)?;
		let mut prefix = prefix.to_vec();
		elements::fold_trailing_one(&mut prefix);
		Some(Self::from_canonical(prefix))
	}

	/// The continued fraction of the elements from index `k` onwards, for
	/// `k <= order`. `remainder(0)` is a copy of `self`.
	pub fn remainder(&self, k: usize) -> Option<Self> {
		let suffix = self.elements.get(k..)?;
		if suffix.is_empty() {
			return None;
		}
		Some(Self::from_canonical(suffix.to_vec()))
	}

	pub fn as_rational(&self) -> &BigRational {
		&self.value
	}

	pub fn into_rational(self) -> BigRational {
		self.value
	}

	pub fn numer(&self) -> &BigInt {
		self.value.numer()
	}

	pub fn denom(&self) -> &BigInt {
		self.value.denom()
	}

	pub fn is_integer(&self) -> bool {
		self.elements.len() == 1
	}

	/// Nearest `f64`, or NaN if the value is out of range.
	pub fn to_f64(&self) -> f64 {
		self.value.to_f64().unwrap_or(f64::NAN)
	}

	/// Decimal rendering with `places` digits after the point, rounded half
	/// away from zero.
	pub fn to_decimal(&self, places: usize) -> Exact<String> {
		format::decimal(&self.value, places)
	}

	/// How often each element value occurs in the sequence.
	pub fn element_counts(&self) -> BTreeMap<BigInt, usize> {
		let mut counts = BTreeMap::new();
		for element in &self.elements {
			*counts.entry(element.clone()).or_insert(0) += 1;
		}
		counts
	}

	/// Geometric mean of the tail elements `a1..an`, or `None` for an
	/// integer.
	#[allow(clippy::cast_precision_loss)]
	pub fn khinchin_mean(&self) -> Option<f64> {
		let tail = self.elements.get(1..).filter(|tail| !tail.is_empty())?;
		let log_sum: f64 = tail
			.iter()
			.map(|a| a.to_f64().map_or(f64::INFINITY, f64::ln))
			.sum();
		Some((log_sum / tail.len() as f64).exp())
	}

	pub fn abs(&self) -> Self {
		if self.value.is_negative() {
			-self
		} else {
			self.clone()
		}
	}

	pub fn recip(&self) -> CfResult<Self> {
		if self.value.is_zero() {
			return Err(ContFracError::InvalidInput);
		}
		Ok(Self::from_rational(self.value.recip()))
	}

	pub fn checked_div(&self, rhs: &Self) -> CfResult<Self> {
		if rhs.value.is_zero() {
			return Err(ContFracError::InvalidInput);
		}
		Ok(Self::from_rational(&self.value / &rhs.value))
	}

	/// Raises the value to an integer power. Zero to a negative power fails
	/// like a zero denominator.
	pub fn pow(&self, exponent: i32) -> CfResult<Self> {
		if exponent < 0 && self.value.is_zero() {
			return Err(ContFracError::InvalidInput);
		}
		Ok(Self::from_rational(self.value.pow(exponent)))
	}
}

impl ops::Neg for &ContinuedFraction {
	type Output = ContinuedFraction;

	fn neg(self) -> ContinuedFraction {
		ContinuedFraction::from_canonical(elements::negate(&self.elements))
	}
}

impl ops::Neg for ContinuedFraction {
	type Output = Self;

	fn neg(self) -> Self {
		-&self
	}
}

macro_rules! forward_binop {
	($($imp:ident, $method:ident;)*) => {
		$(
			impl ops::$imp<&ContinuedFraction> for &ContinuedFraction {
				type Output = ContinuedFraction;

				fn $method(self, rhs: &ContinuedFraction) -> ContinuedFraction {
					ContinuedFraction::from_rational(ops::$imp::$method(&self.value, &rhs.value))
				}
			}

			impl ops::$imp<ContinuedFraction> for ContinuedFraction {
				type Output = ContinuedFraction;

				fn $method(self, rhs: ContinuedFraction) -> ContinuedFraction {
					ops::$imp::$method(&self, &rhs)
				}
			}

			impl ops::$imp<&ContinuedFraction> for ContinuedFraction {
				type Output = ContinuedFraction;

				fn $method(self, rhs: &ContinuedFraction) -> ContinuedFraction {
					ops::$imp::$method(&self, rhs)
				}
			}

			impl ops::$imp<&BigRational> for &ContinuedFraction {
				type Output = ContinuedFraction;

				fn $method(self, rhs: &BigRational) -> ContinuedFraction {
					ContinuedFraction::from_rational(ops::$imp::$method(&self.value, rhs))
				}
			}

			impl ops::$imp<BigRational> for ContinuedFraction {
				type Output = ContinuedFraction;

				fn $method(self, rhs: BigRational) -> ContinuedFraction {
					ops::$imp::$method(&self, &rhs)
				}
			}
		)*
	};
}

forward_binop! {
	Add, add;
	Sub, sub;
	Mul, mul;
}

impl PartialEq for ContinuedFraction {
	fn eq(&self, other: &Self) -> bool {
		self.value == other.value
	}
}

impl Eq for ContinuedFraction {}

impl PartialEq<BigRational> for ContinuedFraction {
	fn eq(&self, other: &BigRational) -> bool {
		&self.value == other
	}
}

impl PartialOrd for ContinuedFraction {
	fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for ContinuedFraction {
	fn cmp(&self, other: &Self) -> cmp::Ordering {
		self.value.cmp(&other.value)
	}
}

impl Hash for ContinuedFraction {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.value.hash(state);
	}
}

impl fmt::Display for ContinuedFraction {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "[")?;
		for (i, element) in self.elements.iter().enumerate() {
			match i {
				0 => write!(f, "{element}")?,
				1 => write!(f, "; {element}")?,
				_ => write!(f, ", {element}")?,
			}
		}
		write!(f, "]")?;
		Ok(())
	}
}

impl fmt::Debug for ContinuedFraction {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{self} = {}", self.value)
	}
}

impl str::FromStr for ContinuedFraction {
	type Err = ContFracError;

	fn from_str(s: &str) -> CfResult<Self> {
		Ok(Self::from_rational(validate::parse_literal(s)?))
	}
}

impl TryFrom<f64> for ContinuedFraction {
	type Error = ContFracError;

	fn try_from(value: f64) -> CfResult<Self> {
		Ok(Self::from_rational(validate::from_f64(value)?))
	}
}

impl From<BigRational> for ContinuedFraction {
	fn from(value: BigRational) -> Self {
		Self::from_rational(value)
	}
}

impl From<BigInt> for ContinuedFraction {
	fn from(value: BigInt) -> Self {
		Self::from_rational(BigRational::from_integer(value))
	}
}

impl From<i64> for ContinuedFraction {
	fn from(value: i64) -> Self {
		BigInt::from(value).into()
	}
}

impl From<ContinuedFraction> for BigRational {
	fn from(cf: ContinuedFraction) -> Self {
		cf.value
	}
}

impl Default for ContinuedFraction {
	fn default() -> Self {
		Self::from_canonical(vec![BigInt::zero()])
	}
}
