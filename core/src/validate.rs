//! Validation of construction inputs.
//!
//! Every way of building a continued fraction from outside data goes through
//! [`validate`], which either yields an exact rational value or fails with
//! [`ContFracError::InvalidInput`].

use crate::error::ContFracError;
use crate::result::CfResult;
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Zero;
use std::str::FromStr;

/// A single numeric construction argument.
#[derive(Debug, Clone, PartialEq)]
pub enum Number {
	Integer(BigInt),
	/// Converted through its shortest round-trip decimal representation.
	Real(f64),
	/// An integer, decimal or `p/q` literal.
	Text(String),
	Rational(BigRational),
}

/// The accepted shapes of construction input: one number, or a
/// `(numerator, denominator)` pair.
#[derive(Debug, Clone, PartialEq)]
pub enum Input {
	Single(Number),
	Pair(Number, Number),
}

macro_rules! impl_from_integer {
	($($t:ty),*) => {
		$(
			impl From<$t> for Number {
				fn from(value: $t) -> Self {
					Self::Integer(value.into())
				}
			}

			impl From<$t> for Input {
				fn from(value: $t) -> Self {
					Self::Single(value.into())
				}
			}
		)*
	};
}

impl_from_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, BigInt);

macro_rules! impl_from_other {
	($($t:ty => $variant:ident ($conv:expr)),* $(,)?) => {
		$(
			impl From<$t> for Number {
				fn from(value: $t) -> Self {
					Self::$variant($conv(value))
				}
			}

			impl From<$t> for Input {
				fn from(value: $t) -> Self {
					Self::Single(value.into())
				}
			}
		)*
	};
}

impl_from_other!(
	f64 => Real(std::convert::identity),
	f32 => Real(f64::from),
	&str => Text(str::to_string),
	String => Text(std::convert::identity),
	BigRational => Rational(std::convert::identity),
);

impl From<&BigInt> for Input {
	fn from(value: &BigInt) -> Self {
		Self::Single(Number::Integer(value.clone()))
	}
}

impl From<&BigRational> for Input {
	fn from(value: &BigRational) -> Self {
		Self::Single(Number::Rational(value.clone()))
	}
}

impl From<Number> for Input {
	fn from(value: Number) -> Self {
		Self::Single(value)
	}
}

impl<N: Into<Number>, D: Into<Number>> From<(N, D)> for Input {
	fn from((num, den): (N, D)) -> Self {
		Self::Pair(num.into(), den.into())
	}
}

/// Turns any accepted input into an exact rational value in lowest terms.
///
/// All failures report the same [`ContFracError::InvalidInput`], whatever
/// rule was broken.
pub fn validate(input: impl Into<Input>) -> CfResult<BigRational> {
	match input.into() {
		Input::Single(number) => single(number),
		Input::Pair(num, den) => {
			let num = exact(num)?;
			let den = exact(den)?;
			if den.is_zero() {
				return Err(ContFracError::InvalidInput);
			}
			Ok(num / den)
		}
	}
}

fn single(number: Number) -> CfResult<BigRational> {
	match number {
		Number::Integer(_) | Number::Rational(_) => exact(number),
		Number::Real(f) => from_f64(f),
		Number::Text(s) => parse_literal(&s),
	}
}

/// Integers and rationals; the only types allowed inside a pair.
fn exact(number: Number) -> CfResult<BigRational> {
	match number {
		Number::Integer(i) => Ok(BigRational::from_integer(i)),
		Number::Rational(r) => {
			// `Ratio::new_raw` can build an unreduced or zero-denominator value
			if r.denom().is_zero() {
				return Err(ContFracError::InvalidInput);
			}
			Ok(BigRational::new(r.numer().clone(), r.denom().clone()))
		}
		Number::Real(_) | Number::Text(_) => Err(ContFracError::InvalidInput),
	}
}

pub(crate) fn from_f64(f: f64) -> CfResult<BigRational> {
	if !f.is_finite() {
		return Err(ContFracError::InvalidInput);
	}
	// `Display` for f64 prints the shortest decimal that round-trips, never
	// in exponent notation
	parse_decimal(&f.to_string()).ok_or(ContFracError::InvalidInput)
}

/// Parses an integer, decimal (with optional exponent) or `p/q` literal.
pub(crate) fn parse_literal(s: &str) -> CfResult<BigRational> {
	let s = s.trim();
	let value = if let Some((num, den)) = s.split_once('/') {
		parse_fraction(num.trim_end(), den.trim_start())
	} else {
		parse_decimal(s)
	};
	value.ok_or(ContFracError::InvalidInput)
}

fn parse_fraction(num: &str, den: &str) -> Option<BigRational> {
	let (negative, num) = split_sign(num);
	if !is_digits(num) || !is_digits(den) {
		return None;
	}
	let mut num = BigInt::from_str(num).ok()?;
	let den = BigInt::from_str(den).ok()?;
	if den.is_zero() {
		return None;
	}
	if negative {
		num = -num;
	}
	Some(BigRational::new(num, den))
}

/// Largest exponent accepted in a literal such as `1e100000`. Larger powers
/// of ten cost seconds to minutes of big-integer arithmetic.
const MAX_EXPONENT: i64 = 100_000;

fn parse_decimal(s: &str) -> Option<BigRational> {
	let (negative, s) = split_sign(s);
	let (mantissa, exponent) = match s.find(['e', 'E']) {
		Some(idx) => (&s[..idx], Some(&s[idx + 1..])),
		None => (s, None),
	};
	let (int_part, frac_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));
	if int_part.is_empty() && frac_part.is_empty() {
		return None;
	}
	let digits_or_empty = |part: &str| part.is_empty() || is_digits(part);
	if !digits_or_empty(int_part) || !digits_or_empty(frac_part) {
		return None;
	}
	let exponent = match exponent {
		Some(e) => {
			let (exp_negative, digits) = split_sign(e);
			if !is_digits(digits) {
				return None;
			}
			let e = i64::from_str(digits).ok().filter(|e| *e <= MAX_EXPONENT)?;
			if exp_negative {
				-e
			} else {
				e
			}
		}
		None => 0,
	};
	let digits = format!("{int_part}{frac_part}");
	let mut num = BigInt::from_str(&digits).ok()?;
	if negative {
		num = -num;
	}
	let scale = exponent.checked_sub(i64::try_from(frac_part.len()).ok()?)?;
	let power = |e: i64| -> Option<BigInt> {
		let e = u32::try_from(e.unsigned_abs()).ok()?;
		Some(BigInt::from(10).pow(e))
	};
	Some(if scale >= 0 {
		BigRational::from_integer(num * power(scale)?)
	} else {
		BigRational::new(num, power(scale)?)
	})
}

fn split_sign(s: &str) -> (bool, &str) {
	if let Some(rest) = s.strip_prefix('-') {
		(true, rest)
	} else if let Some(rest) = s.strip_prefix('+') {
		(false, rest)
	} else {
		(false, s)
	}
}

fn is_digits(s: &str) -> bool {
	!s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
