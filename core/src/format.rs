use crate::exact::Exact;
use num_bigint::BigInt;
use num_integer::Integer;
use num_rational::BigRational;
use num_traits::{Signed, Zero};

/// Renders `value` in base 10 with exactly `places` digits after the decimal
/// point, rounding half away from zero.
///
/// The result is marked exact when no non-zero digits were cut off. A value
/// that rounds to zero is printed without a minus sign.
pub(crate) fn decimal(value: &BigRational, places: usize) -> Exact<String> {
	let scale = num_traits::pow(BigInt::from(10), places);
	let (mut digits, remainder) = (value.numer().abs() * scale).div_rem(value.denom());
	let exact = remainder.is_zero();
	if remainder * 2u32 >= *value.denom() {
		digits += 1u32;
	}
	let negative = value.is_negative() && !digits.is_zero();
	let mut digits = digits.to_string();
	if digits.len() <= places {
		digits.insert_str(0, &"0".repeat(places + 1 - digits.len()));
	}
	if places > 0 {
		digits.insert(digits.len() - places, '.');
	}
	if negative {
		digits.insert(0, '-');
	}
	Exact::new(digits, exact)
}
