use contfrac_core::{BigInt, BigRational, ContFracError, ContinuedFraction, ElementsReason};

fn ints(v: &[i64]) -> Vec<BigInt> {
	v.iter().map(|&x| BigInt::from(x)).collect()
}

fn rat(n: i64, d: i64) -> BigRational {
	BigRational::new(n.into(), d.into())
}

#[track_caller]
fn test_elements(num: i64, den: i64, expected: &[i64]) {
	let cf = ContinuedFraction::new((num, den)).unwrap();
	assert_eq!(cf.elements(), ints(expected));
	assert_eq!(cf.order(), expected.len() - 1);
	// building it back from the elements must give the same value
	let rebuilt = ContinuedFraction::from_elements(ints(expected)).unwrap();
	assert_eq!(rebuilt.as_rational(), &rat(num, den));
}

#[track_caller]
fn test_literal(input: &str, expected: &str) {
	let cf: ContinuedFraction = input.parse().unwrap();
	assert_eq!(cf.to_string(), expected);
}

#[track_caller]
fn expect_invalid_input(input: &str) {
	assert_eq!(
		input.parse::<ContinuedFraction>(),
		Err(ContFracError::InvalidInput)
	);
}

#[test]
fn documented_scenarios() {
	test_elements(649, 200, &[3, 4, 12, 4]);
	test_elements(-415, 93, &[-5, 1, 1, 6, 7]);
	test_elements(2, 3, &[0, 1, 2]);
	test_elements(-2, 3, &[-1, 3]);
	let cf = ContinuedFraction::new((649, 200)).unwrap();
	assert_eq!(cf.convergents()[3], rat(649, 200));
}

#[test]
fn integers_have_order_zero() {
	test_elements(0, 1, &[0]);
	test_elements(5, 1, &[5]);
	test_elements(-5, 1, &[-5]);
	test_elements(10, 2, &[5]);
}

#[test]
fn extend_scenario() {
	let mut cf = ContinuedFraction::from_elements([3, 4, 12, 4]).unwrap();
	cf.extend([5, 2]).unwrap();
	assert_eq!(cf.elements(), ints(&[3, 4, 12, 4, 5, 2]));
	assert_eq!(cf.as_rational(), &rat(7457, 2298));
}

#[test]
fn truncate_scenario() {
	let mut cf = ContinuedFraction::from_elements([3, 4, 12, 4]).unwrap();
	cf.truncate([12, 4]).unwrap();
	assert_eq!(cf.elements(), ints(&[3, 4]));
	assert_eq!(cf.as_rational(), &rat(13, 4));
}

#[test]
fn trailing_one_is_folded() {
	let mut cf = ContinuedFraction::from_elements([3, 4, 12, 3]).unwrap();
	cf.extend([1]).unwrap();
	assert_eq!(cf.elements(), ints(&[3, 4, 12, 4]));
}

#[test]
fn extend_then_truncate_restores() {
	let tails: &[&[i64]] = &[&[2], &[1, 2], &[5, 2], &[1, 1, 3], &[7, 1, 9]];
	for b in 1..30_i64 {
		for a in -60..60_i64 {
			let original = ContinuedFraction::new((a, b)).unwrap();
			for tail in tails {
				let mut cf = original.clone();
				cf.extend(tail.iter().copied()).unwrap();
				assert_eq!(cf.order(), original.order() + tail.len());
				cf.truncate(tail.iter().copied()).unwrap();
				assert_eq!(cf.elements(), original.elements());
				assert_eq!(cf.as_rational(), original.as_rational());
			}
		}
	}
}

#[test]
fn bijection_and_boundary() {
	for b in 1..60_i64 {
		for a in -120..120_i64 {
			let cf = ContinuedFraction::new((a, b)).unwrap();
			let expected = rat(a, b);
			assert_eq!(cf.as_rational(), &expected);
			assert_eq!(cf.convergents()[cf.order()], expected);
			assert_eq!(cf.convergents().len(), cf.order() + 1);
			if cf.order() >= 1 {
				assert!(cf.elements()[cf.order()] > BigInt::from(1));
			}
			let rebuilt = ContinuedFraction::from_elements(cf.elements().to_vec()).unwrap();
			assert_eq!(rebuilt.elements(), cf.elements());
		}
	}
}

#[test]
fn negation_agrees_with_division() {
	for b in 1..40_i64 {
		for a in -80..80_i64 {
			let cf = ContinuedFraction::new((a, b)).unwrap();
			let by_division = ContinuedFraction::new((-a, b)).unwrap();
			assert_eq!((-&cf).elements(), by_division.elements());
		}
	}
}

#[test]
fn segments_match_convergents() {
	let cf = ContinuedFraction::new((-415, 93)).unwrap();
	for (k, convergent) in cf.convergents() {
		let segment = cf.segment(k).unwrap();
		assert_eq!(segment.as_rational(), convergent);
	}
	for k in 0..=cf.order() {
		let remainder = cf.remainder(k).unwrap();
		assert_eq!(remainder.elements(), &cf.elements()[k..]);
	}
	assert!(cf.segment(cf.order() + 1).is_none());
	assert!(cf.remainder(cf.order() + 1).is_none());
}

#[test]
fn remainders_satisfy_recurrence() {
	// R_k = a_k + 1 / R_{k+1}
	let cf = ContinuedFraction::new((7457, 2298)).unwrap();
	for k in 0..cf.order() {
		let r_k = cf.remainder(k).unwrap();
		let r_next = cf.remainder(k + 1).unwrap();
		let expected = BigRational::from_integer(cf.elements()[k].clone())
			+ r_next.as_rational().recip();
		assert_eq!(r_k.as_rational(), &expected);
	}
}

#[test]
fn literals() {
	test_literal("649/200", "[3; 4, 12, 4]");
	test_literal("3.245", "[3; 4, 12, 4]");
	test_literal("-415/93", "[-5; 1, 1, 6, 7]");
	test_literal(" 0.5 ", "[0; 2]");
	test_literal("-0.5", "[-1; 2]");
	test_literal("1e3", "[1000]");
	test_literal("42", "[42]");
	expect_invalid_input("1/0");
	expect_invalid_input("NaN");
	expect_invalid_input("inf");
	expect_invalid_input("1 2");
	expect_invalid_input("");
}

#[test]
fn mixed_inputs() {
	let half = rat(1, 2);
	assert_eq!(
		ContinuedFraction::new((half.clone(), 2)).unwrap().as_rational(),
		&rat(1, 4)
	);
	assert_eq!(
		ContinuedFraction::new((half.clone(), 0.5)),
		Err(ContFracError::InvalidInput)
	);
	assert_eq!(
		ContinuedFraction::new((half, rat(0, 1))),
		Err(ContFracError::InvalidInput)
	);
	assert_eq!(
		ContinuedFraction::new(0.1).unwrap().as_rational(),
		&rat(1, 10)
	);
	assert_eq!(
		ContinuedFraction::new(f64::NAN),
		Err(ContFracError::InvalidInput)
	);
}

#[test]
fn any_leading_element_is_accepted() {
	for (elements, num, den) in [
		(&[0, 1, 2][..], 2, 3),
		(&[-5, 1, 1, 6, 7][..], -415, 93),
		(&[-3][..], -3, 1),
		(&[0][..], 0, 1),
	] {
		let cf = ContinuedFraction::from_elements(ints(elements)).unwrap();
		assert_eq!(cf.elements(), ints(elements));
		assert_eq!(cf.as_rational(), &rat(num, den));
	}
	// [-3; 1] folds to [-2]
	let cf = ContinuedFraction::from_elements([-3, 1]).unwrap();
	assert_eq!(cf.elements(), ints(&[-2]));
	assert_eq!(
		ContinuedFraction::from_elements([1, 2, -3]),
		Err(ContFracError::InvalidElements(
			ElementsReason::NonPositiveTail { index: 2 }
		))
	);
}

#[test]
fn huge_exponents_are_rejected() {
	expect_invalid_input("1e4000000000");
	expect_invalid_input("-7.5E-900000");
	test_literal("1e-3", "[0; 1000]");
}

#[test]
fn element_errors_are_descriptive() {
	let err = ContinuedFraction::from_elements([3, -4]).unwrap_err();
	assert_eq!(
		err,
		ContFracError::InvalidElements(ElementsReason::NonPositiveTail { index: 1 })
	);
	assert_eq!(
		err.to_string(),
		"invalid elements: element 1 must be a positive integer"
	);
	let mut cf = ContinuedFraction::new((649, 200)).unwrap();
	assert_eq!(
		cf.truncate([12]).unwrap_err().to_string(),
		"invalid elements: the given elements do not match the trailing elements of the continued fraction"
	);
}

#[test]
fn large_values_stay_exact() {
	// consecutive Fibonacci numbers give the longest expansions
	let mut fib = (BigInt::from(1), BigInt::from(1));
	for _ in 0..200 {
		let next = &fib.0 + &fib.1;
		fib = (fib.1, next);
	}
	let cf = ContinuedFraction::new((fib.1.clone(), fib.0.clone())).unwrap();
	assert_eq!(cf.elements()[0], BigInt::from(1));
	assert!(cf.elements()[1..cf.order()]
		.iter()
		.all(|a| a == &BigInt::from(1)));
	assert_eq!(cf.elements()[cf.order()], BigInt::from(2));
	assert_eq!(
		cf.as_rational(),
		&BigRational::new(fib.1.clone(), fib.0.clone())
	);
	let rebuilt = ContinuedFraction::from_elements(cf.elements().to_vec()).unwrap();
	assert_eq!(rebuilt, cf);
}

#[test]
fn decimal_rendering() {
	let cf = ContinuedFraction::new((7457, 2298)).unwrap();
	let rendered = cf.to_decimal(30);
	assert!(!rendered.exact);
	assert!(rendered.value.starts_with("3.24499564838990426457"));
	assert_eq!(rendered.value.len(), 32);
}
