use std::fmt;

/// Failures reported by the continued-fraction engine.
///
/// Only two kinds exist: a construction argument that cannot be turned into
/// a rational value, and an element sequence that breaks the simple
/// continued fraction rules.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ContFracError {
	#[error(
		"invalid input: expected an integer, a finite real, a numeric string, \
		a rational, or a (numerator, denominator) pair with a non-zero denominator"
	)]
	InvalidInput,
	#[error("invalid elements: {0}")]
	InvalidElements(ElementsReason),
}

/// Why an element sequence was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ElementsReason {
	Empty,
	NonPositiveTail { index: usize },
	EmptyTail,
	TailLongerThanOrder { tail: usize, order: usize },
	TailMismatch,
}

impl fmt::Display for ElementsReason {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Empty => write!(f, "at least one element is required"),
			Self::NonPositiveTail { index } => {
				write!(f, "element {index} must be a positive integer")
			}
			Self::EmptyTail => write!(f, "at least one tail element is required"),
			Self::TailLongerThanOrder { tail, order } => write!(
				f,
				"cannot remove {tail} elements from a continued fraction of order {order}"
			),
			Self::TailMismatch => write!(
				f,
				"the given elements do not match the trailing elements of the continued fraction"
			),
		}
	}
}

impl From<ElementsReason> for ContFracError {
	fn from(reason: ElementsReason) -> Self {
		Self::InvalidElements(reason)
	}
}
