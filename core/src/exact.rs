// helper struct for keeping track of which renderings are exact

use std::fmt;

#[derive(Clone, PartialEq, Eq)]
pub struct Exact<T> {
	pub value: T,
	pub exact: bool,
}

impl<T: fmt::Debug> fmt::Debug for Exact<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.exact {
			write!(f, "exactly ")?;
		} else {
			write!(f, "approx. ")?;
		}
		write!(f, "{:?}", self.value)?;
		Ok(())
	}
}

impl<T: fmt::Display> fmt::Display for Exact<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if !self.exact {
			write!(f, "approx. ")?;
		}
		write!(f, "{}", self.value)?;
		Ok(())
	}
}

impl<T> Exact<T> {
	pub fn new(value: T, exact: bool) -> Self {
		Self { value, exact }
	}

	pub fn into_value(self) -> T {
		self.value
	}

	pub fn apply<R, F: FnOnce(T) -> R>(self, f: F) -> Exact<R> {
		Exact::<R> {
			value: f(self.value),
			exact: self.exact,
		}
	}
}
