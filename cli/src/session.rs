use crate::{command, config};
use command::Command;
use contfrac_core::{ContFracError, ContinuedFraction};

/// `[a0; a1, ...] = p/q`, optionally followed by the convergents.
fn describe(cf: &ContinuedFraction, with_convergents: bool) -> String {
	if with_convergents && !cf.is_integer() {
		format!("{cf:?}\nconvergents: {}", cf.convergents())
	} else {
		format!("{cf:?}")
	}
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
	#[error(transparent)]
	ContFrac(#[from] ContFracError),
	#[error(transparent)]
	Parse(#[from] command::ParseError),
	#[error("nothing to work with yet, enter a number such as `649/200` first")]
	NoValue,
	#[error("index {index} is out of range for a continued fraction of order {order}")]
	OutOfRange { index: usize, order: usize },
	#[error("semiconvergents need an index from 1 to {order} and a positive multiplier")]
	InvalidSemiconvergent { order: usize },
}

/// The state kept between lines of REPL input: the current continued
/// fraction and the display settings from the config file.
#[derive(Clone)]
pub struct Session {
	current: Option<ContinuedFraction>,
	decimal_places: usize,
	show_convergents: bool,
}

impl Session {
	pub fn new(config: &config::Config) -> Self {
		Self {
			current: None,
			decimal_places: config.decimal_places,
			show_convergents: config.show_convergents,
		}
	}

	/// Places used by `decimal` when no count is given.
	pub fn decimal_places(&self) -> usize {
		self.decimal_places
	}

	/// Runs one line of input and returns the text to print, or `None` for
	/// a blank line.
	pub fn eval(&mut self, line: &str) -> Result<Option<String>, SessionError> {
		let Some(command) = command::parse(line)? else {
			return Ok(None);
		};
		tracing::debug!(?command, "executing");
		self.execute(command).map(Some)
	}

	fn current(&self) -> Result<&ContinuedFraction, SessionError> {
		self.current.as_ref().ok_or(SessionError::NoValue)
	}

	fn current_mut(&mut self) -> Result<&mut ContinuedFraction, SessionError> {
		self.current.as_mut().ok_or(SessionError::NoValue)
	}

	fn replace(&mut self, cf: ContinuedFraction) -> String {
		let res = describe(&cf, self.show_convergents);
		self.current = Some(cf);
		res
	}

	fn out_of_range(&self, index: usize) -> SessionError {
		SessionError::OutOfRange {
			index,
			order: self.current.as_ref().map_or(0, ContinuedFraction::order),
		}
	}

	fn execute(&mut self, command: Command) -> Result<String, SessionError> {
		Ok(match command {
			Command::Number(literal) => {
				let cf = ContinuedFraction::new(literal.as_str())?;
				self.replace(cf)
			}
			Command::Pair(num, den) => {
				let num: ContinuedFraction = num.parse()?;
				let den: ContinuedFraction = den.parse()?;
				let cf = ContinuedFraction::new((num.into_rational(), den.into_rational()))?;
				self.replace(cf)
			}
			Command::Elements(elements) => {
				let cf = ContinuedFraction::from_elements(elements)?;
				self.replace(cf)
			}
			Command::Extend(tail) => {
				self.current_mut()?.extend(tail)?;
				describe(self.current()?, self.show_convergents)
			}
			Command::Truncate(tail) => {
				self.current_mut()?.truncate(tail)?;
				describe(self.current()?, self.show_convergents)
			}
			Command::Neg => {
				let cf = -self.current()?;
				self.replace(cf)
			}
			Command::Recip => {
				let cf = self.current()?.recip()?;
				self.replace(cf)
			}
			Command::Segment(k) => {
				let segment = self.current()?.segment(k).ok_or_else(|| self.out_of_range(k))?;
				describe(&segment, false)
			}
			Command::Remainder(k) => {
				let remainder = self.current()?.remainder(k).ok_or_else(|| self.out_of_range(k))?;
				describe(&remainder, false)
			}
			Command::Convergents => self
				.current()?
				.convergents()
				.iter()
				.map(|(k, convergent)| format!("{k}: {convergent}"))
				.collect::<Vec<_>>()
				.join("\n"),
			Command::Semiconvergent(k, m) => {
				let cf = self.current()?;
				cf.semiconvergent(k, m)
					.ok_or(SessionError::InvalidSemiconvergent { order: cf.order() })?
					.to_string()
			}
			Command::Decimal(places) => self
				.current()?
				.to_decimal(places.unwrap_or(self.decimal_places))
				.to_string(),
			Command::Float => self.current()?.to_f64().to_string(),
			Command::Show => describe(self.current()?, self.show_convergents),
		})
	}
}
