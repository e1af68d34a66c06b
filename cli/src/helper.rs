use crate::command::{self, Command};
use crate::session::Session;
use std::cell::RefCell;

const MAX_HINT_LEN: usize = 50;

/// Longer decimal expansions are only computed when the line is submitted.
const MAX_HINT_DECIMAL_PLACES: usize = 1000;

pub struct Hint(String);

impl rustyline::hint::Hint for Hint {
	fn display(&self) -> &str {
		self.0.as_str()
	}

	fn completion(&self) -> Option<&str> {
		None
	}
}

/// Shows what the current line would evaluate to, below the prompt.
pub struct Helper<'a> {
	session: &'a RefCell<Session>,
}

impl<'a> Helper<'a> {
	pub fn new(session: &'a RefCell<Session>) -> Self {
		Self { session }
	}
}

/// Whether `line` is quick enough to evaluate on every keystroke.
fn worth_previewing(line: &str, default_places: usize) -> bool {
	match command::parse(line) {
		Ok(Some(Command::Decimal(places))) => {
			places.unwrap_or(default_places) <= MAX_HINT_DECIMAL_PLACES
		}
		Ok(Some(_)) => true,
		Ok(None) | Err(_) => false,
	}
}

impl rustyline::hint::Hinter for Helper<'_> {
	type Hint = Hint;

	fn hint(&self, line: &str, _pos: usize, _ctx: &rustyline::Context<'_>) -> Option<Hint> {
		// evaluate against a copy so that hints never change the session
		let mut session = self.session.borrow().clone();
		if !worth_previewing(line, session.decimal_places()) {
			return None;
		}
		let res = session.eval(line).ok()??;
		let first_line = res.lines().next()?;
		if first_line.len() > MAX_HINT_LEN || first_line.trim() == line.trim() {
			return None;
		}
		Some(Hint(format!("\n{first_line}")))
	}
}

impl rustyline::highlight::Highlighter for Helper<'_> {}

impl rustyline::validate::Validator for Helper<'_> {}

impl rustyline::completion::Completer for Helper<'_> {
	type Candidate = String;
}

impl rustyline::Helper for Helper<'_> {}
