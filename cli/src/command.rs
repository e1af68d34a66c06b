use contfrac_core::BigInt;
use std::str::FromStr;

/// A single line of REPL input.
///
/// Numbers are kept as the text the user typed; turning them into rationals
/// is left to the core library so that all input is validated in one place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
	/// A literal such as `649/200`, `-3.245` or `7`.
	Number(String),
	/// `(numerator, denominator)`
	Pair(String, String),
	/// `[a0; a1, a2, ...]` or `[a0, a1, a2, ...]`
	Elements(Vec<BigInt>),
	Extend(Vec<BigInt>),
	Truncate(Vec<BigInt>),
	Neg,
	Recip,
	Segment(usize),
	Remainder(usize),
	Convergents,
	Semiconvergent(usize, BigInt),
	/// Decimal rendering, with the configured number of places if none is given.
	Decimal(Option<usize>),
	Float,
	Show,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
	#[error("unknown command `{0}`, type `help` for a list of commands")]
	UnknownCommand(String),
	#[error("`{command}` expects {expected}")]
	MissingArgument {
		command: &'static str,
		expected: &'static str,
	},
	#[error("`{arg}` is not {expected}")]
	InvalidArgument { arg: String, expected: &'static str },
	#[error("too many arguments for `{command}`")]
	UnexpectedArgument { command: &'static str },
	#[error("missing closing `{0}`")]
	Unclosed(char),
}

const INTEGER: &str = "an integer";
const INDEX: &str = "a non-negative index";

fn parse_arg<T: FromStr>(arg: &str, expected: &'static str) -> Result<T, ParseError> {
	arg.parse().map_err(|_| ParseError::InvalidArgument {
		arg: arg.to_string(),
		expected,
	})
}

fn parse_integers<'a>(args: impl Iterator<Item = &'a str>) -> Result<Vec<BigInt>, ParseError> {
	args.filter(|arg| !arg.is_empty())
		.map(|arg| parse_arg(arg, INTEGER))
		.collect()
}

fn split_args(rest: &str) -> impl Iterator<Item = &str> {
	rest.split(|c: char| c == ',' || c.is_whitespace())
}

fn parse_elements(inner: &str) -> Result<Vec<BigInt>, ParseError> {
	let (head, tail) = inner.split_once(';').unwrap_or(("", inner));
	let mut elements = parse_integers(split_args(head))?;
	elements.extend(parse_integers(split_args(tail))?);
	Ok(elements)
}

fn no_args(command: &'static str, rest: &str, result: Command) -> Result<Command, ParseError> {
	if rest.is_empty() {
		Ok(result)
	} else {
		Err(ParseError::UnexpectedArgument { command })
	}
}

fn one_arg<'a>(
	command: &'static str,
	expected: &'static str,
	mut args: impl Iterator<Item = &'a str>,
) -> Result<&'a str, ParseError> {
	let arg = args
		.next()
		.ok_or(ParseError::MissingArgument { command, expected })?;
	if args.next().is_some() {
		return Err(ParseError::UnexpectedArgument { command });
	}
	Ok(arg)
}

fn non_empty_integers(command: &'static str, rest: &str) -> Result<Vec<BigInt>, ParseError> {
	let values = parse_integers(split_args(rest))?;
	if values.is_empty() {
		return Err(ParseError::MissingArgument {
			command,
			expected: "one or more integers",
		});
	}
	Ok(values)
}

/// Parses one line of input. Blank lines give `Ok(None)`.
pub fn parse(line: &str) -> Result<Option<Command>, ParseError> {
	let line = line.trim();
	let Some(first) = line.chars().next() else {
		return Ok(None);
	};
	if first == '[' {
		let inner = line.strip_suffix(']').ok_or(ParseError::Unclosed(']'))?;
		return Ok(Some(Command::Elements(parse_elements(&inner[1..])?)));
	}
	if first == '(' {
		let inner = line.strip_suffix(')').ok_or(ParseError::Unclosed(')'))?;
		let inner = &inner[1..];
		let Some((num, den)) = inner.split_once(',') else {
			return Err(ParseError::InvalidArgument {
				arg: line.to_string(),
				expected: "a `(numerator, denominator)` pair",
			});
		};
		return Ok(Some(Command::Pair(
			num.trim().to_string(),
			den.trim().to_string(),
		)));
	}
	if first.is_ascii_digit() || matches!(first, '-' | '+' | '.') {
		return Ok(Some(Command::Number(line.to_string())));
	}

	let (name, rest) = line
		.split_once(char::is_whitespace)
		.map_or((line, ""), |(name, rest)| (name, rest.trim()));
	let args = rest.split_whitespace();
	Ok(Some(match name {
		"extend" => Command::Extend(non_empty_integers("extend", rest)?),
		"truncate" => Command::Truncate(non_empty_integers("truncate", rest)?),
		"neg" => no_args("neg", rest, Command::Neg)?,
		"recip" => no_args("recip", rest, Command::Recip)?,
		"segment" => Command::Segment(parse_arg(one_arg("segment", INDEX, args)?, INDEX)?),
		"remainder" => {
			Command::Remainder(parse_arg(one_arg("remainder", INDEX, args)?, INDEX)?)
		}
		"convergents" => no_args("convergents", rest, Command::Convergents)?,
		"semiconvergent" => {
			let mut args = args;
			let expected = "an index and a multiplier";
			let k = args.next().ok_or(ParseError::MissingArgument {
				command: "semiconvergent",
				expected,
			})?;
			let m = one_arg("semiconvergent", expected, args)?;
			Command::Semiconvergent(parse_arg(k, INDEX)?, parse_arg(m, INTEGER)?)
		}
		"decimal" => {
			if rest.is_empty() {
				Command::Decimal(None)
			} else {
				let places = "a number of decimal places";
				Command::Decimal(Some(parse_arg(one_arg("decimal", places, args)?, places)?))
			}
		}
		"float" => no_args("float", rest, Command::Float)?,
		"show" => no_args("show", rest, Command::Show)?,
		_ => return Err(ParseError::UnknownCommand(name.to_string())),
	}))
}

pub const COMMAND_HELP: &str = "\
Commands:
  649/200, -3.245, 7      set the current value from a number
  (649, 200)              set the current value from a numerator and denominator
  [3; 4, 12, 4]           set the current value from its elements
  extend 5 2              append elements
  truncate 4 5 2          remove the given trailing elements
  neg, recip              negate or invert the current value
  segment k               show the k-th segment
  remainder k             show the k-th remainder
  convergents             list all convergents
  semiconvergent k m      show (p[k-1] + m p[k]) / (q[k-1] + m q[k])
  decimal [places]        show the value in decimal
  float                   show the value as a floating-point number
  show                    show the current value
  help                    show this message
  quit, exit              leave";
