#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(elided_lifetimes_in_paths)]

use std::{cell::RefCell, env, io, process};
use tracing_subscriber::{fmt, EnvFilter};

mod args;
mod command;
mod config;
mod file_paths;
mod helper;
mod session;
mod terminal;

use args::Action;
use session::Session;

enum EvalResult {
	Ok,
	Err,
	NoInput,
}

/// Logs go to stderr. `RUST_LOG` overrides the default `warn` filter.
fn init_logging() {
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
	fmt()
		.with_env_filter(filter)
		.with_target(false)
		.without_time()
		.with_writer(io::stderr)
		.init();
}

fn eval_and_print_res(line: &str, session: &RefCell<Session>) -> EvalResult {
	match session.borrow_mut().eval(line) {
		Ok(Some(res)) => {
			println!("{res}");
			EvalResult::Ok
		}
		Ok(None) => EvalResult::NoInput,
		Err(msg) => {
			eprintln!("Error: {msg}");
			EvalResult::Err
		}
	}
}

fn print_help(explain_quitting: bool) {
	println!("contfrac: exact continued fractions of rational numbers");
	println!();
	println!("Version: {}", contfrac_core::get_version());
	if let Some(config_path) = file_paths::get_config_file_location() {
		println!("Config file: {}", config_path.to_string_lossy());
	} else {
		println!("Failed to get config file location");
	}
	match file_paths::get_history_file_location(file_paths::DirMode::DontCreate) {
		Ok(history_path) => println!("History file: {}", history_path.to_string_lossy()),
		Err(_) => println!("Failed to get history file location"),
	}
	println!();
	println!("{}", command::COMMAND_HELP);
	if explain_quitting {
		println!("\nTo quit, type `quit`.");
	}
}

fn repl_loop(config: &config::Config) -> i32 {
	let session = RefCell::new(Session::new(config));
	let mut prompt_state = match terminal::init_prompt(config, &session) {
		Ok(prompt_state) => prompt_state,
		Err(err) => {
			eprintln!("Error: {err}");
			return 1;
		}
	};
	let mut initial_run = true; // set to false after first successful command
	let mut last_command_success = true;
	loop {
		match prompt_state.read_line() {
			Ok(line) => match line.trim() {
				"exit" | "exit()" | ".exit" | ":exit" | "quit" | "quit()" | ":quit" | ":q" => break,
				"help" | "?" => {
					print_help(true);
				}
				line => match eval_and_print_res(line, &session) {
					EvalResult::Ok => {
						last_command_success = true;
						initial_run = false;
					}
					EvalResult::NoInput => {
						last_command_success = true;
					}
					EvalResult::Err => {
						last_command_success = false;
					}
				},
			},
			Err(terminal::ReadLineError::Interrupted) => {
				if initial_run {
					break;
				}
				initial_run = true;
				println!("Use Ctrl-D (i.e. EOF) to exit");
			}
			Err(terminal::ReadLineError::Eof) => break,
			Err(terminal::ReadLineError::Error(err)) => {
				eprintln!("Error: {err}");
				break;
			}
		}
	}
	if last_command_success {
		0
	} else {
		1
	}
}

/// Runs each line from a pipe or file in order, stopping at the first error.
fn eval_stdin(config: &config::Config) -> i32 {
	let session = RefCell::new(Session::new(config));
	for line in io::stdin().lines() {
		let line = match line {
			Ok(line) => line,
			Err(err) => {
				eprintln!("Error: {err}");
				return 1;
			}
		};
		if let EvalResult::Err = eval_and_print_res(&line, &session) {
			return 1;
		}
	}
	0
}

fn main() {
	process::exit(real_main())
}

fn real_main() -> i32 {
	init_logging();
	let action: Action = env::args().skip(1).collect();
	tracing::debug!(?action, "starting");
	match action {
		Action::Help => {
			print_help(false);
			0
		}
		Action::Version => {
			println!("{}", contfrac_core::get_version());
			0
		}
		Action::DefaultConfig => {
			print!("{}", config::DEFAULT_CONFIG_FILE);
			0
		}
		Action::Eval(expr) => {
			let config = config::read();
			let session = RefCell::new(Session::new(&config));
			match eval_and_print_res(expr.as_str(), &session) {
				EvalResult::Ok | EvalResult::NoInput => 0,
				EvalResult::Err => 1,
			}
		}
		Action::Repl => {
			let config = config::read();
			if terminal::is_terminal_stdin() {
				repl_loop(&config)
			} else {
				eval_stdin(&config)
			}
		}
	}
}
