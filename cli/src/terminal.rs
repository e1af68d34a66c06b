use crate::{config, file_paths, helper, session};
use std::{cell::RefCell, error, io, mem, path};

type Editor<'a> = rustyline::Editor<helper::Helper<'a>, rustyline::history::FileHistory>;

pub fn is_terminal_stdin() -> bool {
	// only show an interactive prompt when reading from a tty
	std::io::IsTerminal::is_terminal(&std::io::stdin())
}

pub struct PromptState<'a> {
	rl: Editor<'a>,
	config: &'a config::Config,
	history_path: Option<path::PathBuf>,
}

pub fn init_prompt<'a>(
	config: &'a config::Config,
	session: &'a RefCell<session::Session>,
) -> Result<PromptState<'a>, Box<dyn error::Error>> {
	let mut rl = Editor::<'_>::with_config(
		rustyline::config::Builder::new()
			.history_ignore_space(true)
			.auto_add_history(true)
			.max_history_size(config.max_history_size)?
			.build(),
	)?;
	rl.set_helper(Some(helper::Helper::new(session)));
	let history_path = match file_paths::get_history_file_location(file_paths::DirMode::DontCreate)
	{
		Ok(history_path) => {
			// a missing history file is expected on first use
			mem::drop(rl.load_history(history_path.as_path()));
			Some(history_path)
		}
		Err(e) => {
			tracing::warn!("history will not be saved: {e}");
			None
		}
	};
	Ok(PromptState {
		rl,
		config,
		history_path,
	})
}

pub enum ReadLineError {
	Interrupted, // e.g. Ctrl-C
	Eof,
	Error(Box<dyn error::Error>),
}

impl From<rustyline::error::ReadlineError> for ReadLineError {
	fn from(err: rustyline::error::ReadlineError) -> Self {
		match err {
			rustyline::error::ReadlineError::Interrupted => ReadLineError::Interrupted,
			rustyline::error::ReadlineError::Eof => ReadLineError::Eof,
			err => ReadLineError::Error(err.into()),
		}
	}
}

fn save_history(rl: &mut Editor<'_>, path: Option<&path::Path>) -> io::Result<()> {
	if let Some(history_path) = path {
		file_paths::get_state_dir(file_paths::DirMode::Create)?;
		if let Err(e) = rl.save_history(history_path) {
			tracing::debug!("failed to save history: {e}");
		}
	}
	Ok(())
}

impl PromptState<'_> {
	pub fn read_line(&mut self) -> Result<String, ReadLineError> {
		let res = self.rl.readline(self.config.prompt.as_str());
		if let Err(e) = save_history(&mut self.rl, self.history_path.as_deref()) {
			tracing::debug!("failed to create state directory: {e}");
		}
		Ok(res?)
	}
}
