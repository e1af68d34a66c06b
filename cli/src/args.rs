/// What the binary was asked to do.
///
/// Collected from [`std::env::args()`]`.skip(1)`.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Action {
	/// Print usage and file locations.
	Help,
	Version,
	/// Start the interactive prompt.
	Repl,
	/// Run the joined arguments as a single command.
	Eval(String),
	/// Print the default config file.
	DefaultConfig,
}

impl FromIterator<String> for Action {
	fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
		iter.into_iter().fold(Action::Repl, |action, arg| {
			use Action::{DefaultConfig, Eval, Help, Repl, Version};
			match (action, arg.as_str()) {
				// help wins over everything else
				(_, "help" | "--help" | "-h") | (Help, _) => Help,
				// then the version, which only help can override
				(Repl | Eval(_) | DefaultConfig, "--version" | "-v" | "-V") | (Version, _) => {
					Version
				}
				(Repl | Eval(_), "--default-config") | (DefaultConfig, _) => DefaultConfig,
				// blank arguments on their own still start the prompt
				(Repl, arg) if !arg.trim().is_empty() => Eval(arg.trim().to_string()),
				(Repl, _) => Repl,
				(Eval(eval), arg) => Eval(eval + " " + arg),
			}
		})
	}
}
