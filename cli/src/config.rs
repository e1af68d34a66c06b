use crate::file_paths;
use serde::Deserialize;
use std::{collections::BTreeMap, fs, io};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
	pub prompt: String,
	pub decimal_places: usize,
	pub max_history_size: usize,
	pub show_convergents: bool,
	// anything left over is reported and otherwise ignored
	#[serde(flatten)]
	unknown_keys: BTreeMap<String, toml::Value>,
}

pub const DEFAULT_CONFIG_FILE: &str = r#"# contfrac configuration file
#
# This file is read from `config.toml` in the directory given by
# $CONTFRAC_CONFIG_DIR, $XDG_CONFIG_HOME/contfrac, or the platform's
# default configuration directory.

# Prompt shown before each line of input
prompt = "> "

# Number of digits printed by `decimal` when no count is given
decimal-places = 20

# Maximum number of lines kept in the history file
max-history-size = 1000

# Print the convergents after every change to the current value
show-convergents = true
"#;

impl Default for Config {
	fn default() -> Self {
		Self {
			prompt: "> ".to_string(),
			decimal_places: 20,
			max_history_size: 1000,
			show_convergents: true,
			unknown_keys: BTreeMap::new(),
		}
	}
}

#[derive(Debug)]
enum ConfigError {
	Io(io::Error),
	Toml(toml::de::Error),
}

impl From<io::Error> for ConfigError {
	fn from(err: io::Error) -> Self {
		Self::Io(err)
	}
}

impl From<toml::de::Error> for ConfigError {
	fn from(err: toml::de::Error) -> Self {
		Self::Toml(err)
	}
}

fn parse(contents: &str) -> Result<Config, toml::de::Error> {
	let mut config: Config = toml::from_str(contents)?;
	for key in config.unknown_keys.keys() {
		tracing::warn!("ignoring unknown config key `{key}`");
	}
	config.unknown_keys.clear();
	Ok(config)
}

fn read_config_file() -> Result<Option<Config>, ConfigError> {
	let Some(path) = file_paths::get_config_file_location() else {
		return Ok(None);
	};
	let contents = match fs::read_to_string(&path) {
		Ok(contents) => contents,
		Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
		Err(e) => return Err(e.into()),
	};
	tracing::debug!("reading config from {}", path.display());
	Ok(Some(parse(&contents)?))
}

pub fn read() -> Config {
	match read_config_file() {
		Ok(config) => config.unwrap_or_default(),
		Err(ConfigError::Io(e)) => {
			tracing::warn!("failed to read config file, using defaults: {e}");
			Config::default()
		}
		Err(ConfigError::Toml(e)) => {
			tracing::warn!("invalid config file, using defaults: {e}");
			Config::default()
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_config_file_matches_defaults() {
		assert_eq!(parse(DEFAULT_CONFIG_FILE).unwrap(), Config::default());
	}

	#[test]
	fn missing_keys_use_defaults() {
		let config = parse("decimal-places = 5").unwrap();
		assert_eq!(config.decimal_places, 5);
		assert_eq!(config.prompt, "> ");
		assert!(config.show_convergents);
		assert_eq!(parse("").unwrap(), Config::default());
	}

	#[test]
	fn unknown_keys_are_dropped() {
		let config = parse("show-convergents = false\ncolour = true").unwrap();
		assert!(!config.show_convergents);
		assert!(config.unknown_keys.is_empty());
	}

	#[test]
	fn invalid_values_are_errors() {
		assert!(parse("decimal-places = -1").is_err());
		assert!(parse("prompt = 3").is_err());
		assert!(parse("not toml").is_err());
	}
}
